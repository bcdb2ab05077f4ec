//! Integration tests for the playlist repository.

use std::time::Duration;

use assert_matches::assert_matches;
use muslib_core::error::CoreError;
use muslib_core::playlist::{apply_track_change, TrackListChange};
use muslib_db::models::playlist::{CreatePlaylist, UpdatePlaylist};
use muslib_db::{Deadline, ErrorKind, RepoError, Repositories};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn deadline() -> Deadline {
    Deadline::after(Duration::from_secs(10))
}

fn new_playlist(title: &str, track_ids: &[&str]) -> CreatePlaylist {
    CreatePlaylist {
        title: title.to_string(),
        album_cover: "http://localhost:8089/api/v1/uploads/cover.png".to_string(),
        track_ids: track_ids.iter().map(|s| s.to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_keeps_track_order_and_duplicates(pool: PgPool) {
    let repos = Repositories::new(pool);
    let playlist = repos
        .playlists
        .create(&new_playlist("Morning", &["b", "a", "b"]), deadline())
        .await
        .unwrap();

    assert!(!playlist.id.is_nil());
    assert_eq!(playlist.create_at, playlist.update_at);
    assert_eq!(playlist.track_ids, vec!["b", "a", "b"]);

    let found = repos
        .playlists
        .find_by_id(playlist.id, deadline())
        .await
        .unwrap();
    assert_eq!(found.track_ids, vec!["b", "a", "b"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_full_track_list(pool: PgPool) {
    let repos = Repositories::new(pool);
    let created = repos
        .playlists
        .create(&new_playlist("Morning", &["a", "b"]), deadline())
        .await
        .unwrap();

    let mut playlist = created.clone();
    apply_track_change(&mut playlist.track_ids, TrackListChange::Add("c".into()));
    apply_track_change(&mut playlist.track_ids, TrackListChange::Remove("a".into()));
    let updated = repos.playlists.update(&playlist, deadline()).await.unwrap();

    assert_eq!(updated.track_ids, vec!["b", "c"]);
    assert_eq!(updated.title, "Morning");
    assert!(updated.update_at > created.update_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_metadata_update_keeps_other_fields(pool: PgPool) {
    let repos = Repositories::new(pool);
    let created = repos
        .playlists
        .create(&new_playlist("Morning", &["a"]), deadline())
        .await
        .unwrap();

    let mut playlist = repos
        .playlists
        .find_by_id(created.id, deadline())
        .await
        .unwrap();
    playlist.apply_update(UpdatePlaylist {
        title: Some("Evening".to_string()),
        album_cover: None,
    });
    repos.playlists.update(&playlist, deadline()).await.unwrap();

    let refetched = repos
        .playlists
        .find_by_id(created.id, deadline())
        .await
        .unwrap();
    assert_eq!(refetched.title, "Evening");
    assert_eq!(refetched.album_cover, created.album_cover);
    assert_eq!(refetched.track_ids, created.track_ids);
    assert!(refetched.update_at > created.update_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_matches_title_only(pool: PgPool) {
    let repos = Repositories::new(pool);
    let playlist = repos
        .playlists
        .create(&new_playlist("Midnight Drive", &[]), deadline())
        .await
        .unwrap();

    let hits = repos.playlists.search("MIDNIGHT", deadline()).await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, playlist.id);

    let cover_hits = repos.playlists.search("cover", deadline()).await.unwrap();
    assert!(cover_hits.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_search_is_invalid_argument(pool: PgPool) {
    let repos = Repositories::new(pool);
    let err = repos.playlists.search("", deadline()).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_twice_is_not_found(pool: PgPool) {
    let repos = Repositories::new(pool);
    let playlist = repos
        .playlists
        .create(&new_playlist("Temp", &[]), deadline())
        .await
        .unwrap();

    repos.playlists.delete(playlist.id, deadline()).await.unwrap();

    let err = repos
        .playlists
        .find_by_id(playlist.id, deadline())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = repos
        .playlists
        .delete(playlist.id, deadline())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let listed = repos.playlists.find_many(deadline()).await.unwrap();
    assert!(listed.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_excludes_deleted_playlists(pool: PgPool) {
    let repos = Repositories::new(pool);
    let kept = repos
        .playlists
        .create(&new_playlist("Night Drive", &[]), deadline())
        .await
        .unwrap();
    let gone = repos
        .playlists
        .create(&new_playlist("Night Shift", &[]), deadline())
        .await
        .unwrap();
    repos.playlists.delete(gone.id, deadline()).await.unwrap();

    let hits = repos.playlists.search("night", deadline()).await.unwrap();
    let ids: Vec<_> = hits.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![kept.id]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_deleted_playlist_is_not_found(pool: PgPool) {
    let repos = Repositories::new(pool);
    let mut playlist = repos
        .playlists
        .create(&new_playlist("Gone", &["a"]), deadline())
        .await
        .unwrap();
    repos.playlists.delete(playlist.id, deadline()).await.unwrap();

    playlist.apply_update(UpdatePlaylist {
        title: Some("Back".to_string()),
        album_cover: None,
    });
    let err = repos
        .playlists
        .update(&playlist, deadline())
        .await
        .unwrap_err();
    assert_matches!(err, RepoError::Core(CoreError::NotFound { entity: "Playlist", .. }));

    let listed = repos.playlists.find_many(deadline()).await.unwrap();
    assert!(listed.is_empty());
}
