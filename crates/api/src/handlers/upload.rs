//! Handlers for storing and serving uploaded media files.

use axum::body::Body;
use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use muslib_core::upload::{content_type_for, sanitize_filename, UPLOAD_FIELD};
use serde::Serialize;
use tokio::io::{AsyncReadExt, AsyncSeekExt};
use tokio_util::io::ReaderStream;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Response for a successful upload: one URL per stored file.
#[derive(Debug, Serialize)]
pub struct FileUploadResponse {
    pub file_urls: Vec<String>,
}

/// POST /api/v1/uploads
///
/// Accepts multipart/form-data with one or more `files` parts. Every part is
/// read and its filename sanitized before anything is written, so a rejected
/// part leaves the upload directory untouched. Files are stored under their
/// sanitized names, replacing any existing file of that name.
pub async fn upload(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<DataResponse<FileUploadResponse>>)> {
    let host = headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| format!("{}:{}", state.config.host, state.config.port));

    let mut files = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let filename = sanitize_filename(field.file_name().unwrap_or_default())?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {e}")))?;
        files.push((filename, data));
    }

    if files.is_empty() {
        return Err(AppError::BadRequest(format!(
            "No files found in multipart field '{UPLOAD_FIELD}'"
        )));
    }

    let upload_dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(upload_dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to create upload dir: {e}")))?;

    let mut file_urls = Vec::with_capacity(files.len());
    for (filename, data) in files {
        tokio::fs::write(upload_dir.join(&filename), &data)
            .await
            .map_err(|e| AppError::InternalError(format!("Failed to write '{filename}': {e}")))?;
        tracing::info!(file = %filename, bytes = data.len(), "Stored uploaded file");

        file_urls.push(format!("http://{host}/api/v1/uploads/{filename}"));
    }

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: FileUploadResponse { file_urls },
        }),
    ))
}

/// A single-range `Range` header resolved against a file size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteRange {
    /// Inclusive byte offsets.
    Satisfiable { start: u64, end: u64 },
    Unsatisfiable,
}

/// Resolve a `Range: bytes=...` header value.
///
/// Returns `None` for headers that should be ignored (other units, multiple
/// ranges, malformed values), in which case the whole file is served.
fn resolve_range(value: &str, file_size: u64) -> Option<ByteRange> {
    let spec = value.trim().strip_prefix("bytes=")?;
    if spec.contains(',') {
        return None;
    }
    let (first, last) = spec.split_once('-')?;

    let range = match (first.trim(), last.trim()) {
        ("", "") => return None,
        // Suffix range: the final `n` bytes.
        ("", suffix) => {
            let n: u64 = suffix.parse().ok()?;
            if n == 0 || file_size == 0 {
                return Some(ByteRange::Unsatisfiable);
            }
            ByteRange::Satisfiable {
                start: file_size.saturating_sub(n),
                end: file_size - 1,
            }
        }
        (first, last) => {
            let start: u64 = first.parse().ok()?;
            let end = if last.is_empty() {
                None
            } else {
                Some(last.parse::<u64>().ok()?)
            };
            if end.is_some_and(|end| end < start) {
                return None;
            }
            if start >= file_size {
                return Some(ByteRange::Unsatisfiable);
            }
            ByteRange::Satisfiable {
                start,
                end: end.map_or(file_size - 1, |end| end.min(file_size - 1)),
            }
        }
    };
    Some(range)
}

/// GET /api/v1/uploads/{filename}
///
/// Streams the stored file with an extension-derived content type. A single
/// byte range is honoured with `206`; a range past the end yields `416`.
pub async fn retrieve(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let filename = sanitize_filename(&filename)?;
    let path = state.config.upload_dir.join(&filename);
    let not_found = || AppError::NotFound(format!("File '{filename}' not found"));

    let mut file = match tokio::fs::File::open(&path).await {
        Ok(file) => file,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Err(not_found()),
        Err(e) => {
            return Err(AppError::InternalError(format!(
                "Failed to open '{filename}': {e}"
            )));
        }
    };
    let metadata = file
        .metadata()
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))?;
    if !metadata.is_file() {
        return Err(not_found());
    }
    let file_size = metadata.len();
    let content_type = content_type_for(&filename).to_string();

    let range = headers
        .get(header::RANGE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| resolve_range(v, file_size));

    match range {
        Some(ByteRange::Unsatisfiable) => Ok((
            StatusCode::RANGE_NOT_SATISFIABLE,
            [(header::CONTENT_RANGE, format!("bytes */{file_size}"))],
        )
            .into_response()),
        Some(ByteRange::Satisfiable { start, end }) => {
            file.seek(std::io::SeekFrom::Start(start))
                .await
                .map_err(|e| AppError::InternalError(e.to_string()))?;
            let length = end - start + 1;
            let body = Body::from_stream(ReaderStream::new(file.take(length)));

            Ok((
                StatusCode::PARTIAL_CONTENT,
                [
                    (header::CONTENT_TYPE, content_type),
                    (header::CONTENT_LENGTH, length.to_string()),
                    (
                        header::CONTENT_RANGE,
                        format!("bytes {start}-{end}/{file_size}"),
                    ),
                    (header::ACCEPT_RANGES, "bytes".to_string()),
                ],
                body,
            )
                .into_response())
        }
        None => Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, content_type),
                (header::CONTENT_LENGTH, file_size.to_string()),
                (header::ACCEPT_RANGES, "bytes".to_string()),
            ],
            Body::from_stream(ReaderStream::new(file)),
        )
            .into_response()),
    }
}
