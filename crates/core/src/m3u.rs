//! M3U playlist rendering.

/// MIME type of an M3U document.
pub const M3U_CONTENT_TYPE: &str = "audio/x-mpegurl";

/// Render a plain M3U document: one location per line.
pub fn render<'a, I>(locations: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out = String::new();
    for location in locations {
        out.push_str(location);
        out.push('\n');
    }
    out
}

/// `Content-Disposition` value for downloading playlist `name` as `.m3u`.
pub fn attachment_header(name: &str) -> String {
    format!("attachment; filename=\"{name}.m3u\"")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_location_per_line() {
        let doc = render(["http://h/a.mp3", "http://h/b.mp3"]);
        assert_eq!(doc, "http://h/a.mp3\nhttp://h/b.mp3\n");
    }

    #[test]
    fn empty_playlist_renders_empty_document() {
        assert_eq!(render(std::iter::empty()), "");
    }

    #[test]
    fn attachment_uses_m3u_extension() {
        assert_eq!(
            attachment_header("abc"),
            "attachment; filename=\"abc.m3u\""
        );
    }
}
