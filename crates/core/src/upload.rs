//! Upload filename handling and content-type detection.

use std::path::Path;

use crate::error::CoreError;

/// Name of the multipart field carrying uploaded files.
pub const UPLOAD_FIELD: &str = "files";

/// Reduce a client-supplied filename to a safe, single path component.
///
/// Directory parts are stripped (both `/` and `\` separators). Names that are
/// empty, `.`/`..`, or hidden (leading `.`) are rejected.
pub fn sanitize_filename(raw: &str) -> Result<String, CoreError> {
    let name = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name.starts_with('.') || name.contains('\0') {
        return Err(CoreError::InvalidArgument(format!(
            "Invalid upload filename '{raw}'"
        )));
    }

    Ok(name.to_string())
}

/// Determine a MIME type from the file extension.
pub fn content_type_for(filename: &str) -> &'static str {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("mp3") => "audio/mpeg",
        _ => "application/octet-stream",
    }
}
