/// Returned when no suffix in [`MIME_TYPES`] matches.
pub const FALLBACK_MIME: &str = "application/octet-stream";

/// Suffix table, checked in order. Matching is case-sensitive.
pub const MIME_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".js", "application/javascript"),
    (".jpg", "image/jpeg"),
    (".jpeg", "image/jpeg"),
    (".png", "image/png"),
    (".gif", "image/gif"),
    (".svg", "image/svg+xml"),
];

/// Picks a MIME type for `file_name` from its suffix.
///
/// ```
/// # use fileserver::http::mime::content_type_for;
/// assert_eq!(content_type_for("index.html"), "text/html");
/// assert_eq!(content_type_for("INDEX.HTML"), "application/octet-stream");
/// ```
pub fn content_type_for(file_name: &str) -> &'static str {
    MIME_TYPES
        .iter()
        .find(|(suffix, _)| file_name.ends_with(suffix))
        .map(|(_, mime)| *mime)
        .unwrap_or(FALLBACK_MIME)
}
