//! Small string helpers shared by the request builder and the client.

use url::form_urlencoded;

/// Characters no mainstream filesystem accepts in a file name.
const INVALID_FILENAME_CHARS: &[char] = &['<', '>', ':', '\\', '|', '?', '*', '/', '\'', '"', '\0'];

/// Whether `filename` can be used as a file name on Windows and Unix alike.
pub fn is_valid_filename(filename: &str) -> bool {
    !filename.is_empty() && !filename.contains(INVALID_FILENAME_CHARS)
}

/// Whether `value` is non-blank and made only of unreserved URL characters
/// (`A-Z a-z 0-9 - . _ ~`).
pub fn is_valid_url_chars(value: &str) -> bool {
    !value.trim().is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
}

/// Form-URL-encode `value`, so `two words` becomes `two+words`.
pub fn encode_url(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}
