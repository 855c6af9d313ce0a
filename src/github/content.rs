//! File content decoding and preview rendering
//!
//! The contents API returns file bodies base64-encoded with line wrapping.
//! Decoding is permissive: wrapping whitespace is stripped before decoding
//! and invalid UTF-8 sequences are replaced rather than rejected. Whether a
//! decoded file is shown at all is decided by a control-character heuristic
//! over the first characters, not by a content-type sniff.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Maximum number of characters included in a text preview.
pub const PREVIEW_CHAR_LIMIT: usize = 4000;

/// Marker appended when a preview was cut at [`PREVIEW_CHAR_LIMIT`].
pub const TRUNCATION_MARKER: &str = "\n...[truncated]...";

/// Preview substituted for files classified as binary.
pub const BINARY_PLACEHOLDER: &str = "[Binary file preview omitted]";

/// Preview substituted when no decodable content was available.
pub const UNDECODABLE_PLACEHOLDER: &str = "[Unable to decode file contents]";

/// Number of leading characters sampled by the binary heuristic.
const SAMPLE_CHARS: usize = 100;

/// Control characters tolerated in the sample before a file counts as binary.
const CONTROL_CHAR_THRESHOLD: usize = 10;

/// Decodes a base64 file body into text, permissively.
///
/// The provider wraps encoded content with newlines; all ASCII whitespace
/// is stripped before decoding. Invalid UTF-8 in the decoded bytes is
/// replaced with U+FFFD rather than treated as an error.
pub fn decode_content(encoded: &str) -> Result<String, base64::DecodeError> {
    let cleaned: Vec<u8> = encoded
        .bytes()
        .filter(|b| !matches!(b, b' ' | b'\t' | b'\n' | b'\r'))
        .collect();
    let bytes = STANDARD.decode(cleaned)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Heuristic binary classification over the first [`SAMPLE_CHARS`] characters.
///
/// Counts characters below code point 9 or strictly between 13 and 32;
/// tab, line feed, vertical tab, form feed and carriage return are all
/// outside those windows and never counted. More than
/// [`CONTROL_CHAR_THRESHOLD`] such characters classifies the file as binary.
pub fn looks_binary(text: &str) -> bool {
    let control_chars = text
        .chars()
        .take(SAMPLE_CHARS)
        .filter(|&c| {
            let cp = c as u32;
            cp < 9 || (13 < cp && cp < 32)
        })
        .count();
    control_chars > CONTROL_CHAR_THRESHOLD
}

/// Renders the preview for a decoded file body.
///
/// `None` means no decodable content was available; binary content is
/// replaced by a placeholder; text is returned whole up to
/// [`PREVIEW_CHAR_LIMIT`] characters and truncated with a marker beyond it.
pub fn render_preview(text: Option<String>) -> String {
    match text {
        None => UNDECODABLE_PLACEHOLDER.to_string(),
        Some(text) if looks_binary(&text) => BINARY_PLACEHOLDER.to_string(),
        Some(text) => truncate_preview(text),
    }
}

/// Caps a text preview at [`PREVIEW_CHAR_LIMIT`] characters.
pub fn truncate_preview(text: String) -> String {
    if text.chars().count() <= PREVIEW_CHAR_LIMIT {
        return text;
    }
    let mut preview: String = text.chars().take(PREVIEW_CHAR_LIMIT).collect();
    preview.push_str(TRUNCATION_MARKER);
    preview
}
