//! Tests for file content decoding, binary classification and preview
//! truncation

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use repolens::github::content::{
    BINARY_PLACEHOLDER, PREVIEW_CHAR_LIMIT, TRUNCATION_MARKER, UNDECODABLE_PLACEHOLDER,
    decode_content, looks_binary, render_preview, truncate_preview,
};

#[test]
fn test_decode_plain_content() {
    let encoded = STANDARD.encode("hello world");
    assert_eq!(decode_content(&encoded).unwrap(), "hello world");
}

#[test]
fn test_decode_strips_line_wrapping() {
    // The contents API wraps base64 bodies at fixed column widths
    let encoded = STANDARD.encode("a longer body that the provider would wrap across lines");
    let wrapped: String = encoded
        .as_bytes()
        .chunks(16)
        .map(|chunk| std::str::from_utf8(chunk).unwrap())
        .collect::<Vec<_>>()
        .join("\n");

    assert_eq!(
        decode_content(&wrapped).unwrap(),
        "a longer body that the provider would wrap across lines"
    );
}

#[test]
fn test_decode_replaces_invalid_utf8() {
    let encoded = STANDARD.encode([0xff, 0xfe, b'o', b'k']);
    let decoded = decode_content(&encoded).unwrap();

    assert!(decoded.contains('\u{FFFD}'));
    assert!(decoded.ends_with("ok"));
}

#[test]
fn test_decode_rejects_invalid_base64() {
    assert!(decode_content("!!!not-base64!!!").is_err());
}

#[test]
fn test_decode_empty_body() {
    assert_eq!(decode_content("").unwrap(), "");
}

#[test]
fn test_binary_classification_threshold() {
    // 11 qualifying control characters in the sample crosses the
    // threshold, 10 does not
    let binary: String = "\u{1}".repeat(11) + &"a".repeat(89);
    let text: String = "\u{1}".repeat(10) + &"a".repeat(90);

    assert!(looks_binary(&binary));
    assert!(!looks_binary(&text));
}

#[test]
fn test_binary_classification_ignores_common_whitespace() {
    // Tab, LF and CR never count as control characters
    let whitespace_heavy = "\t\n\r".repeat(30);
    assert!(!looks_binary(&whitespace_heavy));
}

#[test]
fn test_binary_classification_samples_first_100_chars_only() {
    let late_controls: String = "a".repeat(100) + &"\u{1}".repeat(50);
    assert!(!looks_binary(&late_controls));

    let early_controls: String = "\u{1}".repeat(50) + &"a".repeat(100);
    assert!(looks_binary(&early_controls));
}

#[test]
fn test_truncation_at_the_limit() {
    // A file exactly at the cap is returned whole and unmarked
    let exact = "a".repeat(PREVIEW_CHAR_LIMIT);
    assert_eq!(truncate_preview(exact.clone()), exact);
}

#[test]
fn test_truncation_beyond_the_limit() {
    // A 5000-character file yields exactly 4000 characters plus the marker
    let long = "a".repeat(5000);
    let preview = truncate_preview(long);

    assert!(preview.ends_with(TRUNCATION_MARKER));
    let body = &preview[..preview.len() - TRUNCATION_MARKER.len()];
    assert_eq!(body.chars().count(), PREVIEW_CHAR_LIMIT);
    assert!(body.chars().all(|c| c == 'a'));
}

#[test]
fn test_truncation_counts_characters_not_bytes() {
    // Multi-byte characters must not split; the cap is a character count
    let long = "é".repeat(PREVIEW_CHAR_LIMIT + 100);
    let preview = truncate_preview(long);

    assert!(preview.ends_with(TRUNCATION_MARKER));
    let body = &preview[..preview.len() - TRUNCATION_MARKER.len()];
    assert_eq!(body.chars().count(), PREVIEW_CHAR_LIMIT);
}

#[test]
fn test_render_preview_placeholders() {
    assert_eq!(render_preview(None), UNDECODABLE_PLACEHOLDER);

    let binary: String = "\u{1}".repeat(20) + "rest";
    assert_eq!(render_preview(Some(binary)), BINARY_PLACEHOLDER);

    assert_eq!(render_preview(Some("fn main() {}".to_string())), "fn main() {}");
}
