//! Content-bytes decoding with encoding fallback.
//!
//! Archive entries store raw bytes; the text encoding is not recorded.
//! Decoding tries UTF-8 first, then windows-1252 (the web's latin-1
//! superset). The fallback is strict: output containing C1 control
//! characters means the bytes were not single-byte text, so the decode
//! is rejected rather than passed through with garbage characters.

use encoding_rs::WINDOWS_1252;

/// Names of the encodings tried, in order
pub const ENCODING_NAMES: [&str; 2] = ["utf-8", "windows-1252"];

/// C1 control range; windows-1252 only produces these for the bytes
/// 0x81, 0x8D, 0x8F, 0x90 and 0x9D, which carry no text
fn is_c1_control(c: char) -> bool {
    ('\u{80}'..='\u{9f}').contains(&c)
}

/// Decode content bytes, returning the text and the encoding that won
///
/// Returns `None` when no supported encoding decodes the bytes cleanly.
pub fn decode_text(bytes: &[u8]) -> Option<(String, &'static str)> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Some((text.to_string(), ENCODING_NAMES[0]));
    }

    let (text, _, had_errors) = WINDOWS_1252.decode(bytes);
    if !had_errors && !text.chars().any(is_c1_control) {
        return Some((text.into_owned(), ENCODING_NAMES[1]));
    }

    None
}
