//! Character set recovery for header values.
//!
//! Real-world `METADATA` files are not always UTF-8. Header values may
//! contain raw 8-bit data in an unknown encoding, or RFC 2047 encoded words
//! (`=?charset?q?...?=`). Values are split into chunks, each chunk is decoded
//! according to its charset, and the results are joined back together.
//!
//! Chunks without a usable charset are treated as UTF-8 when they are valid
//! UTF-8, and as Latin-1 otherwise. Latin-1 maps every byte to a character,
//! so decoding never fails.

use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use quoted_printable::ParseMode;
use regex::bytes::Regex;
use tracing::debug;

/// An RFC 2047 encoded word: `=?charset?encoding?text?=`.
static ENCODED_WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"=\?([^?\s]+)\?([QqBb])\?([^?\s]*)\?=").expect("invalid encoded-word pattern")
});

/// A decoded piece of a header value, before conversion to text.
#[derive(Debug, PartialEq, Eq)]
enum Chunk<'a> {
    /// Bytes taken verbatim from the header, in no declared charset.
    Raw(&'a [u8]),
    /// The payload of an encoded word, with its declared charset.
    Encoded { charset: String, bytes: Vec<u8> },
}

/// Decode a raw header value into text.
///
/// Encoded words are decoded, raw 8-bit data is recovered as UTF-8 or
/// Latin-1, and CRLF line endings in folded values become LF. Plain ASCII
/// values are returned unchanged.
pub(crate) fn decode_header_value(raw: &[u8]) -> String {
    let value = if raw.is_ascii() && !ENCODED_WORD.is_match(raw) {
        String::from_utf8_lossy(raw).into_owned()
    } else {
        split_chunks(raw)
            .into_iter()
            .map(|chunk| match chunk {
                Chunk::Raw(bytes) => decode_unknown_8bit(bytes),
                Chunk::Encoded { charset, bytes } => decode_charset(&charset, &bytes),
            })
            .collect()
    };

    if value.contains('\r') {
        value.replace("\r\n", "\n")
    } else {
        value
    }
}

/// Decode a body or header chunk of unknown encoding: UTF-8 if possible,
/// Latin-1 otherwise.
pub(crate) fn decode_unknown_8bit(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_owned(),
        Err(_) => {
            debug!("Value is not valid UTF-8, decoding as Latin-1");
            decode_latin1(bytes)
        }
    }
}

/// Decode Latin-1 (ISO-8859-1) bytes. Every byte maps to the code point of
/// the same value.
pub(crate) fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Whether `label` names the Latin-1 character set.
pub(crate) fn is_latin1_label(label: &str) -> bool {
    matches!(
        label.to_ascii_lowercase().replace('_', "-").as_str(),
        "latin1" | "latin-1" | "l1" | "iso-8859-1" | "iso8859-1" | "iso-ir-100" | "cp819"
    )
}

/// Whether `label` names UTF-8.
pub(crate) fn is_utf8_label(label: &str) -> bool {
    matches!(
        label.to_ascii_lowercase().replace('_', "-").as_str(),
        "utf-8" | "utf8" | "u8"
    )
}

/// Decode the payload of an encoded word according to its declared charset.
fn decode_charset(charset: &str, bytes: &[u8]) -> String {
    // RFC 2231 allows a language suffix: `utf-8*en`.
    let charset = charset.split('*').next().unwrap_or(charset);
    if is_latin1_label(charset) {
        decode_latin1(bytes)
    } else {
        // `utf-8`, `us-ascii`, `unknown-8bit` and anything else.
        decode_unknown_8bit(bytes)
    }
}

/// Split a header value into raw runs and encoded words.
///
/// Whitespace separating two adjacent encoded words is not part of the
/// value (RFC 2047, section 6.2) and is dropped.
fn split_chunks(raw: &[u8]) -> Vec<Chunk<'_>> {
    let mut chunks = Vec::new();
    let mut last_end = 0;
    let mut previous_encoded = false;

    for captures in ENCODED_WORD.captures_iter(raw) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        let gap = &raw[last_end..whole.start()];

        let Some(bytes) = decode_payload(&captures[2], &captures[3]) else {
            // Leave undecodable words in the text.
            continue;
        };

        if !gap.is_empty() && !(previous_encoded && gap.iter().all(u8::is_ascii_whitespace)) {
            chunks.push(Chunk::Raw(gap));
        }
        chunks.push(Chunk::Encoded {
            charset: String::from_utf8_lossy(&captures[1]).into_owned(),
            bytes,
        });
        last_end = whole.end();
        previous_encoded = true;
    }

    if last_end < raw.len() {
        chunks.push(Chunk::Raw(&raw[last_end..]));
    }
    chunks
}

/// Decode the text of an encoded word with the `Q` or `B` encoding.
fn decode_payload(encoding: &[u8], text: &[u8]) -> Option<Vec<u8>> {
    match encoding {
        b"B" | b"b" => STANDARD.decode(text).ok(),
        b"Q" | b"q" => decode_q(text),
        _ => None,
    }
}

/// Decode the RFC 2047 `Q` encoding: `_` is a space and `=XX` is a byte in
/// hexadecimal. Malformed escapes are kept as-is.
fn decode_q(text: &[u8]) -> Option<Vec<u8>> {
    let text: Vec<u8> = text
        .iter()
        .map(|&byte| if byte == b'_' { b' ' } else { byte })
        .collect();
    // The decoder trims trailing whitespace, which is significant here.
    let end = text
        .iter()
        .rposition(|byte| !byte.is_ascii_whitespace())
        .map_or(0, |index| index + 1);
    let mut decoded = quoted_printable::decode(&text[..end], ParseMode::Robust).ok()?;
    decoded.extend_from_slice(&text[end..]);
    Some(decoded)
}
