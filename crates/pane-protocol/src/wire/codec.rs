//! Text encoding with lossless big integers.
//!
//! Encoding renders every big integer as a digit string suffixed with
//! [`SENTINEL`] (`"12345678901234567n"`), serializes to JSON, then strips the
//! quotes and the sentinel from exactly those strings so the receiver sees a
//! bare number. Decoding reverses it: bare integer tokens of
//! [`BIG_INTEGER_MIN_DIGITS`] or more digits are wrapped back into tagged
//! strings before parsing, and tagged strings are restored to [`BigInt`].
//!
//! A legitimate string that already looks tagged (`^-?\d{16,}n+$`) gets one
//! extra sentinel on encode and loses one on decode, so it can never be
//! confused with a tagged integer. Strings shorter than the threshold are
//! never touched.
//!
//! Both text passes are string-aware: quotes and digits inside JSON string
//! literals are copied verbatim.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use num_bigint::BigInt;
use pane_common::EncodingFailure;
use regex::Regex;

use super::{exceeds_safe_range, WireValue, BIG_INTEGER_MIN_DIGITS, SENTINEL};

/// A tagged integer: digits followed by exactly one sentinel.
static TAGGED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]{16,}n$").unwrap());

/// Anything that a decoder could mistake for a tagged integer.
static TAG_LIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?[0-9]{16,}n+$").unwrap());

/// Encode a value to wire text. Infallible: every [`WireValue`] has a
/// textual form.
pub fn encode(value: &WireValue) -> String {
    let tagged = tag(value);
    strip_tag_quotes(&tagged.to_string())
}

/// Decode wire text. Malformed text is rejected as a whole; nothing is
/// partially parsed.
pub fn decode(text: &str) -> Result<WireValue, EncodingFailure> {
    let tagged = quote_big_integers(text)?;
    let json: serde_json::Value =
        serde_json::from_str(&tagged).map_err(|e| EncodingFailure::Malformed {
            offset: e.column().saturating_sub(1),
            reason: e.to_string(),
        })?;
    untag(json)
}

// =============================================================================
// ENCODE
// =============================================================================

fn escape_tag_like(s: &str) -> String {
    if TAG_LIKE_RE.is_match(s) {
        let mut escaped = String::with_capacity(s.len() + 1);
        escaped.push_str(s);
        escaped.push(SENTINEL);
        escaped
    } else {
        s.to_string()
    }
}

fn tagged_integer(value: &BigInt) -> serde_json::Value {
    serde_json::Value::String(format!("{value}{SENTINEL}"))
}

fn tag(value: &WireValue) -> serde_json::Value {
    match value {
        WireValue::Null => serde_json::Value::Null,
        WireValue::Bool(b) => serde_json::Value::Bool(*b),
        WireValue::Number(n) => {
            let as_big = n
                .as_u64()
                .map(BigInt::from)
                .or_else(|| n.as_i64().map(BigInt::from));
            match as_big {
                Some(big) if exceeds_safe_range(&big) => tagged_integer(&big),
                _ => serde_json::Value::Number(n.clone()),
            }
        }
        WireValue::BigInt(big) => {
            if exceeds_safe_range(big) {
                tagged_integer(big)
            } else {
                // Below the limit the value is an ordinary number.
                match i64::try_from(big) {
                    Ok(small) => serde_json::Value::Number(small.into()),
                    Err(_) => tagged_integer(big),
                }
            }
        }
        WireValue::String(s) => serde_json::Value::String(escape_tag_like(s)),
        WireValue::Array(items) => serde_json::Value::Array(items.iter().map(tag).collect()),
        WireValue::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (escape_tag_like(k), tag(v)))
                .collect(),
        ),
    }
}

/// Replace `"<digits>n"` string literals in value position with `<digits>`.
fn strip_tag_quotes(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'"' {
            i += 1;
            continue;
        }
        // serde_json output is well formed, so the literal always terminates.
        let Some(end) = string_end(bytes, i) else {
            break;
        };
        let content = &text[i + 1..end];
        if TAGGED_RE.is_match(content) && !is_object_key(bytes, end + 1) {
            out.push_str(&text[copied..i]);
            out.push_str(&content[..content.len() - SENTINEL.len_utf8()]);
            copied = end + 1;
        }
        i = end + 1;
    }

    out.push_str(&text[copied..]);
    out
}

fn is_object_key(bytes: &[u8], after: usize) -> bool {
    bytes[after..]
        .iter()
        .find(|b| !b.is_ascii_whitespace())
        .is_some_and(|b| *b == b':')
}

// =============================================================================
// DECODE
// =============================================================================

/// Index of the closing quote of the string literal opening at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

/// Wrap bare big integer tokens as tagged strings so the JSON parser cannot
/// round them.
fn quote_big_integers(text: &str) -> Result<String, EncodingFailure> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len() + 8);
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = string_end(bytes, i).ok_or_else(|| EncodingFailure::Malformed {
                    offset: i,
                    reason: "unterminated string literal".into(),
                })?;
                i = end + 1;
            }
            b'-' | b'0'..=b'9' => {
                let start = i;
                if bytes[i] == b'-' {
                    i += 1;
                }
                let digits_start = i;
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                let digits = i - digits_start;
                let is_float = i < bytes.len() && matches!(bytes[i], b'.' | b'e' | b'E');
                if is_float {
                    while i < bytes.len()
                        && matches!(bytes[i], b'0'..=b'9' | b'.' | b'e' | b'E' | b'+' | b'-')
                    {
                        i += 1;
                    }
                    continue;
                }
                // A leading zero makes the token invalid JSON; leave it for
                // the parser to reject.
                if digits >= BIG_INTEGER_MIN_DIGITS && bytes[digits_start] != b'0' {
                    out.push_str(&text[copied..start]);
                    out.push('"');
                    out.push_str(&text[start..i]);
                    out.push(SENTINEL);
                    out.push('"');
                    copied = i;
                }
            }
            _ => i += 1,
        }
    }

    out.push_str(&text[copied..]);
    Ok(out)
}

/// Drop the extra sentinel added by [`escape_tag_like`]. Strings with a
/// single sentinel are left alone.
fn unescape_tag_like(mut s: String) -> String {
    if TAG_LIKE_RE.is_match(&s) && !TAGGED_RE.is_match(&s) {
        s.pop();
    }
    s
}

fn untag(value: serde_json::Value) -> Result<WireValue, EncodingFailure> {
    Ok(match value {
        serde_json::Value::String(s) => {
            if TAGGED_RE.is_match(&s) {
                let digits = &s[..s.len() - SENTINEL.len_utf8()];
                let big: BigInt = digits
                    .parse()
                    .map_err(|_| EncodingFailure::IntegerOutOfRange(digits.to_string()))?;
                WireValue::integer(big)
            } else {
                WireValue::String(unescape_tag_like(s))
            }
        }
        serde_json::Value::Array(items) => WireValue::Array(
            items
                .into_iter()
                .map(untag)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        serde_json::Value::Object(map) => WireValue::Object(
            map.into_iter()
                .map(|(k, v)| untag(v).map(|v| (unescape_tag_like(k), v)))
                .collect::<Result<BTreeMap<_, _>, _>>()?,
        ),
        other => WireValue::from(other),
    })
}
