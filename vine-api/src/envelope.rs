//! Response body handling: identifier repair and envelope unwrapping.
//!
//! Every response body follows the same envelope:
//!
//! ```json
//! { "code": "", "data": { ... }, "success": true, "error": "" }
//! ```
//!
//! A non-empty `error` means the call failed, whatever the HTTP status was.
//!
//! # Identifier repair
//!
//! The service emits IDs as bare JSON numbers that routinely exceed 2^53.
//! Before the body is parsed, every numeric value of the fields `commentId`,
//! `likeId`, `postId`, `tagId`, `userId`, `venueId` and `id` is rewritten to
//! a JSON string with the same digits:
//!
//! ```text
//! "postId": 906345798374325453,   ->   "postId": "906345798374325453",
//! ```
//!
//! This is a textual rewrite over the raw body, so it would also touch a
//! string value that happens to contain an unescaped `"id":123` sequence.
//! JSON escaping makes that impossible for well-formed bodies.

use crate::error::{Result, VineError};
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

// The trailing group requires a delimiter after the digits, which leaves
// fractional and exponent literals alone and keeps any comma in place.
static IDENTIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#""(commentId|likeId|postId|tagId|userId|venueId|id)"(\s*):(\s*)(-?\d+)([\s,}\]])"#,
    )
    .expect("identifier pattern is valid")
});

/// Quote every identifier-shaped numeric field in `body`.
///
/// Returns the input unchanged (borrowed) when nothing matches.
pub fn repair_identifiers(body: &str) -> Cow<'_, str> {
    IDENTIFIER.replace_all(body, r#""$1"$2:$3"$4"$5"#)
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    code: Option<Value>,
}

/// Repair, parse and unwrap a response body.
///
/// Resolves with the envelope's `data` (`Value::Null` when absent) or fails
/// with [`VineError::Parse`] / [`VineError::Api`]. An `error` of `null`,
/// `false`, `0`, `""`, `[]` or `{}` counts as no error; anything else,
/// including `true`, fails the call.
pub fn parse_envelope(body: &str) -> Result<Value> {
    let repaired = repair_identifiers(body);
    let envelope: Envelope = serde_json::from_str(&repaired)?;

    if let Some(error) = envelope.error.filter(is_reported) {
        let code = envelope.code.as_ref().and_then(code_number);
        return Err(VineError::Api { code, error });
    }

    Ok(envelope.data.unwrap_or(Value::Null))
}

fn is_reported(error: &Value) -> bool {
    match error {
        Value::Null | Value::Bool(false) => false,
        Value::Number(n) => n.as_f64().is_some_and(|n| n.abs() > 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        _ => true,
    }
}

// `code` arrives as a number, a numeric string, or "".
fn code_number(code: &Value) -> Option<i64> {
    match code {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
