//! Percent-decoding and parameter extraction for URL query strings.
//!
//! Decoding is not idempotent: a literal `%XX` in already-decoded text
//! would be re-interpreted as an escape on a second pass. Values are
//! therefore decoded exactly once, after extraction from the raw query.

/// Value of an ASCII hex digit, or None.
fn hex_val(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decode `%XX` escapes (hex digits of either case) and `+`-as-space,
/// scanning left to right. A malformed escape — `%` not followed by two
/// hex digits — is copied through literally.
pub fn decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' if i + 2 < bytes.len() => {
                match (hex_val(bytes[i + 1]), hex_val(bytes[i + 2])) {
                    (Some(hi), Some(lo)) => {
                        out.push(hi << 4 | lo);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Extract the raw (still-encoded) value for `key` from a `k=v&k=v` query.
///
/// Keys match by exact comparison against the text before the first `=` of
/// each pair; the first match wins. A value longer than `max_len` bytes
/// counts as not found — the bound fails closed rather than truncating.
pub fn raw_param<'a>(query: &'a str, key: &str, max_len: usize) -> Option<&'a str> {
    for pair in query.split('&') {
        let Some((name, value)) = pair.split_once('=') else {
            continue;
        };
        if name == key {
            if value.len() > max_len {
                return None;
            }
            return Some(value);
        }
    }
    None
}

/// Extract and decode a query parameter. The decode is applied exactly
/// once, to the extracted value; the query as a whole is never decoded.
pub fn param(query: &str, key: &str, max_len: usize) -> Option<String> {
    raw_param(query, key, max_len).map(decode)
}
