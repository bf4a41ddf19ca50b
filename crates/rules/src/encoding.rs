//! Wire encoding of removal rules.
//!
//! A rule persists as a comma-separated list of integer product ids in one
//! string-valued metadata entry. The format predates this implementation and
//! stored values may contain anything, so decoding is strictly lenient: keep
//! what parses, drop the rest, never fail.

use supplant_core::ProductId;
use tracing::warn;

/// Parse a stored comma-separated id list.
///
/// Empty tokens are skipped; tokens that do not parse as a valid product id
/// are dropped one by one with a warning. Duplicates collapse to their first
/// occurrence. `"abc,,5"` parses to `[5]`.
pub fn parse_list(raw: &str) -> Vec<ProductId> {
    let mut ids = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<ProductId>() {
            Ok(id) => {
                if !ids.contains(&id) {
                    ids.push(id);
                }
            }
            Err(_) => warn!(token, "ignoring malformed removal id token"),
        }
    }
    ids
}

/// Encode ids into the stored comma-separated form.
pub fn encode_list(ids: &[ProductId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Coerce a submitted form value to an integer the way the admin form has
/// always treated it: optional leading whitespace and sign, then the longest
/// run of digits, else 0. `"12abc"` is 12, `"abc"` is 0. Values beyond the
/// integer range saturate.
pub fn coerce_int(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if end == 0 {
        return 0;
    }

    match digits[..end].parse::<i64>() {
        Ok(n) if negative => -n,
        Ok(n) => n,
        Err(_) if negative => i64::MIN,
        Err(_) => i64::MAX,
    }
}
