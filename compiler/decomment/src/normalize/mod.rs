//! Line terminator normalization.

use std::borrow::Cow;

/// Convert `\r\n` and lone `\r` line terminators to `\n`.
///
/// Borrows the input when it contains no carriage return.
pub fn normalize_newlines(source: &str) -> Cow<'_, str> {
    let Some(first) = memchr::memchr(b'\r', source.as_bytes()) else {
        return Cow::Borrowed(source);
    };

    let mut out = String::with_capacity(source.len());
    out.push_str(&source[..first]);
    let mut rest = &source[first..];
    while let Some(cr) = memchr::memchr(b'\r', rest.as_bytes()) {
        out.push_str(&rest[..cr]);
        out.push('\n');
        rest = &rest[cr + 1..];
        if let Some(after_lf) = rest.strip_prefix('\n') {
            rest = after_lf;
        }
    }
    out.push_str(rest);
    Cow::Owned(out)
}
