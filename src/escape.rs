//! Backslash escape decoding for `--message` text.
//!
//! Shell users cannot easily type control characters, so the message
//! argument accepts the usual C-style escapes and this module turns them
//! into the characters they stand for.

/// Replace recognised two-character escapes with their control character.
///
/// Recognised escapes: `\f`, `\n`, `\r`, `\t`, `\v` and `\\`. Any other
/// backslash pair, and a trailing lone backslash, is copied through as-is
/// (backslash included). Decoding is a single left-to-right pass; a decoded
/// pair consumes both characters, so `\\n` yields a backslash followed by `n`.
///
/// # Examples
///
/// ```
/// use tvtext::escape::decode;
///
/// assert_eq!(decode(r"hello\nworld"), "hello\nworld");
/// assert_eq!(decode(r"a\qb"), r"a\qb");
/// assert_eq!(decode(r"trailing\"), r"trailing\");
/// ```
pub fn decode(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            output.push(ch);
            continue;
        }

        let replacement = match chars.peek() {
            Some('f') => Some('\u{0C}'),
            Some('n') => Some('\n'),
            Some('r') => Some('\r'),
            Some('t') => Some('\t'),
            Some('v') => Some('\u{0B}'),
            Some('\\') => Some('\\'),
            _ => None,
        };

        match replacement {
            Some(decoded) => {
                output.push(decoded);
                chars.next();
            }
            // Unknown escape: keep the backslash, the next char is handled normally
            None => output.push('\\'),
        }
    }

    output
}
