//! Bracket- and quote-aware splitting.

/// Split `input` at every top-level occurrence of `separator`.
///
/// `(`, `[` and `{` open a nested context closed by their matching bracket,
/// and `'`/`"` open a quoted context closed by the same quote. A backslash
/// escapes the following character. Separators inside an open context are
/// not split points, and an unterminated context keeps the rest of the input
/// in the current segment.
///
/// The result always holds at least one element.
///
/// # Examples
/// ```
/// use candidate_parser::segment;
/// assert_eq!(segment("hover:[&:focus]:flex", ':'), vec!["hover", "[&:focus]", "flex"]);
/// assert_eq!(segment("", ':'), vec![""]);
/// ```
#[must_use]
pub fn segment(input: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut closers: Vec<char> = Vec::new();
    let mut start = 0;
    let mut chars = input.char_indices();

    while let Some((idx, ch)) = chars.next() {
        if let Some(&quote @ ('\'' | '"')) = closers.last() {
            if ch == '\\' {
                chars.next();
            } else if ch == quote {
                closers.pop();
            }
            continue;
        }

        match ch {
            '\\' => {
                chars.next();
            }
            c if c == separator && closers.is_empty() => {
                parts.push(input.get(start..idx).unwrap_or_default());
                start = idx + c.len_utf8();
            }
            '(' => closers.push(')'),
            '[' => closers.push(']'),
            '{' => closers.push('}'),
            '\'' | '"' => closers.push(ch),
            c if closers.last() == Some(&c) => {
                closers.pop();
            }
            _ => {}
        }
    }

    parts.push(input.get(start..).unwrap_or_default());
    parts
}
