//! Decoding of bracketed arbitrary values.

/// Decode the raw text of an arbitrary value.
///
/// Underscores stand in for spaces, so `_` becomes ` ` while `\_` yields a
/// literal `_`. Other backslash escapes are kept as written. The contents of
/// `url(...)` are copied untouched.
///
/// # Examples
/// ```
/// use candidate_parser::decode_arbitrary_value;
/// assert_eq!(decode_arbitrary_value("1fr_auto"), "1fr auto");
/// assert_eq!(decode_arbitrary_value(r"snake\_case"), "snake_case");
/// assert_eq!(decode_arbitrary_value("url(/a_b.png)_top"), "url(/a_b.png) top");
/// ```
#[must_use]
pub fn decode_arbitrary_value(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '\\' => match chars.next() {
                Some((_, '_')) => out.push('_'),
                Some((_, next)) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push('\\'),
            },
            '_' => out.push(' '),
            'u' if input.get(idx..).is_some_and(|rest| rest.starts_with("url(")) => {
                let end = url_end(input, idx);
                out.push_str(input.get(idx..end).unwrap_or_default());
                while chars.next_if(|&(next, _)| next < end).is_some() {}
            }
            _ => out.push(ch),
        }
    }

    out
}

/// Byte offset just past the parenthesis closing the `url(` at `start`, or
/// the end of `input` when it is never closed.
fn url_end(input: &str, start: usize) -> usize {
    let open = start + "url(".len();
    let mut depth = 1usize;
    for (offset, ch) in input.get(open..).unwrap_or_default().char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return open + offset + 1;
                }
            }
            _ => {}
        }
    }
    input.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("red", "red")]
    #[case("&_p", "& p")]
    #[case("repeat(2,minmax(0,1fr))", "repeat(2,minmax(0,1fr))")]
    #[case(r"a\_b_c", "a_b c")]
    #[case(r"\:hover", r"\:hover")]
    #[case("trailing\\", "trailing\\")]
    #[case("url(/a_b.png)", "url(/a_b.png)")]
    #[case("url(image(a_b))_no-repeat", "url(image(a_b)) no-repeat")]
    #[case("url(/unterminated_x", "url(/unterminated_x")]
    #[case("", "")]
    fn decodes(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(decode_arbitrary_value(input), expected);
    }
}
