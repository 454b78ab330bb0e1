//! Parsing of the `/`-delimited modifier segment.

use crate::decode::decode_arbitrary_value;
use crate::types::CandidateModifier;

/// Parse a modifier segment such as `50`, `[50%]` or `[--opacity]`.
///
/// Bracketed segments become arbitrary modifiers; everything else is kept
/// verbatim as a named modifier.
///
/// # Examples
/// ```
/// use candidate_parser::{CandidateModifier, parse_modifier};
/// assert_eq!(parse_modifier("50"), CandidateModifier::named("50"));
/// assert_eq!(
///     parse_modifier("[--x]"),
///     CandidateModifier::Arbitrary { value: "var(--x)".into(), dashed_ident: Some("--x".into()) },
/// );
/// ```
#[must_use]
pub fn parse_modifier(segment: &str) -> CandidateModifier {
    bracketed(segment).map_or_else(
        || CandidateModifier::named(segment),
        |inner| {
            let (value, dashed_ident) = resolve_arbitrary(inner);
            CandidateModifier::Arbitrary {
                value,
                dashed_ident,
            }
        },
    )
}

/// Contents of `[...]`, or `None` when `text` is not fully bracketed.
pub(crate) fn bracketed(text: &str) -> Option<&str> {
    text.strip_prefix('[')?.strip_suffix(']')
}

/// Turn raw bracket contents into a stored value and optional dashed ident.
///
/// A literal custom property (`--name`) is wrapped in `var(...)` and kept in
/// its original form for utilities accepting a `<dashed-ident>`. Anything else
/// is decoded.
pub(crate) fn resolve_arbitrary(raw: &str) -> (String, Option<String>) {
    if raw.starts_with("--") {
        (format!("var({raw})"), Some(raw.to_owned()))
    } else {
        (decode_arbitrary_value(raw), None)
    }
}
