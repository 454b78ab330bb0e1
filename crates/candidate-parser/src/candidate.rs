//! Candidate token parsing.
//!
//! A candidate is split on `:` into variant segments and a base. The base is
//! stripped of its `!` and `-` markers and then resolved, in order, as an
//! exact static utility, an arbitrary property (`[color:red]`), a functional
//! utility with a bracketed value (`bg-[#0088cc]`) or a functional utility
//! with a named value (`bg-red-500`).

use crate::decode::decode_arbitrary_value;
use crate::design::{DesignSystem, UtilityKind};
use crate::modifier::{parse_modifier, resolve_arbitrary};
use crate::root::find_root;
use crate::segment::segment;
use crate::types::{Candidate, CandidateModifier, UtilityValue, Variant};
use crate::variant::parse_variant;

/// Parse a full candidate token such as `hover:bg-red-500/50!`.
///
/// Returns `None` when any variant is invalid or the base does not resolve
/// to a utility known to `design`. No partial results are produced.
#[must_use]
pub fn parse_candidate<D: DesignSystem + ?Sized>(design: &D, input: &str) -> Option<Candidate> {
    // hover:focus:underline
    // ^^^^^ ^^^^^            variants
    //             ^^^^^^^^^  base
    let mut raw_variants = segment(input, ':');
    let mut base = raw_variants.pop().unwrap_or_default();

    let mut variants = Vec::with_capacity(raw_variants.len());
    for raw in raw_variants.iter().rev() {
        let Some(variant) = parse_variant(design, raw) else {
            return reject(input, "invalid variant");
        };
        variants.push(variant);
    }

    let mut important = false;
    if let Some(stripped) = base.strip_suffix('!') {
        important = true;
        base = stripped;
    } else if let Some(stripped) = base.strip_prefix('!') {
        // Legacy `!mx-4`.
        important = true;
        base = stripped;
    }

    let mut negative = false;
    if let Some(stripped) = base.strip_prefix('-') {
        negative = true;
        base = stripped;
    }

    if design.has_utility(base, UtilityKind::Static) && !base.contains('[') {
        return Some(Candidate::Static {
            root: base.to_owned(),
            variants,
            negative,
            important,
        });
    }

    // bg-red-500/50
    // ^^^^^^^^^^     base without modifier
    //            ^^  modifier
    let (base_without_modifier, modifier) = match segment(base, '/').as_slice() {
        [head] => (*head, None),
        [head, tail] => (*head, Some(parse_modifier(tail))),
        _ => return reject(input, "more than one modifier"),
    };

    if let Some(property_and_value) = base_without_modifier.strip_prefix('[') {
        return parse_arbitrary_property(input, property_and_value, modifier, variants, important);
    }

    let (root, value) = if base_without_modifier.ends_with(']') {
        // bg-red-[#0088cc]
        // ^^^^^^            root
        //        ^^^^^^^^^  arbitrary value
        let Some(idx) = base_without_modifier.rfind("-[") else {
            return reject(input, "arbitrary value without a root");
        };
        let (root, value) = base_without_modifier.split_at(idx);
        if !design.has_utility(root, UtilityKind::Functional) {
            return reject(input, "unknown utility");
        }
        (root, value.get(1..))
    } else {
        let Some(found) = find_root(base_without_modifier, |name| {
            design.has_utility(name, UtilityKind::Functional)
        }) else {
            return reject(input, "unknown utility");
        };
        found
    };

    let value = match value {
        None => None,
        Some("") => return reject(input, "empty value"),
        Some(value) => Some(parse_utility_value(input, value, modifier.as_ref())?),
    };

    Some(Candidate::Functional {
        root: root.to_owned(),
        value,
        modifier,
        variants,
        negative,
        important,
    })
}

/// Parse the text after the opening `[` of an arbitrary property.
fn parse_arbitrary_property(
    input: &str,
    rest: &str,
    modifier: Option<CandidateModifier>,
    variants: Vec<Variant>,
    important: bool,
) -> Option<Candidate> {
    let Some(inner) = rest.strip_suffix(']') else {
        return reject(input, "arbitrary property is not closed");
    };

    // Only `a-z`, or `-` for vendor prefixes such as `-webkit-`.
    if !inner.starts_with(|c: char| c == '-' || c.is_ascii_lowercase()) {
        return reject(input, "arbitrary property has an invalid first character");
    }

    let Some((property, value)) = inner.split_once(':') else {
        return reject(input, "arbitrary property without a value");
    };
    if value.is_empty() {
        return reject(input, "arbitrary property without a value");
    }

    Some(Candidate::Arbitrary {
        property: property.to_owned(),
        value: decode_arbitrary_value(value),
        modifier,
        variants,
        important,
    })
}

fn parse_utility_value(
    input: &str,
    value: &str,
    modifier: Option<&CandidateModifier>,
) -> Option<UtilityValue> {
    let Some(open) = find_unescaped(value, '[') else {
        // `w-1/2` may be a fraction rather than a modifier; keep both readings.
        let fraction = match modifier {
            Some(CandidateModifier::Named { value: modifier }) => {
                let last = value.rsplit_once('-').map_or(value, |(_, last)| last);
                Some(format!("{last}/{modifier}"))
            }
            Some(CandidateModifier::Arbitrary { .. }) | None => None,
        };
        return Some(UtilityValue::Named {
            value: value.to_owned(),
            fraction,
        });
    };

    let Some(arbitrary) = value
        .get(open + 1..)
        .and_then(|rest| rest.strip_suffix(']'))
    else {
        return reject(input, "arbitrary value is not closed");
    };

    let (data_type, raw) = split_type_hint(arbitrary);
    let (value, dashed_ident) = resolve_arbitrary(raw);
    Some(UtilityValue::Arbitrary {
        data_type: data_type.map(str::to_owned),
        value,
        dashed_ident,
    })
}

/// Split a leading `[a-z-]+:` type hint, e.g. `color:` in `bg-[color:red]`.
fn split_type_hint(arbitrary: &str) -> (Option<&str>, &str) {
    for (idx, ch) in arbitrary.char_indices() {
        match ch {
            ':' => {
                let (hint, rest) = arbitrary.split_at(idx);
                let rest = rest.get(1..).unwrap_or_default();
                return ((!hint.is_empty()).then_some(hint), rest);
            }
            '-' | 'a'..='z' => {}
            _ => break,
        }
    }
    (None, arbitrary)
}

fn find_unescaped(text: &str, needle: char) -> Option<usize> {
    let mut chars = text.char_indices();
    while let Some((idx, ch)) = chars.next() {
        if ch == '\\' {
            chars.next();
        } else if ch == needle {
            return Some(idx);
        }
    }
    None
}

fn reject<T>(input: &str, reason: &str) -> Option<T> {
    log::trace!("rejecting candidate {input:?}: {reason}");
    None
}
