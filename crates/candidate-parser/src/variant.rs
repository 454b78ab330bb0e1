//! Variant token parsing.

use crate::decode::decode_arbitrary_value;
use crate::design::{DesignSystem, VariantKind};
use crate::modifier::{bracketed, parse_modifier};
use crate::root::find_root;
use crate::segment::segment;
use crate::types::{CandidateModifier, Variant, VariantValue};

/// Parse one variant token, e.g. `hover`, `aria-[sort=ascending]` or
/// `group-hover/sidebar`.
///
/// Delegates to [`DesignSystem::parse_nested_variant`] at depth 0 so
/// registries that extend variant parsing are honoured. Returns `None` when
/// the token is not a valid variant for `design`.
#[must_use]
pub fn parse_variant<D: DesignSystem + ?Sized>(design: &D, token: &str) -> Option<Variant> {
    design.parse_nested_variant(token, 0)
}

/// Built-in variant parser behind [`DesignSystem::parse_nested_variant`].
///
/// Variants wrapped by a compound variant are parsed through
/// `design.parse_nested_variant` at `depth + 1`, so overrides see them too.
/// Tokens nested deeper than [`DesignSystem::max_variant_depth`] are rejected.
#[must_use]
pub fn parse_variant_at_depth<D: DesignSystem + ?Sized>(
    design: &D,
    token: &str,
    depth: usize,
) -> Option<Variant> {
    if depth > design.max_variant_depth() {
        return reject(token, "compound variants nested too deeply");
    }

    if let Some(inner) = bracketed(token) {
        return parse_arbitrary_variant(token, inner);
    }

    // group-hover/sidebar
    // ^^^^^^^^^^^          variant without modifier
    //             ^^^^^^^  modifier
    let (without_modifier, modifier) = match segment(token, '/').as_slice() {
        [base] => (*base, None),
        [base, modifier] => (*base, Some(*modifier)),
        _ => return reject(token, "more than one modifier"),
    };

    let Some((root, value)) = find_root(without_modifier, |name| design.has_variant(name)) else {
        return reject(token, "unknown variant");
    };
    let Some(kind) = design.variant_kind(root) else {
        return reject(token, "variant has no registered kind");
    };
    let compounds = design.variant_compounds(root);

    match kind {
        VariantKind::Static => {
            if value.is_some() {
                return reject(token, "static variant given a value");
            }
            if modifier.is_some() {
                return reject(token, "static variant given a modifier");
            }
            Some(Variant::Static {
                root: root.to_owned(),
                compounds,
            })
        }
        VariantKind::Functional => {
            let Some(value) = value else {
                return reject(token, "functional variant without a value");
            };
            let value = bracketed(value).map_or_else(
                || VariantValue::Named {
                    value: value.to_owned(),
                },
                |inner| VariantValue::Arbitrary {
                    value: decode_arbitrary_value(inner),
                },
            );
            Some(Variant::Functional {
                root: root.to_owned(),
                value: Some(value),
                modifier: modifier.map(parse_modifier),
                compounds,
            })
        }
        VariantKind::Compound => {
            let Some(value) = value else {
                return reject(token, "compound variant without a nested variant");
            };
            let Some(nested) = design.parse_nested_variant(value, depth + 1) else {
                return reject(token, "nested variant is invalid");
            };
            if !nested.compounds() {
                return reject(token, "nested variant does not compound");
            }
            Some(Variant::Compound {
                root: root.to_owned(),
                modifier: modifier.map(CandidateModifier::named),
                variant: Box::new(nested),
                compounds,
            })
        }
    }
}

fn parse_arbitrary_variant(token: &str, inner: &str) -> Option<Variant> {
    // At-rules mixed with selectors, e.g. `[@media(print){&:hover}]`, must be
    // written as two stacked variants instead.
    if inner.starts_with('@') && token.contains('&') {
        return reject(token, "arbitrary at-rule variant mixed with a selector");
    }

    let mut selector = decode_arbitrary_value(inner);
    if !selector.starts_with('@') && !selector.contains('&') {
        selector = format!("&:is({selector})");
    }

    Some(Variant::Arbitrary {
        selector,
        compounds: true,
    })
}

fn reject<T>(token: &str, reason: &str) -> Option<T> {
    log::trace!("rejecting variant {token:?}: {reason}");
    None
}
