//! The registry interface the parsers query while segmenting tokens.

use crate::types::Variant;
use crate::variant::parse_variant_at_depth;

/// Default bound on compound-variant nesting.
pub const DEFAULT_MAX_VARIANT_DEPTH: usize = 32;

/// Which registration table a utility lookup targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UtilityKind {
    /// Utilities used without a value, e.g. `underline`.
    Static,
    /// Utilities taking a value, e.g. `bg`.
    Functional,
}

/// How a registered variant consumes the text after its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub enum VariantKind {
    /// No value and no modifier, e.g. `hover`.
    Static,
    /// A named or bracketed value, e.g. `aria-checked`.
    Functional,
    /// Another variant, e.g. `group-hover`.
    Compound,
}

/// Read-only existence oracle consulted by the candidate and variant parsers.
///
/// Implementations are queried many times per token and must not change
/// while a parse is running. Parsing from several threads needs nothing more
/// than the implementation being [`Sync`].
pub trait DesignSystem {
    /// Whether a utility named `name` is registered as `kind`.
    fn has_utility(&self, name: &str, kind: UtilityKind) -> bool;

    /// Whether a variant named `name` is registered.
    fn has_variant(&self, name: &str) -> bool;

    /// The kind of the registered variant `name`.
    fn variant_kind(&self, name: &str) -> Option<VariantKind>;

    /// Whether the variant `name` may be wrapped by a compound variant.
    fn variant_compounds(&self, name: &str) -> bool;

    /// Deepest compound-variant nesting accepted before a token is rejected.
    fn max_variant_depth(&self) -> usize {
        DEFAULT_MAX_VARIANT_DEPTH
    }

    /// Parse a variant token found `depth` compound levels deep; top-level
    /// variants are at depth 0.
    ///
    /// This is the single hook for extending variant parsing. The candidate
    /// parser calls it for every variant segment and compound variants call
    /// it for the variant they wrap, so an override applies at every level.
    /// Overrides fall back to [`parse_variant_at_depth`] for tokens they do
    /// not handle.
    fn parse_nested_variant(&self, token: &str, depth: usize) -> Option<Variant> {
        parse_variant_at_depth(self, token, depth)
    }
}

impl<T: DesignSystem + ?Sized> DesignSystem for &T {
    fn has_utility(&self, name: &str, kind: UtilityKind) -> bool {
        (**self).has_utility(name, kind)
    }

    fn has_variant(&self, name: &str) -> bool {
        (**self).has_variant(name)
    }

    fn variant_kind(&self, name: &str) -> Option<VariantKind> {
        (**self).variant_kind(name)
    }

    fn variant_compounds(&self, name: &str) -> bool {
        (**self).variant_compounds(name)
    }

    fn max_variant_depth(&self) -> usize {
        (**self).max_variant_depth()
    }

    fn parse_nested_variant(&self, token: &str, depth: usize) -> Option<Variant> {
        (**self).parse_nested_variant(token, depth)
    }
}
