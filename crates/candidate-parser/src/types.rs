//! Parsed representations of candidates, variants, values and modifiers.
//!
//! Every type here is produced by a single parse call and never mutated
//! afterwards. With the `serde` feature enabled the types serialise with a
//! `kind` tag and camelCase field names.

/// Secondary parameter introduced by `/`, e.g. the `50` in `bg-red-500/50`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum CandidateModifier {
    /// Bracketed modifier, e.g. `bg-red-500/[50%]`.
    Arbitrary {
        /// Decoded value, wrapped in `var(...)` for custom properties.
        value: String,
        /// The unwrapped `--name` when the modifier was a custom property.
        dashed_ident: Option<String>,
    },
    /// Bare modifier, e.g. `bg-red-500/50`.
    Named {
        /// The modifier text as written.
        value: String,
    },
}

impl CandidateModifier {
    /// Build a named modifier.
    #[must_use]
    pub fn named(value: impl Into<String>) -> Self {
        Self::Named {
            value: value.into(),
        }
    }

    /// Return the stored value regardless of the modifier kind.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::Arbitrary { value, .. } | Self::Named { value } => value,
        }
    }

    /// Whether the modifier was written in brackets.
    #[must_use]
    pub const fn is_arbitrary(&self) -> bool {
        matches!(self, Self::Arbitrary { .. })
    }
}

/// Value attached to a functional utility.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")
)]
pub enum UtilityValue {
    /// Bracketed value, e.g. `bg-[#0088cc]` or `bg-[color:var(--c)]`.
    Arbitrary {
        /// Explicit type hint preceding a `:` inside the brackets.
        data_type: Option<String>,
        /// Decoded value, wrapped in `var(...)` for custom properties.
        value: String,
        /// The unwrapped `--name` when the value was a custom property.
        dashed_ident: Option<String>,
    },
    /// Value from the utility's named vocabulary, e.g. `red-500`.
    Named {
        /// The value text as written.
        value: String,
        /// `N/M` for candidates such as `w-1/2` where the slash may be a
        /// fraction rather than a modifier.
        fraction: Option<String>,
    },
}

/// Value attached to a functional variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
pub enum VariantValue {
    /// Bracketed value, e.g. `aria-[sort=ascending]`.
    Arbitrary {
        /// Decoded bracket contents.
        value: String,
    },
    /// Bare value, e.g. `aria-disabled`.
    Named {
        /// The value text as written.
        value: String,
    },
}

/// A selector or media modifier applied to a candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
pub enum Variant {
    /// Selector written inline, e.g. `[&_p]`.
    Arbitrary {
        /// Decoded selector, always containing `&` unless it is an at-rule.
        selector: String,
        /// Always `true`.
        compounds: bool,
    },
    /// Variant without arguments, e.g. `hover`.
    Static {
        /// Registered variant name.
        root: String,
        /// Whether a compound variant may wrap this one.
        compounds: bool,
    },
    /// Variant taking a value, e.g. `aria-disabled` or `@container-[size]`.
    Functional {
        /// Registered variant name.
        root: String,
        /// Value following the root.
        value: Option<VariantValue>,
        /// Modifier following `/`.
        modifier: Option<CandidateModifier>,
        /// Whether a compound variant may wrap this one.
        compounds: bool,
    },
    /// Variant wrapping another variant, e.g. `group-hover` or `has-[&_p]`.
    Compound {
        /// Registered variant name.
        root: String,
        /// Named modifier following `/`, e.g. the group name.
        modifier: Option<CandidateModifier>,
        /// The wrapped variant.
        variant: Box<Variant>,
        /// Whether a compound variant may wrap this one.
        compounds: bool,
    },
}

impl Variant {
    /// Whether this variant may be nested inside a compound variant.
    #[must_use]
    pub const fn compounds(&self) -> bool {
        match self {
            Self::Arbitrary { compounds, .. }
            | Self::Static { compounds, .. }
            | Self::Functional { compounds, .. }
            | Self::Compound { compounds, .. } => *compounds,
        }
    }

    /// Registered root of the variant; arbitrary variants have none.
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        match self {
            Self::Arbitrary { .. } => None,
            Self::Static { root, .. }
            | Self::Functional { root, .. }
            | Self::Compound { root, .. } => Some(root),
        }
    }
}

/// One parsed utility token together with its variant chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(tag = "kind", rename_all = "camelCase")
)]
pub enum Candidate {
    /// Inline property/value pair, e.g. `[color:red]`.
    Arbitrary {
        /// CSS property before the `:`.
        property: String,
        /// Decoded CSS value after the `:`.
        value: String,
        /// Modifier following `/`.
        modifier: Option<CandidateModifier>,
        /// Variants in parse order.
        variants: Vec<Variant>,
        /// Set by a trailing or leading `!`.
        important: bool,
    },
    /// Utility without a value, e.g. `underline`.
    Static {
        /// Registered utility name.
        root: String,
        /// Variants in parse order.
        variants: Vec<Variant>,
        /// Set by a leading `-`.
        negative: bool,
        /// Set by a trailing or leading `!`.
        important: bool,
    },
    /// Utility taking a value, e.g. `bg-red-500` or `w-1/2`.
    Functional {
        /// Registered utility name.
        root: String,
        /// Value following the root, absent for bare functional roots.
        value: Option<UtilityValue>,
        /// Modifier following `/`.
        modifier: Option<CandidateModifier>,
        /// Variants in parse order.
        variants: Vec<Variant>,
        /// Set by a leading `-`.
        negative: bool,
        /// Set by a trailing or leading `!`.
        important: bool,
    },
}

impl Candidate {
    /// Variants applied to the candidate.
    #[must_use]
    pub fn variants(&self) -> &[Variant] {
        match self {
            Self::Arbitrary { variants, .. }
            | Self::Static { variants, .. }
            | Self::Functional { variants, .. } => variants,
        }
    }

    /// Whether the candidate carried a `!` marker.
    #[must_use]
    pub const fn is_important(&self) -> bool {
        match self {
            Self::Arbitrary { important, .. }
            | Self::Static { important, .. }
            | Self::Functional { important, .. } => *important,
        }
    }

    /// Whether the candidate carried a leading `-`. Arbitrary properties are
    /// never negative.
    #[must_use]
    pub const fn is_negative(&self) -> bool {
        match self {
            Self::Arbitrary { .. } => false,
            Self::Static { negative, .. } | Self::Functional { negative, .. } => *negative,
        }
    }

    /// Modifier attached to the candidate, if any.
    #[must_use]
    pub const fn modifier(&self) -> Option<&CandidateModifier> {
        match self {
            Self::Arbitrary { modifier, .. } | Self::Functional { modifier, .. } => {
                modifier.as_ref()
            }
            Self::Static { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hover() -> Variant {
        Variant::Static {
            root: "hover".into(),
            compounds: true,
        }
    }

    #[test]
    fn compound_reports_its_own_flag() {
        let variant = Variant::Compound {
            root: "group".into(),
            modifier: None,
            variant: Box::new(hover()),
            compounds: false,
        };
        assert!(!variant.compounds());
        assert_eq!(variant.root(), Some("group"));
    }

    #[test]
    fn arbitrary_variant_has_no_root() {
        let variant = Variant::Arbitrary {
            selector: "&:is(p)".into(),
            compounds: true,
        };
        assert_eq!(variant.root(), None);
    }

    #[test]
    fn arbitrary_candidates_are_never_negative() {
        let candidate = Candidate::Arbitrary {
            property: "color".into(),
            value: "red".into(),
            modifier: Some(CandidateModifier::named("50")),
            variants: vec![hover()],
            important: true,
        };
        assert!(!candidate.is_negative());
        assert!(candidate.is_important());
        assert_eq!(candidate.variants(), &[hover()]);
        assert_eq!(candidate.modifier().map(CandidateModifier::value), Some("50"));
    }

    #[test]
    fn static_candidates_have_no_modifier() {
        let candidate = Candidate::Static {
            root: "flex".into(),
            variants: Vec::new(),
            negative: true,
            important: false,
        };
        assert!(candidate.is_negative());
        assert!(candidate.modifier().is_none());
    }
}
