//! Fixed design system backing the unit tests.

use crate::design::{DEFAULT_MAX_VARIANT_DEPTH, DesignSystem, UtilityKind, VariantKind};
use crate::types::{Variant, VariantValue};

const STATIC_UTILITIES: &[&str] = &["underline", "flex", "shadow"];

const FUNCTIONAL_UTILITIES: &[&str] = &[
    "bg",
    "w",
    "mx",
    "inset-x",
    "border",
    "border-x",
    "text",
    "grid-cols",
    "shadow",
    "scroll-timeline",
];

const VARIANTS: &[(&str, VariantKind, bool)] = &[
    ("hover", VariantKind::Static, true),
    ("focus", VariantKind::Static, true),
    ("dark", VariantKind::Static, false),
    ("before", VariantKind::Static, false),
    ("aria", VariantKind::Functional, true),
    ("supports", VariantKind::Functional, false),
    ("@", VariantKind::Functional, false),
    ("@min", VariantKind::Functional, false),
    ("group", VariantKind::Compound, true),
    ("peer", VariantKind::Compound, true),
    ("has", VariantKind::Compound, true),
    ("not", VariantKind::Compound, true),
];

pub(crate) struct FakeDesign {
    max_depth: usize,
}

impl Default for FakeDesign {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_VARIANT_DEPTH,
        }
    }
}

impl FakeDesign {
    pub(crate) fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    fn variant(name: &str) -> Option<&'static (&'static str, VariantKind, bool)> {
        VARIANTS.iter().find(|(candidate, ..)| *candidate == name)
    }
}

impl DesignSystem for FakeDesign {
    fn has_utility(&self, name: &str, kind: UtilityKind) -> bool {
        match kind {
            UtilityKind::Static => STATIC_UTILITIES.contains(&name),
            UtilityKind::Functional => FUNCTIONAL_UTILITIES.contains(&name),
        }
    }

    fn has_variant(&self, name: &str) -> bool {
        Self::variant(name).is_some()
    }

    fn variant_kind(&self, name: &str) -> Option<VariantKind> {
        Self::variant(name).map(|(_, kind, _)| *kind)
    }

    fn variant_compounds(&self, name: &str) -> bool {
        Self::variant(name).is_some_and(|(_, _, compounds)| *compounds)
    }

    fn max_variant_depth(&self) -> usize {
        self.max_depth
    }
}

pub(crate) fn static_variant(root: &str, compounds: bool) -> Variant {
    Variant::Static {
        root: root.into(),
        compounds,
    }
}

pub(crate) fn named_value(value: &str) -> VariantValue {
    VariantValue::Named {
        value: value.into(),
    }
}
