//! Serialisable description of a registry.
//!
//! A snapshot is what a design system exports for the parser:
//!
//! ```json
//! {
//!   "utilities": { "static": ["flex"], "functional": ["bg"] },
//!   "variants": [{ "name": "hover", "kind": "static", "compounds": true }],
//!   "maxVariantDepth": 16
//! }
//! ```

use candidate_parser::VariantKind;
use serde::{Deserialize, Serialize};

/// Registered utility roots, split by kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UtilitySnapshot {
    /// Utilities used without a value.
    #[serde(rename = "static", default)]
    pub static_names: Vec<String>,
    /// Utilities taking a value.
    #[serde(default)]
    pub functional: Vec<String>,
}

/// One registered variant root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VariantSnapshot {
    /// Variant root, e.g. `hover` or `@min`.
    pub name: String,
    /// How the variant consumes the text after its root.
    pub kind: VariantKind,
    /// Whether a compound variant may wrap it. Defaults to `true`.
    #[serde(default = "compounds_by_default")]
    pub compounds: bool,
}

/// Complete registry contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RegistrySnapshot {
    /// Utility tables.
    #[serde(default)]
    pub utilities: UtilitySnapshot,
    /// Variant table, in declaration order.
    #[serde(default)]
    pub variants: Vec<VariantSnapshot>,
    /// Optional override of the compound-variant nesting limit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_variant_depth: Option<usize>,
}

const fn compounds_by_default() -> bool {
    true
}
