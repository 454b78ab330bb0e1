//! Parser for utility-class candidates and their variants.
//!
//! A candidate such as `hover:bg-red-500/50!` is split into a chain of
//! variants and a base utility, each resolved against a [`DesignSystem`]
//! that knows which utility and variant roots exist. The parsers never fail
//! loudly: anything that is not a valid candidate yields `None`.

mod candidate;
mod decode;
mod design;
mod modifier;
mod root;
mod segment;
#[cfg(test)]
pub(crate) mod test_support;
mod types;
mod variant;

pub use candidate::parse_candidate;
pub use decode::decode_arbitrary_value;
pub use design::{DEFAULT_MAX_VARIANT_DEPTH, DesignSystem, UtilityKind, VariantKind};
pub use modifier::parse_modifier;
pub use root::find_root;
pub use segment::segment;
pub use types::{Candidate, CandidateModifier, UtilityValue, Variant, VariantValue};
pub use variant::{parse_variant, parse_variant_at_depth};
