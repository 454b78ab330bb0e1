//! In-memory registry for `candidate-parser`.
//!
//! [`Registry`] records which utility and variant roots exist and answers the
//! existence queries the parsers make while segmenting a candidate. It can be
//! assembled with builder methods, loaded from a JSON [`RegistrySnapshot`],
//! and seeded with the stock variant catalogue.

mod config;
mod defaults;
mod error;
mod registry;
mod snapshot;

pub use config::{MAX_VARIANT_DEPTH_ENV, ParserConfig};
pub use error::RegistryError;
pub use registry::Registry;
pub use snapshot::{RegistrySnapshot, UtilitySnapshot, VariantSnapshot};
