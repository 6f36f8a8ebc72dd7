//! # otsxml
//!
//! A typed document model for OpenTrafficSim (OTS) scenario files.
//!
//! A document is read into an immutable tree of [`node::Node`]s, validated
//! against a static description of the OTS vocabulary in [`schema`]. Simple
//! values go through the adapters in [`values`], so every attribute and
//! simple element holds a typed [`values::Value`] (quantities with their
//! unit, closed vocabularies, colors, or an unevaluated `{...}` expression).
//! The most used sections are also exposed as plain structs in [`model`].
//!
//! ```rust
//! use otsxml::Document;
//!
//! let xml = r#"<Ots xmlns="http://www.opentrafficsim.org/ots">
//!     <Definitions/>
//!     <Network/>
//!     <Run><RunLength>30 min</RunLength></Run>
//! </Ots>"#;
//!
//! let document: Document = xml.parse().unwrap();
//! assert_eq!(document.run.run_length.to_string(), "30 min");
//! assert_eq!(document.run.number_replications.to_string(), "1");
//! ```

pub mod model;
pub mod node;
pub mod schema;
pub mod types;
pub mod validation;
pub mod values;
pub mod xml;

#[cfg(test)]
mod test_utils;

pub use crate::model::Document;
pub use crate::node::{Node, NodeBuilder};
pub use crate::types::ValidationResult;
pub use crate::validation::validate_identifiers;
pub use crate::values::{Expr, Value, ValueKind};
pub use crate::xml::{DocumentError, ParseOptions, SerializeError, WriteOptions};
