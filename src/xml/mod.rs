//! XML reading and writing for OTS documents.
//!
//! Reading goes through a raw [`quick::Element`] tree, optional XInclude
//! expansion and the node parser; writing emits a [`crate::node::Node`]
//! through quick-xml. Both directions are generic over node types, so any
//! fragment with a known type can be read or written on its own.

pub mod deserialize;
mod errors;
pub mod include;
pub mod options;
pub mod quick;
pub mod serialize;

pub use deserialize::{element_to_node, parse_node, parse_node_with, read_node};
pub use errors::{DocumentError, SerializeError};
pub use include::{FileIncludeResolver, IncludeResolver};
pub use options::{ParseOptions, WriteOptions};
pub use serialize::{write_node, write_node_to, write_node_with};
