//! quick-xml helpers for reading raw element trees and writing nodes.
//!
//! Keeps the event-level plumbing out of the node parser and serializer.

pub mod de;
pub mod ser;

pub use de::{Element, local_name, read_str, read_tree};
pub use ser::{AttrList, XmlEmitter};
