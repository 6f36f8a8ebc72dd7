//! # Typed bindings
//!
//! Plain structs read once from validated [`Node`]s, for the parts of a
//! scenario callers most often consume directly. Every field holds either an
//! identifier as a `String` or an [`Expr`], since most simple types admit the
//! `{...}` expression escape. Defaults have already been resolved by the node
//! layer, so a defaulted field simply holds the default.
//!
//! Sections without a binding stay reachable as nodes through [`Document`].

pub mod control;
pub mod definitions;
pub mod demand;
pub mod document;
pub mod network;
pub mod run;

use std::ptr;

pub use control::{ControlSection, Cycle, FixedTime, SignalGroup, TextSource, TrafCod, TrafficLight};
pub use definitions::{
    CompatibleType, DefinitionsSection, Distribution, DistributionKind, GtuTemplate, GtuType,
    LaneBias, RoadPosition,
};
pub use demand::{Category, Cell, LaneReference, Level, Od};
pub use document::Document;
pub use network::FlattenerType;
pub use run::{RandomStream, Replication, Run};

use crate::node::{ElementPath, Node};
use crate::schema::NodeType;
use crate::values::{Expr, FromValue, Value};
use crate::xml::DocumentError;

/// A binding that can be read from a node of one specific type.
pub trait FromNode: Sized {
    /// The node type this binding reads.
    fn node_type() -> &'static NodeType;

    /// Read the binding, assuming `node` already has the right type.
    fn read(node: &Node) -> Result<Self, DocumentError>;

    fn from_node(node: &Node) -> Result<Self, DocumentError> {
        let expected = Self::node_type();
        if !ptr::eq(node.node_type(), expected) {
            return Err(DocumentError::violation(
                ElementPath::root(node.name()),
                format!("expected a {} node, got {}", expected.name, node.name()),
            ));
        }
        Self::read(node)
    }
}

fn mismatch(node: &Node, field: &str, value: Option<&Value>) -> DocumentError {
    let message = match value {
        Some(value) => format!("'{}' holds an unexpected value '{}'", field, value),
        None => format!("'{}' is missing", field),
    };
    DocumentError::violation(ElementPath::root(node.name()), message)
}

fn convert<T: FromValue>(node: &Node, field: &str, value: &Value) -> Result<Expr<T>, DocumentError> {
    Expr::from_value(value).ok_or_else(|| mismatch(node, field, Some(value)))
}

fn convert_id(node: &Node, field: &str, value: &Value) -> Result<String, DocumentError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| mismatch(node, field, Some(value)))
}

pub(crate) fn attr<T: FromValue>(node: &Node, name: &str) -> Result<Expr<T>, DocumentError> {
    opt_attr(node, name)?.ok_or_else(|| mismatch(node, name, None))
}

pub(crate) fn opt_attr<T: FromValue>(
    node: &Node,
    name: &str,
) -> Result<Option<Expr<T>>, DocumentError> {
    node.attribute(name)
        .map(|value| convert(node, name, value))
        .transpose()
}

/// An identifier-valued attribute.
pub(crate) fn id_attr(node: &Node, name: &str) -> Result<String, DocumentError> {
    opt_id_attr(node, name)?.ok_or_else(|| mismatch(node, name, None))
}

pub(crate) fn opt_id_attr(node: &Node, name: &str) -> Result<Option<String>, DocumentError> {
    node.attribute(name)
        .map(|value| convert_id(node, name, value))
        .transpose()
}

pub(crate) fn value<T: FromValue>(node: &Node, name: &str) -> Result<Expr<T>, DocumentError> {
    opt_value(node, name)?.ok_or_else(|| mismatch(node, name, None))
}

pub(crate) fn opt_value<T: FromValue>(
    node: &Node,
    name: &str,
) -> Result<Option<Expr<T>>, DocumentError> {
    node.value(name)
        .map(|value| convert(node, name, value))
        .transpose()
}

pub(crate) fn opt_id_value(node: &Node, name: &str) -> Result<Option<String>, DocumentError> {
    node.value(name)
        .map(|value| convert_id(node, name, value))
        .transpose()
}

pub(crate) fn id_values(node: &Node, name: &str) -> Result<Vec<String>, DocumentError> {
    node.values(name)
        .map(|value| convert_id(node, name, value))
        .collect()
}

/// Read every complex child with the given name as a binding.
pub(crate) fn children<T: FromNode>(node: &Node, name: &str) -> Result<Vec<T>, DocumentError> {
    node.children_named(name).map(T::from_node).collect()
}

pub(crate) fn opt_child<T: FromNode>(node: &Node, name: &str) -> Result<Option<T>, DocumentError> {
    node.child(name).map(T::from_node).transpose()
}

pub(crate) fn child<T: FromNode>(node: &Node, name: &str) -> Result<T, DocumentError> {
    opt_child(node, name)?.ok_or_else(|| mismatch(node, name, None))
}
