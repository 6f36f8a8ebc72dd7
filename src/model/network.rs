//! Network bindings.

use crate::model::{FromNode, value};
use crate::node::{ChildContent, ElementPath, Node};
use crate::schema::{FLATTENER_TYPE, NodeType};
use crate::values::{Angle, Expr, Length};
use crate::xml::DocumentError;

/// How a curved link is turned into a polyline.
#[derive(Debug, Clone, PartialEq)]
pub enum FlattenerType {
    /// A fixed number of segments.
    NumSegments(Expr<i64>),
    /// Segments are added until both tolerances are met.
    DeviationAndAngle {
        max_deviation: Expr<Length>,
        max_angle: Expr<Angle>,
    },
}

impl FromNode for FlattenerType {
    fn node_type() -> &'static NodeType {
        &FLATTENER_TYPE
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        let chosen = node.choice("Flattener").ok_or_else(|| {
            DocumentError::violation(ElementPath::root(node.name()), "no flattener chosen")
        })?;
        match (chosen.name(), &chosen.content) {
            ("NumSegments", ChildContent::Value(_)) => {
                Ok(FlattenerType::NumSegments(value(node, "NumSegments")?))
            }
            ("DeviationAndAngle", ChildContent::Node(inner)) => {
                Ok(FlattenerType::DeviationAndAngle {
                    max_deviation: value(inner, "MaxDeviation")?,
                    max_angle: value(inner, "MaxAngle")?,
                })
            }
            (other, _) => Err(DocumentError::violation(
                ElementPath::root(node.name()),
                format!("unknown flattener '{}'", other),
            )),
        }
    }
}
