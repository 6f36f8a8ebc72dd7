use crate::node::assemble::{Parts, assemble};
use crate::node::{ChildContent, ElementPath, Node};
use crate::schema::NodeType;
use crate::values::Value;
use crate::xml::DocumentError;

/// Mutable staging area for a [`Node`].
///
/// Setters record content without validating it; [`NodeBuilder::build`]
/// checks everything at once, exactly as the parser does, and freezes the
/// result. Repeated children keep their insertion order.
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    ty: &'static NodeType,
    attributes: Vec<(String, Value)>,
    children: Vec<(String, ChildContent)>,
    text: Option<Value>,
}

impl NodeBuilder {
    pub fn new(ty: &'static NodeType) -> Self {
        Self {
            ty,
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn node_type(&self) -> &'static NodeType {
        self.ty
    }

    /// Set an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.attributes.push((name.to_string(), value)),
        }
        self
    }

    pub fn remove_attribute(&mut self, name: &str) -> &mut Self {
        self.attributes.retain(|(n, _)| n != name);
        self
    }

    /// Append a complex child.
    pub fn push_child(&mut self, name: &str, node: Node) -> &mut Self {
        self.push_content(name, ChildContent::Node(node))
    }

    /// Append a simple child.
    pub fn push_value(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.push_content(name, ChildContent::Value(value.into()))
    }

    pub fn push_content(&mut self, name: &str, content: ChildContent) -> &mut Self {
        self.children.push((name.to_string(), content));
        self
    }

    /// Remove every child with the given name.
    pub fn remove_children(&mut self, name: &str) -> &mut Self {
        self.children.retain(|(n, _)| n != name);
        self
    }

    pub fn set_text(&mut self, text: impl Into<Value>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Validate the staged content and freeze it into a node.
    pub fn build(&self) -> Result<Node, DocumentError> {
        assemble(
            self.ty,
            &ElementPath::root(self.ty.name),
            Parts {
                attributes: self.attributes.clone(),
                children: self.children.clone(),
                text: self.text.clone(),
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{DEVIATION_AND_ANGLE, FLATTENER_TYPE, GTU_TYPE, PROGRAM};
    use crate::values::{Expression, Length, Space};

    #[test]
    fn test_set_attribute_overwrites() {
        let node = NodeBuilder::new(&GTU_TYPE)
            .set_attribute("Id", "CAR")
            .set_attribute("Id", "TRUCK")
            .build()
            .unwrap();
        assert_eq!(node.attribute("Id"), Some(&Value::String("TRUCK".into())));
        assert_eq!(node.attributes().len(), 2);
    }

    #[test]
    fn test_build_checks_ranges() {
        let err = NodeBuilder::new(&FLATTENER_TYPE)
            .push_value("NumSegments", 0_i64)
            .build()
            .unwrap_err();
        assert!(matches!(err, DocumentError::Range { .. }));
    }

    #[test]
    fn test_remove_children_then_rebuild() {
        let mut builder = NodeBuilder::new(&FLATTENER_TYPE);
        builder.push_value("NumSegments", 32_i64).push_child(
            "DeviationAndAngle",
            NodeBuilder::new(&DEVIATION_AND_ANGLE).build().unwrap(),
        );
        assert!(builder.build().is_err());

        builder.remove_children("NumSegments");
        let node = builder.build().unwrap();
        assert_eq!(node.choice("Flattener").unwrap().name(), "DeviationAndAngle");
    }

    #[test]
    fn test_expression_values() {
        let node = NodeBuilder::new(&DEVIATION_AND_ANGLE)
            .push_value("MaxDeviation", Expression::new("tolerance").unwrap())
            .build()
            .unwrap();
        assert_eq!(node.value("MaxDeviation").unwrap().to_string(), "{tolerance}");
        assert!(!node.child_entry("MaxDeviation").unwrap().defaulted);
        assert_eq!(
            node.value("MaxAngle").unwrap().to_string(),
            "1 deg",
        );

        let err = NodeBuilder::new(&DEVIATION_AND_ANGLE)
            .push_value("MaxDeviation", Length::meters(-1.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, DocumentError::Range { .. }));
    }

    #[test]
    fn test_text_content() {
        let program = NodeBuilder::new(&PROGRAM)
            .set_attribute("Space", Space::Default)
            .set_text("X = 1")
            .build()
            .unwrap();
        assert_eq!(program.text(), Some(&Value::String("X = 1".into())));
        assert!(!program.attribute_entry("Space").unwrap().defaulted);
    }
}
