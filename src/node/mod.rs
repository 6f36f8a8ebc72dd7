//! # Generic document nodes
//!
//! Every element of an OTS document is represented by the same [`Node`]
//! structure, interpreted through its [`NodeType`] descriptor. Nodes are
//! immutable once built: they come out of the parser or out of a
//! [`NodeBuilder`], and both paths run the same validation.
//!
//! Defaults are resolved once, while the node is built. An attribute or
//! simple child that was absent but has a declared default is materialized
//! with that default and flagged as `defaulted`, so readers always see the
//! schema default and writers know not to emit it.
//!
//! ```rust
//! use otsxml::node::NodeBuilder;
//! use otsxml::schema::RUN;
//! use otsxml::values::{Duration, Value};
//!
//! let run = NodeBuilder::new(&RUN)
//!     .push_value("RunLength", Duration::seconds(600.0))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(run.value("StartTime").unwrap().to_string(), "0 s");
//! assert_eq!(run.value("NumberReplications"), Some(&Value::Integer(1)));
//! assert!(run.child_entry("StartTime").unwrap().defaulted);
//! ```

pub(crate) mod assemble;
mod builder;
mod path;

pub use builder::NodeBuilder;
pub(crate) use path::sibling_index;
pub use path::ElementPath;

use crate::schema::{AttributeDecl, ElementDecl, NodeType};
use crate::values::Value;

/// A resolved attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub decl: &'static AttributeDecl,
    pub value: Value,
    /// The value comes from the declared default, not from the source.
    pub defaulted: bool,
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        self.decl.name
    }
}

/// Content of a child element.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildContent {
    Node(Node),
    Value(Value),
}

impl From<Node> for ChildContent {
    fn from(node: Node) -> Self {
        ChildContent::Node(node)
    }
}

impl From<Value> for ChildContent {
    fn from(value: Value) -> Self {
        ChildContent::Value(value)
    }
}

/// A child element in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Child {
    pub decl: &'static ElementDecl,
    /// Name of the choice group this child populates, if any.
    pub choice: Option<&'static str>,
    pub content: ChildContent,
    pub defaulted: bool,
}

impl Child {
    pub fn name(&self) -> &'static str {
        self.decl.name
    }

    pub fn as_node(&self) -> Option<&Node> {
        match &self.content {
            ChildContent::Node(node) => Some(node),
            ChildContent::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match &self.content {
            ChildContent::Node(_) => None,
            ChildContent::Value(value) => Some(value),
        }
    }
}

/// An immutable, validated element.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    ty: &'static NodeType,
    attributes: Vec<Attribute>,
    children: Vec<Child>,
    text: Option<Value>,
}

impl Node {
    pub fn node_type(&self) -> &'static NodeType {
        self.ty
    }

    pub fn name(&self) -> &'static str {
        self.ty.name
    }

    /// Value of an attribute, explicit or defaulted.
    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attribute_entry(name).map(|attribute| &attribute.value)
    }

    pub fn attribute_entry(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|attribute| attribute.name() == name)
    }

    /// Attributes in declaration order.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Character data of a node that declares text content.
    pub fn text(&self) -> Option<&Value> {
        self.text.as_ref()
    }

    /// Children in document order.
    pub fn children(&self) -> &[Child] {
        &self.children
    }

    /// First child element with the given name.
    pub fn child_entry(&self, name: &str) -> Option<&Child> {
        self.children.iter().find(|child| child.name() == name)
    }

    /// First complex child with the given name.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.child_entry(name).and_then(Child::as_node)
    }

    /// All complex children with the given name, in order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> + 'a {
        self.children
            .iter()
            .filter(move |child| child.name() == name)
            .filter_map(Child::as_node)
    }

    /// Value of the first simple child with the given name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.child_entry(name).and_then(Child::as_value)
    }

    /// Values of all simple children with the given name, in order.
    pub fn values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.children
            .iter()
            .filter(move |child| child.name() == name)
            .filter_map(Child::as_value)
    }

    /// The populated alternative of a choice group, if any.
    pub fn choice(&self, group: &str) -> Option<&Child> {
        self.children.iter().find(|child| child.choice == Some(group))
    }

    /// All children populating a choice group, in order. Repeated groups
    /// yield one entry per occurrence.
    pub fn choices<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Child> + 'a {
        self.children
            .iter()
            .filter(move |child| child.choice == Some(group))
    }

    /// Reopen this node as a builder holding its explicit content. Defaulted
    /// entries are left out and resolved again on `build`.
    pub fn to_builder(&self) -> NodeBuilder {
        let mut builder = NodeBuilder::new(self.ty);
        for attribute in self.attributes.iter().filter(|a| !a.defaulted) {
            builder.set_attribute(attribute.name(), attribute.value.clone());
        }
        for child in self.children.iter().filter(|c| !c.defaulted) {
            builder.push_content(child.name(), child.content.clone());
        }
        if let Some(text) = &self.text {
            builder.set_text(text.clone());
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FLATTENER_TYPE, LANE_BIAS};
    use crate::values::Speed;

    fn lane_bias() -> Node {
        NodeBuilder::new(&LANE_BIAS)
            .set_attribute("GtuType", "CAR")
            .set_attribute("Bias", 0.5)
            .push_value("LeftSpeed", "120 km/h".parse::<Speed>().unwrap())
            .push_value("RightSpeed", "80 km/h".parse::<Speed>().unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_accessors() {
        let node = lane_bias();
        assert_eq!(node.name(), "LaneBias");
        assert_eq!(node.attribute("GtuType"), Some(&Value::String("CAR".into())));
        assert_eq!(node.attribute("StickyLanes"), None);

        let speed = node.choice("RoadPosition").unwrap();
        assert_eq!(speed.name(), "LeftSpeed");
        assert_eq!(node.choices("RoadPosition").count(), 2);
        assert_eq!(node.value("RightSpeed").unwrap().to_string(), "80 km/h");
    }

    #[test]
    fn test_choice_outlives_group_name() {
        let node = lane_bias();
        let chosen = {
            let group = String::from("RoadPosition");
            node.choice(&group)
        };
        assert_eq!(chosen.map(Child::name), Some("LeftSpeed"));
    }

    #[test]
    fn test_to_builder_drops_defaults() {
        let flattener = NodeBuilder::new(&FLATTENER_TYPE)
            .push_child(
                "DeviationAndAngle",
                NodeBuilder::new(&crate::schema::DEVIATION_AND_ANGLE).build().unwrap(),
            )
            .build()
            .unwrap();

        let rebuilt = flattener.to_builder().build().unwrap();
        assert_eq!(rebuilt, flattener);

        let inner = flattener.child("DeviationAndAngle").unwrap();
        assert!(inner.children().iter().all(|c| c.defaulted));
        let reopened = inner.to_builder();
        assert_eq!(reopened.build().unwrap(), *inner);
    }
}
