//! # Schema descriptors
//!
//! The OTS vocabulary is described by a static table of [`NodeType`]s rather
//! than one Rust type per XML element. A node type lists its attributes, its
//! content model (a sequence of [`Particle`]s) and, for elements carrying
//! character data, the type of that text. The generic node engine in
//! [`crate::node`] interprets these descriptors for both parsing and
//! programmatic construction.
//!
//! The tables are split by document section; [`OTS`] is the document root.

mod control;
mod definitions;
mod demand;
mod models;
mod network;
mod run;

use std::fmt;
use std::iter;
use std::ptr;

use itertools::Itertools;

use crate::values::ValueKind;

pub use control::{
    CONSOLE, CONTROL, CYCLE, FIXED_TIME, PROGRAM, SIGNAL_GROUP, TRAF_COD, TRAFFIC_LIGHT,
};
pub use definitions::{
    ACCELERATION_DISTRIBUTION, COMPATIBLE_TYPE, DEFINITIONS, DETECTOR_TYPES, DISTRIBUTION, GTU_TEMPLATE,
    GTU_TEMPLATES, GTU_TYPE, GTU_TYPES, INCLUDE, LANE_BIAS, LANE_BIASES, LANE_TYPES,
    LENGTH_DISTRIBUTION, LINK_TYPES, PARAMETER_TYPES, ROAD_LAYOUT, ROAD_LAYOUTS,
    SPEED_DISTRIBUTION,
};
pub use demand::{CATEGORY, CELL, DEMAND, GLOBAL_TIME, LANE_REFERENCE, LEVEL, OD, OD_OPTIONS};
pub use models::{MODEL, MODELS};
pub use network::{DEVIATION_AND_ANGLE, FLATTENER_TYPE, LINK, NETWORK, NODE};
pub use run::{ANIMATION, RANDOM_STREAM, REPLICATION, RUN, SCENARIOS};

/// Namespace of OTS documents.
pub const OTS_NAMESPACE: &str = "http://www.opentrafficsim.org/ots";

/// Namespace of XInclude elements.
pub const XINCLUDE_NAMESPACE: &str = "http://www.w3.org/2001/XInclude";

/// Minimum and maximum number of occurrences of a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurs {
    pub min: u32,
    /// `None` means unbounded.
    pub max: Option<u32>,
}

impl Occurs {
    pub const ONE: Occurs = Occurs { min: 1, max: Some(1) };
    pub const OPTIONAL: Occurs = Occurs { min: 0, max: Some(1) };
    pub const MANY: Occurs = Occurs { min: 0, max: None };
    pub const ONE_OR_MORE: Occurs = Occurs { min: 1, max: None };

    /// Whether one more occurrence fits after `count` occurrences.
    pub fn admits(self, count: u32) -> bool {
        self.max.is_none_or(|max| count < max)
    }

    pub fn is_repeated(self) -> bool {
        self.max != Some(1)
    }
}

/// How an absent attribute is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    Required,
    Optional,
    /// Optional, with the lexical form of the value used when absent.
    Default(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeDecl {
    pub name: &'static str,
    pub kind: ValueKind,
    pub usage: Usage,
}

impl AttributeDecl {
    pub const fn required(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            usage: Usage::Required,
        }
    }

    pub const fn optional(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind,
            usage: Usage::Optional,
        }
    }

    pub const fn defaulted(name: &'static str, kind: ValueKind, default: &'static str) -> Self {
        Self {
            name,
            kind,
            usage: Usage::Default(default),
        }
    }
}

/// The content type of a child element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ElementType {
    /// Character data only, read through an adapter.
    Simple(ValueKind),
    /// Attributes and/or child elements described by a node type.
    Complex(&'static NodeType),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementDecl {
    /// Local name.
    pub name: &'static str,
    /// Namespace prefix used when writing, if the element is not in the OTS
    /// namespace.
    pub prefix: Option<&'static str>,
    pub ty: ElementType,
    pub occurs: Occurs,
    /// Lexical default of a simple element.
    pub default: Option<&'static str>,
    /// Elements that must follow this one when it is chosen as an
    /// alternative of a choice group, making the alternative a sequence.
    pub followed_by: &'static [ElementDecl],
}

impl ElementDecl {
    pub const fn simple(name: &'static str, kind: ValueKind, occurs: Occurs) -> Self {
        Self {
            name,
            prefix: None,
            ty: ElementType::Simple(kind),
            occurs,
            default: None,
            followed_by: &[],
        }
    }

    pub const fn complex(name: &'static str, ty: &'static NodeType, occurs: Occurs) -> Self {
        Self {
            name,
            prefix: None,
            ty: ElementType::Complex(ty),
            occurs,
            default: None,
            followed_by: &[],
        }
    }

    pub const fn with_default(mut self, default: &'static str) -> Self {
        self.default = Some(default);
        self
    }

    pub const fn followed_by(mut self, rest: &'static [ElementDecl]) -> Self {
        self.followed_by = rest;
        self
    }

    /// The declarations making up this alternative, in order.
    pub fn branch(&self) -> impl Iterator<Item = &ElementDecl> {
        iter::once(self).chain(self.followed_by)
    }

    /// `A` for a single element, `A+B` for a sequence.
    pub fn branch_label(&self) -> String {
        self.branch().map(|decl| decl.name).join("+")
    }

    pub const fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Name as written in XML, including the prefix.
    pub fn qualified_name(&self) -> String {
        match self.prefix {
            Some(prefix) => format!("{}:{}", prefix, self.name),
            None => self.name.to_string(),
        }
    }
}

/// One entry of a content model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Particle {
    Element(ElementDecl),
    /// A choice group. Within one occurrence of the group exactly one
    /// alternative is populated (repeated as that alternative allows). An
    /// alternative declaring `followed_by` is a sequence of elements.
    Choice {
        name: &'static str,
        occurs: Occurs,
        alternatives: &'static [ElementDecl],
    },
}

/// Declares that a node carries character data of the given kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextDecl {
    pub kind: ValueKind,
}

/// Descriptor of one complex type.
pub struct NodeType {
    pub name: &'static str,
    pub attributes: &'static [AttributeDecl],
    pub content: &'static [Particle],
    pub text: Option<TextDecl>,
}

impl NodeType {
    /// A marker element: no attributes, no content.
    pub const fn marker(name: &'static str) -> Self {
        Self {
            name,
            attributes: &[],
            content: &[],
            text: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&'static AttributeDecl> {
        self.attributes.iter().find(|decl| decl.name == name)
    }

    /// Look up a child element declaration by local name, including the
    /// alternatives of choice groups. Returns the name of the enclosing
    /// choice group as well.
    pub fn element(&self, name: &str) -> Option<(&'static ElementDecl, Option<&'static str>)> {
        self.content.iter().find_map(|particle| match particle {
            Particle::Element(decl) => (decl.name == name).then_some((decl, None)),
            Particle::Choice {
                name: group,
                alternatives,
                ..
            } => alternatives
                .iter()
                .flat_map(ElementDecl::branch)
                .find(|decl| decl.name == name)
                .map(|decl| (decl, Some(*group))),
        })
    }

    /// Alternatives of a choice group.
    pub fn choice(&self, group: &str) -> Option<&'static [ElementDecl]> {
        self.content.iter().find_map(|particle| match particle {
            Particle::Choice {
                name, alternatives, ..
            } if *name == group => Some(*alternatives),
            _ => None,
        })
    }
}

impl fmt::Debug for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NodeType").field(&self.name).finish()
    }
}

impl PartialEq for NodeType {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

/// Root of an OTS document.
pub static OTS: NodeType = NodeType {
    name: "Ots",
    attributes: &[AttributeDecl::defaulted(
        "Space",
        ValueKind::Space,
        "preserve",
    )],
    content: &[
        Particle::Element(ElementDecl::complex("Definitions", &DEFINITIONS, Occurs::ONE)),
        Particle::Element(ElementDecl::complex("Network", &NETWORK, Occurs::ONE)),
        Particle::Element(ElementDecl::complex("Demand", &DEMAND, Occurs::OPTIONAL)),
        Particle::Element(ElementDecl::complex("Control", &CONTROL, Occurs::OPTIONAL)),
        Particle::Element(ElementDecl::complex("Models", &MODELS, Occurs::OPTIONAL)),
        Particle::Element(ElementDecl::complex("Scenarios", &SCENARIOS, Occurs::OPTIONAL)),
        Particle::Element(ElementDecl::complex("Run", &RUN, Occurs::ONE)),
        Particle::Element(ElementDecl::complex("Animation", &ANIMATION, Occurs::OPTIONAL)),
    ],
    text: None,
};
