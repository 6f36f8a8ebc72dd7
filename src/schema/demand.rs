//! `Demand`: routes, OD matrices and their options, sinks.

use crate::schema::definitions::LANE_BIASES;
use crate::schema::{AttributeDecl, ElementDecl, NodeType, Occurs, Particle, TextDecl};
use crate::values::ValueKind;

static TIME: NodeType = NodeType {
    name: "Time",
    attributes: &[AttributeDecl::required("Value", ValueKind::Duration)],
    content: &[],
    text: None,
};

pub static GLOBAL_TIME: NodeType = NodeType {
    name: "GlobalTime",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::complex(
        "Time",
        &TIME,
        Occurs::ONE_OR_MORE,
    ))],
    text: None,
};

pub static LANE_REFERENCE: NodeType = NodeType {
    name: "Lane",
    attributes: &[
        AttributeDecl::required("Link", ValueKind::Id),
        AttributeDecl::required("Lane", ValueKind::Id),
    ],
    content: &[],
    text: None,
};

pub static CATEGORY: NodeType = NodeType {
    name: "Category",
    attributes: &[AttributeDecl::required("Id", ValueKind::Id)],
    content: &[
        Particle::Element(ElementDecl::simple("GtuType", ValueKind::Id, Occurs::OPTIONAL)),
        Particle::Element(ElementDecl::simple("Route", ValueKind::Id, Occurs::OPTIONAL)),
        Particle::Element(ElementDecl::complex(
            "Lane",
            &LANE_REFERENCE,
            Occurs::OPTIONAL,
        )),
    ],
    text: None,
};

/// One demand level; the text is the flow, `Time` selects the global time
/// slice it applies from.
pub static LEVEL: NodeType = NodeType {
    name: "Level",
    attributes: &[AttributeDecl::optional("Time", ValueKind::Duration)],
    content: &[],
    text: Some(TextDecl {
        kind: ValueKind::Frequency,
    }),
};

pub static CELL: NodeType = NodeType {
    name: "Cell",
    attributes: &[
        AttributeDecl::required("Origin", ValueKind::Id),
        AttributeDecl::required("Destination", ValueKind::Id),
        AttributeDecl::optional("Category", ValueKind::Id),
        AttributeDecl::optional("Factor", ValueKind::PositiveFactor),
        AttributeDecl::optional("Interpolation", ValueKind::Interpolation),
    ],
    content: &[Particle::Element(ElementDecl::complex(
        "Level",
        &LEVEL,
        Occurs::MANY,
    ))],
    text: None,
};

pub static OD: NodeType = NodeType {
    name: "Od",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::defaulted("GlobalInterpolation", ValueKind::Interpolation, "LINEAR"),
        AttributeDecl::defaulted("GlobalFactor", ValueKind::PositiveFactor, "1.0"),
        AttributeDecl::optional("Options", ValueKind::Id),
    ],
    content: &[
        Particle::Element(ElementDecl::complex(
            "GlobalTime",
            &GLOBAL_TIME,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex("Category", &CATEGORY, Occurs::MANY)),
        Particle::Element(ElementDecl::complex("Cell", &CELL, Occurs::MANY)),
    ],
    text: None,
};

static GLOBAL: NodeType = NodeType::marker("Global");

static OD_OPTIONS_ITEM: NodeType = NodeType {
    name: "OdOptionsItem",
    attributes: &[],
    content: &[
        Particle::Choice {
            name: "Scope",
            occurs: Occurs::ONE,
            alternatives: &[
                ElementDecl::complex("Global", &GLOBAL, Occurs::ONE),
                ElementDecl::simple("LinkType", ValueKind::Id, Occurs::ONE),
                ElementDecl::simple("Origin", ValueKind::Id, Occurs::ONE),
                ElementDecl::complex("Lane", &LANE_REFERENCE, Occurs::ONE),
            ],
        },
        Particle::Element(ElementDecl::simple(
            "NoLaneChange",
            ValueKind::PositiveLength,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::simple(
            "HeadwayDist",
            ValueKind::String,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex(
            "LaneBiases",
            &LANE_BIASES,
            Occurs::OPTIONAL,
        )),
    ],
    text: None,
};

pub static OD_OPTIONS: NodeType = NodeType {
    name: "OdOptions",
    attributes: &[AttributeDecl::required("Id", ValueKind::Id)],
    content: &[Particle::Element(ElementDecl::complex(
        "OdOptionsItem",
        &OD_OPTIONS_ITEM,
        Occurs::ONE_OR_MORE,
    ))],
    text: None,
};

static ROUTE: NodeType = NodeType {
    name: "Route",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::required("GtuType", ValueKind::Id),
    ],
    content: &[Particle::Element(ElementDecl::simple(
        "Node",
        ValueKind::Id,
        Occurs::ONE_OR_MORE,
    ))],
    text: None,
};

static SHORTEST_ROUTE: NodeType = NodeType {
    name: "ShortestRoute",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::required("GtuType", ValueKind::Id),
    ],
    content: &[
        Particle::Element(ElementDecl::simple("From", ValueKind::Id, Occurs::ONE)),
        Particle::Element(ElementDecl::simple("Via", ValueKind::Id, Occurs::MANY)),
        Particle::Element(ElementDecl::simple("To", ValueKind::Id, Occurs::ONE)),
    ],
    text: None,
};

static SINK: NodeType = NodeType {
    name: "Sink",
    attributes: &[
        AttributeDecl::required("Link", ValueKind::Id),
        AttributeDecl::required("Lane", ValueKind::Id),
        AttributeDecl::required("Position", ValueKind::Length),
        AttributeDecl::optional("GtuType", ValueKind::Id),
    ],
    content: &[],
    text: None,
};

pub static DEMAND: NodeType = NodeType {
    name: "Demand",
    attributes: &[],
    content: &[Particle::Choice {
        name: "Elements",
        occurs: Occurs::MANY,
        alternatives: &[
            ElementDecl::complex("Route", &ROUTE, Occurs::ONE),
            ElementDecl::complex("ShortestRoute", &SHORTEST_ROUTE, Occurs::ONE),
            ElementDecl::complex("Od", &OD, Occurs::ONE),
            ElementDecl::complex("OdOptions", &OD_OPTIONS, Occurs::ONE),
            ElementDecl::complex("Sink", &SINK, Occurs::ONE),
        ],
    }],
    text: None,
};
