//! `Network`: nodes, links with their geometry, centroids and connectors.

use crate::schema::definitions::ROAD_LAYOUT;
use crate::schema::{AttributeDecl, ElementDecl, NodeType, Occurs, Particle};
use crate::values::ValueKind;

pub static NODE: NodeType = NodeType {
    name: "Node",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::required("Coordinate", ValueKind::String),
        AttributeDecl::optional("Direction", ValueKind::Angle),
    ],
    content: &[],
    text: None,
};

pub static DEVIATION_AND_ANGLE: NodeType = NodeType {
    name: "DeviationAndAngle",
    attributes: &[],
    content: &[
        Particle::Element(
            ElementDecl::simple("MaxDeviation", ValueKind::PositiveLength, Occurs::OPTIONAL)
                .with_default("0.05m"),
        ),
        Particle::Element(
            ElementDecl::simple("MaxAngle", ValueKind::Angle, Occurs::OPTIONAL)
                .with_default("1.0deg"),
        ),
    ],
    text: None,
};

/// Polyline approximation of a curved link.
pub static FLATTENER_TYPE: NodeType = NodeType {
    name: "FlattenerType",
    attributes: &[],
    content: &[Particle::Choice {
        name: "Flattener",
        occurs: Occurs::ONE,
        alternatives: &[
            ElementDecl::simple("NumSegments", ValueKind::PositiveInteger, Occurs::ONE)
                .with_default("64"),
            ElementDecl::complex("DeviationAndAngle", &DEVIATION_AND_ANGLE, Occurs::ONE),
        ],
    }],
    text: None,
};

static BEZIER: NodeType = NodeType {
    name: "Bezier",
    attributes: &[
        AttributeDecl::optional("Shape", ValueKind::PositiveDouble),
        AttributeDecl::defaulted("Weighted", ValueKind::Boolean, "false"),
    ],
    content: &[Particle::Element(ElementDecl::complex(
        "Flattener",
        &FLATTENER_TYPE,
        Occurs::OPTIONAL,
    ))],
    text: None,
};

static ARC: NodeType = NodeType {
    name: "Arc",
    attributes: &[
        AttributeDecl::required("Radius", ValueKind::PositiveLength),
        AttributeDecl::required("Direction", ValueKind::String),
    ],
    content: &[Particle::Element(ElementDecl::complex(
        "Flattener",
        &FLATTENER_TYPE,
        Occurs::OPTIONAL,
    ))],
    text: None,
};

static INTERPOLATED: NodeType = NodeType::marker("Interpolated");
static STRAIGHT: NodeType = NodeType::marker("Straight");

static CLOTHOID: NodeType = NodeType {
    name: "Clothoid",
    attributes: &[],
    content: &[
        Particle::Choice {
            name: "Definition",
            occurs: Occurs::OPTIONAL,
            alternatives: &[
                ElementDecl::complex("Interpolated", &INTERPOLATED, Occurs::ONE),
                ElementDecl::simple("Length", ValueKind::PositiveLength, Occurs::ONE),
                ElementDecl::simple("A", ValueKind::PositiveLength, Occurs::ONE),
            ],
        },
        Particle::Element(ElementDecl::complex(
            "Flattener",
            &FLATTENER_TYPE,
            Occurs::OPTIONAL,
        )),
    ],
    text: None,
};

static POLYLINE: NodeType = NodeType {
    name: "Polyline",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::simple(
        "Coordinate",
        ValueKind::String,
        Occurs::ONE_OR_MORE,
    ))],
    text: None,
};

pub static LINK: NodeType = NodeType {
    name: "Link",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::required("Type", ValueKind::Id),
        AttributeDecl::required("NodeStart", ValueKind::Id),
        AttributeDecl::required("NodeEnd", ValueKind::Id),
        AttributeDecl::optional("OffsetStart", ValueKind::Length),
        AttributeDecl::optional("OffsetEnd", ValueKind::Length),
    ],
    content: &[
        Particle::Choice {
            name: "Geometry",
            occurs: Occurs::ONE,
            alternatives: &[
                ElementDecl::complex("Straight", &STRAIGHT, Occurs::ONE),
                ElementDecl::complex("Bezier", &BEZIER, Occurs::ONE),
                ElementDecl::complex("Clothoid", &CLOTHOID, Occurs::ONE),
                ElementDecl::complex("Arc", &ARC, Occurs::ONE),
                ElementDecl::complex("Polyline", &POLYLINE, Occurs::ONE),
            ],
        },
        Particle::Choice {
            name: "Layout",
            occurs: Occurs::OPTIONAL,
            alternatives: &[
                ElementDecl::complex("RoadLayout", &ROAD_LAYOUT, Occurs::ONE),
                ElementDecl::simple("DefinedLayout", ValueKind::Id, Occurs::ONE),
            ],
        },
    ],
    text: None,
};

static CENTROID: NodeType = NodeType {
    name: "Centroid",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::required("Coordinate", ValueKind::String),
    ],
    content: &[],
    text: None,
};

static CONNECTOR: NodeType = NodeType {
    name: "Connector",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::required("Centroid", ValueKind::Id),
        AttributeDecl::required("Node", ValueKind::Id),
        AttributeDecl::required("Outbound", ValueKind::Boolean),
        AttributeDecl::required("LinkType", ValueKind::Id),
        AttributeDecl::optional("DemandWeight", ValueKind::PositiveDouble),
    ],
    content: &[],
    text: None,
};

pub static NETWORK: NodeType = NodeType {
    name: "Network",
    attributes: &[],
    content: &[Particle::Choice {
        name: "Elements",
        occurs: Occurs::MANY,
        alternatives: &[
            ElementDecl::complex("Node", &NODE, Occurs::ONE),
            ElementDecl::complex("Link", &LINK, Occurs::ONE),
            ElementDecl::complex("Centroid", &CENTROID, Occurs::ONE),
            ElementDecl::complex("Connector", &CONNECTOR, Occurs::ONE),
        ],
    }],
    text: None,
};
