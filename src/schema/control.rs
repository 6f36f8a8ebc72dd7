//! `Control`: fixed time and TrafCod traffic light controllers.

use crate::schema::{AttributeDecl, ElementDecl, NodeType, Occurs, Particle, TextDecl};
use crate::values::ValueKind;

pub static TRAFFIC_LIGHT: NodeType = NodeType {
    name: "TrafficLight",
    attributes: &[
        AttributeDecl::required("Link", ValueKind::Id),
        AttributeDecl::required("Lane", ValueKind::Id),
        AttributeDecl::required("TrafficLightId", ValueKind::Id),
    ],
    content: &[],
    text: None,
};

pub static SIGNAL_GROUP: NodeType = NodeType {
    name: "SignalGroup",
    attributes: &[AttributeDecl::required("Id", ValueKind::Id)],
    content: &[Particle::Element(ElementDecl::complex(
        "TrafficLight",
        &TRAFFIC_LIGHT,
        Occurs::ONE_OR_MORE,
    ))],
    text: None,
};

pub static CYCLE: NodeType = NodeType {
    name: "Cycle",
    attributes: &[
        AttributeDecl::required("SignalGroupId", ValueKind::Id),
        AttributeDecl::required("Offset", ValueKind::Duration),
        AttributeDecl::optional("PreGreen", ValueKind::Duration),
        AttributeDecl::required("Green", ValueKind::Duration),
        AttributeDecl::required("Yellow", ValueKind::Duration),
    ],
    content: &[],
    text: None,
};

pub static FIXED_TIME: NodeType = NodeType {
    name: "FixedTime",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::required("CycleTime", ValueKind::PositiveDuration),
        AttributeDecl::defaulted("Offset", ValueKind::Duration, "0.0 s"),
    ],
    content: &[
        Particle::Element(ElementDecl::complex(
            "SignalGroup",
            &SIGNAL_GROUP,
            Occurs::MANY,
        )),
        Particle::Element(ElementDecl::complex("Cycle", &CYCLE, Occurs::ONE_OR_MORE)),
    ],
    text: None,
};

/// Embedded TrafCod program text.
pub static PROGRAM: NodeType = NodeType {
    name: "Program",
    attributes: &[AttributeDecl::defaulted(
        "Space",
        ValueKind::Space,
        "preserve",
    )],
    content: &[],
    text: Some(TextDecl {
        kind: ValueKind::Text,
    }),
};

static MAP: NodeType = NodeType {
    name: "Map",
    attributes: &[
        AttributeDecl::optional("Type", ValueKind::GraphicsType),
        AttributeDecl::optional("Encoding", ValueKind::Encoding),
        AttributeDecl::defaulted("Space", ValueKind::Space, "preserve"),
    ],
    content: &[],
    text: Some(TextDecl {
        kind: ValueKind::Text,
    }),
};

static COORDINATES: NodeType = NodeType {
    name: "Coordinates",
    attributes: &[AttributeDecl::defaulted(
        "Space",
        ValueKind::Space,
        "preserve",
    )],
    content: &[],
    text: Some(TextDecl {
        kind: ValueKind::Text,
    }),
};

pub static CONSOLE: NodeType = NodeType {
    name: "Console",
    attributes: &[],
    content: &[
        Particle::Choice {
            name: "Map",
            occurs: Occurs::ONE,
            alternatives: &[
                ElementDecl::complex("Map", &MAP, Occurs::ONE),
                ElementDecl::simple("MapFile", ValueKind::AnyUri, Occurs::ONE),
            ],
        },
        Particle::Choice {
            name: "Coordinates",
            occurs: Occurs::ONE,
            alternatives: &[
                ElementDecl::complex("Coordinates", &COORDINATES, Occurs::ONE),
                ElementDecl::simple("CoordinatesFile", ValueKind::AnyUri, Occurs::ONE),
            ],
        },
    ],
    text: None,
};

pub static TRAF_COD: NodeType = NodeType {
    name: "TrafCod",
    attributes: &[AttributeDecl::required("Id", ValueKind::Id)],
    content: &[
        Particle::Choice {
            name: "Program",
            occurs: Occurs::ONE,
            alternatives: &[
                ElementDecl::complex("Program", &PROGRAM, Occurs::ONE),
                ElementDecl::simple("ProgramFile", ValueKind::AnyUri, Occurs::ONE),
            ],
        },
        Particle::Element(ElementDecl::complex("Console", &CONSOLE, Occurs::ONE)),
    ],
    text: None,
};

pub static CONTROL: NodeType = NodeType {
    name: "Control",
    attributes: &[],
    content: &[Particle::Choice {
        name: "Controllers",
        occurs: Occurs::MANY,
        alternatives: &[
            ElementDecl::complex("FixedTime", &FIXED_TIME, Occurs::ONE),
            ElementDecl::complex("TrafCod", &TRAF_COD, Occurs::ONE),
        ],
    }],
    text: None,
};
