//! `Scenarios`, `Run` and `Animation`.

use crate::schema::models::PARAMETERS;
use crate::schema::{AttributeDecl, ElementDecl, NodeType, Occurs, Particle};
use crate::values::ValueKind;

static INPUT_PARAMETERS: NodeType = NodeType {
    name: "InputParameters",
    attributes: &[],
    content: &[Particle::Choice {
        name: "Parameters",
        occurs: Occurs::MANY,
        alternatives: &PARAMETERS,
    }],
    text: None,
};

static SCENARIO: NodeType = NodeType {
    name: "Scenario",
    attributes: &[AttributeDecl::required("Id", ValueKind::Id)],
    content: &[Particle::Element(ElementDecl::complex(
        "InputParameters",
        &INPUT_PARAMETERS,
        Occurs::OPTIONAL,
    ))],
    text: None,
};

pub static SCENARIOS: NodeType = NodeType {
    name: "Scenarios",
    attributes: &[],
    content: &[
        Particle::Element(ElementDecl::complex(
            "DefaultInputParameters",
            &INPUT_PARAMETERS,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex("Scenario", &SCENARIO, Occurs::MANY)),
    ],
    text: None,
};

pub static REPLICATION: NodeType = NodeType {
    name: "Replication",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::NonNegativeInteger),
        AttributeDecl::required("Seed", ValueKind::Integer),
    ],
    content: &[],
    text: None,
};

pub static RANDOM_STREAM: NodeType = NodeType {
    name: "RandomStream",
    attributes: &[AttributeDecl::required("Id", ValueKind::Id)],
    content: &[Particle::Element(ElementDecl::complex(
        "Replication",
        &REPLICATION,
        Occurs::MANY,
    ))],
    text: None,
};

static RANDOM_STREAMS: NodeType = NodeType {
    name: "RandomStreams",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::complex(
        "RandomStream",
        &RANDOM_STREAM,
        Occurs::ONE_OR_MORE,
    ))],
    text: None,
};

pub static RUN: NodeType = NodeType {
    name: "Run",
    attributes: &[],
    content: &[
        Particle::Element(
            ElementDecl::simple("StartTime", ValueKind::Duration, Occurs::OPTIONAL)
                .with_default("0s"),
        ),
        Particle::Element(
            ElementDecl::simple("WarmupPeriod", ValueKind::Duration, Occurs::OPTIONAL)
                .with_default("0s"),
        ),
        Particle::Element(
            ElementDecl::simple("RunLength", ValueKind::PositiveDuration, Occurs::OPTIONAL)
                .with_default("1h"),
        ),
        Particle::Element(
            ElementDecl::simple(
                "NumberReplications",
                ValueKind::PositiveInteger,
                Occurs::OPTIONAL,
            )
            .with_default("1"),
        ),
        Particle::Element(ElementDecl::complex(
            "RandomStreams",
            &RANDOM_STREAMS,
            Occurs::OPTIONAL,
        )),
    ],
    text: None,
};

static GTU_COLORERS: NodeType = NodeType {
    name: "GtuColorers",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::simple(
        "Colorer",
        ValueKind::GtuColorer,
        Occurs::ONE_OR_MORE,
    ))],
    text: None,
};

static LINK_TYPE_ANIMATION: NodeType = NodeType {
    name: "LinkType",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::defaulted("Color", ValueKind::Color, "GRAY"),
    ],
    content: &[],
    text: None,
};

pub static ANIMATION: NodeType = NodeType {
    name: "Animation",
    attributes: &[],
    content: &[
        Particle::Element(ElementDecl::complex(
            "GtuColorers",
            &GTU_COLORERS,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex(
            "LinkType",
            &LINK_TYPE_ANIMATION,
            Occurs::MANY,
        )),
    ],
    text: None,
};
