//! `Definitions`: GTU, link, lane and detector types, GTU templates, lane
//! biases, road layouts and parameter types.

use crate::schema::{AttributeDecl, ElementDecl, NodeType, Occurs, Particle};
use crate::values::ValueKind;

/// `xi:include`, kept as a node when no resolver expands it.
pub static INCLUDE: NodeType = NodeType {
    name: "include",
    attributes: &[
        AttributeDecl::required("href", ValueKind::AnyUri),
        AttributeDecl::optional("parse", ValueKind::String),
        AttributeDecl::optional("xpointer", ValueKind::String),
    ],
    content: &[],
    text: None,
};

static COMPATIBILITY: NodeType = NodeType {
    name: "Compatibility",
    attributes: &[AttributeDecl::required("GtuType", ValueKind::Id)],
    content: &[],
    text: None,
};

pub static GTU_TYPE: NodeType = NodeType {
    name: "GtuType",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::optional("Parent", ValueKind::Id),
        AttributeDecl::defaulted("Default", ValueKind::Boolean, "false"),
    ],
    content: &[],
    text: None,
};

pub static GTU_TYPES: NodeType = NodeType {
    name: "GtuTypes",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::complex(
        "GtuType",
        &GTU_TYPE,
        Occurs::MANY,
    ))],
    text: None,
};

static CONSTANT: NodeType = NodeType {
    name: "Constant",
    attributes: &[AttributeDecl::required("C", ValueKind::Double)],
    content: &[],
    text: None,
};

static EXPONENTIAL: NodeType = NodeType {
    name: "Exponential",
    attributes: &[AttributeDecl::required("Lambda", ValueKind::PositiveDouble)],
    content: &[],
    text: None,
};

static TRIANGULAR: NodeType = NodeType {
    name: "Triangular",
    attributes: &[
        AttributeDecl::required("Min", ValueKind::Double),
        AttributeDecl::required("Mode", ValueKind::Double),
        AttributeDecl::required("Max", ValueKind::Double),
    ],
    content: &[],
    text: None,
};

static NORMAL: NodeType = NodeType {
    name: "Normal",
    attributes: &[
        AttributeDecl::required("Mu", ValueKind::Double),
        AttributeDecl::required("Sigma", ValueKind::PositiveDouble),
    ],
    content: &[],
    text: None,
};

static NORMAL_TRUNC: NodeType = NodeType {
    name: "NormalTrunc",
    attributes: &[
        AttributeDecl::required("Mu", ValueKind::Double),
        AttributeDecl::required("Sigma", ValueKind::PositiveDouble),
        AttributeDecl::required("Min", ValueKind::Double),
        AttributeDecl::required("Max", ValueKind::Double),
    ],
    content: &[],
    text: None,
};

static UNIFORM: NodeType = NodeType {
    name: "Uniform",
    attributes: &[
        AttributeDecl::required("Min", ValueKind::Double),
        AttributeDecl::required("Max", ValueKind::Double),
    ],
    content: &[],
    text: None,
};

static LOG_NORMAL: NodeType = NodeType {
    name: "LogNormal",
    attributes: &[
        AttributeDecl::required("Mu", ValueKind::Double),
        AttributeDecl::required("Sigma", ValueKind::PositiveDouble),
    ],
    content: &[],
    text: None,
};

static DISTRIBUTIONS: [ElementDecl; 7] = [
    ElementDecl::complex("Constant", &CONSTANT, Occurs::ONE),
    ElementDecl::complex("Exponential", &EXPONENTIAL, Occurs::ONE),
    ElementDecl::complex("Triangular", &TRIANGULAR, Occurs::ONE),
    ElementDecl::complex("Normal", &NORMAL, Occurs::ONE),
    ElementDecl::complex("NormalTrunc", &NORMAL_TRUNC, Occurs::ONE),
    ElementDecl::complex("Uniform", &UNIFORM, Occurs::ONE),
    ElementDecl::complex("LogNormal", &LOG_NORMAL, Occurs::ONE),
];

/// A unitless continuous distribution.
pub static DISTRIBUTION: NodeType = NodeType {
    name: "Distribution",
    attributes: &[AttributeDecl::optional("RandomStream", ValueKind::Id)],
    content: &[Particle::Choice {
        name: "Distribution",
        occurs: Occurs::ONE,
        alternatives: &DISTRIBUTIONS,
    }],
    text: None,
};

pub static LENGTH_DISTRIBUTION: NodeType = NodeType {
    name: "LengthDist",
    attributes: &[
        AttributeDecl::defaulted("LengthUnit", ValueKind::String, "m"),
        AttributeDecl::optional("RandomStream", ValueKind::Id),
    ],
    content: &[Particle::Choice {
        name: "Distribution",
        occurs: Occurs::ONE,
        alternatives: &DISTRIBUTIONS,
    }],
    text: None,
};

pub static SPEED_DISTRIBUTION: NodeType = NodeType {
    name: "SpeedDist",
    attributes: &[
        AttributeDecl::defaulted("SpeedUnit", ValueKind::String, "km/h"),
        AttributeDecl::optional("RandomStream", ValueKind::Id),
    ],
    content: &[Particle::Choice {
        name: "Distribution",
        occurs: Occurs::ONE,
        alternatives: &DISTRIBUTIONS,
    }],
    text: None,
};

pub static ACCELERATION_DISTRIBUTION: NodeType = NodeType {
    name: "AccelerationDist",
    attributes: &[
        AttributeDecl::defaulted("AccelerationUnit", ValueKind::String, "m/s^2"),
        AttributeDecl::optional("RandomStream", ValueKind::Id),
    ],
    content: &[Particle::Choice {
        name: "Distribution",
        occurs: Occurs::ONE,
        alternatives: &DISTRIBUTIONS,
    }],
    text: None,
};

pub static GTU_TEMPLATE: NodeType = NodeType {
    name: "GtuTemplate",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::required("GtuType", ValueKind::Id),
        AttributeDecl::defaulted("Default", ValueKind::Boolean, "false"),
    ],
    content: &[
        Particle::Element(ElementDecl::complex(
            "LengthDist",
            &LENGTH_DISTRIBUTION,
            Occurs::ONE,
        )),
        Particle::Element(ElementDecl::complex(
            "WidthDist",
            &LENGTH_DISTRIBUTION,
            Occurs::ONE,
        )),
        Particle::Element(ElementDecl::complex(
            "MaxSpeedDist",
            &SPEED_DISTRIBUTION,
            Occurs::ONE,
        )),
        Particle::Element(ElementDecl::complex(
            "MaxAccelerationDist",
            &ACCELERATION_DISTRIBUTION,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex(
            "MaxDecelerationDist",
            &ACCELERATION_DISTRIBUTION,
            Occurs::OPTIONAL,
        )),
    ],
    text: None,
};

pub static GTU_TEMPLATES: NodeType = NodeType {
    name: "GtuTemplates",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::complex(
        "GtuTemplate",
        &GTU_TEMPLATE,
        Occurs::MANY,
    ))],
    text: None,
};

/// Shape shared by link, lane and detector types.
pub static COMPATIBLE_TYPE: NodeType = NodeType {
    name: "CompatibleType",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::optional("Parent", ValueKind::Id),
        AttributeDecl::defaulted("Default", ValueKind::Boolean, "false"),
    ],
    content: &[Particle::Element(ElementDecl::complex(
        "Compatibility",
        &COMPATIBILITY,
        Occurs::MANY,
    ))],
    text: None,
};

pub static LINK_TYPES: NodeType = NodeType {
    name: "LinkTypes",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::complex(
        "LinkType",
        &COMPATIBLE_TYPE,
        Occurs::MANY,
    ))],
    text: None,
};

pub static LANE_TYPES: NodeType = NodeType {
    name: "LaneTypes",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::complex(
        "LaneType",
        &COMPATIBLE_TYPE,
        Occurs::MANY,
    ))],
    text: None,
};

pub static DETECTOR_TYPES: NodeType = NodeType {
    name: "DetectorTypes",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::complex(
        "DetectorType",
        &COMPATIBLE_TYPE,
        Occurs::MANY,
    ))],
    text: None,
};

static RIGHT_SPEED: [ElementDecl; 1] =
    [ElementDecl::simple("RightSpeed", ValueKind::Speed, Occurs::ONE)];

pub static LANE_BIAS: NodeType = NodeType {
    name: "LaneBias",
    attributes: &[
        AttributeDecl::required("GtuType", ValueKind::Id),
        AttributeDecl::required("Bias", ValueKind::Fraction),
        AttributeDecl::optional("StickyLanes", ValueKind::PositiveInteger),
    ],
    content: &[Particle::Choice {
        name: "RoadPosition",
        occurs: Occurs::OPTIONAL,
        alternatives: &[
            ElementDecl::simple("FromLeft", ValueKind::Fraction, Occurs::ONE),
            ElementDecl::simple("FromRight", ValueKind::Fraction, Occurs::ONE),
            ElementDecl::simple("LeftSpeed", ValueKind::Speed, Occurs::ONE)
                .followed_by(&RIGHT_SPEED),
        ],
    }],
    text: None,
};

pub static LANE_BIASES: NodeType = NodeType {
    name: "LaneBiases",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::complex(
        "LaneBias",
        &LANE_BIAS,
        Occurs::MANY,
    ))],
    text: None,
};

static LANE: NodeType = NodeType {
    name: "Lane",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::required("LaneType", ValueKind::Id),
        AttributeDecl::required("CenterOffset", ValueKind::Length),
        AttributeDecl::required("Width", ValueKind::PositiveLength),
    ],
    content: &[],
    text: None,
};

static STRIPE: NodeType = NodeType {
    name: "Stripe",
    attributes: &[
        AttributeDecl::required("Type", ValueKind::Id),
        AttributeDecl::required("CenterOffset", ValueKind::Length),
    ],
    content: &[],
    text: None,
};

static SHOULDER: NodeType = NodeType {
    name: "Shoulder",
    attributes: &[
        AttributeDecl::required("CenterOffset", ValueKind::Length),
        AttributeDecl::required("Width", ValueKind::PositiveLength),
    ],
    content: &[],
    text: None,
};

/// Cross section of a link; also used inline by `Link`.
pub static ROAD_LAYOUT: NodeType = NodeType {
    name: "RoadLayout",
    attributes: &[
        AttributeDecl::optional("Id", ValueKind::Id),
        AttributeDecl::optional("LinkType", ValueKind::Id),
    ],
    content: &[Particle::Choice {
        name: "CrossSection",
        occurs: Occurs::ONE_OR_MORE,
        alternatives: &[
            ElementDecl::complex("Stripe", &STRIPE, Occurs::ONE),
            ElementDecl::complex("Lane", &LANE, Occurs::ONE),
            ElementDecl::complex("Shoulder", &SHOULDER, Occurs::ONE),
        ],
    }],
    text: None,
};

pub static ROAD_LAYOUTS: NodeType = NodeType {
    name: "RoadLayouts",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::complex(
        "RoadLayout",
        &ROAD_LAYOUT,
        Occurs::MANY,
    ))],
    text: None,
};

static PARAMETER_TYPE: NodeType = NodeType {
    name: "ParameterType",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::optional("Description", ValueKind::String),
        AttributeDecl::optional("Default", ValueKind::String),
    ],
    content: &[],
    text: None,
};

pub static PARAMETER_TYPES: NodeType = NodeType {
    name: "ParameterTypes",
    attributes: &[],
    content: &[Particle::Choice {
        name: "ParameterType",
        occurs: Occurs::MANY,
        alternatives: &[
            ElementDecl::complex("Duration", &PARAMETER_TYPE, Occurs::ONE),
            ElementDecl::complex("Length", &PARAMETER_TYPE, Occurs::ONE),
            ElementDecl::complex("Speed", &PARAMETER_TYPE, Occurs::ONE),
            ElementDecl::complex("Acceleration", &PARAMETER_TYPE, Occurs::ONE),
            ElementDecl::complex("Frequency", &PARAMETER_TYPE, Occurs::ONE),
            ElementDecl::complex("Double", &PARAMETER_TYPE, Occurs::ONE),
            ElementDecl::complex("Fraction", &PARAMETER_TYPE, Occurs::ONE),
            ElementDecl::complex("Integer", &PARAMETER_TYPE, Occurs::ONE),
            ElementDecl::complex("Boolean", &PARAMETER_TYPE, Occurs::ONE),
            ElementDecl::complex("String", &PARAMETER_TYPE, Occurs::ONE),
            ElementDecl::complex("Class", &PARAMETER_TYPE, Occurs::ONE),
        ],
    }],
    text: None,
};

pub static DEFINITIONS: NodeType = NodeType {
    name: "Definitions",
    attributes: &[],
    content: &[Particle::Choice {
        name: "Sections",
        occurs: Occurs::MANY,
        alternatives: &[
            ElementDecl::complex("include", &INCLUDE, Occurs::ONE).with_prefix("xi"),
            ElementDecl::complex("GtuTypes", &GTU_TYPES, Occurs::ONE),
            ElementDecl::complex("GtuTemplates", &GTU_TEMPLATES, Occurs::ONE),
            ElementDecl::complex("LinkTypes", &LINK_TYPES, Occurs::ONE),
            ElementDecl::complex("LaneTypes", &LANE_TYPES, Occurs::ONE),
            ElementDecl::complex("LaneBiases", &LANE_BIASES, Occurs::ONE),
            ElementDecl::complex("DetectorTypes", &DETECTOR_TYPES, Occurs::ONE),
            ElementDecl::complex("RoadLayouts", &ROAD_LAYOUTS, Occurs::ONE),
            ElementDecl::complex("ParameterTypes", &PARAMETER_TYPES, Occurs::ONE),
        ],
    }],
    text: None,
};
