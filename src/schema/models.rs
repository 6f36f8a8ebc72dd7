//! `Models`: behavioural model parameters, perception and tactical planners.

use crate::schema::{AttributeDecl, ElementDecl, NodeType, Occurs, Particle, TextDecl};
use crate::values::ValueKind;

macro_rules! parameter {
    ($name:ident, $element:literal, $kind:expr) => {
        static $name: NodeType = NodeType {
            name: $element,
            attributes: &[AttributeDecl::required("Id", ValueKind::Id)],
            content: &[],
            text: Some(TextDecl { kind: $kind }),
        };
    };
}

parameter!(DURATION_PARAMETER, "Duration", ValueKind::Duration);
parameter!(LENGTH_PARAMETER, "Length", ValueKind::Length);
parameter!(SPEED_PARAMETER, "Speed", ValueKind::Speed);
parameter!(ACCELERATION_PARAMETER, "Acceleration", ValueKind::Acceleration);
parameter!(FREQUENCY_PARAMETER, "Frequency", ValueKind::Frequency);
parameter!(LINEAR_DENSITY_PARAMETER, "LinearDensity", ValueKind::LinearDensity);
parameter!(DOUBLE_PARAMETER, "Double", ValueKind::Double);
parameter!(FRACTION_PARAMETER, "Fraction", ValueKind::Fraction);
parameter!(INTEGER_PARAMETER, "Integer", ValueKind::Integer);
parameter!(BOOLEAN_PARAMETER, "Boolean", ValueKind::Boolean);
parameter!(STRING_PARAMETER, "String", ValueKind::String);
parameter!(CLASS_PARAMETER, "Class", ValueKind::ClassName);

/// Typed parameter values, shared by model parameters and scenario input
/// parameters.
pub(crate) static PARAMETERS: [ElementDecl; 12] = [
    ElementDecl::complex("Duration", &DURATION_PARAMETER, Occurs::ONE),
    ElementDecl::complex("Length", &LENGTH_PARAMETER, Occurs::ONE),
    ElementDecl::complex("Speed", &SPEED_PARAMETER, Occurs::ONE),
    ElementDecl::complex("Acceleration", &ACCELERATION_PARAMETER, Occurs::ONE),
    ElementDecl::complex("Frequency", &FREQUENCY_PARAMETER, Occurs::ONE),
    ElementDecl::complex("LinearDensity", &LINEAR_DENSITY_PARAMETER, Occurs::ONE),
    ElementDecl::complex("Double", &DOUBLE_PARAMETER, Occurs::ONE),
    ElementDecl::complex("Fraction", &FRACTION_PARAMETER, Occurs::ONE),
    ElementDecl::complex("Integer", &INTEGER_PARAMETER, Occurs::ONE),
    ElementDecl::complex("Boolean", &BOOLEAN_PARAMETER, Occurs::ONE),
    ElementDecl::complex("String", &STRING_PARAMETER, Occurs::ONE),
    ElementDecl::complex("Class", &CLASS_PARAMETER, Occurs::ONE),
];

static MODEL_PARAMETERS: NodeType = NodeType {
    name: "ModelParameters",
    attributes: &[],
    content: &[Particle::Choice {
        name: "Parameters",
        occurs: Occurs::MANY,
        alternatives: &PARAMETERS,
    }],
    text: None,
};

static PERCEIVED: NodeType = NodeType {
    name: "Perceived",
    attributes: &[],
    content: &[
        Particle::Element(ElementDecl::simple(
            "Estimation",
            ValueKind::Estimation,
            Occurs::ONE,
        )),
        Particle::Element(ElementDecl::simple(
            "Anticipation",
            ValueKind::Anticipation,
            Occurs::ONE,
        )),
    ],
    text: None,
};

static WRAP: NodeType = NodeType::marker("Wrap");

static HEADWAY_GTU_TYPE: NodeType = NodeType {
    name: "HeadwayGtuType",
    attributes: &[],
    content: &[Particle::Choice {
        name: "HeadwayGtuType",
        occurs: Occurs::ONE,
        alternatives: &[
            ElementDecl::complex("Wrap", &WRAP, Occurs::ONE),
            ElementDecl::complex("Perceived", &PERCEIVED, Occurs::ONE),
        ],
    }],
    text: None,
};

static FULLER: NodeType = NodeType {
    name: "Fuller",
    attributes: &[],
    content: &[
        Particle::Element(ElementDecl::simple(
            "Task",
            ValueKind::ClassName,
            Occurs::MANY,
        )),
        Particle::Element(ElementDecl::simple(
            "TaskManager",
            ValueKind::TaskManager,
            Occurs::OPTIONAL,
        )),
    ],
    text: None,
};

static MENTAL: NodeType = NodeType {
    name: "Mental",
    attributes: &[],
    content: &[Particle::Choice {
        name: "Mental",
        occurs: Occurs::ONE,
        alternatives: &[ElementDecl::complex("Fuller", &FULLER, Occurs::ONE)],
    }],
    text: None,
};

static EGO: NodeType = NodeType::marker("Ego");
static INFRASTRUCTURE: NodeType = NodeType::marker("Infrastructure");
static NEIGHBORS: NodeType = NodeType::marker("Neighbors");
static INTERSECTION: NodeType = NodeType::marker("Intersection");
static BUS_STOP: NodeType = NodeType::marker("BusStop");
static TRAFFIC: NodeType = NodeType::marker("Traffic");

static PERCEPTION_CATEGORIES: NodeType = NodeType {
    name: "Categories",
    attributes: &[],
    content: &[Particle::Choice {
        name: "Category",
        occurs: Occurs::MANY,
        alternatives: &[
            ElementDecl::complex("Ego", &EGO, Occurs::ONE),
            ElementDecl::complex("Infrastructure", &INFRASTRUCTURE, Occurs::ONE),
            ElementDecl::complex("Neighbors", &NEIGHBORS, Occurs::ONE),
            ElementDecl::complex("Intersection", &INTERSECTION, Occurs::ONE),
            ElementDecl::complex("BusStop", &BUS_STOP, Occurs::ONE),
            ElementDecl::complex("Traffic", &TRAFFIC, Occurs::ONE),
        ],
    }],
    text: None,
};

static PERCEPTION: NodeType = NodeType {
    name: "Perception",
    attributes: &[],
    content: &[
        Particle::Element(ElementDecl::complex(
            "Categories",
            &PERCEPTION_CATEGORIES,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex(
            "HeadwayGtuType",
            &HEADWAY_GTU_TYPE,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex("Mental", &MENTAL, Occurs::OPTIONAL)),
    ],
    text: None,
};

static INCENTIVES: NodeType = NodeType {
    name: "Incentives",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::simple(
        "Incentive",
        ValueKind::Incentive,
        Occurs::MANY,
    ))],
    text: None,
};

static LMRS: NodeType = NodeType {
    name: "Lmrs",
    attributes: &[],
    content: &[
        Particle::Element(
            ElementDecl::simple("Synchronization", ValueKind::String, Occurs::OPTIONAL)
                .with_default("PASSIVE"),
        ),
        Particle::Element(
            ElementDecl::simple("Cooperation", ValueKind::String, Occurs::OPTIONAL)
                .with_default("PASSIVE"),
        ),
        Particle::Element(ElementDecl::simple(
            "GapAcceptance",
            ValueKind::String,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::simple(
            "Tailgating",
            ValueKind::String,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex(
            "MandatoryIncentives",
            &INCENTIVES,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex(
            "VoluntaryIncentives",
            &INCENTIVES,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex(
            "Perception",
            &PERCEPTION,
            Occurs::OPTIONAL,
        )),
    ],
    text: None,
};

static TACTICAL_PLANNER: NodeType = NodeType {
    name: "TacticalPlanner",
    attributes: &[],
    content: &[Particle::Choice {
        name: "TacticalPlanner",
        occurs: Occurs::ONE,
        alternatives: &[ElementDecl::complex("Lmrs", &LMRS, Occurs::ONE)],
    }],
    text: None,
};

pub static MODEL: NodeType = NodeType {
    name: "Model",
    attributes: &[
        AttributeDecl::required("Id", ValueKind::Id),
        AttributeDecl::optional("Parent", ValueKind::Id),
        AttributeDecl::optional("GtuType", ValueKind::Id),
    ],
    content: &[
        Particle::Element(ElementDecl::complex(
            "ModelParameters",
            &MODEL_PARAMETERS,
            Occurs::OPTIONAL,
        )),
        Particle::Element(ElementDecl::complex(
            "TacticalPlanner",
            &TACTICAL_PLANNER,
            Occurs::OPTIONAL,
        )),
    ],
    text: None,
};

pub static MODELS: NodeType = NodeType {
    name: "Models",
    attributes: &[],
    content: &[Particle::Element(ElementDecl::complex(
        "Model",
        &MODEL,
        Occurs::MANY,
    ))],
    text: None,
};
