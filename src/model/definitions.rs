//! Bindings for the `Definitions` section.

use crate::model::{FromNode, attr, children, id_attr, opt_attr, opt_id_attr, value};
use crate::node::{Child, ChildContent, ElementPath, Node};
use crate::schema::{COMPATIBLE_TYPE, GTU_TEMPLATE, GTU_TYPE, INCLUDE, LANE_BIAS, NodeType};
use crate::values::{Expr, Speed};
use crate::xml::DocumentError;

/// One entry of the `Definitions` sequence, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum DefinitionsSection {
    /// An `xi:include` that was not expanded while parsing.
    Include { href: String },
    GtuTypes(Vec<GtuType>),
    GtuTemplates(Vec<GtuTemplate>),
    LinkTypes(Vec<CompatibleType>),
    LaneTypes(Vec<CompatibleType>),
    LaneBiases(Vec<LaneBias>),
    DetectorTypes(Vec<CompatibleType>),
    RoadLayouts(Node),
    ParameterTypes(Node),
}

impl DefinitionsSection {
    /// Read every populated alternative of the `Definitions` node.
    pub fn read_all(definitions: &Node) -> Result<Vec<Self>, DocumentError> {
        definitions.choices("Sections").map(Self::from_child).collect()
    }

    fn from_child(child: &Child) -> Result<Self, DocumentError> {
        let ChildContent::Node(node) = &child.content else {
            return Err(DocumentError::violation(
                ElementPath::root(child.name()),
                "expected an element section",
            ));
        };
        let section = match child.name() {
            "include" => {
                let include = Include::from_node(node)?;
                DefinitionsSection::Include { href: include.0 }
            }
            "GtuTypes" => DefinitionsSection::GtuTypes(children(node, "GtuType")?),
            "GtuTemplates" => DefinitionsSection::GtuTemplates(children(node, "GtuTemplate")?),
            "LinkTypes" => DefinitionsSection::LinkTypes(children(node, "LinkType")?),
            "LaneTypes" => DefinitionsSection::LaneTypes(children(node, "LaneType")?),
            "LaneBiases" => DefinitionsSection::LaneBiases(children(node, "LaneBias")?),
            "DetectorTypes" => DefinitionsSection::DetectorTypes(children(node, "DetectorType")?),
            "RoadLayouts" => DefinitionsSection::RoadLayouts(node.clone()),
            "ParameterTypes" => DefinitionsSection::ParameterTypes(node.clone()),
            other => {
                return Err(DocumentError::violation(
                    ElementPath::root("Definitions").child(other, None),
                    format!("unknown definitions section '{}'", other),
                ));
            }
        };
        Ok(section)
    }
}

struct Include(String);

impl FromNode for Include {
    fn node_type() -> &'static NodeType {
        &INCLUDE
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        id_attr(node, "href").map(Include)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GtuType {
    pub id: String,
    pub parent: Option<String>,
    pub default: Expr<bool>,
}

impl FromNode for GtuType {
    fn node_type() -> &'static NodeType {
        &GTU_TYPE
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            id: id_attr(node, "Id")?,
            parent: opt_id_attr(node, "Parent")?,
            default: attr(node, "Default")?,
        })
    }
}

/// A link, lane or detector type with the GTU types it admits.
#[derive(Debug, Clone, PartialEq)]
pub struct CompatibleType {
    pub id: String,
    pub parent: Option<String>,
    pub default: Expr<bool>,
    pub compatible_gtu_types: Vec<String>,
}

impl FromNode for CompatibleType {
    fn node_type() -> &'static NodeType {
        &COMPATIBLE_TYPE
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            id: id_attr(node, "Id")?,
            parent: opt_id_attr(node, "Parent")?,
            default: attr(node, "Default")?,
            compatible_gtu_types: node
                .children_named("Compatibility")
                .map(|c| id_attr(c, "GtuType"))
                .collect::<Result<_, _>>()?,
        })
    }
}

/// A GTU template: stochastic dimensions and performance of one GTU type.
#[derive(Debug, Clone, PartialEq)]
pub struct GtuTemplate {
    pub id: String,
    pub gtu_type: String,
    /// Whether this is a built-in default template.
    pub default: Expr<bool>,
    pub length: Distribution,
    pub width: Distribution,
    pub max_speed: Distribution,
    pub max_acceleration: Option<Distribution>,
    pub max_deceleration: Option<Distribution>,
}

impl GtuTemplate {
    /// `Default` as a plain flag; an expression counts as not default.
    pub fn is_default(&self) -> bool {
        self.default.literal().copied().unwrap_or(false)
    }
}

impl FromNode for GtuTemplate {
    fn node_type() -> &'static NodeType {
        &GTU_TEMPLATE
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        let distribution = |name: &str| node.child(name).map(Distribution::from_dist_node).transpose();
        let required = |name: &str| {
            distribution(name)?.ok_or_else(|| {
                DocumentError::violation(
                    ElementPath::root(node.name()),
                    format!("'{}' is missing", name),
                )
            })
        };
        Ok(Self {
            id: id_attr(node, "Id")?,
            gtu_type: id_attr(node, "GtuType")?,
            default: attr(node, "Default")?,
            length: required("LengthDist")?,
            width: required("WidthDist")?,
            max_speed: required("MaxSpeedDist")?,
            max_acceleration: distribution("MaxAccelerationDist")?,
            max_deceleration: distribution("MaxDecelerationDist")?,
        })
    }
}

/// A continuous distribution with the unit its parameters are expressed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub unit: Option<Expr<String>>,
    pub random_stream: Option<String>,
    pub kind: DistributionKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DistributionKind {
    Constant {
        c: Expr<f64>,
    },
    Exponential {
        lambda: Expr<f64>,
    },
    Triangular {
        min: Expr<f64>,
        mode: Expr<f64>,
        max: Expr<f64>,
    },
    Normal {
        mu: Expr<f64>,
        sigma: Expr<f64>,
    },
    NormalTrunc {
        mu: Expr<f64>,
        sigma: Expr<f64>,
        min: Expr<f64>,
        max: Expr<f64>,
    },
    Uniform {
        min: Expr<f64>,
        max: Expr<f64>,
    },
    LogNormal {
        mu: Expr<f64>,
        sigma: Expr<f64>,
    },
}

impl Distribution {
    /// Read any of the distribution node types; the unit attribute is the one
    /// whose name ends in `Unit`.
    fn from_dist_node(node: &Node) -> Result<Self, DocumentError> {
        let unit = node
            .attributes()
            .iter()
            .find(|a| a.name().ends_with("Unit"))
            .map(|a| attr(node, a.name()))
            .transpose()?;
        let chosen = node.choice("Distribution").and_then(Child::as_node).ok_or_else(|| {
            DocumentError::violation(ElementPath::root(node.name()), "no distribution chosen")
        })?;
        let kind = match chosen.name() {
            "Constant" => DistributionKind::Constant {
                c: attr(chosen, "C")?,
            },
            "Exponential" => DistributionKind::Exponential {
                lambda: attr(chosen, "Lambda")?,
            },
            "Triangular" => DistributionKind::Triangular {
                min: attr(chosen, "Min")?,
                mode: attr(chosen, "Mode")?,
                max: attr(chosen, "Max")?,
            },
            "Normal" => DistributionKind::Normal {
                mu: attr(chosen, "Mu")?,
                sigma: attr(chosen, "Sigma")?,
            },
            "NormalTrunc" => DistributionKind::NormalTrunc {
                mu: attr(chosen, "Mu")?,
                sigma: attr(chosen, "Sigma")?,
                min: attr(chosen, "Min")?,
                max: attr(chosen, "Max")?,
            },
            "Uniform" => DistributionKind::Uniform {
                min: attr(chosen, "Min")?,
                max: attr(chosen, "Max")?,
            },
            "LogNormal" => DistributionKind::LogNormal {
                mu: attr(chosen, "Mu")?,
                sigma: attr(chosen, "Sigma")?,
            },
            other => {
                return Err(DocumentError::violation(
                    ElementPath::root(node.name()).child(other, None),
                    format!("unknown distribution '{}'", other),
                ));
            }
        };
        Ok(Self {
            unit,
            random_stream: opt_id_attr(node, "RandomStream")?,
            kind,
        })
    }
}

/// Preferred lateral position of a GTU type on multi-lane roads.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneBias {
    pub gtu_type: String,
    pub bias: Expr<f64>,
    pub sticky_lanes: Option<Expr<i64>>,
    pub road_position: Option<RoadPosition>,
}

/// Where on the road the bias pulls towards.
#[derive(Debug, Clone, PartialEq)]
pub enum RoadPosition {
    FromLeft(Expr<f64>),
    FromRight(Expr<f64>),
    /// Interpolated between the speeds at which the leftmost and the
    /// rightmost lane are preferred.
    BySpeed { left: Expr<Speed>, right: Expr<Speed> },
}

impl FromNode for LaneBias {
    fn node_type() -> &'static NodeType {
        &LANE_BIAS
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        let road_position = match node.choice("RoadPosition").map(Child::name) {
            Some("FromLeft") => Some(RoadPosition::FromLeft(value(node, "FromLeft")?)),
            Some("FromRight") => Some(RoadPosition::FromRight(value(node, "FromRight")?)),
            Some(_) => Some(RoadPosition::BySpeed {
                left: value(node, "LeftSpeed")?,
                right: value(node, "RightSpeed")?,
            }),
            None => None,
        };
        Ok(Self {
            gtu_type: id_attr(node, "GtuType")?,
            bias: attr(node, "Bias")?,
            sticky_lanes: opt_attr(node, "StickyLanes")?,
            road_position,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::DEFINITIONS;
    use crate::values::SpeedUnit;
    use crate::xml::parse_node;

    const TEMPLATE: &str = r#"<GtuTemplate Id="CAR" GtuType="CAR">
        <LengthDist LengthUnit="m"><Uniform Min="4" Max="5"/></LengthDist>
        <WidthDist><Constant C="2"/></WidthDist>
        <MaxSpeedDist SpeedUnit="km/h"><Normal Mu="130" Sigma="5"/></MaxSpeedDist>
    </GtuTemplate>"#;

    #[test]
    fn test_gtu_template_default_flag() {
        let template = GtuTemplate::from_node(&parse_node(TEMPLATE, &GTU_TEMPLATE).unwrap()).unwrap();
        assert_eq!(template.default, Expr::Literal(false));
        assert!(!template.is_default());
        assert_eq!(
            template.length.kind,
            DistributionKind::Uniform {
                min: Expr::Literal(4.0),
                max: Expr::Literal(5.0),
            }
        );
        assert_eq!(template.width.unit, Some(Expr::Literal("m".to_string())));
        assert_eq!(template.max_speed.unit, Some(Expr::Literal("km/h".to_string())));
        assert!(template.max_acceleration.is_none());
    }

    #[test]
    fn test_lane_bias_partial() {
        let node = parse_node(r#"<LaneBias GtuType="CAR" Bias="0.5"/>"#, &LANE_BIAS).unwrap();
        let bias = LaneBias::from_node(&node).unwrap();
        assert_eq!(bias.gtu_type, "CAR");
        assert_eq!(bias.bias, Expr::Literal(0.5));
        assert_eq!(bias.sticky_lanes, None);
        assert_eq!(bias.road_position, None);
    }

    #[test]
    fn test_lane_bias_from_right() {
        let xml = r#"<LaneBias GtuType="TRUCK" Bias="0.8" StickyLanes="2">
            <FromRight>0.1</FromRight>
        </LaneBias>"#;
        let bias = LaneBias::from_node(&parse_node(xml, &LANE_BIAS).unwrap()).unwrap();
        assert_eq!(bias.sticky_lanes, Some(Expr::Literal(2)));
        assert_eq!(bias.road_position, Some(RoadPosition::FromRight(Expr::Literal(0.1))));
    }

    #[test]
    fn test_lane_bias_by_speed() {
        let xml = r#"<LaneBias GtuType="CAR" Bias="0.5">
            <LeftSpeed>{vMax}</LeftSpeed>
            <RightSpeed>80 km/h</RightSpeed>
        </LaneBias>"#;
        let bias = LaneBias::from_node(&parse_node(xml, &LANE_BIAS).unwrap()).unwrap();
        let Some(RoadPosition::BySpeed { left, right }) = bias.road_position else {
            panic!("expected a speed based position, got {:?}", bias.road_position);
        };
        assert!(left.is_expression());
        assert_eq!(right, Expr::Literal(Speed::new(80.0, SpeedUnit::KilometerPerHour)));
    }

    #[test]
    fn test_sections_keep_order() {
        let xml = r#"<Definitions xmlns:xi="http://www.w3.org/2001/XInclude">
            <GtuTypes><GtuType Id="CAR"/></GtuTypes>
            <xi:include href="defaults.xml"/>
            <LinkTypes>
                <LinkType Id="URBAN"><Compatibility GtuType="CAR"/></LinkType>
            </LinkTypes>
            <GtuTypes><GtuType Id="TRUCK" Parent="CAR"/></GtuTypes>
        </Definitions>"#;
        let sections = DefinitionsSection::read_all(&parse_node(xml, &DEFINITIONS).unwrap()).unwrap();
        assert_eq!(sections.len(), 4);
        assert!(matches!(&sections[1], DefinitionsSection::Include { href } if href == "defaults.xml"));
        match &sections[2] {
            DefinitionsSection::LinkTypes(types) => {
                assert_eq!(types[0].compatible_gtu_types, vec!["CAR".to_string()]);
            }
            other => panic!("unexpected section {:?}", other),
        }
        match &sections[3] {
            DefinitionsSection::GtuTypes(types) => {
                assert_eq!(types[0].parent.as_deref(), Some("CAR"));
            }
            other => panic!("unexpected section {:?}", other),
        }
    }
}
