//! Traffic light controllers.

use crate::model::{FromNode, attr, child, children, id_attr, opt_attr};
use crate::node::{Child, ChildContent, ElementPath, Node};
use crate::schema::{CONSOLE, CYCLE, FIXED_TIME, NodeType, SIGNAL_GROUP, TRAF_COD, TRAFFIC_LIGHT};
use crate::values::{Duration, Expr};
use crate::xml::DocumentError;

/// One entry of the `Control` section, in document order.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlSection {
    FixedTime(FixedTime),
    TrafCod(TrafCod),
}

impl ControlSection {
    pub fn read_all(control: &Node) -> Result<Vec<Self>, DocumentError> {
        control
            .choices("Controllers")
            .filter_map(Child::as_node)
            .map(|node| match node.name() {
                "TrafCod" => TrafCod::from_node(node).map(ControlSection::TrafCod),
                _ => FixedTime::from_node(node).map(ControlSection::FixedTime),
            })
            .collect()
    }

    pub fn id(&self) -> &str {
        match self {
            ControlSection::FixedTime(fixed) => &fixed.id,
            ControlSection::TrafCod(trafcod) => &trafcod.id,
        }
    }
}

/// A fixed time controller running the same cycle forever.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedTime {
    pub id: String,
    pub cycle_time: Expr<Duration>,
    pub offset: Expr<Duration>,
    pub signal_groups: Vec<SignalGroup>,
    pub cycles: Vec<Cycle>,
}

impl FromNode for FixedTime {
    fn node_type() -> &'static NodeType {
        &FIXED_TIME
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            id: id_attr(node, "Id")?,
            cycle_time: attr(node, "CycleTime")?,
            offset: attr(node, "Offset")?,
            signal_groups: children(node, "SignalGroup")?,
            cycles: children(node, "Cycle")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignalGroup {
    pub id: String,
    pub traffic_lights: Vec<TrafficLight>,
}

impl FromNode for SignalGroup {
    fn node_type() -> &'static NodeType {
        &SIGNAL_GROUP
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            id: id_attr(node, "Id")?,
            traffic_lights: children(node, "TrafficLight")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrafficLight {
    pub link: String,
    pub lane: String,
    pub traffic_light_id: String,
}

impl FromNode for TrafficLight {
    fn node_type() -> &'static NodeType {
        &TRAFFIC_LIGHT
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            link: id_attr(node, "Link")?,
            lane: id_attr(node, "Lane")?,
            traffic_light_id: id_attr(node, "TrafficLightId")?,
        })
    }
}

/// Timing of one signal group within the cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Cycle {
    pub signal_group_id: String,
    pub offset: Expr<Duration>,
    pub pre_green: Option<Expr<Duration>>,
    pub green: Expr<Duration>,
    pub yellow: Expr<Duration>,
}

impl FromNode for Cycle {
    fn node_type() -> &'static NodeType {
        &CYCLE
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            signal_group_id: id_attr(node, "SignalGroupId")?,
            offset: attr(node, "Offset")?,
            pre_green: opt_attr(node, "PreGreen")?,
            green: attr(node, "Green")?,
            yellow: attr(node, "Yellow")?,
        })
    }
}

/// Text given inline, or the location of a file holding it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// Inline text with the effective whitespace policy already applied.
    Inline(String),
    File(String),
}

impl TextSource {
    /// Read the populated alternative of a choice between an inline element
    /// and a file reference.
    fn from_choice(node: &Node, group: &str) -> Result<Self, DocumentError> {
        let missing = || DocumentError::violation(ElementPath::root(node.name()), format!("choice '{}' is empty", group));
        let chosen = node.choice(group).ok_or_else(missing)?;
        let text = match &chosen.content {
            ChildContent::Node(inner) => inner.text(),
            ChildContent::Value(value) => Some(value),
        }
        .and_then(|value| value.as_str())
        .ok_or_else(missing)?
        .to_string();
        Ok(match chosen.content {
            ChildContent::Node(_) => TextSource::Inline(text),
            ChildContent::Value(_) => TextSource::File(text),
        })
    }
}

/// A TrafCod controller: a rule program plus its console display.
#[derive(Debug, Clone, PartialEq)]
pub struct TrafCod {
    pub id: String,
    pub program: TextSource,
    pub console_map: TextSource,
    pub console_coordinates: TextSource,
}

struct Console {
    map: TextSource,
    coordinates: TextSource,
}

impl FromNode for Console {
    fn node_type() -> &'static NodeType {
        &CONSOLE
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            map: TextSource::from_choice(node, "Map")?,
            coordinates: TextSource::from_choice(node, "Coordinates")?,
        })
    }
}

impl FromNode for TrafCod {
    fn node_type() -> &'static NodeType {
        &TRAF_COD
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        let console: Console = child(node, "Console")?;
        Ok(Self {
            id: id_attr(node, "Id")?,
            program: TextSource::from_choice(node, "Program")?,
            console_map: console.map,
            console_coordinates: console.coordinates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::CONTROL;
    use crate::xml::parse_node;

    const CONTROL_XML: &str = r#"<Control>
        <FixedTime Id="FT1" CycleTime="60 s">
            <SignalGroup Id="SG1"><TrafficLight Link="L1" Lane="A" TrafficLightId="TL1"/></SignalGroup>
            <Cycle SignalGroupId="SG1" Offset="0s" Green="30s" Yellow="3s"/>
        </FixedTime>
        <TrafCod Id="TC1">
            <Program Space="default">
                A = 1
                B = 2
            </Program>
            <Console>
                <MapFile>map.png</MapFile>
                <Coordinates>1,2</Coordinates>
            </Console>
        </TrafCod>
    </Control>"#;

    #[test]
    fn test_fixed_time_offset_default() {
        let sections = ControlSection::read_all(&parse_node(CONTROL_XML, &CONTROL).unwrap()).unwrap();
        let ControlSection::FixedTime(fixed) = &sections[0] else {
            panic!("expected a fixed time controller");
        };
        assert_eq!(fixed.offset, Expr::Literal(Duration::seconds(0.0)));
        assert_eq!(fixed.offset.to_string(), "0 s");
        assert_eq!(fixed.cycles[0].pre_green, None);
        assert_eq!(fixed.signal_groups[0].traffic_lights[0].traffic_light_id, "TL1");
    }

    #[test]
    fn test_trafcod_sources() {
        let sections = ControlSection::read_all(&parse_node(CONTROL_XML, &CONTROL).unwrap()).unwrap();
        assert_eq!(sections.iter().map(ControlSection::id).collect::<Vec<_>>(), ["FT1", "TC1"]);
        let ControlSection::TrafCod(trafcod) = &sections[1] else {
            panic!("expected a TrafCod controller");
        };
        assert_eq!(trafcod.program, TextSource::Inline("A = 1\nB = 2".into()));
        assert_eq!(trafcod.console_map, TextSource::File("map.png".into()));
        assert_eq!(trafcod.console_coordinates, TextSource::Inline("1,2".into()));
    }
}
