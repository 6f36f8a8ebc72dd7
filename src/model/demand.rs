//! Origin-destination demand.

use crate::model::{FromNode, attr, children, id_attr, opt_attr, opt_child, opt_id_attr, opt_id_value};
use crate::node::{ElementPath, Node};
use crate::schema::{CATEGORY, CELL, LANE_REFERENCE, LEVEL, NodeType, OD};
use crate::values::{Duration, Expr, Frequency, Interpolation};
use crate::xml::DocumentError;

/// An OD matrix: demand levels per origin, destination and category.
#[derive(Debug, Clone, PartialEq)]
pub struct Od {
    pub id: String,
    pub global_interpolation: Expr<Interpolation>,
    pub global_factor: Expr<f64>,
    /// Id of the `OdOptions` applied to this matrix.
    pub options: Option<String>,
    /// Time slices shared by cells whose levels carry no `Time`.
    pub global_time: Vec<Expr<Duration>>,
    pub categories: Vec<Category>,
    pub cells: Vec<Cell>,
}

impl Od {
    /// Cells between one origin and one destination.
    pub fn cells_between<'a>(
        &'a self,
        origin: &'a str,
        destination: &'a str,
    ) -> impl Iterator<Item = &'a Cell> + 'a {
        self.cells
            .iter()
            .filter(move |cell| cell.origin == origin && cell.destination == destination)
    }
}

impl FromNode for Od {
    fn node_type() -> &'static NodeType {
        &OD
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        let global_time = match node.child("GlobalTime") {
            Some(global) => global
                .children_named("Time")
                .map(|time| attr(time, "Value"))
                .collect::<Result<_, _>>()?,
            None => Vec::new(),
        };
        Ok(Self {
            id: id_attr(node, "Id")?,
            global_interpolation: attr(node, "GlobalInterpolation")?,
            global_factor: attr(node, "GlobalFactor")?,
            options: opt_id_attr(node, "Options")?,
            global_time,
            categories: children(node, "Category")?,
            cells: children(node, "Cell")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub gtu_type: Option<String>,
    pub route: Option<String>,
    pub lane: Option<LaneReference>,
}

impl FromNode for Category {
    fn node_type() -> &'static NodeType {
        &CATEGORY
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            id: id_attr(node, "Id")?,
            gtu_type: opt_id_value(node, "GtuType")?,
            route: opt_id_value(node, "Route")?,
            lane: opt_child(node, "Lane")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneReference {
    pub link: String,
    pub lane: String,
}

impl FromNode for LaneReference {
    fn node_type() -> &'static NodeType {
        &LANE_REFERENCE
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            link: id_attr(node, "Link")?,
            lane: id_attr(node, "Lane")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub origin: String,
    pub destination: String,
    pub category: Option<String>,
    pub factor: Option<Expr<f64>>,
    pub interpolation: Option<Expr<Interpolation>>,
    pub levels: Vec<Level>,
}

impl FromNode for Cell {
    fn node_type() -> &'static NodeType {
        &CELL
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        Ok(Self {
            origin: id_attr(node, "Origin")?,
            destination: id_attr(node, "Destination")?,
            category: opt_id_attr(node, "Category")?,
            factor: opt_attr(node, "Factor")?,
            interpolation: opt_attr(node, "Interpolation")?,
            levels: children(node, "Level")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    pub time: Option<Expr<Duration>>,
    pub frequency: Expr<Frequency>,
}

impl FromNode for Level {
    fn node_type() -> &'static NodeType {
        &LEVEL
    }

    fn read(node: &Node) -> Result<Self, DocumentError> {
        let frequency = node
            .text()
            .and_then(Expr::from_value)
            .ok_or_else(|| {
                DocumentError::violation(ElementPath::root(node.name()), "level without a frequency")
            })?;
        Ok(Self {
            time: opt_attr(node, "Time")?,
            frequency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::FrequencyUnit;
    use crate::values::Quantity;
    use crate::xml::parse_node;

    #[test]
    fn test_od_without_category() {
        let xml = r#"<Od Id="morning">
            <Cell Origin="A" Destination="B">
                <Level Time="0s">500/h</Level>
                <Level Time="1800s">{peak}</Level>
            </Cell>
        </Od>"#;
        let od = Od::from_node(&parse_node(xml, &OD).unwrap()).unwrap();
        assert_eq!(od.id, "morning");
        assert_eq!(od.global_interpolation, Expr::Literal(Interpolation::Linear));
        assert_eq!(od.global_factor, Expr::Literal(1.0));
        assert!(od.categories.is_empty());
        assert!(od.global_time.is_empty());

        let cell = od.cells_between("A", "B").next().unwrap();
        assert_eq!(cell.category, None);
        assert_eq!(cell.levels.len(), 2);
        assert_eq!(
            cell.levels[0].frequency,
            Expr::Literal(Quantity::new(500.0, FrequencyUnit::PerHour))
        );
        assert!(cell.levels[1].frequency.is_expression());
        assert_eq!(od.cells_between("B", "A").count(), 0);
    }

    #[test]
    fn test_categories_and_global_time() {
        let xml = r#"<Od Id="od" GlobalInterpolation="STEPWISE" GlobalFactor="1.5">
            <GlobalTime><Time Value="0 s"/><Time Value="1 h"/></GlobalTime>
            <Category Id="cars"><GtuType>CAR</GtuType><Lane Link="L1" Lane="LEFT"/></Category>
        </Od>"#;
        let od = Od::from_node(&parse_node(xml, &OD).unwrap()).unwrap();
        assert_eq!(od.global_interpolation, Expr::Literal(Interpolation::Stepwise));
        assert_eq!(od.global_factor, Expr::Literal(1.5));
        assert_eq!(od.global_time.len(), 2);

        let category = &od.categories[0];
        assert_eq!(category.gtu_type.as_deref(), Some("CAR"));
        assert_eq!(category.route, None);
        assert_eq!(
            category.lane,
            Some(LaneReference {
                link: "L1".into(),
                lane: "LEFT".into(),
            })
        );
    }
}
