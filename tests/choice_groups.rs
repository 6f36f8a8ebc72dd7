//! Choice groups: at most one alternative of a single choice, document order
//! within repeated choices, and alternative defaults.

use otsxml::model::{FlattenerType, FromNode, LaneBias, RoadPosition};
use otsxml::schema::{FLATTENER_TYPE, LANE_BIAS, LINK, NETWORK};
use otsxml::values::{AngleUnit, Length, Quantity, Speed, SpeedUnit};
use otsxml::xml::parse_node;
use otsxml::{DocumentError, Expr};

#[test]
fn test_flattener_num_segments_default() {
    let node = parse_node("<FlattenerType><NumSegments/></FlattenerType>", &FLATTENER_TYPE).unwrap();
    assert_eq!(
        FlattenerType::from_node(&node).unwrap(),
        FlattenerType::NumSegments(Expr::Literal(64))
    );
}

#[test]
fn test_flattener_deviation_and_angle() {
    let xml = r#"<FlattenerType>
        <DeviationAndAngle><MaxDeviation>0.1 m</MaxDeviation></DeviationAndAngle>
    </FlattenerType>"#;
    let node = parse_node(xml, &FLATTENER_TYPE).unwrap();
    assert_eq!(node.choice("Flattener").unwrap().name(), "DeviationAndAngle");
    assert_eq!(
        FlattenerType::from_node(&node).unwrap(),
        FlattenerType::DeviationAndAngle {
            max_deviation: Expr::Literal(Length::meters(0.1)),
            max_angle: Expr::Literal(Quantity::new(1.0, AngleUnit::Degree)),
        }
    );
}

#[test]
fn test_empty_single_choice_is_rejected() {
    let error = parse_node("<FlattenerType/>", &FLATTENER_TYPE).unwrap_err();
    match error {
        DocumentError::SchemaViolation { path, message } => {
            assert_eq!(path.to_string(), "FlattenerType");
            assert!(message.contains("Flattener"), "{}", message);
        }
        other => panic!("Expected a schema violation, got {:?}", other),
    }
}

#[test]
fn test_two_alternatives_conflict() {
    let xml = r#"<LaneBias GtuType="CAR" Bias="0.5">
        <FromLeft>0.2</FromLeft>
        <FromRight>0.8</FromRight>
    </LaneBias>"#;
    let error = parse_node(xml, &LANE_BIAS).unwrap_err();
    match error {
        DocumentError::SchemaViolation { path, message } => {
            assert_eq!(path.to_string(), "LaneBias/FromRight");
            assert!(message.contains("RoadPosition"), "{}", message);
        }
        other => panic!("Expected a schema violation, got {:?}", other),
    }
}

#[test]
fn test_optional_choices() {
    let xml = r#"<LaneBias GtuType="CAR" Bias="0.5"/>"#;
    let bias = LaneBias::from_node(&parse_node(xml, &LANE_BIAS).unwrap()).unwrap();
    assert_eq!(bias.road_position, None);

    let xml = r#"<LaneBias GtuType="CAR" Bias="0.5"><FromLeft>0.0</FromLeft></LaneBias>"#;
    let bias = LaneBias::from_node(&parse_node(xml, &LANE_BIAS).unwrap()).unwrap();
    assert_eq!(bias.road_position, Some(RoadPosition::FromLeft(Expr::Literal(0.0))));
}

#[test]
fn test_lane_bias_by_speed_pair() {
    let xml = r#"<LaneBias GtuType="CAR" Bias="0.5">
        <LeftSpeed>120 km/h</LeftSpeed>
        <RightSpeed>80 km/h</RightSpeed>
    </LaneBias>"#;
    let bias = LaneBias::from_node(&parse_node(xml, &LANE_BIAS).unwrap()).unwrap();
    assert_eq!(
        bias.road_position,
        Some(RoadPosition::BySpeed {
            left: Expr::Literal(Speed::new(120.0, SpeedUnit::KilometerPerHour)),
            right: Expr::Literal(Speed::new(80.0, SpeedUnit::KilometerPerHour)),
        })
    );
}

#[test]
fn test_lane_bias_speed_needs_both_ends() {
    for speed in ["<LeftSpeed>120 km/h</LeftSpeed>", "<RightSpeed>80 km/h</RightSpeed>"] {
        let xml = format!(r#"<LaneBias GtuType="CAR" Bias="0.5">{}</LaneBias>"#, speed);
        assert!(
            matches!(parse_node(&xml, &LANE_BIAS), Err(DocumentError::SchemaViolation { .. })),
            "{} alone was accepted",
            speed
        );
    }
}

#[test]
fn test_lane_bias_position_and_speed_conflict() {
    let xml = r#"<LaneBias GtuType="CAR" Bias="0.5">
        <FromLeft>0.2</FromLeft>
        <LeftSpeed>120 km/h</LeftSpeed>
        <RightSpeed>80 km/h</RightSpeed>
    </LaneBias>"#;
    match parse_node(xml, &LANE_BIAS).unwrap_err() {
        DocumentError::SchemaViolation { path, message } => {
            assert_eq!(path.to_string(), "LaneBias/LeftSpeed");
            assert!(message.contains("'FromLeft' and 'LeftSpeed'"), "{}", message);
        }
        other => panic!("Expected a schema violation, got {:?}", other),
    }
}

#[test]
fn test_link_geometry_is_required() {
    let xml = r#"<Link Id="AB" Type="FREEWAY" NodeStart="A" NodeEnd="B"/>"#;
    assert!(matches!(
        parse_node(xml, &LINK),
        Err(DocumentError::SchemaViolation { .. })
    ));

    let xml = r#"<Link Id="AB" Type="FREEWAY" NodeStart="A" NodeEnd="B"><Straight/><Straight/></Link>"#;
    assert!(parse_node(xml, &LINK).is_err());
}

#[test]
fn test_marker_elements_keep_their_names() {
    let xml = r#"<Link Id="AB" Type="FREEWAY" NodeStart="A" NodeEnd="B"><Straight/></Link>"#;
    let link = parse_node(xml, &LINK).unwrap();
    assert_eq!(link.child("Straight").unwrap().name(), "Straight");

    let xml = r#"<Link Id="AB" Type="FREEWAY" NodeStart="A" NodeEnd="B"><Straight Length="1 m"/></Link>"#;
    let message = parse_node(xml, &LINK).unwrap_err().to_string();
    assert!(message.contains("unknown attribute 'Length' on Straight"), "{}", message);
}

#[test]
fn test_repeated_choice_keeps_document_order() {
    let xml = r#"<Network>
        <Node Id="A" Coordinate="(0,0)"/>
        <Link Id="AB" Type="FREEWAY" NodeStart="A" NodeEnd="B"><Straight/></Link>
        <Node Id="B" Coordinate="(100,0)"/>
        <Centroid Id="Z" Coordinate="(0,10)"/>
    </Network>"#;
    let network = parse_node(xml, &NETWORK).unwrap();
    let order: Vec<&str> = network.choices("Elements").map(|child| child.name()).collect();
    assert_eq!(order, ["Node", "Link", "Node", "Centroid"]);
    assert_eq!(network.children_named("Node").count(), 2);
}
