//! Round-trip tests for OTS parsing and serialization.
//!
//! These tests verify that documents can be parsed, written back to XML,
//! and parsed again without losing information.

use otsxml::schema::{LANE_BIAS, RUN};
use otsxml::values::{Duration, Speed, SpeedUnit};
use otsxml::xml::{parse_node, write_node, write_node_with};
use otsxml::{Document, NodeBuilder, WriteOptions};
use pretty_assertions::assert_eq;

const MERGE: &str = include_str!("../data/scenarios/merge.xml");

/// Parse, serialize, parse again and compare.
fn round_trip_test(xml: &str, description: &str) -> Document {
    let first: Document = xml
        .parse()
        .unwrap_or_else(|e| panic!("Failed to parse {}: {}", description, e));

    let serialized = first
        .to_xml()
        .unwrap_or_else(|e| panic!("Failed to serialize {}: {}", description, e));

    let second: Document = serialized
        .parse()
        .unwrap_or_else(|e| panic!("Failed to re-parse {}: {}", description, e));

    assert_eq!(first, second, "Round-trip failed for {}", description);
    first
}

#[test]
fn test_round_trip_minimal_document() {
    let xml = r#"
    <Ots xmlns="http://www.opentrafficsim.org/ots">
        <Definitions/>
        <Network/>
        <Run/>
    </Ots>
    "#;

    round_trip_test(xml, "minimal document");
}

#[test]
fn test_round_trip_merge_scenario() {
    let document = round_trip_test(MERGE, "merge scenario");
    assert_eq!(document.definitions.len(), 6);
    assert_eq!(document.controllers.len(), 2);
    assert_eq!(document.ods.len(), 1);
}

#[test]
fn test_round_trip_od_without_category() {
    let xml = r#"
    <Ots xmlns="http://www.opentrafficsim.org/ots">
        <Definitions/>
        <Network/>
        <Demand>
            <Od Id="OD">
                <Cell Origin="A" Destination="B">
                    <Level>500/h</Level>
                </Cell>
            </Od>
        </Demand>
        <Run/>
    </Ots>
    "#;

    let document = round_trip_test(xml, "OD without category");
    let od = &document.ods[0];
    assert!(od.categories.is_empty());
    assert_eq!(od.cells.len(), 1);
    assert_eq!(od.cells[0].category, None);

    let serialized = document.to_xml().unwrap();
    assert!(!serialized.contains("<Category"), "{}", serialized);
    assert!(serialized.contains(r#"<Cell Origin="A" Destination="B"><Level>500 /h</Level></Cell>"#), "{}", serialized);
}

#[test]
fn test_serialization_is_idempotent() {
    let document: Document = MERGE.parse().unwrap();
    let once = document.to_xml().unwrap();
    let twice = once.parse::<Document>().unwrap().to_xml().unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_round_trip_pretty_output() {
    let document: Document = MERGE.parse().unwrap();
    let pretty = document.to_xml_pretty().unwrap();
    assert!(pretty.contains("\n  <Definitions>"));

    let reparsed: Document = pretty.parse().unwrap();
    assert_eq!(reparsed, document);
}

#[test]
fn test_round_trip_keeps_expressions_and_units() {
    let document: Document = MERGE.parse().unwrap();
    let xml = document.to_xml().unwrap();
    assert!(xml.contains("<Level>{mainDemand}</Level>"));
    assert!(xml.contains("<WarmupPeriod>5 min</WarmupPeriod>"));
    assert!(xml.contains(r##"Color="#404040""##));
}

#[test]
fn test_round_trip_built_node() {
    let bias = NodeBuilder::new(&LANE_BIAS)
        .set_attribute("GtuType", "TRUCK")
        .set_attribute("Bias", 0.25)
        .push_value("LeftSpeed", Speed::new(120.0, SpeedUnit::KilometerPerHour))
        .push_value("RightSpeed", Speed::new(80.0, SpeedUnit::KilometerPerHour))
        .build()
        .unwrap();

    let xml = write_node_with(&bias, &WriteOptions::compact().without_declaration()).unwrap();
    assert_eq!(
        xml,
        r#"<LaneBias xmlns="http://www.opentrafficsim.org/ots" GtuType="TRUCK" Bias="0.25"><LeftSpeed>120 km/h</LeftSpeed><RightSpeed>80 km/h</RightSpeed></LaneBias>"#
    );
    assert_eq!(parse_node(&xml, &LANE_BIAS).unwrap(), bias);
}

#[test]
fn test_round_trip_reopened_builder() {
    let run = parse_node("<Run><RunLength>10 min</RunLength></Run>", &RUN).unwrap();
    let changed = run
        .to_builder()
        .remove_children("RunLength")
        .push_value("RunLength", Duration::seconds(900.0))
        .build()
        .unwrap();

    let xml = write_node(&changed).unwrap();
    assert!(xml.contains("<RunLength>900 s</RunLength>"));
    assert_eq!(parse_node(&xml, &RUN).unwrap(), changed);
    assert_ne!(run, changed);
}
