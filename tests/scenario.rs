//! Typed bindings read from a complete scenario.

use otsxml::model::{ControlSection, DefinitionsSection, DistributionKind, TextSource};
use otsxml::values::{Duration, DurationUnit, FrequencyUnit, Interpolation, Quantity, Space, Value};
use otsxml::{Document, Expr};
use pretty_assertions::assert_eq;

fn merge() -> Document {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/scenarios/merge.xml");
    Document::from_path(path).unwrap_or_else(|e| panic!("Failed to read merge scenario: {}", e))
}

#[test]
fn test_sections_present() {
    let document = merge();
    assert_eq!(document.space(), Space::Default);
    assert!(document.network().is_some());
    assert!(document.demand().is_some());
    assert!(document.control().is_some());
    assert!(document.models().is_some());
    assert!(document.scenarios().is_some());
    assert!(document.animation().is_some());
}

#[test]
fn test_gtu_templates() {
    let document = merge();
    let templates = document
        .definitions
        .iter()
        .find_map(|section| match section {
            DefinitionsSection::GtuTemplates(templates) => Some(templates),
            _ => None,
        })
        .unwrap();

    assert_eq!(templates.len(), 2);
    assert!(templates[0].is_default());
    assert_eq!(
        templates[0].length.kind,
        DistributionKind::Uniform {
            min: Expr::Literal(4.0),
            max: Expr::Literal(5.0),
        }
    );
    assert_eq!(templates[1].gtu_type, "TRUCK");
    assert!(templates[1].max_acceleration.is_some());
    assert!(templates[1].max_deceleration.is_none());
}

#[test]
fn test_od_matrix() {
    let document = merge();
    let od = &document.ods[0];
    assert_eq!(od.id, "OD");
    assert_eq!(od.global_interpolation, Expr::Literal(Interpolation::Stepwise));
    assert_eq!(
        od.global_time,
        vec![
            Expr::Literal(Duration::seconds(0.0)),
            Expr::Literal(Quantity::new(30.0, DurationUnit::Minute)),
        ]
    );
    assert_eq!(od.categories[1].route.as_deref(), Some("EC"));

    let ramp = od.cells_between("E", "C").next().unwrap();
    assert_eq!(ramp.factor, Some(Expr::Literal(0.5)));
    assert_eq!(
        ramp.levels[1].frequency,
        Expr::Literal(Quantity::new(600.0, FrequencyUnit::PerHour))
    );

    let main = od.cells_between("A", "C").next().unwrap();
    assert_eq!(main.levels[1].frequency.expression().map(|e| e.body()), Some("mainDemand"));
}

#[test]
fn test_controllers() {
    let document = merge();
    let ControlSection::FixedTime(fixed) = &document.controllers[0] else {
        panic!("Expected a fixed time controller first");
    };
    assert_eq!(fixed.id, "RAMP_METER");
    assert_eq!(fixed.offset, Expr::Literal(Duration::seconds(0.0)));
    assert_eq!(fixed.cycles[0].green, Expr::Literal(Duration::seconds(10.0)));

    let ControlSection::TrafCod(trafcod) = &document.controllers[1] else {
        panic!("Expected a TrafCod controller second");
    };
    // The document-wide Space="default" applies to the program text.
    assert_eq!(
        trafcod.program,
        TextSource::Inline("# ramp metering rules\nRED = GREEN + 3".to_string())
    );
    assert_eq!(trafcod.console_map, TextSource::File("ramp.png".to_string()));
}

#[test]
fn test_run() {
    let document = merge();
    assert_eq!(document.run.start_time, Expr::Literal(Duration::seconds(0.0)));
    assert_eq!(
        document.run.warmup_period,
        Expr::Literal(Quantity::new(5.0, DurationUnit::Minute))
    );
    assert_eq!(document.run.number_replications, Expr::Literal(2));
    assert_eq!(document.run.random_streams[0].seed(2), Some(2));
    assert_eq!(document.run.random_streams[0].seed(3), None);
}

#[test]
fn test_untyped_sections_as_nodes() {
    let document = merge();
    let model = document.models().unwrap().child("Model").unwrap();
    let lmrs = model
        .child("TacticalPlanner")
        .and_then(|planner| planner.child("Lmrs"))
        .unwrap();
    assert_eq!(lmrs.value("Synchronization"), Some(&Value::String("PASSIVE".to_string())));
    assert_eq!(
        lmrs.child("VoluntaryIncentives").unwrap().values("Incentive").count(),
        2
    );

    let link_type = document.animation().unwrap().child("LinkType").unwrap();
    assert_eq!(
        link_type.attribute("Color").map(ToString::to_string).as_deref(),
        Some("#404040")
    );
}
