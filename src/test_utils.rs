#![cfg(test)]

/// Route `log` output through the test harness; `RUST_LOG` selects the level.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Helper function to assert floating point equality with tolerance
pub fn assert_float_eq(a: f64, b: f64, tolerance: f64) {
    assert!(
        (a - b).abs() < tolerance,
        "Expected {} to be approximately equal to {} (tolerance: {})",
        a,
        b,
        tolerance
    );
}

/// Wrap section XML in a minimal OTS document.
///
/// `sections` is inserted between the mandatory `Network` and `Run`
/// sections, so it may hold `Demand`, `Control`, `Models` or `Scenarios`.
pub fn wrap_sections_xml(definitions: &str, sections: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Ots xmlns="http://www.opentrafficsim.org/ots" xmlns:xi="http://www.w3.org/2001/XInclude">
    <Definitions>{}</Definitions>
    <Network/>
    {}
    <Run/>
</Ots>"#,
        definitions, sections
    )
}

/// Parse a document built by [`wrap_sections_xml`].
pub fn parse_sections(definitions: &str, sections: &str) -> crate::model::Document {
    init_logging();
    wrap_sections_xml(definitions, sections)
        .parse()
        .expect("Failed to parse OTS document")
}
