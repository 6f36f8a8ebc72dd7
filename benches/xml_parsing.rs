//! Performance benchmarks for OTS parsing and serialization.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use otsxml::{Document, DocumentError, SerializeError, validate_identifiers};

fn parse_xml(xml: &str) -> Result<Document, DocumentError> {
    xml.parse()
}

fn serialize_xml(document: &Document) -> Result<String, SerializeError> {
    document.to_xml()
}

const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Ots xmlns="http://www.opentrafficsim.org/ots">
    <Definitions/>
    <Network/>
    <Run><RunLength>1 h</RunLength></Run>
</Ots>"#;

fn bench_parse_minimal(c: &mut Criterion) {
    c.bench_function("parse_minimal", |b| b.iter(|| parse_xml(black_box(MINIMAL))));
}

fn bench_parse_merge(c: &mut Criterion) {
    let xml = include_str!("../data/scenarios/merge.xml");

    c.bench_function("parse_merge", |b| b.iter(|| parse_xml(black_box(xml))));
}

fn bench_serialize_merge(c: &mut Criterion) {
    let xml = include_str!("../data/scenarios/merge.xml");
    let document = parse_xml(xml).expect("Failed to parse merge scenario");

    c.bench_function("serialize_merge", |b| {
        b.iter(|| serialize_xml(black_box(&document)))
    });
}

fn bench_validate_merge(c: &mut Criterion) {
    let xml = include_str!("../data/scenarios/merge.xml");
    let document = parse_xml(xml).expect("Failed to parse merge scenario");

    c.bench_function("validate_merge", |b| {
        b.iter(|| validate_identifiers(black_box(&document)))
    });
}

criterion_group!(
    benches,
    bench_parse_minimal,
    bench_parse_merge,
    bench_serialize_merge,
    bench_validate_merge
);
criterion_main!(benches);
