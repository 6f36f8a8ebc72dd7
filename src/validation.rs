//! Optional checks run on a parsed [`Document`].
//!
//! Parsing only enforces the schema. Whether an identifier is unique within
//! its collection is checked here, on request, and reported as messages
//! rather than as an error.

use std::collections::HashMap;

use crate::model::{DefinitionsSection, Document};
use crate::node::{ElementPath, Node, sibling_index};
use crate::types::ValidationResult;

/// Elements whose `Id` must be unique among elements of the same name, with
/// the document section they are collected from.
pub const IDENTIFIED_ELEMENTS: &[(&str, &str)] = &[
    ("GtuType", "Definitions"),
    ("GtuTemplate", "Definitions"),
    ("LinkType", "Definitions"),
    ("LaneType", "Definitions"),
    ("Node", "Network"),
    ("Link", "Network"),
    ("Od", "Demand"),
    ("ShortestRoute", "Demand"),
    ("Route", "Demand"),
    ("FixedTime", "Control"),
    ("TrafCod", "Control"),
    ("Model", "Models"),
];

/// Report identifiers used more than once within a collection.
///
/// Includes left unresolved are reported as warnings, since the
/// identifiers they would contribute were not seen.
pub fn validate_identifiers(document: &Document) -> ValidationResult {
    let mut warnings = Vec::new();
    let mut errors = Vec::new();

    for section in &document.definitions {
        if let DefinitionsSection::Include { href } = section {
            warnings.push(format!("include '{}' was not resolved; its identifiers are not checked", href));
        }
    }

    let mut seen: HashMap<(&str, &str), Vec<ElementPath>> = HashMap::new();
    let root = document.root();
    let root_path = ElementPath::root(root.name());
    let names = root.children().iter().map(|child| child.name());
    for (position, child) in root.children().iter().enumerate() {
        if let Some(section) = child.as_node() {
            let path = root_path.child(child.name(), sibling_index(names.clone(), position));
            collect_ids(section, child.name(), child.name(), &path, &mut seen);
        }
    }

    let mut duplicates: Vec<_> = seen.into_iter().filter(|(_, paths)| paths.len() > 1).collect();
    duplicates.sort_by(|a, b| a.0.cmp(&b.0));
    for ((element, id), paths) in duplicates {
        errors.push(format!(
            "{} id '{}' appears {} times: {}",
            element,
            id,
            paths.len(),
            paths.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
        ));
    }

    ValidationResult::from_messages((), warnings, errors)
}

/// `element` is the name `node` appears under, which differs from its type
/// name for shared types such as link and lane types.
fn collect_ids<'a>(
    node: &'a Node,
    element: &'static str,
    section: &str,
    path: &ElementPath,
    seen: &mut HashMap<(&'a str, &'a str), Vec<ElementPath>>,
) {
    if IDENTIFIED_ELEMENTS.contains(&(element, section)) {
        if let Some(id) = node.attribute("Id").and_then(|value| value.as_str()) {
            seen.entry((element, id)).or_default().push(path.clone());
        }
    }
    let names = node.children().iter().map(|child| child.name());
    for (position, child) in node.children().iter().enumerate() {
        if let Some(inner) = child.as_node() {
            let index = sibling_index(names.clone(), position);
            collect_ids(inner, child.name(), section, &path.child(child.name(), index), seen);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(network: &str) -> Document {
        format!(
            r#"<Ots xmlns="http://www.opentrafficsim.org/ots">
                <Definitions>
                    <GtuTypes><GtuType Id="CAR"/><GtuType Id="TRUCK"/></GtuTypes>
                </Definitions>
                <Network>{}</Network>
                <Run/>
            </Ots>"#,
            network
        )
        .parse()
        .unwrap()
    }

    #[test]
    fn test_unique_ids() {
        let result = validate_identifiers(&document(r#"<Node Id="A" Coordinate="(0,0)"/><Node Id="B" Coordinate="(1,0)"/>"#));
        assert_eq!(result, ValidationResult::Valid(()));
    }

    #[test]
    fn test_duplicate_node_ids() {
        let result = validate_identifiers(&document(r#"<Node Id="A" Coordinate="(0,0)"/><Node Id="A" Coordinate="(1,0)"/>"#));
        assert!(result.is_invalid());
        assert_eq!(
            result.errors(),
            ["Node id 'A' appears 2 times: Ots/Network/Node[1], Ots/Network/Node[2]".to_string()]
        );
    }

    #[test]
    fn test_same_id_in_different_collections() {
        let result = validate_identifiers(&document(r#"<Node Id="CAR" Coordinate="(0,0)"/>"#));
        assert!(result.is_valid());
    }
}
