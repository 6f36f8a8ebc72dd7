//! Serialization of [`Node`] trees to XML.
//!
//! Attributes and children are written in declaration order, which is the
//! order the node holds them in. Entries that only carry a resolved default
//! are left out, so reading the output back resolves them again.

use std::io::Write;

use quick_xml::Writer;

use crate::node::{ChildContent, Node};
use crate::schema::{OTS_NAMESPACE, XINCLUDE_NAMESPACE};
use crate::xml::SerializeError;
use crate::xml::options::WriteOptions;
use crate::xml::quick::{AttrList, XmlEmitter};

/// Write a node as a compact XML string with a declaration.
pub fn write_node(node: &Node) -> Result<String, SerializeError> {
    write_node_with(node, &WriteOptions::default())
}

pub fn write_node_with(node: &Node, options: &WriteOptions) -> Result<String, SerializeError> {
    let mut output = Vec::new();
    write_node_to(&mut output, node, options)?;
    Ok(String::from_utf8(output)?)
}

/// Write a node into any byte sink.
pub fn write_node_to<W: Write>(
    sink: W,
    node: &Node,
    options: &WriteOptions,
) -> Result<(), SerializeError> {
    match options.indent {
        Some(width) => {
            let mut writer = Writer::new_with_indent(sink, b' ', width);
            emit_document(&mut XmlEmitter::new(&mut writer), node, options)
        }
        None => {
            let mut writer = Writer::new(sink);
            emit_document(&mut XmlEmitter::new(&mut writer), node, options)
        }
    }
}

fn emit_document<W: Write>(
    emit: &mut XmlEmitter<'_, W>,
    node: &Node,
    options: &WriteOptions,
) -> Result<(), SerializeError> {
    if options.declaration {
        emit.declaration()?;
    }
    let mut namespaces = AttrList::new();
    namespaces.add("xmlns", OTS_NAMESPACE);
    if uses_prefix(node, "xi") {
        namespaces.add("xmlns:xi", XINCLUDE_NAMESPACE);
    }
    emit_node(emit, node.name(), node, namespaces)
}

fn emit_node<W: Write>(
    emit: &mut XmlEmitter<'_, W>,
    name: &str,
    node: &Node,
    mut attrs: AttrList,
) -> Result<(), SerializeError> {
    for attribute in node.attributes().iter().filter(|a| !a.defaulted) {
        attrs.add(attribute.name(), attribute.value.to_string());
    }

    let mut children = node.children().iter().filter(|c| !c.defaulted).peekable();
    if children.peek().is_none() {
        let text = node.text().map(ToString::to_string).unwrap_or_default();
        return emit.leaf(name, &attrs, &text);
    }

    emit.start(name, &attrs)?;
    for child in children {
        let child_name = child.decl.qualified_name();
        match &child.content {
            ChildContent::Node(inner) => emit_node(emit, &child_name, inner, AttrList::new())?,
            ChildContent::Value(value) => {
                emit.leaf(&child_name, &AttrList::new(), &value.to_string())?
            }
        }
    }
    emit.end(name)
}

fn uses_prefix(node: &Node, prefix: &str) -> bool {
    node.children().iter().any(|child| {
        child.decl.prefix == Some(prefix)
            || child.as_node().is_some_and(|inner| uses_prefix(inner, prefix))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::NodeBuilder;
    use crate::schema::{FLATTENER_TYPE, PROGRAM, RUN};
    use crate::values::{Duration, Space};
    use crate::xml::parse_node;

    #[test]
    fn test_defaults_are_not_written() {
        let run = NodeBuilder::new(&RUN)
            .push_value("RunLength", Duration::seconds(600.0))
            .build()
            .unwrap();
        let xml = write_node(&run).unwrap();
        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8"?><Run xmlns="http://www.opentrafficsim.org/ots"><RunLength>600 s</RunLength></Run>"#
        );
        assert_eq!(parse_node(&xml, &RUN).unwrap(), run);
    }

    #[test]
    fn test_empty_node() {
        let flattener = parse_node("<FlattenerType><NumSegments/></FlattenerType>", &FLATTENER_TYPE)
            .unwrap();
        let options = WriteOptions::compact().without_declaration();
        let xml = write_node_with(&flattener, &options).unwrap();
        assert!(xml.contains("<NumSegments>64</NumSegments>"));
    }

    #[test]
    fn test_pretty_output() {
        let run = NodeBuilder::new(&RUN)
            .push_value("StartTime", Duration::seconds(10.0))
            .push_value("RunLength", Duration::seconds(600.0))
            .build()
            .unwrap();
        let xml = write_node_with(&run, &WriteOptions::pretty()).unwrap();
        assert!(xml.contains("\n  <StartTime>10 s</StartTime>\n  <RunLength>600 s</RunLength>\n</Run>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let program = NodeBuilder::new(&PROGRAM)
            .set_attribute("Space", Space::Preserve)
            .set_text("IF a < b THEN c & d")
            .build()
            .unwrap();
        let xml = write_node(&program).unwrap();
        assert!(xml.contains(r#"<Program xmlns="http://www.opentrafficsim.org/ots" Space="preserve">IF a &lt; b THEN c &amp; d</Program>"#));
        assert_eq!(parse_node(&xml, &PROGRAM).unwrap(), program);
    }
}
