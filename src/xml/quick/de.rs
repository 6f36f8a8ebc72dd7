//! Reading helpers for quick-xml.
//!
//! Provides:
//! - `Element`: an owned, untyped element tree (qualified names, decoded
//!   attribute values, element children and character data)
//! - `read_tree`: event loop building that tree from any buffered source

use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::xml::DocumentError;

/// A raw XML element before it is matched against a node type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    /// Qualified name as written, e.g. `xi:include`.
    pub name: String,
    /// Attributes in source order with unescaped values.
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Element>,
    /// Concatenated character data and CDATA directly inside this element.
    pub text: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Parse attributes from a `BytesStart` event.
    fn from_start<R: BufRead>(
        start: &BytesStart<'_>,
        reader: &Reader<R>,
    ) -> Result<Self, DocumentError> {
        let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).to_string();
            let value = attr.decode_and_unescape_value(reader)?.to_string();
            attributes.push((key, value));
        }
        Ok(Self {
            name,
            attributes,
            ..Self::default()
        })
    }

    /// Name without its namespace prefix.
    pub fn local_name(&self) -> &str {
        local_name(&self.name)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Strip a namespace prefix from a qualified name.
pub fn local_name(qualified: &str) -> &str {
    qualified
        .split_once(':')
        .map_or(qualified, |(_, local)| local)
}

/// Read the document element of `reader` into an [`Element`] tree.
///
/// Comments, processing instructions, the XML declaration and any doctype are
/// skipped. Text outside the document element is ignored.
pub fn read_tree<R: BufRead>(reader: &mut Reader<R>) -> Result<Element, DocumentError> {
    let mut buf = Vec::new();
    let mut stack: Vec<Element> = Vec::new();

    loop {
        buf.clear();
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => stack.push(Element::from_start(&e, reader)?),
            Event::Empty(e) => {
                let element = Element::from_start(&e, reader)?;
                if let Some(root) = close(&mut stack, element) {
                    return Ok(root);
                }
            }
            Event::End(_) => {
                let element = stack.pop().ok_or(DocumentError::UnexpectedEof)?;
                if let Some(root) = close(&mut stack, element) {
                    return Ok(root);
                }
            }
            Event::Text(e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(top) = stack.last_mut() {
                    top.text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Event::Eof => return Err(DocumentError::UnexpectedEof),
            _ => {}
        }
    }
}

/// Attach a finished element to its parent, or hand it back if it is the root.
fn close(stack: &mut [Element], element: Element) -> Option<Element> {
    match stack.last_mut() {
        Some(parent) => {
            parent.children.push(element);
            None
        }
        None => Some(element),
    }
}

/// Read an element tree from a string.
pub fn read_str(xml: &str) -> Result<Element, DocumentError> {
    let mut reader = Reader::from_str(xml);
    read_tree(&mut reader)
}
