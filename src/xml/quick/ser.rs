//! quick-xml writing helpers used by the node serializer.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::xml::SerializeError;

/// Attributes of one element, in the order they are written.
#[derive(Debug, Default)]
pub struct AttrList {
    attrs: Vec<(String, String)>,
}

impl AttrList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.attrs.push((key.to_string(), value.into()));
        self
    }
}

/// Event-level writer for the three element shapes a node produces: empty,
/// text-only and nested.
pub struct XmlEmitter<'a, W: Write> {
    writer: &'a mut Writer<W>,
}

impl<'a, W: Write> XmlEmitter<'a, W> {
    pub fn new(writer: &'a mut Writer<W>) -> Self {
        Self { writer }
    }

    pub fn declaration(&mut self) -> Result<(), SerializeError> {
        self.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
    }

    /// `<name attrs>text</name>`, or `<name attrs/>` when `text` is empty.
    pub fn leaf(&mut self, name: &str, attrs: &AttrList, text: &str) -> Result<(), SerializeError> {
        let tag = start_tag(name, attrs);
        if text.is_empty() {
            return self.event(Event::Empty(tag));
        }
        self.event(Event::Start(tag.borrow()))?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.event(Event::End(tag.to_end()))
    }

    /// Open a nested element; close it with [`XmlEmitter::end`].
    pub fn start(&mut self, name: &str, attrs: &AttrList) -> Result<(), SerializeError> {
        self.event(Event::Start(start_tag(name, attrs)))
    }

    pub fn end(&mut self, name: &str) -> Result<(), SerializeError> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), SerializeError> {
        self.writer.write_event(event)?;
        Ok(())
    }
}

fn start_tag<'n>(name: &'n str, attrs: &AttrList) -> BytesStart<'n> {
    let mut tag = BytesStart::new(name);
    for (key, value) in &attrs.attrs {
        tag.push_attribute((key.as_str(), value.as_str()));
    }
    tag
}
