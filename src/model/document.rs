//! The root scenario document.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::ptr;
use std::str::FromStr;

use log::debug;

use crate::model::{ControlSection, DefinitionsSection, FromNode, Od, Run, children};
use crate::node::{ElementPath, Node};
use crate::schema::OTS;
use crate::values::{Space, Value};
use crate::xml::{
    DocumentError, FileIncludeResolver, ParseOptions, SerializeError, WriteOptions, parse_node_with,
    read_node, write_node_with, write_node_to,
};

/// A complete OTS scenario.
///
/// The validated node tree is kept as the source of truth; the typed
/// sections are read from it once, on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
    pub definitions: Vec<DefinitionsSection>,
    pub controllers: Vec<ControlSection>,
    pub ods: Vec<Od>,
    pub run: Run,
}

impl Document {
    /// Wrap a node of the root type, e.g. one assembled with a builder.
    pub fn new(root: Node) -> Result<Self, DocumentError> {
        if !ptr::eq(root.node_type(), &OTS) {
            return Err(DocumentError::violation(
                ElementPath::root(root.name()),
                format!("expected an {} document", OTS.name),
            ));
        }
        let missing = |section: &str| {
            DocumentError::violation(
                ElementPath::root(OTS.name),
                format!("missing section '{}'", section),
            )
        };

        let definitions = root.child("Definitions").ok_or_else(|| missing("Definitions"))?;
        let definitions = DefinitionsSection::read_all(definitions)?;
        let controllers = match root.child("Control") {
            Some(control) => ControlSection::read_all(control)?,
            None => Vec::new(),
        };
        let ods = match root.child("Demand") {
            Some(demand) => children(demand, "Od")?,
            None => Vec::new(),
        };
        let run = Run::from_node(root.child("Run").ok_or_else(|| missing("Run"))?)?;

        debug!(
            "document with {} definition sections, {} controllers, {} OD matrices",
            definitions.len(),
            controllers.len(),
            ods.len()
        );
        Ok(Self {
            root,
            definitions,
            controllers,
            ods,
            run,
        })
    }

    pub fn parse_with(xml: &str, options: &ParseOptions) -> Result<Self, DocumentError> {
        debug!("parsing document ({} bytes)", xml.len());
        Self::new(parse_node_with(xml, &OTS, options)?)
    }

    pub fn from_reader<R: BufRead>(source: R, options: &ParseOptions) -> Result<Self, DocumentError> {
        Self::new(read_node(source, &OTS, options)?)
    }

    /// Read a document from disk, resolving includes relative to its directory.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        debug!("reading document {}", path.display());
        let options = ParseOptions::new().with_resolver(FileIncludeResolver::for_file(path));
        File::open(path)
            .map_err(DocumentError::from)
            .and_then(|file| Self::from_reader(BufReader::new(file), &options))
            .map_err(|e| e.in_file(path))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// The document-wide whitespace policy for embedded text.
    pub fn space(&self) -> Space {
        match self.root.attribute("Space") {
            Some(Value::Space(space)) => *space,
            _ => Space::default(),
        }
    }

    pub fn definitions_node(&self) -> Option<&Node> {
        self.root.child("Definitions")
    }

    pub fn network(&self) -> Option<&Node> {
        self.root.child("Network")
    }

    pub fn demand(&self) -> Option<&Node> {
        self.root.child("Demand")
    }

    pub fn control(&self) -> Option<&Node> {
        self.root.child("Control")
    }

    pub fn models(&self) -> Option<&Node> {
        self.root.child("Models")
    }

    pub fn scenarios(&self) -> Option<&Node> {
        self.root.child("Scenarios")
    }

    pub fn animation(&self) -> Option<&Node> {
        self.root.child("Animation")
    }

    pub fn to_xml(&self) -> Result<String, SerializeError> {
        write_node_with(&self.root, &WriteOptions::compact())
    }

    pub fn to_xml_pretty(&self) -> Result<String, SerializeError> {
        write_node_with(&self.root, &WriteOptions::pretty())
    }

    pub fn write_to<W: Write>(&self, sink: W, options: &WriteOptions) -> Result<(), SerializeError> {
        write_node_to(sink, &self.root, options)
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &ParseOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{Duration, Expr};

    const MINIMAL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<Ots xmlns="http://www.opentrafficsim.org/ots">
  <Definitions/>
  <Network/>
  <Run/>
</Ots>"#;

    #[test]
    fn test_minimal_document() {
        let document: Document = MINIMAL.parse().unwrap();
        assert!(document.definitions.is_empty());
        assert!(document.controllers.is_empty());
        assert!(document.ods.is_empty());
        assert!(document.demand().is_none());
        assert_eq!(document.space(), Space::Preserve);
        assert_eq!(document.run.run_length, Expr::Literal(Duration::seconds(3600.0)));
    }

    #[test]
    fn test_missing_run() {
        let xml = r#"<Ots xmlns="http://www.opentrafficsim.org/ots"><Definitions/><Network/></Ots>"#;
        let error = xml.parse::<Document>().unwrap_err();
        assert!(matches!(error, DocumentError::SchemaViolation { .. }));
        assert_eq!(error.path().unwrap().to_string(), "Ots");
    }

    #[test]
    fn test_wrong_root() {
        let node = crate::xml::parse_node("<Run/>", &crate::schema::RUN).unwrap();
        assert!(Document::new(node).is_err());
    }

    #[test]
    fn test_to_xml_omits_defaults() {
        let document: Document = MINIMAL.parse().unwrap();
        let xml = document.to_xml().unwrap();
        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="UTF-8"?><Ots xmlns="http://www.opentrafficsim.org/ots"><Definitions/><Network/><Run/></Ots>"#
        );
        assert_eq!(xml.parse::<Document>().unwrap(), document);
    }

    #[test]
    fn test_typed_sections() {
        let document = crate::test_utils::parse_sections(
            r#"<xi:include href="types.xml"/>"#,
            r#"<Demand><Od Id="A"/><Sink Link="L" Lane="1" Position="10 m"/><Od Id="B"/></Demand>
               <Control><FixedTime Id="FT" CycleTime="60 s">
                   <Cycle SignalGroupId="SG" Offset="0 s" Green="20 s" Yellow="3 s"/>
               </FixedTime></Control>"#,
        );
        assert_eq!(
            document.definitions,
            [DefinitionsSection::Include {
                href: "types.xml".into()
            }]
        );
        assert_eq!(document.ods.iter().map(|od| od.id.as_str()).collect::<Vec<_>>(), ["A", "B"]);
        assert_eq!(document.controllers[0].id(), "FT");
    }

    #[test]
    fn test_from_path_reports_file() {
        let error = Document::from_path("does/not/exist.xml").unwrap_err();
        assert!(matches!(error, DocumentError::File { .. }));
        assert!(error.to_string().contains("exist.xml"));
    }
}
