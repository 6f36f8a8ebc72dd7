//! Error types for reading and writing OTS documents.

use std::path::PathBuf;

use thiserror::Error;

use crate::node::ElementPath;
use crate::values::ValueError;

/// An error raised while reading, building or validating a document.
///
/// Parsing stops at the first error; there are no partial documents.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Malformed XML.
    #[error("XML parsing error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute syntax.
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value does not match the lexical grammar of its type.
    #[error("format error at {path}: {message}")]
    Format { path: ElementPath, message: String },

    /// A value is well-formed but outside the domain of its type.
    #[error("range error at {path}: {message}")]
    Range { path: ElementPath, message: String },

    /// The document structure does not match the schema.
    #[error("schema violation at {path}: {message}")]
    SchemaViolation { path: ElementPath, message: String },

    /// An `xi:include` could not be resolved.
    #[error("cannot include '{href}': {message}")]
    Include { href: String, message: String },

    #[error("unexpected end of XML")]
    UnexpectedEof,

    /// An error in a specific file.
    #[error("in file '{}': {source}", file.display())]
    File {
        file: PathBuf,
        #[source]
        source: Box<DocumentError>,
    },
}

impl DocumentError {
    pub fn violation(path: ElementPath, message: impl Into<String>) -> Self {
        DocumentError::SchemaViolation {
            path,
            message: message.into(),
        }
    }

    /// Attach the location of an invalid value to a value error.
    pub fn value(path: ElementPath, error: ValueError) -> Self {
        match error {
            ValueError::Format { .. } => DocumentError::Format {
                path,
                message: error.to_string(),
            },
            ValueError::Range { .. } => DocumentError::Range {
                path,
                message: error.to_string(),
            },
        }
    }

    pub fn in_file(self, file: impl Into<PathBuf>) -> Self {
        DocumentError::File {
            file: file.into(),
            source: Box::new(self),
        }
    }

    /// Location in the document, if the error has one.
    pub fn path(&self) -> Option<&ElementPath> {
        match self {
            DocumentError::Format { path, .. }
            | DocumentError::Range { path, .. }
            | DocumentError::SchemaViolation { path, .. } => Some(path),
            DocumentError::File { source, .. } => source.path(),
            _ => None,
        }
    }
}

/// Errors that can occur while writing XML.
#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("XML writing error: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
