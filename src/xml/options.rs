//! Reader and writer configuration.

use std::fmt;
use std::sync::Arc;

use crate::xml::include::IncludeResolver;

/// Configuration for parsing documents.
#[derive(Clone)]
pub struct ParseOptions {
    resolver: Option<Arc<dyn IncludeResolver>>,
    /// Skip attributes in foreign namespaces instead of rejecting them.
    pub ignore_foreign_attributes: bool,
    /// Maximum nesting of includes within includes.
    pub max_include_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            resolver: None,
            ignore_foreign_attributes: true,
            max_include_depth: 16,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resolver(mut self, resolver: impl IncludeResolver + 'static) -> Self {
        self.resolver = Some(Arc::new(resolver));
        self
    }

    pub fn with_ignore_foreign_attributes(mut self, ignore: bool) -> Self {
        self.ignore_foreign_attributes = ignore;
        self
    }

    pub fn resolver(&self) -> Option<&dyn IncludeResolver> {
        self.resolver.as_deref()
    }
}

impl fmt::Debug for ParseOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("resolver", &self.resolver.is_some())
            .field("ignore_foreign_attributes", &self.ignore_foreign_attributes)
            .field("max_include_depth", &self.max_include_depth)
            .finish()
    }
}

/// Configuration for writing documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteOptions {
    /// Spaces per nesting level; `None` writes everything on one line.
    pub indent: Option<usize>,
    /// Emit `<?xml version="1.0" encoding="UTF-8"?>` first.
    pub declaration: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            indent: None,
            declaration: true,
        }
    }
}

impl WriteOptions {
    pub const fn compact() -> Self {
        Self {
            indent: None,
            declaration: true,
        }
    }

    pub const fn pretty() -> Self {
        Self {
            indent: Some(2),
            declaration: true,
        }
    }

    pub const fn without_declaration(mut self) -> Self {
        self.declaration = false;
        self
    }
}
