//! XInclude expansion hook.
//!
//! The parser never touches the file system on its own. When a resolver is
//! configured, each `xi:include` inside `Definitions` is handed to it and
//! replaced in place by the elements it returns.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::xml::DocumentError;
use crate::xml::quick::{Element, read_str};

/// Resolves the `href` of an `xi:include` into elements to splice in.
pub trait IncludeResolver: Send + Sync {
    fn resolve(&self, href: &str) -> Result<Vec<Element>, DocumentError>;
}

/// Resolves includes as files relative to a base directory.
///
/// The included document's root element is returned as is; a `Definitions`
/// root is flattened into its children by the parser.
#[derive(Debug, Clone)]
pub struct FileIncludeResolver {
    base: PathBuf,
}

impl FileIncludeResolver {
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// A resolver for includes written relative to `file`.
    pub fn for_file(file: &Path) -> Self {
        Self::new(file.parent().unwrap_or_else(|| Path::new(".")))
    }

    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl IncludeResolver for FileIncludeResolver {
    fn resolve(&self, href: &str) -> Result<Vec<Element>, DocumentError> {
        let path = self.base.join(href);
        debug!("including {}", path.display());
        let text = fs::read_to_string(&path).map_err(|e| DocumentError::Include {
            href: href.to_string(),
            message: e.to_string(),
        })?;
        let mut root = read_str(&text).map_err(|e| DocumentError::Include {
            href: href.to_string(),
            message: e.to_string(),
        })?;
        if let Some(dir) = Path::new(href).parent().filter(|dir| !dir.as_os_str().is_empty()) {
            rebase_includes(&mut root, dir);
        }
        Ok(vec![root])
    }
}

/// Make the hrefs of nested includes relative to the resolver base instead of
/// the included file.
fn rebase_includes(element: &mut Element, dir: &Path) {
    if element.local_name() == "include" {
        for (_, href) in element.attributes.iter_mut().filter(|(key, _)| key == "href") {
            *href = dir.join(href.as_str()).to_string_lossy().into_owned();
        }
    }
    for child in &mut element.children {
        rebase_includes(child, dir);
    }
}
