//! Parse driver: raw [`Element`] trees into validated [`Node`]s.
//!
//! Each element is read against the node type its parent declares for it.
//! Attribute values and simple children go through their value kinds, complex
//! children are read recursively, and the collected parts are handed to the
//! same content matcher the builder uses.

use std::borrow::Cow;
use std::io::BufRead;

use log::{trace, warn};
use quick_xml::Reader;

use crate::node::assemble::{Parts, assemble};
use crate::node::{ChildContent, ElementPath, Node, sibling_index};
use crate::schema::{ElementDecl, ElementType, NodeType};
use crate::values::{Space, Value, ValueKind};
use crate::xml::DocumentError;
use crate::xml::options::ParseOptions;
use crate::xml::quick::{Element, read_tree};

/// Parse a document or fragment whose root element is of type `ty`.
pub fn parse_node(xml: &str, ty: &'static NodeType) -> Result<Node, DocumentError> {
    parse_node_with(xml, ty, &ParseOptions::default())
}

pub fn parse_node_with(
    xml: &str,
    ty: &'static NodeType,
    options: &ParseOptions,
) -> Result<Node, DocumentError> {
    let mut reader = Reader::from_str(xml);
    let root = read_tree(&mut reader)?;
    element_to_node(&root, ty, options)
}

/// Parse from any buffered source.
pub fn read_node<R: BufRead>(
    source: R,
    ty: &'static NodeType,
    options: &ParseOptions,
) -> Result<Node, DocumentError> {
    let mut reader = Reader::from_reader(source);
    let root = read_tree(&mut reader)?;
    element_to_node(&root, ty, options)
}

/// Read an already parsed element tree as a node of type `ty`.
pub fn element_to_node(
    root: &Element,
    ty: &'static NodeType,
    options: &ParseOptions,
) -> Result<Node, DocumentError> {
    let path = ElementPath::root(root.local_name());
    if root.local_name() != ty.name {
        return Err(DocumentError::violation(
            path,
            format!("expected root element '{}', found '{}'", ty.name, root.name),
        ));
    }
    NodeReader { options }.read(root, ty, &path, None)
}

struct NodeReader<'a> {
    options: &'a ParseOptions,
}

impl NodeReader<'_> {
    /// `inherited` is the nearest explicit `Space` of an ancestor.
    fn read(
        &self,
        element: &Element,
        ty: &'static NodeType,
        path: &ElementPath,
        inherited: Option<Space>,
    ) -> Result<Node, DocumentError> {
        let attributes = self.read_attributes(element, ty, path)?;
        let own_space = attributes.iter().find_map(|(name, value)| match value {
            Value::Space(space) if name == "Space" => Some(*space),
            _ => None,
        });
        let space = own_space.or(inherited);

        let text = match ty.text {
            Some(decl) => {
                let raw = match decl.kind {
                    ValueKind::Text => space.unwrap_or_default().apply(&element.text),
                    _ => element.text.clone(),
                };
                Some(
                    decl.kind
                        .parse(&raw)
                        .map_err(|e| DocumentError::value(path.clone(), e))?,
                )
            }
            None if !element.text.trim().is_empty() => {
                return Err(DocumentError::violation(
                    path.clone(),
                    format!("{} does not take text content", ty.name),
                ));
            }
            None => None,
        };

        let expanded = self.expand_includes(&element.children, ty, 0)?;
        let names: Vec<&str> = expanded.iter().map(|child| child.local_name()).collect();
        let mut children = Vec::with_capacity(expanded.len());
        for (index, child) in expanded.iter().enumerate() {
            let name = child.local_name();
            let child_path = path.child(name, sibling_index(names.iter().copied(), index));
            let Some((decl, _)) = ty.element(name) else {
                return Err(DocumentError::violation(
                    child_path,
                    format!("unexpected element '{}' in {}", child.name, ty.name),
                ));
            };
            let content = self.read_child(child, decl, &child_path, space)?;
            children.push((name.to_string(), content));
        }

        assemble(
            ty,
            path,
            Parts {
                attributes,
                children,
                text,
            },
        )
    }

    fn read_attributes(
        &self,
        element: &Element,
        ty: &'static NodeType,
        path: &ElementPath,
    ) -> Result<Vec<(String, Value)>, DocumentError> {
        let mut attributes = Vec::with_capacity(element.attributes.len());
        for (key, raw) in &element.attributes {
            if is_namespace_declaration(key) || is_xml_infrastructure(key) {
                continue;
            }
            if key.contains(':') {
                if !self.options.ignore_foreign_attributes {
                    return Err(DocumentError::violation(
                        path.attribute(key),
                        format!("foreign attribute '{}' on {}", key, ty.name),
                    ));
                }
                warn!("ignoring foreign attribute {}", path.attribute(key));
                continue;
            }
            let Some(decl) = ty.attribute(key) else {
                return Err(DocumentError::violation(
                    path.attribute(key),
                    format!("unknown attribute '{}' on {}", key, ty.name),
                ));
            };
            let value = decl
                .kind
                .parse(raw)
                .map_err(|e| DocumentError::value(path.attribute(key), e))?;
            attributes.push((key.clone(), value));
        }
        Ok(attributes)
    }

    fn read_child(
        &self,
        child: &Element,
        decl: &'static ElementDecl,
        path: &ElementPath,
        space: Option<Space>,
    ) -> Result<ChildContent, DocumentError> {
        match decl.ty {
            ElementType::Complex(ty) => self.read(child, ty, path, space).map(ChildContent::Node),
            ElementType::Simple(kind) => {
                if let Some(nested) = child.children.first() {
                    return Err(DocumentError::violation(
                        path.child(nested.local_name(), None),
                        format!("'{}' takes no child elements", decl.name),
                    ));
                }
                if let Some((key, _)) = child
                    .attributes
                    .iter()
                    .find(|(key, _)| !is_namespace_declaration(key))
                {
                    return Err(DocumentError::violation(
                        path.attribute(key),
                        format!("'{}' takes no attributes", decl.name),
                    ));
                }

                let raw = match kind {
                    ValueKind::Text => space.unwrap_or_default().apply(&child.text),
                    _ => child.text.clone(),
                };
                // An element present with empty content takes its declared default.
                let raw = match decl.default {
                    Some(default) if raw.trim().is_empty() => {
                        trace!("{} is empty, using default {}", path, default);
                        default.to_string()
                    }
                    _ => raw,
                };
                kind.parse(&raw)
                    .map(ChildContent::Value)
                    .map_err(|e| DocumentError::value(path.clone(), e))
            }
        }
    }

    /// Replace `xi:include` children by what the resolver returns. Without a
    /// resolver the include stays in place as an `include` node.
    fn expand_includes<'e>(
        &self,
        children: &'e [Element],
        ty: &'static NodeType,
        depth: usize,
    ) -> Result<Vec<Cow<'e, Element>>, DocumentError> {
        let mut expanded = Vec::with_capacity(children.len());
        for child in children {
            let is_include = child.local_name() == "include" && ty.element("include").is_some();
            if !is_include {
                expanded.push(Cow::Borrowed(child));
                continue;
            }
            let href = child.attribute("href").unwrap_or_default();
            let Some(resolver) = self.options.resolver() else {
                warn!("include '{}' left unresolved", href);
                expanded.push(Cow::Borrowed(child));
                continue;
            };
            if depth >= self.options.max_include_depth {
                return Err(DocumentError::Include {
                    href: href.to_string(),
                    message: format!(
                        "includes nested deeper than {}",
                        self.options.max_include_depth
                    ),
                });
            }

            let mut included = Vec::new();
            for element in resolver.resolve(href)? {
                if element.local_name() == ty.name {
                    included.extend(element.children);
                } else {
                    included.push(element);
                }
            }
            trace!("include '{}' supplied {} elements", href, included.len());
            for element in self.expand_includes(&included, ty, depth + 1)? {
                expanded.push(Cow::Owned(element.into_owned()));
            }
        }
        Ok(expanded)
    }
}

fn is_namespace_declaration(key: &str) -> bool {
    key == "xmlns" || key.starts_with("xmlns:")
}

/// Attributes of the XML and XML Schema instance vocabularies.
fn is_xml_infrastructure(key: &str) -> bool {
    key.starts_with("xml:") || key.starts_with("xsi:")
}
