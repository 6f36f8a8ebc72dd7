//! Content model matching shared by the parser and the builder.
//!
//! Both hand over already typed attribute values and child contents; this
//! module checks them against the node type, resolves defaults and produces
//! the frozen [`Node`].

use std::collections::VecDeque;
use std::ptr;

use itertools::Itertools;
use log::trace;

use crate::node::{Attribute, Child, ChildContent, ElementPath, Node, sibling_index};
use crate::schema::{AttributeDecl, ElementDecl, ElementType, NodeType, Occurs, Particle, Usage};
use crate::values::Value;
use crate::xml::DocumentError;

/// Unvalidated content of one node.
#[derive(Debug, Default)]
pub(crate) struct Parts {
    pub attributes: Vec<(String, Value)>,
    pub children: Vec<(String, ChildContent)>,
    pub text: Option<Value>,
}

pub(crate) fn assemble(
    ty: &'static NodeType,
    path: &ElementPath,
    parts: Parts,
) -> Result<Node, DocumentError> {
    let attributes = resolve_attributes(ty, path, parts.attributes)?;
    let children = ContentMatcher::new(ty, path, parts.children).run()?;
    let text = resolve_text(ty, path, parts.text)?;

    trace!("built {} at {}", ty.name, path);
    Ok(Node {
        ty,
        attributes,
        children,
        text,
    })
}

fn resolve_attributes(
    ty: &'static NodeType,
    path: &ElementPath,
    supplied: Vec<(String, Value)>,
) -> Result<Vec<Attribute>, DocumentError> {
    let mut given: Vec<(&'static AttributeDecl, Value)> = Vec::with_capacity(supplied.len());
    for (name, value) in supplied {
        let decl = ty.attribute(&name).ok_or_else(|| {
            DocumentError::violation(
                path.attribute(&name),
                format!("unknown attribute '{}' on {}", name, ty.name),
            )
        })?;
        if given.iter().any(|(seen, _)| ptr::eq(*seen, decl)) {
            return Err(DocumentError::violation(
                path.attribute(&name),
                format!("duplicate attribute '{}'", name),
            ));
        }
        decl.kind
            .check(&value)
            .map_err(|e| DocumentError::value(path.attribute(&name), e))?;
        given.push((decl, value));
    }

    let mut resolved = Vec::with_capacity(ty.attributes.len());
    for decl in ty.attributes {
        match given.iter().position(|(seen, _)| ptr::eq(*seen, decl)) {
            Some(position) => {
                let (_, value) = given.swap_remove(position);
                resolved.push(Attribute {
                    decl,
                    value,
                    defaulted: false,
                });
            }
            None => match decl.usage {
                Usage::Required => {
                    return Err(DocumentError::violation(
                        path.attribute(decl.name),
                        format!("missing required attribute '{}'", decl.name),
                    ));
                }
                Usage::Optional => {}
                Usage::Default(text) => {
                    let value = decl.kind.parse(text).map_err(|e| {
                        DocumentError::violation(
                            path.attribute(decl.name),
                            format!("unresolvable default '{}': {}", text, e),
                        )
                    })?;
                    trace!("{} defaults to {}", path.attribute(decl.name), value);
                    resolved.push(Attribute {
                        decl,
                        value,
                        defaulted: true,
                    });
                }
            },
        }
    }
    Ok(resolved)
}

fn resolve_text(
    ty: &'static NodeType,
    path: &ElementPath,
    supplied: Option<Value>,
) -> Result<Option<Value>, DocumentError> {
    match (ty.text, supplied) {
        (Some(decl), Some(value)) => {
            decl.kind
                .check(&value)
                .map_err(|e| DocumentError::value(path.clone(), e))?;
            Ok(Some(value))
        }
        (Some(decl), None) => decl
            .kind
            .parse("")
            .map(Some)
            .map_err(|e| DocumentError::value(path.clone(), e)),
        (None, Some(_)) => Err(DocumentError::violation(
            path.clone(),
            format!("{} does not take text content", ty.name),
        )),
        (None, None) => Ok(None),
    }
}

/// Walks the particles of a content model in order, consuming the supplied
/// children.
struct ContentMatcher<'a> {
    ty: &'static NodeType,
    path: &'a ElementPath,
    names: Vec<String>,
    pending: VecDeque<(usize, String, ChildContent)>,
    matched: Vec<Child>,
}

impl<'a> ContentMatcher<'a> {
    fn new(
        ty: &'static NodeType,
        path: &'a ElementPath,
        supplied: Vec<(String, ChildContent)>,
    ) -> Self {
        let names = supplied.iter().map(|(name, _)| name.clone()).collect();
        let pending = supplied
            .into_iter()
            .enumerate()
            .map(|(i, (name, content))| (i, name, content))
            .collect();
        Self {
            ty,
            path,
            names,
            pending,
            matched: Vec::new(),
        }
    }

    fn child_path(&self, index: usize) -> ElementPath {
        let name = self.names.get(index).map(String::as_str).unwrap_or_default();
        self.path.child(
            name,
            sibling_index(self.names.iter().map(String::as_str), index),
        )
    }

    fn next_name(&self) -> Option<&str> {
        self.pending.front().map(|(_, name, _)| name.as_str())
    }

    fn run(mut self) -> Result<Vec<Child>, DocumentError> {
        for particle in self.ty.content {
            match particle {
                Particle::Element(decl) => self.match_element(decl)?,
                Particle::Choice {
                    name,
                    occurs,
                    alternatives,
                } => {
                    let count = if occurs.is_repeated() {
                        self.match_repeated_choice(*name, *occurs, *alternatives)?
                    } else {
                        self.match_single_choice(*name, *alternatives)?
                    };
                    if count < occurs.min {
                        return Err(DocumentError::violation(
                            self.path.clone(),
                            format!(
                                "missing one of {} (choice '{}')",
                                alternatives.iter().map(ElementDecl::branch_label).join(", "),
                                name
                            ),
                        ));
                    }
                }
            }
        }

        if let Some((index, name, _)) = self.pending.front() {
            let message = match self.ty.element(name) {
                Some((_, Some(group))) if self.matched.iter().any(|c| c.choice == Some(group)) => {
                    format!("'{}' conflicts with the populated choice '{}'", name, group)
                }
                Some(_) => format!("element '{}' is out of order or repeated too often", name),
                None => format!("unexpected element '{}' in {}", name, self.ty.name),
            };
            return Err(DocumentError::violation(self.child_path(*index), message));
        }
        Ok(self.matched)
    }

    fn match_element(&mut self, decl: &'static ElementDecl) -> Result<(), DocumentError> {
        let count = self.take_run(decl, None)?;
        if count == 0 {
            if let Some(default) = decl.default {
                let child = self.default_child(decl, default)?;
                self.matched.push(child);
                return Ok(());
            }
        }
        if count < decl.occurs.min {
            return Err(DocumentError::violation(
                self.path.clone(),
                format!("missing required element '{}'", decl.name),
            ));
        }
        Ok(())
    }

    fn match_single_choice(
        &mut self,
        group: &'static str,
        alternatives: &'static [ElementDecl],
    ) -> Result<u32, DocumentError> {
        let Some(chosen) = self.next_alternative(alternatives) else {
            return Ok(0);
        };
        self.take_branch(chosen, group)?;

        if let Some(other) = self
            .next_alternative(alternatives)
            .filter(|other| other.name != chosen.name)
        {
            let index = self.pending.front().map(|(i, _, _)| *i).unwrap_or_default();
            return Err(DocumentError::violation(
                self.child_path(index),
                format!(
                    "choice '{}' allows only one of {}; found both '{}' and '{}'",
                    group,
                    alternatives.iter().map(ElementDecl::branch_label).join(", "),
                    chosen.name,
                    other.name
                ),
            ));
        }
        Ok(1)
    }

    fn match_repeated_choice(
        &mut self,
        group: &'static str,
        occurs: Occurs,
        alternatives: &'static [ElementDecl],
    ) -> Result<u32, DocumentError> {
        let mut count = 0;
        while occurs.admits(count) {
            let Some(chosen) = self.next_alternative(alternatives) else {
                break;
            };
            self.take_branch(chosen, group)?;
            count += 1;
        }
        Ok(count)
    }

    fn next_alternative(&self, alternatives: &'static [ElementDecl]) -> Option<&'static ElementDecl> {
        let name = self.next_name()?;
        alternatives.iter().find(|alt| alt.name == name)
    }

    /// Consume one occurrence of a chosen alternative. A sequence
    /// alternative also consumes the elements declared to follow it.
    fn take_branch(
        &mut self,
        chosen: &'static ElementDecl,
        group: &'static str,
    ) -> Result<(), DocumentError> {
        self.take_run(chosen, Some(group))?;
        for decl in chosen.followed_by {
            if self.take_run(decl, Some(group))? < decl.occurs.min {
                return Err(DocumentError::violation(
                    self.path.clone(),
                    format!(
                        "'{}' must be followed by '{}' (choice '{}')",
                        chosen.name, decl.name, group
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Consume consecutive children named like `decl`, as many as it admits.
    fn take_run(
        &mut self,
        decl: &'static ElementDecl,
        choice: Option<&'static str>,
    ) -> Result<u32, DocumentError> {
        let mut count = 0;
        while self.next_name() == Some(decl.name) && decl.occurs.admits(count) {
            let Some((index, _, content)) = self.pending.pop_front() else {
                break;
            };
            let child = self.make_child(decl, choice, content, index)?;
            self.matched.push(child);
            count += 1;
        }
        Ok(count)
    }

    fn make_child(
        &self,
        decl: &'static ElementDecl,
        choice: Option<&'static str>,
        content: ChildContent,
        index: usize,
    ) -> Result<Child, DocumentError> {
        match (&decl.ty, &content) {
            (ElementType::Simple(kind), ChildContent::Value(value)) => {
                kind.check(value)
                    .map_err(|e| DocumentError::value(self.child_path(index), e))?;
            }
            (ElementType::Complex(ty), ChildContent::Node(node)) => {
                if !ptr::eq(*ty, node.ty) {
                    return Err(DocumentError::violation(
                        self.child_path(index),
                        format!("expected a {} node, got {}", ty.name, node.ty.name),
                    ));
                }
            }
            (ElementType::Simple(kind), ChildContent::Node(_)) => {
                return Err(DocumentError::violation(
                    self.child_path(index),
                    format!("'{}' holds a {} value, not a node", decl.name, kind),
                ));
            }
            (ElementType::Complex(ty), ChildContent::Value(_)) => {
                return Err(DocumentError::violation(
                    self.child_path(index),
                    format!("'{}' must be a {} node", decl.name, ty.name),
                ));
            }
        }
        Ok(Child {
            decl,
            choice,
            content,
            defaulted: false,
        })
    }

    fn default_child(
        &self,
        decl: &'static ElementDecl,
        default: &'static str,
    ) -> Result<Child, DocumentError> {
        let path = self.path.child(decl.name, None);
        let ElementType::Simple(kind) = decl.ty else {
            return Err(DocumentError::violation(
                path,
                "only simple elements can declare a default",
            ));
        };
        let value = kind.parse(default).map_err(|e| {
            DocumentError::violation(path.clone(), format!("unresolvable default '{}': {}", default, e))
        })?;
        trace!("{} defaults to {}", path, value);
        Ok(Child {
            decl,
            choice: None,
            content: ChildContent::Value(value),
            defaulted: true,
        })
    }
}
