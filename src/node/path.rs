use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Segment {
    name: String,
    /// 1-based position among same-named siblings, shown only when the name
    /// is not unique.
    index: Option<usize>,
}

/// Location of an element or attribute, rendered like
/// `Ots/Demand/Od[2]@GlobalFactor`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementPath {
    segments: Vec<Segment>,
    attribute: Option<String>,
}

impl ElementPath {
    pub fn root(name: &str) -> Self {
        Self {
            segments: vec![Segment {
                name: name.to_string(),
                index: None,
            }],
            attribute: None,
        }
    }

    pub fn child(&self, name: &str, index: Option<usize>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment {
            name: name.to_string(),
            index,
        });
        Self {
            segments,
            attribute: None,
        }
    }

    pub fn attribute(&self, name: &str) -> Self {
        Self {
            segments: self.segments.clone(),
            attribute: Some(name.to_string()),
        }
    }

    /// Depth of the element part of the path.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }
}

impl fmt::Display for ElementPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            f.write_str(&segment.name)?;
            if let Some(index) = segment.index {
                write!(f, "[{}]", index)?;
            }
        }
        if let Some(attribute) = &self.attribute {
            write!(f, "@{}", attribute)?;
        }
        Ok(())
    }
}

/// Position of `names[at]` among the entries with the same name, if that name
/// occurs more than once.
pub(crate) fn sibling_index<'a>(names: impl Iterator<Item = &'a str> + Clone, at: usize) -> Option<usize> {
    let name = names.clone().nth(at)?;
    let total = names.clone().filter(|n| *n == name).count();
    (total > 1).then(|| names.take(at + 1).filter(|n| *n == name).count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let path = ElementPath::root("Ots")
            .child("Demand", None)
            .child("Od", Some(2))
            .attribute("GlobalFactor");
        assert_eq!(path.to_string(), "Ots/Demand/Od[2]@GlobalFactor");
        assert_eq!(path.depth(), 3);
    }

    #[test]
    fn test_sibling_index() {
        let names = ["Od", "Route", "Od"];
        assert_eq!(sibling_index(names.iter().copied(), 0), Some(1));
        assert_eq!(sibling_index(names.iter().copied(), 2), Some(2));
        assert_eq!(sibling_index(names.iter().copied(), 1), None);
        assert_eq!(sibling_index(names.iter().copied(), 5), None);
    }
}
