//! # Expression escape
//!
//! Most value types accept, instead of a literal, an expression in braces:
//! `Offset="{cycleOffset + 2 s}"`. The document model never evaluates
//! expressions; it keeps the body verbatim so that an evaluator further down
//! the line can. [`Expr`] is the "literal or expression" result handed out by
//! the typed bindings.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::values::ValueError;

/// The raw, unevaluated body of a `{...}` expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expression(String);

impl Expression {
    /// Create an expression from its body (the text between the braces).
    pub fn new(body: impl Into<String>) -> Result<Self, ValueError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(ValueError::format(
                "expression",
                format!("{{{}}}", body),
                "expression body is empty",
            ));
        }
        Ok(Self(body))
    }

    /// Recognize the escaped form `{body}`.
    ///
    /// Returns `Ok(None)` when the text is not brace-delimited, i.e. when it
    /// should be read as a literal instead.
    pub fn from_escaped(text: &str) -> Result<Option<Self>, ValueError> {
        let trimmed = text.trim();
        match trimmed
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
        {
            Some(body) => Self::new(body).map(Some),
            None => Ok(None),
        }
    }

    pub fn body(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}}}", self.0)
    }
}

impl Serialize for Expression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Expression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = Deserialize::deserialize(deserializer)?;
        match Expression::from_escaped(&s) {
            Ok(Some(expression)) => Ok(expression),
            Ok(None) => Err(serde::de::Error::custom(format!(
                "expected an expression in braces, got '{}'",
                s
            ))),
            Err(e) => Err(serde::de::Error::custom(e)),
        }
    }
}

/// Either a literal value or an unevaluated expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr<T> {
    Literal(T),
    Expression(Expression),
}

impl<T> Expr<T> {
    /// The literal value, if this is not an expression.
    pub fn literal(&self) -> Option<&T> {
        match self {
            Expr::Literal(value) => Some(value),
            Expr::Expression(_) => None,
        }
    }

    pub fn expression(&self) -> Option<&Expression> {
        match self {
            Expr::Literal(_) => None,
            Expr::Expression(expression) => Some(expression),
        }
    }

    pub fn is_expression(&self) -> bool {
        matches!(self, Expr::Expression(_))
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Expr<U> {
        match self {
            Expr::Literal(value) => Expr::Literal(f(value)),
            Expr::Expression(expression) => Expr::Expression(expression),
        }
    }
}

impl<T> From<T> for Expr<T> {
    fn from(value: T) -> Self {
        Expr::Literal(value)
    }
}

impl<T: fmt::Display> fmt::Display for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(value) => value.fmt(f),
            Expr::Expression(expression) => expression.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_escaped() {
        let expression = Expression::from_escaped("{ 2 * speedLimit }")
            .unwrap()
            .unwrap();
        assert_eq!(expression.body(), " 2 * speedLimit ");
        assert_eq!(expression.to_string(), "{ 2 * speedLimit }");

        assert_eq!(Expression::from_escaped("12 m").unwrap(), None);
        assert_eq!(Expression::from_escaped("{12 m").unwrap(), None);
    }

    #[test]
    fn test_empty_expression_is_rejected() {
        assert!(matches!(
            Expression::from_escaped("{}"),
            Err(ValueError::Format { .. })
        ));
        assert!(Expression::from_escaped("{   }").is_err());
    }

    #[test]
    fn test_expr_accessors() {
        let literal: Expr<i64> = Expr::Literal(3);
        assert_eq!(literal.literal(), Some(&3));
        assert!(!literal.is_expression());

        let deferred: Expr<i64> = Expr::Expression(Expression::new("n").unwrap());
        assert_eq!(deferred.literal(), None);
        assert_eq!(deferred.map(|n| n * 2).to_string(), "{n}");
    }
}
