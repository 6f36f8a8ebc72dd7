//! # Value types and adapters
//!
//! Every attribute and simple element of an OTS document has a *simple type*:
//! a duration, a length, a fraction, a symbol from a closed vocabulary, and so
//! on. This module provides
//!
//! - the in-memory [`Value`] those types parse into,
//! - [`ValueKind`], the adapter bound to each simple type, converting between
//!   the lexical form and a [`Value`] in both directions and enforcing the
//!   type's range,
//! - the concrete value types ([`Quantity`], [`Color`], [`ClassName`], the
//!   vocabularies in [`symbols`]) and the `{...}` [`Expression`] escape.
//!
//! ```rust
//! use otsxml::values::{Value, ValueError, ValueKind};
//!
//! let value = ValueKind::PositiveInteger.parse("3").unwrap();
//! assert_eq!(value, Value::Integer(3));
//! assert_eq!(ValueKind::PositiveInteger.format(&value), "3");
//!
//! assert!(matches!(
//!     ValueKind::PositiveInteger.parse("0"),
//!     Err(ValueError::Range { .. })
//! ));
//! assert!(matches!(
//!     ValueKind::Fraction.parse("half"),
//!     Err(ValueError::Format { .. })
//! ));
//! ```

pub mod expression;
pub(crate) mod parse;
pub mod scalar;
pub mod symbols;
pub mod units;

use std::fmt;

use thiserror::Error;

pub use expression::{Expr, Expression};
pub use scalar::{ClassName, Color};
pub use symbols::{
    Anticipation, Encoding, Estimation, GraphicsType, GtuColorer, Incentive, Interpolation, Space,
    TaskManager,
};
pub use units::{
    Acceleration, AccelerationUnit, Angle, AngleUnit, Duration, DurationUnit, Frequency,
    FrequencyUnit, Length, LengthUnit, LinearDensity, LinearDensityUnit, Quantity, Speed,
    SpeedUnit, Unit,
};

/// Errors raised by value adapters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    /// The text does not match the lexical grammar of the type.
    #[error("invalid {kind} '{text}': {reason}")]
    Format {
        kind: &'static str,
        text: String,
        reason: String,
    },
    /// The text is well-formed but outside the domain of the type.
    #[error("{kind} '{text}' is out of range: {reason}")]
    Range {
        kind: &'static str,
        text: String,
        reason: String,
    },
}

impl ValueError {
    pub fn format(kind: &'static str, text: impl Into<String>, reason: impl Into<String>) -> Self {
        ValueError::Format {
            kind,
            text: text.into(),
            reason: reason.into(),
        }
    }

    pub fn range(kind: &'static str, text: impl Into<String>, reason: impl Into<String>) -> Self {
        ValueError::Range {
            kind,
            text: text.into(),
            reason: reason.into(),
        }
    }
}

/// A parsed attribute or element value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    String(String),
    ClassName(ClassName),
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Length(Length),
    Duration(Duration),
    Speed(Speed),
    Acceleration(Acceleration),
    Angle(Angle),
    Frequency(Frequency),
    LinearDensity(LinearDensity),
    Color(Color),
    Space(Space),
    Interpolation(Interpolation),
    GtuColorer(GtuColorer),
    Incentive(Incentive),
    Estimation(Estimation),
    Anticipation(Anticipation),
    TaskManager(TaskManager),
    GraphicsType(GraphicsType),
    Encoding(Encoding),
    Expression(Expression),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Value::Expression(expression) => Some(expression),
            _ => None,
        }
    }

    /// The number held by a double or a quantity, as written.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Double(d) => Some(*d),
            Value::Length(q) => Some(q.value()),
            Value::Duration(q) => Some(q.value()),
            Value::Speed(q) => Some(q.value()),
            Value::Acceleration(q) => Some(q.value()),
            Value::Angle(q) => Some(q.value()),
            Value::Frequency(q) => Some(q.value()),
            Value::LinearDensity(q) => Some(q.value()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => f.write_str(s),
            Value::ClassName(name) => name.fmt(f),
            Value::Boolean(b) => b.fmt(f),
            Value::Integer(i) => i.fmt(f),
            Value::Double(d) => d.fmt(f),
            Value::Length(q) => q.fmt(f),
            Value::Duration(q) => q.fmt(f),
            Value::Speed(q) => q.fmt(f),
            Value::Acceleration(q) => q.fmt(f),
            Value::Angle(q) => q.fmt(f),
            Value::Frequency(q) => q.fmt(f),
            Value::LinearDensity(q) => q.fmt(f),
            Value::Color(c) => c.fmt(f),
            Value::Space(s) => s.fmt(f),
            Value::Interpolation(s) => s.fmt(f),
            Value::GtuColorer(s) => s.fmt(f),
            Value::Incentive(s) => s.fmt(f),
            Value::Estimation(s) => s.fmt(f),
            Value::Anticipation(s) => s.fmt(f),
            Value::TaskManager(s) => s.fmt(f),
            Value::GraphicsType(s) => s.fmt(f),
            Value::Encoding(s) => s.fmt(f),
            Value::Expression(e) => e.fmt(f),
        }
    }
}

/// Conversion from a [`Value`] to the concrete type it holds.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

macro_rules! value_conversions {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }

            impl FromValue for $ty {
                fn from_value(value: &Value) -> Option<Self> {
                    match value {
                        Value::$variant(inner) => Some(inner.clone()),
                        _ => None,
                    }
                }
            }
        )+
    };
}

value_conversions! {
    String => String,
    ClassName => ClassName,
    bool => Boolean,
    i64 => Integer,
    f64 => Double,
    Length => Length,
    Duration => Duration,
    Speed => Speed,
    Acceleration => Acceleration,
    Angle => Angle,
    Frequency => Frequency,
    LinearDensity => LinearDensity,
    Color => Color,
    Space => Space,
    Interpolation => Interpolation,
    GtuColorer => GtuColorer,
    Incentive => Incentive,
    Estimation => Estimation,
    Anticipation => Anticipation,
    TaskManager => TaskManager,
    GraphicsType => GraphicsType,
    Encoding => Encoding,
    Expression => Expression,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl<T: FromValue> Expr<T> {
    /// Read a literal of type `T` or an expression out of a value.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Expression(expression) => Some(Expr::Expression(expression.clone())),
            other => T::from_value(other).map(Expr::Literal),
        }
    }
}

impl<T: Into<Value>> From<Expr<T>> for Value {
    fn from(value: Expr<T>) -> Self {
        match value {
            Expr::Literal(literal) => literal.into(),
            Expr::Expression(expression) => Value::Expression(expression),
        }
    }
}

/// The adapter of one simple type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// Free text, trimmed.
    String,
    /// Multi-line text, whitespace subject to the `Space` policy.
    Text,
    /// A non-empty identifier.
    Id,
    ClassName,
    AnyUri,
    Boolean,
    Integer,
    NonNegativeInteger,
    PositiveInteger,
    Double,
    PositiveDouble,
    /// A double in `[0, 1]`.
    Fraction,
    /// A double `> 0`.
    PositiveFactor,
    Length,
    PositiveLength,
    Duration,
    PositiveDuration,
    Speed,
    Acceleration,
    Angle,
    Frequency,
    LinearDensity,
    Color,
    Space,
    Interpolation,
    GtuColorer,
    Incentive,
    Estimation,
    Anticipation,
    TaskManager,
    GraphicsType,
    Encoding,
}

impl ValueKind {
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Text => "text",
            ValueKind::Id => "id",
            ValueKind::ClassName => "class name",
            ValueKind::AnyUri => "URI",
            ValueKind::Boolean => "boolean",
            ValueKind::Integer => "integer",
            ValueKind::NonNegativeInteger => "non-negative integer",
            ValueKind::PositiveInteger => "positive integer",
            ValueKind::Double => "double",
            ValueKind::PositiveDouble => "positive double",
            ValueKind::Fraction => "fraction",
            ValueKind::PositiveFactor => "positive factor",
            ValueKind::Length => "length",
            ValueKind::PositiveLength => "positive length",
            ValueKind::Duration => "duration",
            ValueKind::PositiveDuration => "positive duration",
            ValueKind::Speed => "speed",
            ValueKind::Acceleration => "acceleration",
            ValueKind::Angle => "angle",
            ValueKind::Frequency => "frequency",
            ValueKind::LinearDensity => "linear density",
            ValueKind::Color => "color",
            ValueKind::Space => "space",
            ValueKind::Interpolation => "interpolation",
            ValueKind::GtuColorer => "GTU colorer",
            ValueKind::Incentive => "incentive",
            ValueKind::Estimation => "estimation",
            ValueKind::Anticipation => "anticipation",
            ValueKind::TaskManager => "task manager",
            ValueKind::GraphicsType => "graphics type",
            ValueKind::Encoding => "encoding",
        }
    }

    /// Whether this type accepts a `{...}` expression instead of a literal.
    pub fn accepts_expression(self) -> bool {
        !matches!(
            self,
            ValueKind::Text
                | ValueKind::Id
                | ValueKind::ClassName
                | ValueKind::AnyUri
                | ValueKind::Space
        )
    }

    /// Parse the lexical form of this type.
    pub fn parse(self, text: &str) -> Result<Value, ValueError> {
        if self.accepts_expression() {
            if let Some(expression) = Expression::from_escaped(text)? {
                return Ok(Value::Expression(expression));
            }
        }
        let value = self.parse_literal(text)?;
        self.check(&value)?;
        Ok(value)
    }

    fn parse_literal(self, text: &str) -> Result<Value, ValueError> {
        let trimmed = text.trim();
        let value = match self {
            ValueKind::String | ValueKind::AnyUri => Value::String(trimmed.to_string()),
            ValueKind::Text => Value::String(text.to_string()),
            ValueKind::Id => Value::String(trimmed.to_string()),
            ValueKind::ClassName => Value::ClassName(text.parse()?),
            ValueKind::Boolean => Value::Boolean(match trimmed {
                "true" | "1" => true,
                "false" | "0" => false,
                _ => {
                    return Err(ValueError::format(
                        self.name(),
                        text,
                        "expected true, false, 1 or 0",
                    ));
                }
            }),
            ValueKind::Integer | ValueKind::NonNegativeInteger | ValueKind::PositiveInteger => {
                Value::Integer(trimmed.parse::<i64>().map_err(|e| {
                    ValueError::format(self.name(), text, e.to_string())
                })?)
            }
            ValueKind::Double
            | ValueKind::PositiveDouble
            | ValueKind::Fraction
            | ValueKind::PositiveFactor => Value::Double(
                parse::finite_double(trimmed)
                    .ok_or_else(|| ValueError::format(self.name(), text, "expected a finite number"))?,
            ),
            ValueKind::Length | ValueKind::PositiveLength => Value::Length(text.parse()?),
            ValueKind::Duration | ValueKind::PositiveDuration => Value::Duration(text.parse()?),
            ValueKind::Speed => Value::Speed(text.parse()?),
            ValueKind::Acceleration => Value::Acceleration(text.parse()?),
            ValueKind::Angle => Value::Angle(text.parse()?),
            ValueKind::Frequency => Value::Frequency(text.parse()?),
            ValueKind::LinearDensity => Value::LinearDensity(text.parse()?),
            ValueKind::Color => Value::Color(text.parse()?),
            ValueKind::Space => Value::Space(text.parse()?),
            ValueKind::Interpolation => Value::Interpolation(text.parse()?),
            ValueKind::GtuColorer => Value::GtuColorer(text.parse()?),
            ValueKind::Incentive => Value::Incentive(text.parse()?),
            ValueKind::Estimation => Value::Estimation(text.parse()?),
            ValueKind::Anticipation => Value::Anticipation(text.parse()?),
            ValueKind::TaskManager => Value::TaskManager(text.parse()?),
            ValueKind::GraphicsType => Value::GraphicsType(text.parse()?),
            ValueKind::Encoding => Value::Encoding(text.parse()?),
        };
        Ok(value)
    }

    /// Check that a value belongs to this type, including its range.
    ///
    /// Parsing always checks; values supplied programmatically are checked
    /// when a node is built.
    pub fn check(self, value: &Value) -> Result<(), ValueError> {
        if let Value::Expression(_) = value {
            return if self.accepts_expression() {
                Ok(())
            } else {
                Err(ValueError::format(
                    self.name(),
                    value.to_string(),
                    "expressions are not allowed here",
                ))
            };
        }

        let out_of_range = |reason: &str| Err(ValueError::range(self.name(), value.to_string(), reason));

        if value.as_number().is_some_and(|n| !n.is_finite()) {
            return out_of_range("must be finite");
        }

        match (self, value) {
            (ValueKind::String | ValueKind::Text | ValueKind::AnyUri, Value::String(_)) => Ok(()),
            (ValueKind::Id, Value::String(id)) if id.is_empty() => out_of_range("must not be empty"),
            (ValueKind::Id, Value::String(_)) => Ok(()),
            (ValueKind::ClassName, Value::ClassName(_)) => Ok(()),
            (ValueKind::Boolean, Value::Boolean(_)) => Ok(()),
            (ValueKind::Integer, Value::Integer(_)) => Ok(()),
            (ValueKind::NonNegativeInteger, Value::Integer(i)) if *i < 0 => out_of_range("must be >= 0"),
            (ValueKind::NonNegativeInteger, Value::Integer(_)) => Ok(()),
            (ValueKind::PositiveInteger, Value::Integer(i)) if *i <= 0 => out_of_range("must be > 0"),
            (ValueKind::PositiveInteger, Value::Integer(_)) => Ok(()),
            (ValueKind::Double, Value::Double(_)) => Ok(()),
            (ValueKind::PositiveDouble | ValueKind::PositiveFactor, Value::Double(d)) if *d <= 0.0 => {
                out_of_range("must be > 0")
            }
            (ValueKind::PositiveDouble | ValueKind::PositiveFactor, Value::Double(_)) => Ok(()),
            (ValueKind::Fraction, Value::Double(d)) if !(0.0..=1.0).contains(d) => {
                out_of_range("must lie in [0, 1]")
            }
            (ValueKind::Fraction, Value::Double(_)) => Ok(()),
            (ValueKind::Length, Value::Length(_)) => Ok(()),
            (ValueKind::PositiveLength, Value::Length(q)) if q.si() <= 0.0 => out_of_range("must be > 0"),
            (ValueKind::PositiveLength, Value::Length(_)) => Ok(()),
            (ValueKind::Duration, Value::Duration(_)) => Ok(()),
            (ValueKind::PositiveDuration, Value::Duration(q)) if q.si() <= 0.0 => {
                out_of_range("must be > 0")
            }
            (ValueKind::PositiveDuration, Value::Duration(_)) => Ok(()),
            (ValueKind::Speed, Value::Speed(_))
            | (ValueKind::Acceleration, Value::Acceleration(_))
            | (ValueKind::Angle, Value::Angle(_))
            | (ValueKind::Frequency, Value::Frequency(_))
            | (ValueKind::LinearDensity, Value::LinearDensity(_))
            | (ValueKind::Color, Value::Color(_))
            | (ValueKind::Space, Value::Space(_))
            | (ValueKind::Interpolation, Value::Interpolation(_))
            | (ValueKind::GtuColorer, Value::GtuColorer(_))
            | (ValueKind::Incentive, Value::Incentive(_))
            | (ValueKind::Estimation, Value::Estimation(_))
            | (ValueKind::Anticipation, Value::Anticipation(_))
            | (ValueKind::TaskManager, Value::TaskManager(_))
            | (ValueKind::GraphicsType, Value::GraphicsType(_))
            | (ValueKind::Encoding, Value::Encoding(_)) => Ok(()),
            _ => Err(ValueError::format(
                self.name(),
                value.to_string(),
                format!("expected a {} value", self.name()),
            )),
        }
    }

    /// Canonical lexical form of a value of this type.
    pub fn format(self, value: &Value) -> String {
        value.to_string()
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
