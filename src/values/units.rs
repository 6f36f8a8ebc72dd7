//! # Physical quantities with unit suffixes
//!
//! Quantities in OTS documents are written as a number followed by a unit
//! symbol, e.g. `0.0 s`, `1h`, `0.05m`, `1.0deg` or `100 km/h`. A
//! [`Quantity`] keeps the number *in the unit it was written in* together with
//! that unit, so formatting reproduces the original unit and
//! `parse(format(q)) == q` holds exactly. The SI value is available through
//! [`Quantity::si`].
//!
//! ```rust
//! use otsxml::values::{Duration, DurationUnit};
//!
//! let run_length: Duration = "1h".parse().unwrap();
//! assert_eq!(run_length.unit(), DurationUnit::Hour);
//! assert_eq!(run_length.si(), 3600.0);
//! assert_eq!(run_length.to_string(), "1 h");
//! ```

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::values::ValueError;
use crate::values::parse::split_quantity;

/// A unit of measure for one physical dimension.
pub trait Unit: Copy + Eq + fmt::Debug + 'static {
    /// Name of the quantity, used in error messages.
    const QUANTITY: &'static str;

    /// Every accepted symbol and the unit it denotes. The first symbol listed
    /// for a unit is its canonical symbol.
    const SYMBOLS: &'static [(&'static str, Self)];

    /// Multiplier converting a value in this unit to SI.
    fn si_factor(self) -> f64;

    /// Canonical symbol of this unit.
    fn symbol(self) -> &'static str {
        Self::SYMBOLS
            .iter()
            .find(|(_, unit)| *unit == self)
            .map(|(symbol, _)| *symbol)
            .unwrap_or("")
    }

    /// Look up a unit by one of its symbols.
    fn from_symbol(symbol: &str) -> Option<Self> {
        Self::SYMBOLS
            .iter()
            .find(|(candidate, _)| *candidate == symbol)
            .map(|(_, unit)| *unit)
    }
}

macro_rules! units {
    (
        $(#[$meta:meta])*
        $name:ident, $quantity:literal {
            $($variant:ident => $factor:expr, [$($symbol:literal),+]);+ $(;)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl Unit for $name {
            const QUANTITY: &'static str = $quantity;
            const SYMBOLS: &'static [(&'static str, Self)] = &[
                $($(($symbol, $name::$variant),)+)+
            ];

            fn si_factor(self) -> f64 {
                match self {
                    $($name::$variant => $factor),+
                }
            }
        }
    };
}

units! {
    /// Units of length; SI unit metre.
    LengthUnit, "length" {
        Meter => 1.0, ["m"];
        Kilometer => 1000.0, ["km"];
        Decimeter => 0.1, ["dm"];
        Centimeter => 0.01, ["cm"];
        Millimeter => 0.001, ["mm"];
        Micrometer => 1.0e-6, ["um", "µm"];
        Foot => 0.3048, ["ft"];
        Inch => 0.0254, ["in"];
        Yard => 0.9144, ["yd"];
        Mile => 1609.344, ["mi"];
    }
}

units! {
    /// Units of duration; SI unit second.
    DurationUnit, "duration" {
        Second => 1.0, ["s"];
        Millisecond => 0.001, ["ms"];
        Microsecond => 1.0e-6, ["us", "µs"];
        Minute => 60.0, ["min"];
        Hour => 3600.0, ["h"];
        Day => 86400.0, ["day"];
    }
}

units! {
    /// Units of speed; SI unit metre per second.
    SpeedUnit, "speed" {
        MeterPerSecond => 1.0, ["m/s"];
        KilometerPerHour => 1.0 / 3.6, ["km/h"];
        MilePerHour => 0.44704, ["mi/h", "mph"];
        FootPerSecond => 0.3048, ["ft/s"];
    }
}

units! {
    /// Units of acceleration; SI unit metre per second squared.
    AccelerationUnit, "acceleration" {
        MeterPerSecondSquared => 1.0, ["m/s^2"];
        KilometerPerHourSquared => 1000.0 / (3600.0 * 3600.0), ["km/h^2"];
        FootPerSecondSquared => 0.3048, ["ft/s^2"];
    }
}

units! {
    /// Units of angle; SI unit radian.
    AngleUnit, "angle" {
        Radian => 1.0, ["rad"];
        Degree => std::f64::consts::PI / 180.0, ["deg"];
    }
}

units! {
    /// Units of frequency; SI unit per second. Demand levels are usually
    /// written in vehicles per hour, which maps onto the same units.
    FrequencyUnit, "frequency" {
        PerSecond => 1.0, ["/s", "veh/s"];
        PerMinute => 1.0 / 60.0, ["/min", "veh/min"];
        PerHour => 1.0 / 3600.0, ["/h", "veh/h"];
        PerDay => 1.0 / 86400.0, ["/day"];
        Hertz => 1.0, ["Hz"];
    }
}

units! {
    /// Units of linear density; SI unit per metre.
    LinearDensityUnit, "linear density" {
        PerMeter => 1.0, ["/m"];
        PerKilometer => 0.001, ["/km"];
        PerMile => 1.0 / 1609.344, ["/mi"];
        PerFoot => 1.0 / 0.3048, ["/ft"];
    }
}

/// A number together with the unit it is expressed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantity<U: Unit> {
    value: f64,
    unit: U,
}

pub type Length = Quantity<LengthUnit>;
pub type Duration = Quantity<DurationUnit>;
pub type Speed = Quantity<SpeedUnit>;
pub type Acceleration = Quantity<AccelerationUnit>;
pub type Angle = Quantity<AngleUnit>;
pub type Frequency = Quantity<FrequencyUnit>;
pub type LinearDensity = Quantity<LinearDensityUnit>;

impl<U: Unit> Quantity<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }

    /// The number as written, in [`Quantity::unit`].
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn unit(&self) -> U {
        self.unit
    }

    /// The value converted to the SI unit of the dimension.
    pub fn si(&self) -> f64 {
        self.value * self.unit.si_factor()
    }

    /// The value converted to another unit of the same dimension.
    pub fn in_unit(&self, unit: U) -> f64 {
        self.si() / unit.si_factor()
    }
}

impl Duration {
    pub fn seconds(value: f64) -> Self {
        Self::new(value, DurationUnit::Second)
    }
}

impl Length {
    pub fn meters(value: f64) -> Self {
        Self::new(value, LengthUnit::Meter)
    }
}

impl<U: Unit> FromStr for Quantity<U> {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (value, symbol) = split_quantity(s).ok_or_else(|| {
            ValueError::format(U::QUANTITY, s, "expected a number followed by a unit")
        })?;
        if !value.is_finite() {
            return Err(ValueError::format(U::QUANTITY, s, "value is not finite"));
        }
        if symbol.is_empty() {
            return Err(ValueError::format(U::QUANTITY, s, "missing unit"));
        }
        let unit = U::from_symbol(symbol).ok_or_else(|| {
            ValueError::format(
                U::QUANTITY,
                s,
                format!(
                    "unknown unit '{}', expected one of {}",
                    symbol,
                    U::SYMBOLS.iter().map(|(symbol, _)| *symbol).join(", ")
                ),
            )
        })?;
        Ok(Self::new(value, unit))
    }
}

impl<U: Unit> fmt::Display for Quantity<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}

impl<U: Unit> Serialize for Quantity<U> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de, U: Unit> Deserialize<'de> for Quantity<U> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s: String = Deserialize::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_float_eq;

    #[test]
    fn test_parse_with_and_without_space() {
        let a: Duration = "0.0 s".parse().unwrap();
        let b: Duration = "0s".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.unit(), DurationUnit::Second);
    }

    #[test]
    fn test_unit_is_preserved() {
        let length: Length = "0.05m".parse().unwrap();
        assert_eq!(length.to_string(), "0.05 m");

        let speed: Speed = "100 km/h".parse().unwrap();
        assert_eq!(speed.unit(), SpeedUnit::KilometerPerHour);
        assert_float_eq(speed.si(), 100.0 / 3.6, 1e-12);
        assert_eq!(speed.to_string(), "100 km/h");
    }

    #[test]
    fn test_alias_symbols_share_a_unit() {
        let a: Frequency = "900veh/h".parse().unwrap();
        let b: Frequency = "900/h".parse().unwrap();
        assert_eq!(a, b);
        assert_float_eq(a.si(), 0.25, 1e-12);
    }

    #[test]
    fn test_angle_conversion() {
        let angle: Angle = "1.0deg".parse().unwrap();
        assert_float_eq(angle.si(), std::f64::consts::PI / 180.0, 1e-15);
        assert_float_eq(angle.in_unit(AngleUnit::Degree), 1.0, 1e-12);
    }

    #[test]
    fn test_missing_or_unknown_unit() {
        assert!(matches!(
            "12".parse::<Length>(),
            Err(ValueError::Format { .. })
        ));
        assert!(matches!(
            "12 parsec".parse::<Length>(),
            Err(ValueError::Format { .. })
        ));
        assert!(matches!(
            "fast".parse::<Speed>(),
            Err(ValueError::Format { .. })
        ));
    }

    #[test]
    fn test_symbol_must_match_exactly() {
        // "m" is a length symbol, "mi" a different one; "min" is not a length.
        assert_eq!("1 mi".parse::<Length>().unwrap().unit(), LengthUnit::Mile);
        assert!("1 min".parse::<Length>().is_err());
        assert_eq!(
            "1 min".parse::<Duration>().unwrap().unit(),
            DurationUnit::Minute
        );
    }
}
