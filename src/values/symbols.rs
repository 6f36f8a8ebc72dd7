//! Closed vocabularies used by OTS attributes and elements.
//!
//! Each vocabulary is a fixed set of upper-case symbols. Symbols are matched
//! exactly (after trimming surrounding whitespace) and formatted back
//! unchanged.

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::values::ValueError;

macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        $name:ident, $label:literal {
            $($(#[$variant_meta:meta])* $variant:ident => $symbol:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$variant_meta])* $variant),+
        }

        impl $name {
            /// Every symbol of the vocabulary, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $symbol),+
                }
            }
        }

        impl FromStr for $name {
            type Err = ValueError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($symbol => Ok($name::$variant),)+
                    other => Err(ValueError::format(
                        $label,
                        other,
                        format!(
                            "expected one of {}",
                            $name::ALL.iter().map(|v| v.as_str()).join(", ")
                        ),
                    )),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s: String = Deserialize::deserialize(deserializer)?;
                s.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

vocabulary! {
    /// Whitespace handling of multi-line text content.
    Space, "space" {
        /// Leading and trailing whitespace of each line is not significant.
        Default => "default",
        /// Text is kept exactly as written.
        Preserve => "preserve",
    }
}

impl Default for Space {
    fn default() -> Self {
        Space::Preserve
    }
}

impl Space {
    /// Apply this whitespace policy to a block of text.
    ///
    /// `Preserve` returns the text unchanged. `Default` trims every line and
    /// drops blank lines at the start and end of the block.
    pub fn apply(self, text: &str) -> String {
        match self {
            Space::Preserve => text.to_string(),
            Space::Default => {
                let lines: Vec<&str> = text.lines().map(str::trim).collect();
                let first = lines.iter().position(|line| !line.is_empty());
                let last = lines.iter().rposition(|line| !line.is_empty());
                match (first, last) {
                    (Some(first), Some(last)) => lines[first..=last].join("\n"),
                    _ => String::new(),
                }
            }
        }
    }
}

vocabulary! {
    /// Interpolation between demand levels of an OD matrix.
    Interpolation, "interpolation" {
        Stepwise => "STEPWISE",
        Linear => "LINEAR",
    }
}

vocabulary! {
    /// Named GTU colorers available to the animation.
    GtuColorer, "GTU colorer" {
        Default => "DEFAULT",
        Id => "ID",
        Speed => "SPEED",
        Acceleration => "ACCELERATION",
        Blue => "BLUE",
        DesiredSpeed => "DESIRED_SPEED",
        Split => "SPLIT",
        Synchronization => "SYNCHRONIZATION",
        DesiredHeadway => "DESIRED_HEADWAY",
        TotalDesire => "TOTAL_DESIRE",
        SocialPressure => "SOCIAL_PRESSURE",
    }
}

vocabulary! {
    /// Lane change incentives of the LMRS tactical planner.
    Incentive, "incentive" {
        Route => "ROUTE",
        SpeedWithCourtesy => "SPEED_WITH_COURTESY",
        Keep => "KEEP",
        Courtesy => "COURTESY",
        SocioSpeed => "SOCIO_SPEED",
        BusStop => "BUS_STOP",
    }
}

vocabulary! {
    /// Perception estimation errors.
    Estimation, "estimation" {
        None => "NONE",
        Underestimation => "UNDERESTIMATION",
        Overestimation => "OVERESTIMATION",
    }
}

vocabulary! {
    /// Perception anticipation of other GTUs.
    Anticipation, "anticipation" {
        None => "NONE",
        ConstantSpeed => "CONSTANT_SPEED",
        ConstantAcceleration => "CONSTANT_ACCELERATION",
    }
}

vocabulary! {
    /// Task manager of the Fuller mental model.
    TaskManager, "task manager" {
        Summative => "SUMMATIVE",
        AnticipationReliance => "ANTICIPATION_RELIANCE",
    }
}

vocabulary! {
    /// Image format of an embedded TrafCod console map.
    GraphicsType, "graphics type" {
        Png => "PNG",
        Gif => "GIF",
        Jpeg => "JPEG",
        Svg => "SVG",
    }
}

vocabulary! {
    /// Encoding of an embedded TrafCod console map.
    Encoding, "encoding" {
        Base64 => "BASE64",
        Utf8 => "UTF8",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        assert_eq!("LINEAR".parse::<Interpolation>().unwrap(), Interpolation::Linear);
        assert_eq!(" SOCIAL_PRESSURE ".parse::<GtuColorer>().unwrap(), GtuColorer::SocialPressure);
        assert_eq!(TaskManager::AnticipationReliance.to_string(), "ANTICIPATION_RELIANCE");
    }

    #[test]
    fn test_unknown_symbol_lists_alternatives() {
        let err = "linear".parse::<Interpolation>().unwrap_err();
        assert!(err.to_string().contains("STEPWISE, LINEAR"));
    }

    #[test]
    fn test_every_symbol_round_trips() {
        for colorer in GtuColorer::ALL {
            assert_eq!(colorer.as_str().parse::<GtuColorer>().unwrap(), *colorer);
        }
        for incentive in Incentive::ALL {
            assert_eq!(incentive.as_str().parse::<Incentive>().unwrap(), *incentive);
        }
    }

    #[test]
    fn test_space_apply() {
        let text = "\n    a = 1\n      b = 2   \n\n";
        assert_eq!(Space::Preserve.apply(text), text);
        assert_eq!(Space::Default.apply(text), "a = 1\nb = 2");
        assert_eq!(Space::Default.apply("  \n "), "");
    }
}
