use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{UrlParameter, matches_any};
use crate::error::RoboHashError;

/// The background image sets supported by RoboHash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BackgroundSet {
    /// Outdoor scenery.
    Outside,
    /// Mostly spirals, with a few other patterns.
    SpiralAndPatterns,
    /// Let RoboHash choose.
    #[default]
    Any,
}

impl BackgroundSet {
    /// The value used with the `bgset` parameter.
    pub const fn set_name(self) -> &'static str {
        match self {
            Self::Outside => "bg1",
            Self::SpiralAndPatterns => "bg2",
            Self::Any => "any",
        }
    }

    /// Render this background set as a `bgset` parameter.
    pub fn construct_url_parameter(self, first: bool) -> String {
        UrlParameter::BackgroundSet.encode(self.set_name(), first)
    }
}

impl fmt::Display for BackgroundSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.set_name())
    }
}

impl FromStr for BackgroundSet {
    type Err = RoboHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outside" | "bg1" | "1" => Ok(Self::Outside),
            "spiral_and_patterns" | "spiral-and-patterns" | "spiral" | "bg2" | "2" => {
                Ok(Self::SpiralAndPatterns)
            }
            other if matches_any(other) => Ok(Self::Any),
            _ => Err(RoboHashError::UnknownOption {
                kind: "background set",
                value: s.to_string(),
            }),
        }
    }
}
