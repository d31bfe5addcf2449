use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::{UrlParameter, matches_any};
use crate::error::{RoboHashError, RoboHashResult};

/// The avatar image sets RoboHash can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSet {
    /// The classic robots.
    Default,
    /// Monsters.
    Monsters,
    /// Robot heads (RoboHash calls this set "sexy robots").
    SexyRobots,
    /// Kittens.
    Kittens,
    /// Humans.
    Humans,
    /// Let RoboHash choose.
    Any,
}

impl ImageSet {
    /// Every set, in wire order.
    pub const ALL: [Self; 6] = [
        Self::Default,
        Self::Monsters,
        Self::SexyRobots,
        Self::Kittens,
        Self::Humans,
        Self::Any,
    ];

    /// The value used with the `set` parameter, such as `set2`.
    pub const fn url_parameter_name(self) -> &'static str {
        match self {
            Self::Default => "set1",
            Self::Monsters => "set2",
            Self::SexyRobots => "set3",
            Self::Kittens => "set4",
            Self::Humans => "set5",
            Self::Any => "any",
        }
    }

    /// The value used inside a `sets=1,2` list.
    pub fn list_url_parameter_name(self) -> RoboHashResult<&'static str> {
        match self {
            Self::Default => Ok("1"),
            Self::Monsters => Ok("2"),
            Self::SexyRobots => Ok("3"),
            Self::Kittens => Ok("4"),
            Self::Humans => Ok("5"),
            Self::Any => Err(RoboHashError::AnySetInList),
        }
    }

    /// Render this set as a `set` parameter.
    pub fn construct_url_parameter(self, first: bool) -> String {
        UrlParameter::ImageSet.encode(self.url_parameter_name(), first)
    }
}

impl fmt::Display for ImageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.url_parameter_name())
    }
}

impl FromStr for ImageSet {
    type Err = RoboHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let found = match s.trim().to_ascii_lowercase().as_str() {
            "default" | "robots" | "set1" | "1" => Some(Self::Default),
            "monsters" | "set2" | "2" => Some(Self::Monsters),
            "sexy_robots" | "sexy-robots" | "heads" | "set3" | "3" => Some(Self::SexyRobots),
            "kittens" | "cats" | "set4" | "4" => Some(Self::Kittens),
            "humans" | "set5" | "5" => Some(Self::Humans),
            other if matches_any(other) => Some(Self::Any),
            _ => None,
        };
        found.ok_or_else(|| RoboHashError::UnknownOption {
            kind: "image set",
            value: s.to_string(),
        })
    }
}
