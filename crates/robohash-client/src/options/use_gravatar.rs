use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::UrlParameter;
use crate::error::RoboHashError;

/// Whether RoboHash should look the avatar key up on Gravatar first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UseGravatar {
    /// Treat the key as an e-mail address and try Gravatar.
    Yes,
    /// Never use Gravatar.
    #[default]
    No,
    /// Try Gravatar; the key is already an MD5 digest.
    Hashed,
}

impl UseGravatar {
    /// The `gravatar` parameter value, if this mode emits one.
    pub const fn parameter_value(self) -> Option<&'static str> {
        match self {
            Self::Yes => Some("yes"),
            Self::Hashed => Some("hashed"),
            Self::No => None,
        }
    }

    /// Render this mode as a `gravatar` parameter, or an empty string for [`UseGravatar::No`].
    pub fn construct_url_parameter(self, first: bool) -> String {
        self.parameter_value()
            .map(|value| UrlParameter::UseGravatar.encode(value, first))
            .unwrap_or_default()
    }
}

impl fmt::Display for UseGravatar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.parameter_value().unwrap_or("no"))
    }
}

impl FromStr for UseGravatar {
    type Err = RoboHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "email" => Ok(Self::Yes),
            "no" | "false" | "off" => Ok(Self::No),
            "hashed" | "md5" => Ok(Self::Hashed),
            _ => Err(RoboHashError::UnknownOption {
                kind: "gravatar mode",
                value: s.to_string(),
            }),
        }
    }
}
