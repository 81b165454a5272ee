use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A flavour of hashtag syntax.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// `#` and a letter, followed by letters, digits and `/_-`.
    #[default]
    Default,
    /// Compatible with Obsidian tags: `#` followed by letters, digits,
    /// emoji and `/_-`, not entirely numeric.
    ///
    /// See also <https://help.obsidian.md/How+to/Working+with+tags>.
    Obsidian,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid variant: {0:?} (expected \"default\" or \"obsidian\")")]
pub struct VariantParseError(pub String);

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Default => "default",
            Variant::Obsidian => "obsidian",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = VariantParseError;

    /// An empty name selects the default variant.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" | "default" => Ok(Variant::Default),
            "obsidian" => Ok(Variant::Obsidian),
            other => Err(VariantParseError(other.to_string())),
        }
    }
}
