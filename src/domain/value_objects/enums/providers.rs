use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Provider {
    Apple,
    Google,
}

impl Provider {
    pub const ALL: [Provider; 2] = [Provider::Apple, Provider::Google];

    /// Case-insensitive lookup by provider name. Surrounding whitespace is not ignored.
    pub fn find_by_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|provider| provider.to_string().eq_ignore_ascii_case(name))
    }
}

impl Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let provider = match self {
            Provider::Apple => "apple",
            Provider::Google => "google",
        };
        write!(f, "{}", provider)
    }
}

impl FromStr for Provider {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::find_by_name(value).ok_or_else(|| format!("Unsupported provider: {}", value))
    }
}
