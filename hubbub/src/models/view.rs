use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// One of the fixed communities reachable from the server dock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommunityId {
    Gaming,
    Music,
    Dev,
    Art,
}

impl CommunityId {
    pub const ALL: [CommunityId; 4] = [
        CommunityId::Gaming,
        CommunityId::Music,
        CommunityId::Dev,
        CommunityId::Art,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Gaming => "gaming",
            Self::Music => "music",
            Self::Dev => "dev",
            Self::Art => "art",
        }
    }

    /// Glyph rendered on the dock button.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Gaming => "🎮",
            Self::Music => "🎵",
            Self::Dev => "💻",
            Self::Art => "🎨",
        }
    }
}

impl fmt::Display for CommunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommunityId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| anyhow!("Unknown community '{}'", s))
    }
}

/// Top-level UI mode. Exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    DirectMessages,
    Discovery,
    Community(CommunityId),
}

impl View {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DirectMessages => "dms",
            Self::Discovery => "discovery",
            Self::Community(id) => id.as_str(),
        }
    }

    pub fn is_community(self) -> bool {
        matches!(self, Self::Community(_))
    }

    pub fn community(self) -> Option<CommunityId> {
        match self {
            Self::Community(id) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "dms" => Ok(Self::DirectMessages),
            "discovery" => Ok(Self::Discovery),
            other => other
                .parse::<CommunityId>()
                .map(Self::Community)
                .map_err(|_| anyhow!("Unknown view '{}'", other)),
        }
    }
}

impl Serialize for View {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for View {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(Error::custom)
    }
}
