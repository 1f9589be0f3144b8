//! Shell-level preferences: color theme and the mounted section.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Tool currently mounted by the desk shell. Not persisted; every launch
/// starts on the whiteboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ActiveSection {
    #[default]
    Whiteboard,
    /// Topic tracker; its section id is `dsa`.
    Topics,
    Journal,
    Savings,
}

impl ActiveSection {
    pub const ALL: [ActiveSection; 4] = [
        Self::Whiteboard,
        Self::Topics,
        Self::Journal,
        Self::Savings,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Whiteboard => "whiteboard",
            Self::Topics => "dsa",
            Self::Journal => "journal",
            Self::Savings => "savings",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == value.trim())
    }
}
