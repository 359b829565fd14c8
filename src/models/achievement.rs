use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Achievement rarity tier, ordered from least to most valuable.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "rare" => Some(Rarity::Rare),
            "epic" => Some(Rarity::Epic),
            "legendary" => Some(Rarity::Legendary),
            _ => None,
        }
    }

    /// Position in the rarity order (common = 0 .. legendary = 3).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Fallback icon for achievements without an explicit `icon_url`.
    pub fn default_icon_url(&self) -> &'static str {
        match self {
            Rarity::Common => {
                "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/1f538.svg"
            }
            Rarity::Rare => {
                "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/1f539.svg"
            }
            Rarity::Epic => {
                "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/1f31f.svg"
            }
            Rarity::Legendary => {
                "https://cdn.jsdelivr.net/gh/twitter/twemoji@14.0.2/assets/svg/2728.svg"
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Absent rarity means common.
    #[serde(default)]
    pub rarity: Rarity,
    pub unlocked: bool,
    /// Stored progress toward unlocking, 0..100.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_at: Option<DateTime<Utc>>,
}

impl Achievement {
    /// Icon to render: the explicit URL if present, otherwise the
    /// rarity-tier default.
    pub fn display_icon(&self) -> &str {
        self.icon_url
            .as_deref()
            .unwrap_or_else(|| self.rarity.default_icon_url())
    }
}
