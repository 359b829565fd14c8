use config::{Config, ConfigError, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub app: AppSettings,
    pub display: DisplaySettings,
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub version: String,
    pub log_level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplaySettings {
    /// Icon slots on the profile showcase card.
    pub showcase_budget: usize,
    /// Icon slots in a leaderboard row's achievement strip.
    pub strip_budget: usize,
    /// XP needed to advance a level, used for row progress bars.
    pub xp_to_next_level: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app: AppSettings {
                name: "Guildboard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                log_level: "info".to_string(),
            },
            display: DisplaySettings {
                showcase_budget: 10,
                strip_budget: 8,
                xp_to_next_level: 1000,
            },
            api: ApiSettings {
                base_url: "http://127.0.0.1:8000/api/v1".to_string(),
                timeout_seconds: 30,
            },
        }
    }
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("GUILDBOARD"))
            .build()?;

        s.try_deserialize()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let s = Config::builder()
            .add_source(Config::try_from(&Settings::default())?)
            .add_source(File::from(path.as_ref()))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.display.showcase_budget == 0 {
            return Err("Showcase budget must be at least 1".to_string());
        }
        if self.display.strip_budget == 0 {
            return Err("Strip budget must be at least 1".to_string());
        }
        if self.display.xp_to_next_level == 0 {
            return Err("XP per level must be at least 1".to_string());
        }
        if self.api.base_url.is_empty() {
            return Err("API base URL must not be empty".to_string());
        }

        Ok(())
    }
}
