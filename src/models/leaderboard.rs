use serde::{Deserialize, Serialize};

use super::Achievement;

/// One row of the guild leaderboard as delivered by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderEntry {
    pub id: String,
    pub username: String,
    pub avatar_url: String,
    pub level: u32,
    pub xp: u64,
    /// Owned achievements, in backend order.
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}
