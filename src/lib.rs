pub mod api;
pub mod config;
pub mod models;
pub mod progress;
pub mod ranking;
pub mod showcase;

pub use config::Settings;
pub use models::{
    Achievement, DiscordUser, GuildMember, GuildRole, GuildboardError, LeaderEntry, MemberStats,
    Presence, Rarity, Result,
};
