use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Member presence as reported by the guild gateway.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presence {
    Online,
    Idle,
    Dnd,
    #[default]
    Offline,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Idle => "idle",
            Presence::Dnd => "dnd",
            Presence::Offline => "offline",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildRole {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub is_hoisted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuildMember {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick: Option<String>,
    #[serde(default)]
    pub roles: Vec<GuildRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joined_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub presence: Presence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    /// Display name, takes precedence over the username when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_name: Option<String>,
    /// Legacy four-digit tag, absent for migrated accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discriminator: Option<String>,
    pub avatar_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    /// Hex color without the leading '#', e.g. "5865F2".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent_color: Option<String>,
}

impl DiscordUser {
    /// Name to show on the profile card: guild nick, then global name,
    /// then the account username.
    pub fn display_name<'a>(&'a self, member: Option<&'a GuildMember>) -> &'a str {
        member
            .and_then(|m| m.nick.as_deref())
            .or(self.global_name.as_deref())
            .unwrap_or(&self.username)
    }
}

/// Guild activity counters backing the profile card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberStats {
    pub level: u32,
    pub xp: u64,
    pub xp_to_next: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank_place: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> DiscordUser {
        DiscordUser {
            id: "123456789012345678".to_string(),
            username: "krONEkr".to_string(),
            global_name: Some("ONE".to_string()),
            discriminator: None,
            avatar_url: "https://cdn.example/avatar.png".to_string(),
            banner_url: None,
            accent_color: Some("5865F2".to_string()),
        }
    }

    #[test]
    fn test_display_name_prefers_nick() {
        let member = GuildMember {
            nick: Some("ONE-nick".to_string()),
            ..Default::default()
        };
        assert_eq!(user().display_name(Some(&member)), "ONE-nick");
    }

    #[test]
    fn test_display_name_falls_back() {
        let u = user();
        assert_eq!(u.display_name(None), "ONE");

        let mut u = user();
        u.global_name = None;
        assert_eq!(u.display_name(None), "krONEkr");
    }

    #[test]
    fn test_member_defaults() {
        let m: GuildMember = serde_json::from_str("{}").unwrap();
        assert_eq!(m.presence, Presence::Offline);
        assert!(m.roles.is_empty());
    }
}
