use serde::{Deserialize, Serialize};

/// OAuth token exchange response from the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// "Bearer"
    pub token_type: String,
    pub expires_in: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub scope: String,
    /// Resolved member identity the backend attaches to the exchange.
    #[serde(rename = "_me", default, skip_serializing_if = "Option::is_none")]
    pub me: Option<TokenIdentity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenIdentity {
    pub id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifyRequest {
    pub channel_id: String,
    pub username: String,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_decodes_me() {
        let json = r#"{
            "access_token": "tok",
            "token_type": "Bearer",
            "expires_in": 604800,
            "scope": "identify",
            "_me": {"id": "42", "username": "ONE"}
        }"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        let me = token.me.unwrap();
        assert_eq!(me.id, "42");
        assert_eq!(me.username, "ONE");
        assert!(me.avatar.is_none());
        assert!(token.refresh_token.is_none());
    }

    #[test]
    fn test_token_response_without_me() {
        let json = r#"{
            "access_token": "tok",
            "token_type": "Bearer",
            "expires_in": 3600,
            "scope": "identify"
        }"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert!(token.me.is_none());
    }
}
