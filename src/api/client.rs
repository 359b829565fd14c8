use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};

use crate::api::{NotifyRequest, TokenResponse};
use crate::config::ApiSettings;
use crate::models::{GuildboardError, Result};

/// Backend endpoints the front-end core depends on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DiscordGateway: Send + Sync {
    /// Exchange an OAuth authorization code for a token.
    async fn exchange_token(&self, code: &str) -> Result<TokenResponse>;

    /// Tell the backend a member completed authorization. The ack body is
    /// backend-defined, so it is returned as raw JSON.
    async fn notify_authorized(&self, request: NotifyRequest) -> Result<serde_json::Value>;
}

/// reqwest-backed gateway against the configured API base URL.
pub struct ApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.timeout_seconds))
            .build()
            .map_err(|e| {
                GuildboardError::Config(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            http_client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let response = self.http_client.post(&url).json(body).send().await?;

        let status = response.status();
        let body_text = response.text().await?;
        if !status.is_success() {
            warn!("POST {} failed with status {}", url, status);
            return Err(GuildboardError::Api {
                status: status.as_u16(),
                body: body_text,
            });
        }

        serde_json::from_str(&body_text).map_err(Into::into)
    }
}

#[async_trait]
impl DiscordGateway for ApiClient {
    async fn exchange_token(&self, code: &str) -> Result<TokenResponse> {
        info!("Exchanging authorization code");
        self.post_json("/discord/token", &json!({ "code": code }))
            .await
    }

    async fn notify_authorized(&self, request: NotifyRequest) -> Result<serde_json::Value> {
        info!(
            "Notifying channel {} about user {}",
            request.channel_id, request.user_id
        );
        self.post_json("/discord/notify", &request).await
    }
}

/// Post-OAuth flow: exchange the code, then notify the channel when the
/// backend resolved the member identity.
pub async fn authorize_member(
    gateway: &dyn DiscordGateway,
    code: &str,
    channel_id: &str,
) -> Result<TokenResponse> {
    let token = gateway.exchange_token(code).await?;

    if let Some(me) = &token.me {
        gateway
            .notify_authorized(NotifyRequest {
                channel_id: channel_id.to_string(),
                username: me.username.clone(),
                user_id: me.id.clone(),
            })
            .await?;
        info!("Authorized {} and notified channel {}", me.username, channel_id);
    } else {
        warn!("Token exchange returned no member identity, skipping notify");
    }

    Ok(token)
}
