pub mod client;
pub mod types;

pub use client::{authorize_member, ApiClient, DiscordGateway};
pub use types::{NotifyRequest, TokenIdentity, TokenResponse};
