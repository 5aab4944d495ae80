use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};
use reqwest::Client;
use serde::Serialize;

use crate::errors::NotifierError;

const EMBED_COLOR: u32 = 0x2b4f7d;
const FOOTER_TEXT: &str = "estebandev.xyz/blog";
const BOT_USERNAME: &str = "estebandev.xyz";
const AVATAR_URL: &str = "https://i.imgur.com/AfFp7pu.png";
const BANNER: &str = "Una nueva publicación se ha subido en https://estebandev.xyz/blog \n||@here||";
const DEFAULT_TITLE: &str = "Embed Title";
const DEFAULT_DESCRIPTION: &str = "Embed description";

/// What gets announced when a post is published.
#[derive(Debug, Clone, PartialEq)]
pub struct PostAnnouncement {
    pub title: Option<String>,
    pub url: String,
    pub description: Option<String>,
}

#[async_trait]
pub trait PostNotifier: Send + Sync + 'static {
    async fn notify(&self, announcement: &PostAnnouncement) -> Result<(), NotifierError>;
}

#[derive(Debug, Serialize, PartialEq)]
pub struct EmbedFooter {
    pub text: String,
    pub icon_url: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub url: String,
    pub color: u32,
    pub fields: Vec<serde_json::Value>,
    pub footer: EmbedFooter,
    pub timestamp: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct WebhookPayload {
    pub username: String,
    pub content: String,
    pub avatar_url: String,
    pub embeds: Vec<Embed>,
}

impl WebhookPayload {
    pub fn for_announcement(announcement: &PostAnnouncement) -> Self {
        let title = announcement.title.as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE);
        let description = announcement.description.as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_DESCRIPTION);

        WebhookPayload {
            username: BOT_USERNAME.to_string(),
            content: BANNER.to_string(),
            avatar_url: AVATAR_URL.to_string(),
            embeds: vec![Embed {
                title: title.to_string(),
                description: description.to_string(),
                url: announcement.url.clone(),
                color: EMBED_COLOR,
                fields: Vec::new(),
                footer: EmbedFooter {
                    text: FOOTER_TEXT.to_string(),
                    icon_url: AVATAR_URL.to_string(),
                },
                timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            }],
        }
    }
}

/// Posts announcements to a Discord-compatible webhook.
#[derive(Clone)]
pub struct WebhookNotifier {
    client: Client,
    endpoint: Option<String>,
}

impl WebhookNotifier {
    pub fn new(endpoint: Option<String>) -> Self {
        WebhookNotifier {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl PostNotifier for WebhookNotifier {
    async fn notify(&self, announcement: &PostAnnouncement) -> Result<(), NotifierError> {
        let Some(endpoint) = &self.endpoint else {
            tracing::info!(url = %announcement.url, "No webhook configured, skipping announcement");
            return Ok(());
        };

        let payload = WebhookPayload::for_announcement(announcement);

        let response = self.client
            .post(endpoint)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifierError::UnexpectedStatus(status.as_u16()));
        }

        Ok(())
    }
}
