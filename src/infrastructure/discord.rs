use crate::error::{BotError, Result};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::info;

const API_BASE: &str = "https://discord.com/api/v10";

/// Somewhere a text message can be posted.
pub trait ChatChannel {
    async fn send(&self, content: &str) -> Result<()>;
}

#[derive(Debug, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChannelInfo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateMessage<'a> {
    content: &'a str,
}

/// Bot-token client over the Discord REST API.
pub struct DiscordClient {
    client: Client,
    token: String,
}

impl DiscordClient {
    pub fn new(client: Client, token: String) -> Self {
        Self { client, token }
    }

    /// Checks the token against the API. A successful answer is the bot's
    /// ready signal.
    pub async fn login(&self) -> Result<CurrentUser> {
        let user: CurrentUser = self.get("/users/@me").await?;
        info!("Connected as {} ({})", user.username, user.id);
        Ok(user)
    }

    pub async fn fetch_channel(&self, channel_id: &str) -> Result<DiscordChannel> {
        let info: ChannelInfo = self.get(&format!("/channels/{channel_id}")).await?;
        info!(
            "Posting to channel {} ({})",
            info.name.as_deref().unwrap_or("unnamed"),
            info.id
        );

        Ok(DiscordChannel {
            client: self.client.clone(),
            token: self.token.clone(),
            info,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let request = self.client.get(format!("{API_BASE}{path}"));
        let response = send_authorized(request, &self.token).await?;
        Ok(response.json().await?)
    }
}

pub struct DiscordChannel {
    client: Client,
    token: String,
    info: ChannelInfo,
}

impl ChatChannel for DiscordChannel {
    async fn send(&self, content: &str) -> Result<()> {
        let request = self
            .client
            .post(format!("{API_BASE}/channels/{}/messages", self.info.id))
            .json(&CreateMessage { content });
        send_authorized(request, &self.token).await?;
        Ok(())
    }
}

async fn send_authorized(request: RequestBuilder, token: &str) -> Result<Response> {
    let response = request
        .header("Authorization", format!("Bot {token}"))
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(BotError::Discord {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_api_payloads() {
        let user: CurrentUser = serde_json::from_str(
            r#"{"id":"80351110224678912","username":"rankbot","discriminator":"0","bot":true}"#,
        )
        .unwrap();
        assert_eq!(user.username, "rankbot");

        let channel: ChannelInfo =
            serde_json::from_str(r#"{"id":"41771983423143937","type":0,"name":"ranking"}"#).unwrap();
        assert_eq!(channel.name.as_deref(), Some("ranking"));

        let dm: ChannelInfo = serde_json::from_str(r#"{"id":"1","type":1}"#).unwrap();
        assert!(dm.name.is_none());
    }

    #[test]
    fn message_body_shape() {
        let body = serde_json::to_value(CreateMessage { content: "hi" }).unwrap();
        assert_eq!(body, serde_json::json!({ "content": "hi" }));
    }
}
