use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use shared::{Mood, Reminder};
use tracing::debug;

use crate::error::ClientError;

/// One request for one reminder, no retries.
#[async_trait]
pub trait ReminderSource: Send + Sync {
    async fn fetch(&self, mood: Mood) -> Result<Reminder, ClientError>;
}

pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn endpoint(&self, mood: Mood) -> String {
        if mood.is_neutral() {
            format!("{}/reminder", self.base_url)
        } else {
            format!("{}/reminders/category/{mood}", self.base_url)
        }
    }
}

#[async_trait]
impl ReminderSource for HttpSource {
    async fn fetch(&self, mood: Mood) -> Result<Reminder, ClientError> {
        let endpoint = self.endpoint(mood);
        debug!("GET {endpoint}");

        let res = self.client.get(&endpoint).send().await?;
        let status = res.status();
        let text = res.text().await?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }
}
