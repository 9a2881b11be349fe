use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

pub const PROFILE_UPDATE_EVENT: &str = "lwj/user.profile.update";

/// Receipt for an accepted event, handed back to callers untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendEventAck {
    pub ids: Vec<String>,
}

#[derive(Serialize)]
struct Event<'a, T> {
    name: &'a str,
    data: &'a T,
}

/// Anything that can enqueue a named event.
pub trait EventSender {
    fn send<T>(
        &self,
        name: &str,
        data: &T,
    ) -> impl Future<Output = Result<SendEventAck, anyhow::Error>> + Send
    where
        T: Serialize + Sync;
}

#[derive(Clone, Debug)]
pub struct EventClient {
    http_client: Client,
    base_url: Url,
    event_key: SecretString,
}

impl EventClient {
    pub fn new(
        base_url: String,
        event_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let base_url = Url::parse(&base_url)
            .with_context(|| format!("Failed parsing event api url {base_url}."))?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed building the event api http client.")?;

        Ok(Self {
            http_client,
            base_url,
            event_key,
        })
    }

    /// `{base_url}/e/{event_key}`, with the key percent-encoded as a single
    /// path segment.
    fn event_url(&self) -> Result<Url, anyhow::Error> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| anyhow::anyhow!("The event api url {} cannot be a base.", self.base_url))?
            .pop_if_empty()
            .push("e")
            .push(self.event_key.expose_secret());
        Ok(url)
    }
}

impl EventSender for EventClient {
    #[tracing::instrument(name = "Sending an event", skip(self, data))]
    async fn send<T>(&self, name: &str, data: &T) -> Result<SendEventAck, anyhow::Error>
    where
        T: Serialize + Sync,
    {
        let url = self.event_url()?;

        let ack = self
            .http_client
            .post(url)
            .json(&Event { name, data })
            .send()
            .await
            .context("Failed to reach the event api.")?
            .error_for_status()
            .context("The event api rejected the event.")?
            .json::<SendEventAck>()
            .await
            .context("Failed to decode the event api acknowledgment.")?;

        tracing::info!(event_ids = ?ack.ids, "Event accepted");
        Ok(ack)
    }
}
