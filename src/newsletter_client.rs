use std::future::Future;
use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::SubscriberEmail;

/// Subscriber record exactly as the newsletter provider returned it. Only
/// the `id` is ever read; every other key passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subscriber(Map<String, Value>);

impl Subscriber {
    pub fn id(&self) -> Option<&Value> {
        self.0.get("id")
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }
}

impl From<Map<String, Value>> for Subscriber {
    fn from(record: Map<String, Value>) -> Self {
        Self(record)
    }
}

#[derive(Serialize)]
struct AddSubscriberRequest<'a> {
    first_name: &'a str,
    email_address: &'a str,
}

#[derive(Deserialize)]
struct AddSubscriberResponse {
    subscriber: Subscriber,
}

/// Anything that can sign an address up to the newsletter.
pub trait SubscriptionApi {
    fn add_subscriber(
        &self,
        first_name: &str,
        email: &SubscriberEmail,
    ) -> impl Future<Output = Result<Subscriber, anyhow::Error>> + Send;
}

#[derive(Clone, Debug)]
pub struct NewsletterClient {
    http_client: Client,
    base_url: Url,
    api_key: SecretString,
}

impl NewsletterClient {
    pub fn new(
        base_url: String,
        api_key: SecretString,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let base_url = Url::parse(&base_url)
            .with_context(|| format!("Failed parsing newsletter api url {base_url}."))?;
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed building the newsletter api http client.")?;

        Ok(Self {
            http_client,
            base_url,
            api_key,
        })
    }
}

impl SubscriptionApi for NewsletterClient {
    #[tracing::instrument(
        name = "Adding a subscriber to the newsletter provider",
        skip(self, first_name),
        fields(subscriber_email = %email)
    )]
    async fn add_subscriber(
        &self,
        first_name: &str,
        email: &SubscriberEmail,
    ) -> Result<Subscriber, anyhow::Error> {
        let url = self
            .base_url
            .join("v4/subscribers")
            .context("Failed joining route to newsletter api url.")?;

        let body = AddSubscriberRequest {
            first_name,
            email_address: email.as_ref(),
        };

        let response = self
            .http_client
            .post(url)
            .header("X-Kit-Api-Key", self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .context("Failed to reach the newsletter api.")?
            .error_for_status()
            .context("The newsletter api rejected the subscriber.")?
            .json::<AddSubscriberResponse>()
            .await
            .context("Failed to decode the newsletter api subscriber.")?;

        Ok(response.subscriber)
    }
}
