//! HTTP relay transport.
//!
//! Delivers an envelope by POSTing the body to the destination URL with each
//! attribute as a request header, so `traceparent` rides the standard header
//! a downstream consumer already knows how to extract.

use async_trait::async_trait;

use crate::publish::{Envelope, PublishError, QueuePublisher};

/// Queue transport speaking plain HTTP to the destination.
pub struct HttpRelayPublisher {
    client: reqwest::Client,
}

impl HttpRelayPublisher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpRelayPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QueuePublisher for HttpRelayPublisher {
    async fn send(&self, destination: &str, envelope: Envelope) -> Result<(), PublishError> {
        let Envelope { body, attributes } = envelope;

        let mut request = self.client.post(destination).body(body);
        for (key, attr) in &attributes {
            request = request.header(key.as_str(), attr.value.as_str());
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PublishError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
