//! Relay for contact form submissions.
//!
//! The site never sends mail itself. Submissions are validated, then
//! forwarded as JSON to a configured webhook (a Formspree-style endpoint).

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const RELAY_TIMEOUT_SECONDS: u64 = 20;

const MAX_NAME_CHARS: usize = 200;
const MAX_EMAIL_CHARS: usize = 254;
const MAX_MESSAGE_CHARS: usize = 5000;

/// One contact form submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Why a submission was rejected before relaying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidContact {
    #[error("name is required")]
    MissingName,
    #[error("a valid email address is required")]
    BadEmail,
    #[error("message is required")]
    MissingMessage,
    #[error("message is too long")]
    MessageTooLong,
}

impl ContactMessage {
    /// Trims the fields and checks shape and length limits.
    pub fn normalized(self) -> Result<ContactMessage, InvalidContact> {
        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let message = self.message.trim().to_string();

        if name.is_empty() || name.chars().count() > MAX_NAME_CHARS {
            return Err(InvalidContact::MissingName);
        }
        if email.is_empty() || email.chars().count() > MAX_EMAIL_CHARS || !looks_like_email(&email)
        {
            return Err(InvalidContact::BadEmail);
        }
        if message.is_empty() {
            return Err(InvalidContact::MissingMessage);
        }
        if message.chars().count() > MAX_MESSAGE_CHARS {
            return Err(InvalidContact::MessageTooLong);
        }

        Ok(ContactMessage {
            name,
            email,
            message,
        })
    }
}

// Webhook providers do their own verification, this only rejects obvious junk.
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

/// Forwards validated submissions to the configured webhook.
pub struct ContactRelay {
    client: reqwest::Client,
    webhook_url: String,
}

impl ContactRelay {
    /// Builds the relay for the configured webhook.
    pub fn new(webhook_url: String) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(RELAY_TIMEOUT_SECONDS))
            .build()
            .context("failed to build contact http client")?;

        Ok(Self {
            client,
            webhook_url,
        })
    }

    /// Posts one submission to the webhook.
    pub async fn forward(&self, message: &ContactMessage) -> Result<()> {
        self.client
            .post(&self.webhook_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(message)
            .send()
            .await
            .context("failed to call contact webhook")?
            .error_for_status()
            .context("contact webhook returned bad status")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn submission() -> ContactMessage {
        ContactMessage {
            name: "  Ada Lovelace  ".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello there.".to_string(),
        }
    }

    #[test]
    fn normalized_trims_every_field() {
        let message = submission().normalized().unwrap();
        assert_eq!(message.name, "Ada Lovelace");
    }

    #[test]
    fn normalized_rejects_blank_name_and_message() {
        let mut blank_name = submission();
        blank_name.name = "   ".to_string();
        assert_eq!(
            blank_name.normalized().unwrap_err(),
            InvalidContact::MissingName
        );

        let mut blank_message = submission();
        blank_message.message = String::new();
        assert_eq!(
            blank_message.normalized().unwrap_err(),
            InvalidContact::MissingMessage
        );
    }

    #[test]
    fn normalized_rejects_junk_emails() {
        for bad in ["plainaddress", "@nodomain", "user@nodot", "user@trailing."] {
            let mut message = submission();
            message.email = bad.to_string();
            assert_eq!(message.normalized().unwrap_err(), InvalidContact::BadEmail);
        }
    }

    #[test]
    fn normalized_caps_message_length() {
        let mut message = submission();
        message.message = "x".repeat(MAX_MESSAGE_CHARS + 1);
        assert_eq!(
            message.normalized().unwrap_err(),
            InvalidContact::MessageTooLong
        );
    }

    #[tokio::test]
    async fn forwards_the_submission_as_json() {
        let server = MockServer::start().await;
        let message = submission().normalized().unwrap();
        Mock::given(method("POST"))
            .and(path("/hooks/contact"))
            .and(body_json(&message))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let relay = ContactRelay::new(format!("{}/hooks/contact", server.uri())).unwrap();
        relay.forward(&message).await.unwrap();
    }

    #[tokio::test]
    async fn surfaces_webhook_failures() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hooks/contact"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let relay = ContactRelay::new(format!("{}/hooks/contact", server.uri())).unwrap();
        let err = relay
            .forward(&submission().normalized().unwrap())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("bad status"));
    }
}
