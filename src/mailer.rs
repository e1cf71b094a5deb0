use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::MailerConfig;
use crate::contact::{ContactError, ContactForm};

/// Template parameters the email template expects.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct EmailParams {
    pub name: String,
    pub email: String,
    pub time: String,
    pub message: String,
}

impl EmailParams {
    pub fn new(form: &ContactForm, at: DateTime<Utc>) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            time: at.to_rfc2822(),
            message: form.message.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
struct EmailRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: EmailParams,
}

/// Forwards contact form submissions to the email-delivery service.
#[derive(Debug, Clone)]
pub struct Mailer {
    client: Client,
    config: MailerConfig,
}

impl Mailer {
    pub fn new(config: MailerConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &MailerConfig {
        &self.config
    }

    fn request(&self, params: EmailParams) -> EmailRequest<'_> {
        EmailRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.private_key.as_deref(),
            template_params: params,
        }
    }

    pub async fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        form.validate()?;
        let request = self.request(EmailParams::new(form, Utc::now()));
        debug!(endpoint = %self.config.endpoint, "forwarding contact message");

        let response = self
            .client
            .post(&self.config.endpoint)
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "email service unreachable");
                ContactError::Delivery(e.to_string())
            })?;

        let status = response.status();
        if status.is_success() {
            info!("contact message delivered");
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        warn!(%status, %body, "email service rejected message");
        Err(ContactError::Delivery(format!("email service returned {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(endpoint: String) -> MailerConfig {
        MailerConfig {
            endpoint,
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            public_key: "public_test".to_string(),
            private_key: None,
            timeout: Duration::from_secs(2),
        }
    }

    fn form() -> ContactForm {
        ContactForm {
            name: " Ferris ".to_string(),
            email: "ferris@rust-lang.org".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn test_request_body() {
        let at = Utc.with_ymd_and_hms(2025, 1, 12, 3, 4, 5).unwrap();
        let mut cfg = config("http://unused".to_string());
        cfg.private_key = Some("secret".to_string());
        let mailer = Mailer::new(cfg);
        let body = serde_json::to_value(mailer.request(EmailParams::new(&form(), at))).unwrap();
        assert_eq!(
            body,
            json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "public_test",
                "accessToken": "secret",
                "template_params": {
                    "name": "Ferris",
                    "email": "ferris@rust-lang.org",
                    "time": "Sun, 12 Jan 2025 03:04:05 +0000",
                    "message": "Hello there",
                }
            })
        );
    }

    #[test]
    fn test_request_body_without_private_key() {
        let mailer = Mailer::new(config("http://unused".to_string()));
        let body = serde_json::to_value(mailer.request(EmailParams::new(&form(), Utc::now()))).unwrap();
        assert!(body.get("accessToken").is_none());
    }

    #[tokio::test]
    async fn test_send_delivers() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1.0/email/send"))
            .and(body_partial_json(json!({
                "service_id": "service_test",
                "template_params": { "name": "Ferris", "message": "Hello there" }
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&server)
            .await;

        let mailer = Mailer::new(config(format!("{}/api/v1.0/email/send", server.uri())));
        assert_eq!(mailer.send(&form()).await, Ok(()));
    }

    #[tokio::test]
    async fn test_send_reports_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("The user ID is invalid"))
            .mount(&server)
            .await;

        let mailer = Mailer::new(config(format!("{}/api/v1.0/email/send", server.uri())));
        let err = mailer.send(&form()).await.unwrap_err();
        assert!(matches!(err, ContactError::Delivery(ref s) if s.contains("400")));
    }

    #[tokio::test]
    async fn test_send_rejects_invalid_form_without_calling_out() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mailer = Mailer::new(config(server.uri()));
        let mut bad = form();
        bad.message.clear();
        assert_eq!(mailer.send(&bad).await, Err(ContactError::MissingMessage));
    }
}
