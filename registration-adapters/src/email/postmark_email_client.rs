use askama::Template;
use registration_core::{CONFIRMATION_TOKEN_TTL_MINUTES, Email, EmailClient, EmailClientError};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use super::template::ConfirmationEmailTemplate;

#[derive(Clone)]
pub struct PostmarkEmailClient {
    http_client: Client,
    base_url: String,
    sender: Email,
    authorization_token: Secret<String>,
}

impl PostmarkEmailClient {
    pub fn new(
        base_url: String,
        sender: Email,
        authorization_token: Secret<String>,
        http_client: Client,
    ) -> Self {
        Self {
            http_client,
            base_url,
            sender,
            authorization_token,
        }
    }
}

#[async_trait::async_trait]
impl EmailClient for PostmarkEmailClient {
    #[tracing::instrument(name = "Sending confirmation email", skip_all)]
    async fn send_confirmation(
        &self,
        recipient: &Email,
        recipient_name: &str,
        confirmation_url: &str,
    ) -> Result<(), EmailClientError> {
        let base = Url::parse(&self.base_url).map_err(delivery_failed)?;
        let url = base.join("/email").map_err(delivery_failed)?;

        let html_body = ConfirmationEmailTemplate {
            name: recipient_name,
            confirmation_url,
        }
        .render()
        .map_err(delivery_failed)?;
        let text_body = format!(
            "Hello {recipient_name},\n\nPlease activate your account: {confirmation_url}\n\
             The link expires in {CONFIRMATION_TOKEN_TTL_MINUTES} minutes.\n"
        );

        let request_body = SendEmailRequest {
            from: self.sender.as_ref().expose_secret(),
            to: recipient.as_ref().expose_secret(),
            subject: SUBJECT,
            html_body: &html_body,
            text_body: &text_body,
            message_stream: MESSAGE_STREAM,
        };

        let request = self
            .http_client
            .post(url)
            .header(
                POSTMARK_AUTH_HEADER,
                self.authorization_token.expose_secret(),
            )
            .json(&request_body);

        request
            .send()
            .await
            .map_err(delivery_failed)?
            .error_for_status()
            .map_err(delivery_failed)?;

        Ok(())
    }
}

fn delivery_failed(e: impl std::fmt::Display) -> EmailClientError {
    EmailClientError::DeliveryFailed(e.to_string())
}

const SUBJECT: &str = "Activate your account";
const MESSAGE_STREAM: &str = "outbound";
const POSTMARK_AUTH_HEADER: &str = "X-Postmark-Server-Token";

#[derive(serde::Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
    message_stream: &'a str,
}
