//! Outbound SMS dispatch.
//!
//! Messages are POSTed as JSON `{to, message}` to the configured gateway. Without a
//! gateway (local development) the message is logged instead of sent.

use serde_json::json;

use crate::server::error::AppError;

pub struct SmsService<'a> {
    http_client: &'a reqwest::Client,
    gateway_url: Option<&'a str>,
}

impl<'a> SmsService<'a> {
    pub fn new(http_client: &'a reqwest::Client, gateway_url: Option<&'a str>) -> Self {
        Self {
            http_client,
            gateway_url,
        }
    }

    /// Sends a text message to the phone number.
    ///
    /// # Returns
    /// - `Ok(())` - Gateway accepted the message, or no gateway is configured
    /// - `Err(AppError::Upstream)` - Gateway unreachable or answered with an error status
    pub async fn send(&self, phone: &str, message: &str) -> Result<(), AppError> {
        let Some(url) = self.gateway_url else {
            tracing::info!("SMS gateway not configured, message to {}: {}", phone, message);
            return Ok(());
        };

        let response = self
            .http_client
            .post(url)
            .json(&json!({ "to": phone, "message": message }))
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("SMS gateway unreachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Upstream(format!(
                "SMS gateway rejected message with status {}",
                response.status()
            )));
        }

        tracing::debug!("Sent SMS to {}", phone);
        Ok(())
    }
}
