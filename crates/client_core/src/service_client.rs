//! Stateless request/response wrapper over the remote service endpoints.
//!
//! One method per endpoint, no retries, no caching. Every failure,
//! transport or HTTP status alike, collapses into [`ClientError::Remote`];
//! resilience policy belongs to the calling session.

use reqwest::Client;
use shared::{
    domain::{LanguageCode, ReminderId},
    error::ClientError,
    protocol::{
        AddReminderRequest, EmergencyAlertRequest, HealthResponse, ReminderListResponse,
        TranslateRequest, TranslateResponse,
    },
};

pub struct ServiceClient {
    http: Client,
    base_url: String,
}

fn remote(err: reqwest::Error) -> ClientError {
    ClientError::Remote(err.to_string())
}

impl ServiceClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(remote)?
            .error_for_status()
            .map_err(remote)?
            .json()
            .await
            .map_err(remote)
    }

    pub async fn translate(
        &self,
        text: &str,
        target_lang: LanguageCode,
    ) -> Result<TranslateResponse, ClientError> {
        self.http
            .post(format!("{}/translate", self.base_url))
            .json(&TranslateRequest {
                text: text.to_string(),
                target_lang,
            })
            .send()
            .await
            .map_err(remote)?
            .error_for_status()
            .map_err(remote)?
            .json()
            .await
            .map_err(remote)
    }

    pub async fn list_reminders(&self) -> Result<ReminderListResponse, ClientError> {
        self.http
            .get(format!("{}/reminders", self.base_url))
            .send()
            .await
            .map_err(remote)?
            .error_for_status()
            .map_err(remote)?
            .json()
            .await
            .map_err(remote)
    }

    /// 2xx means stored; the response body is ignored.
    pub async fn add_reminder(&self, request: &AddReminderRequest) -> Result<(), ClientError> {
        self.http
            .post(format!("{}/add-reminder", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(remote)?
            .error_for_status()
            .map_err(remote)?;
        Ok(())
    }

    pub async fn delete_reminder(&self, id: ReminderId) -> Result<(), ClientError> {
        self.http
            .delete(format!("{}/reminders/{}", self.base_url, id.0))
            .send()
            .await
            .map_err(remote)?
            .error_for_status()
            .map_err(remote)?;
        Ok(())
    }

    pub async fn emergency_alert(&self, request: &EmergencyAlertRequest) -> Result<(), ClientError> {
        self.http
            .post(format!("{}/emergency-alert", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(remote)?
            .error_for_status()
            .map_err(remote)?;
        Ok(())
    }
}
