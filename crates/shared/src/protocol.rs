use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{LanguageCode, Reminder};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub target_lang: LanguageCode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    /// The service may omit the field on a degraded success; callers treat
    /// that as an empty translation.
    #[serde(default)]
    pub translated_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_lang: Option<LanguageCode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReminderListResponse {
    #[serde(default)]
    pub reminders: Vec<Reminder>,
    #[serde(default)]
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddReminderRequest {
    pub medicine: String,
    pub dosage: String,
    pub time: String,
    pub language: LanguageCode,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmergencyAlertRequest {
    pub message: String,
    pub caregiver_contact: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translate_response_defaults_missing_text_to_empty() {
        let response: TranslateResponse = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(response.translated_text, "");
    }

    #[test]
    fn reminder_list_defaults_missing_field_to_empty() {
        let response: ReminderListResponse = serde_json::from_str("{}").expect("deserialize");
        assert!(response.reminders.is_empty());
    }

    #[test]
    fn translate_request_uses_service_field_names() {
        let request = TranslateRequest {
            text: "Take your medicine".into(),
            target_lang: LanguageCode::Hindi,
        };
        let json = serde_json::to_value(&request).expect("serialize");
        assert_eq!(json["text"], "Take your medicine");
        assert_eq!(json["target_lang"], "hi");
    }
}
