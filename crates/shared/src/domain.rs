use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(pub i64);
    };
}

id_newtype!(ReminderId);

/// Target languages supported by the assistant. Serialized as the
/// two-letter code the remote service expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LanguageCode {
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "te")]
    Telugu,
    #[serde(rename = "bn")]
    Bengali,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "ar")]
    Arabic,
    #[serde(rename = "en")]
    #[default]
    English,
}

impl LanguageCode {
    pub const ALL: [LanguageCode; 8] = [
        LanguageCode::Hindi,
        LanguageCode::Tamil,
        LanguageCode::Telugu,
        LanguageCode::Bengali,
        LanguageCode::Spanish,
        LanguageCode::French,
        LanguageCode::Arabic,
        LanguageCode::English,
    ];

    pub fn code(self) -> &'static str {
        match self {
            LanguageCode::Hindi => "hi",
            LanguageCode::Tamil => "ta",
            LanguageCode::Telugu => "te",
            LanguageCode::Bengali => "bn",
            LanguageCode::Spanish => "es",
            LanguageCode::French => "fr",
            LanguageCode::Arabic => "ar",
            LanguageCode::English => "en",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LanguageCode::Hindi => "Hindi",
            LanguageCode::Tamil => "Tamil",
            LanguageCode::Telugu => "Telugu",
            LanguageCode::Bengali => "Bengali",
            LanguageCode::Spanish => "Spanish",
            LanguageCode::French => "French",
            LanguageCode::Arabic => "Arabic",
            LanguageCode::English => "English",
        }
    }

    pub fn from_code(code: &str) -> Option<LanguageCode> {
        Self::ALL.iter().copied().find(|lang| lang.code() == code)
    }
}

/// A medication reminder as stored by the remote service. The client only
/// ever holds a cached copy, replaced wholesale after a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub id: ReminderId,
    pub medicine: String,
    pub dosage: String,
    pub time: String,
    pub language: LanguageCode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ViewTab {
    #[default]
    Translate,
    Reminders,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoticeSeverity {
    #[default]
    Info,
    Error,
}

/// The single current status line shown to the user. No history: each
/// write fully replaces the previous value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: NoticeSeverity::Error,
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.message.is_empty()
    }
}
