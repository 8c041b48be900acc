//! Session state coordinator for the Careline assistant client.
//!
//! [`AssistantSession`] owns all mutable client-side state (active view,
//! notice line, translation session, reminder cache and draft) and
//! orchestrates asynchronous calls to the remote service. The rendering
//! layer is expected to be a pure function of [`SessionSnapshot`] plus the
//! [`SessionEvent`] stream; it never mutates state directly.

use std::sync::Arc;

use shared::{
    domain::{LanguageCode, Notice, Reminder, ReminderId, ViewTab},
    error::ClientError,
    protocol::{AddReminderRequest, EmergencyAlertRequest},
};
use tokio::sync::{broadcast, Mutex};
use tracing::{debug, warn};

pub mod config;
pub mod service_client;
pub mod speech;

pub use service_client::ServiceClient;
pub use speech::{MissingSpeechSynthesizer, SpeechSynthesizer, SpeechUnavailable};

const DEFAULT_REMINDER_TIME: &str = "09:00";
const SPEECH_RATE: f32 = 0.95;
const EMERGENCY_MESSAGE: &str = "Health emergency";

/// Notice strings surfaced to the user. One terminal message per
/// completed operation; the latest write always wins.
pub mod notices {
    pub const EMPTY_MESSAGE: &str = "Please enter a message.";
    pub const TRANSLATION_READY: &str = "Translation ready.";
    pub const TRANSLATION_FAILED: &str = "Translation failed.";
    pub const REMINDERS_LOAD_FAILED: &str = "Could not load reminders.";
    pub const DRAFT_INCOMPLETE: &str = "Enter medicine and dosage.";
    pub const REMINDER_ADDED: &str = "Reminder added.";
    pub const REMINDER_ADD_FAILED: &str = "Failed to add reminder.";
    pub const REMINDER_DELETED: &str = "Reminder deleted.";
    pub const REMINDER_DELETE_FAILED: &str = "Failed to delete reminder.";
    pub const EMERGENCY_SENT: &str = "Emergency alert simulated.";
    pub const EMERGENCY_FAILED: &str = "Emergency alert failed.";
    pub const SPEECH_UNSUPPORTED: &str = "Speech not supported on this device.";
}

/// Result of the most recent successful translation. Replaced by the next
/// translate call; owned exclusively by the translation session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationOutcome {
    pub source_text: String,
    pub target_language: LanguageCode,
    pub translated_text: String,
}

#[derive(Debug, Clone)]
pub struct TranslationSession {
    pub text: String,
    pub target_language: LanguageCode,
    pub is_loading: bool,
    pub result: Option<TranslationOutcome>,
}

impl Default for TranslationSession {
    fn default() -> Self {
        Self {
            text: String::new(),
            target_language: LanguageCode::Hindi,
            is_loading: false,
            result: None,
        }
    }
}

/// Unsaved form input for a not-yet-created reminder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub medicine: String,
    pub dosage: String,
    pub time: String,
    pub language: LanguageCode,
}

impl Default for ReminderDraft {
    fn default() -> Self {
        Self {
            medicine: String::new(),
            dosage: String::new(),
            time: DEFAULT_REMINDER_TIME.into(),
            language: LanguageCode::Hindi,
        }
    }
}

#[derive(Debug, Default)]
struct SessionState {
    view: ViewTab,
    notice: Notice,
    translation: TranslationSession,
    reminders: Vec<Reminder>,
    draft: ReminderDraft,
}

/// Point-in-time copy of the observable session state.
#[derive(Debug, Clone)]
pub struct SessionSnapshot {
    pub view: ViewTab,
    pub notice: Notice,
    pub translation: TranslationSession,
    pub reminders: Vec<Reminder>,
    pub draft: ReminderDraft,
}

/// Emitted synchronously after each state mutation so observers can
/// re-render without polling.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    ViewChanged(ViewTab),
    NoticeChanged(Notice),
    TranslationStarted,
    TranslationFinished(Option<TranslationOutcome>),
    RemindersRefreshed(Vec<Reminder>),
    DraftReset,
}

pub struct AssistantSession {
    service: ServiceClient,
    speech: Arc<dyn SpeechSynthesizer>,
    inner: Mutex<SessionState>,
    events: broadcast::Sender<SessionEvent>,
}

impl AssistantSession {
    pub fn new(server_url: impl Into<String>) -> Arc<Self> {
        Self::new_with_speech(server_url, Arc::new(MissingSpeechSynthesizer))
    }

    pub fn new_with_speech(
        server_url: impl Into<String>,
        speech: Arc<dyn SpeechSynthesizer>,
    ) -> Arc<Self> {
        let (events, _) = broadcast::channel(256);
        Arc::new(Self {
            service: ServiceClient::new(server_url),
            speech,
            inner: Mutex::new(SessionState::default()),
            events,
        })
    }

    pub fn service(&self) -> &ServiceClient {
        &self.service
    }

    pub fn subscribe_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        let guard = self.inner.lock().await;
        SessionSnapshot {
            view: guard.view,
            notice: guard.notice.clone(),
            translation: guard.translation.clone(),
            reminders: guard.reminders.clone(),
            draft: guard.draft.clone(),
        }
    }

    /// Pure state replacement. Switching tabs never discards the other
    /// panels' state; form fields and the last translation persist.
    pub async fn select_view(&self, tab: ViewTab) {
        {
            let mut guard = self.inner.lock().await;
            guard.view = tab;
        }
        let _ = self.events.send(SessionEvent::ViewChanged(tab));
    }

    /// Single-slot notice write, last writer wins.
    pub async fn set_notice(&self, notice: Notice) {
        {
            let mut guard = self.inner.lock().await;
            guard.notice = notice.clone();
        }
        let _ = self.events.send(SessionEvent::NoticeChanged(notice));
    }

    pub async fn clear_notice(&self) {
        self.set_notice(Notice::default()).await;
    }

    pub async fn set_translation_text(&self, text: impl Into<String>) {
        let mut guard = self.inner.lock().await;
        guard.translation.text = text.into();
    }

    pub async fn set_target_language(&self, language: LanguageCode) {
        let mut guard = self.inner.lock().await;
        guard.translation.target_language = language;
    }

    pub async fn is_translating(&self) -> bool {
        self.inner.lock().await.translation.is_loading
    }

    /// Translate the current text into the chosen target language.
    ///
    /// Blank text fails locally without a network call. A call while a
    /// translation is already in flight is a no-op; the UI trigger is
    /// expected to be disabled while loading, this guard just keeps the
    /// at-most-one-in-flight invariant for non-UI callers too. The
    /// loading flag is cleared on both completion paths.
    pub async fn translate(&self) -> Result<(), ClientError> {
        let (text, target_language) = {
            let mut guard = self.inner.lock().await;
            if guard.translation.is_loading {
                debug!("translate: request already in flight; ignoring duplicate trigger");
                return Ok(());
            }
            let text = guard.translation.text.trim().to_string();
            if text.is_empty() {
                guard.notice = Notice::error(notices::EMPTY_MESSAGE);
                let notice = guard.notice.clone();
                drop(guard);
                let _ = self.events.send(SessionEvent::NoticeChanged(notice));
                return Err(ClientError::Validation("empty text".into()));
            }
            guard.translation.is_loading = true;
            guard.translation.result = None;
            guard.notice = Notice::default();
            (text, guard.translation.target_language)
        };
        let _ = self.events.send(SessionEvent::NoticeChanged(Notice::default()));
        let _ = self.events.send(SessionEvent::TranslationStarted);

        match self.service.translate(&text, target_language).await {
            Ok(body) => {
                let outcome = TranslationOutcome {
                    source_text: text,
                    target_language,
                    translated_text: body.translated_text,
                };
                let notice = Notice::info(notices::TRANSLATION_READY);
                {
                    let mut guard = self.inner.lock().await;
                    guard.translation.is_loading = false;
                    guard.translation.result = Some(outcome.clone());
                    guard.notice = notice.clone();
                }
                let _ = self
                    .events
                    .send(SessionEvent::TranslationFinished(Some(outcome)));
                let _ = self.events.send(SessionEvent::NoticeChanged(notice));
                Ok(())
            }
            Err(err) => {
                warn!(target_lang = target_language.code(), "translate failed: {err}");
                let notice = Notice::error(notices::TRANSLATION_FAILED);
                {
                    let mut guard = self.inner.lock().await;
                    guard.translation.is_loading = false;
                    guard.notice = notice.clone();
                }
                let _ = self.events.send(SessionEvent::TranslationFinished(None));
                let _ = self.events.send(SessionEvent::NoticeChanged(notice));
                Err(err)
            }
        }
    }

    /// Speak the latest translation result, if any.
    pub async fn speak_result(&self) -> Result<(), ClientError> {
        let text = {
            let guard = self.inner.lock().await;
            guard
                .translation
                .result
                .as_ref()
                .map(|outcome| outcome.translated_text.clone())
                .unwrap_or_default()
        };
        self.speak(&text).await
    }

    /// Fire-and-forget speech output with the current target language as
    /// the pronunciation hint. Empty text is a no-op; a missing capability
    /// resolves into a notice and changes no other state.
    pub async fn speak(&self, text: &str) -> Result<(), ClientError> {
        if text.is_empty() {
            return Ok(());
        }
        let language = { self.inner.lock().await.translation.target_language };
        match self.speech.speak(text, language.code(), SPEECH_RATE) {
            Ok(()) => Ok(()),
            Err(SpeechUnavailable) => {
                self.set_notice(Notice::error(notices::SPEECH_UNSUPPORTED))
                    .await;
                Err(ClientError::SpeechUnavailable)
            }
        }
    }

    /// Refresh the reminder cache from the remote service. The list is
    /// replaced wholesale on success; on failure the prior list is kept
    /// (stale data beats no data) and a failure notice is written. Called
    /// on startup and after every successful mutation.
    pub async fn fetch_reminders(&self) -> Result<(), ClientError> {
        match self.service.list_reminders().await {
            Ok(body) => {
                let reminders = body.reminders;
                {
                    let mut guard = self.inner.lock().await;
                    guard.reminders = reminders.clone();
                }
                let _ = self.events.send(SessionEvent::RemindersRefreshed(reminders));
                Ok(())
            }
            Err(err) => {
                warn!("reminder fetch failed: {err}");
                self.set_notice(Notice::error(notices::REMINDERS_LOAD_FAILED))
                    .await;
                Err(err)
            }
        }
    }

    pub async fn set_draft_medicine(&self, medicine: impl Into<String>) {
        let mut guard = self.inner.lock().await;
        guard.draft.medicine = medicine.into();
    }

    pub async fn set_draft_dosage(&self, dosage: impl Into<String>) {
        let mut guard = self.inner.lock().await;
        guard.draft.dosage = dosage.into();
    }

    pub async fn set_draft_time(&self, time: impl Into<String>) {
        let mut guard = self.inner.lock().await;
        guard.draft.time = time.into();
    }

    pub async fn set_draft_language(&self, language: LanguageCode) {
        let mut guard = self.inner.lock().await;
        guard.draft.language = language;
    }

    /// Create a reminder from the draft fields. Validation failures never
    /// reach the network and leave the draft untouched. On success the
    /// draft is reset and the canonical list re-fetched; on failure the
    /// draft is kept so the user can retry.
    pub async fn add_reminder(&self) -> Result<(), ClientError> {
        let request = {
            let guard = self.inner.lock().await;
            if guard.draft.medicine.trim().is_empty() || guard.draft.dosage.trim().is_empty() {
                drop(guard);
                self.set_notice(Notice::error(notices::DRAFT_INCOMPLETE))
                    .await;
                return Err(ClientError::Validation(
                    "medicine and dosage are required".into(),
                ));
            }
            let time = if guard.draft.time.trim().is_empty() {
                DEFAULT_REMINDER_TIME.to_string()
            } else {
                guard.draft.time.clone()
            };
            AddReminderRequest {
                medicine: guard.draft.medicine.clone(),
                dosage: guard.draft.dosage.clone(),
                time,
                language: guard.draft.language,
            }
        };

        match self.service.add_reminder(&request).await {
            Ok(()) => {
                {
                    let mut guard = self.inner.lock().await;
                    guard.draft.medicine.clear();
                    guard.draft.dosage.clear();
                    guard.draft.time = DEFAULT_REMINDER_TIME.into();
                }
                let _ = self.events.send(SessionEvent::DraftReset);
                self.set_notice(Notice::info(notices::REMINDER_ADDED)).await;
                // Resync failure writes its own notice; the add itself
                // already succeeded.
                let _ = self.fetch_reminders().await;
                Ok(())
            }
            Err(err) => {
                warn!(medicine = %request.medicine, "add reminder failed: {err}");
                self.set_notice(Notice::error(notices::REMINDER_ADD_FAILED))
                    .await;
                Err(err)
            }
        }
    }

    /// Delete a reminder by id. No optimistic removal: a failed delete
    /// leaves the cached list untouched and is visibly a no-op.
    pub async fn delete_reminder(&self, id: ReminderId) -> Result<(), ClientError> {
        match self.service.delete_reminder(id).await {
            Ok(()) => {
                self.set_notice(Notice::info(notices::REMINDER_DELETED))
                    .await;
                let _ = self.fetch_reminders().await;
                Ok(())
            }
            Err(err) => {
                warn!(reminder_id = id.0, "delete reminder failed: {err}");
                self.set_notice(Notice::error(notices::REMINDER_DELETE_FAILED))
                    .await;
                Err(err)
            }
        }
    }

    /// Simulated emergency alert. Stateless beyond the notice write; no
    /// retry, no confirmation state machine.
    pub async fn emergency_alert(&self) -> Result<(), ClientError> {
        let request = EmergencyAlertRequest {
            message: EMERGENCY_MESSAGE.into(),
            caregiver_contact: String::new(),
        };
        match self.service.emergency_alert(&request).await {
            Ok(()) => {
                self.set_notice(Notice::info(notices::EMERGENCY_SENT)).await;
                Ok(())
            }
            Err(err) => {
                warn!("emergency alert failed: {err}");
                self.set_notice(Notice::error(notices::EMERGENCY_FAILED))
                    .await;
                Err(err)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
