//! Speech output capability seam.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("speech output is not supported on this device")]
pub struct SpeechUnavailable;

/// Device speech-synthesis capability. Invocations are fire-and-forget:
/// the implementation queues audible output and returns immediately, so
/// the trait stays synchronous and carries no session state.
pub trait SpeechSynthesizer: Send + Sync {
    fn speak(&self, text: &str, language_hint: &str, rate: f32) -> Result<(), SpeechUnavailable>;
}

/// Fallback for hosts without a speech engine. Every request reports the
/// capability as unavailable, which the session resolves into a notice.
pub struct MissingSpeechSynthesizer;

impl SpeechSynthesizer for MissingSpeechSynthesizer {
    fn speak(&self, _text: &str, _language_hint: &str, _rate: f32) -> Result<(), SpeechUnavailable> {
        Err(SpeechUnavailable)
    }
}
