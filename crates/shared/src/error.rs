use thiserror::Error;

/// Terminal outcome of a coordinator operation. Every variant is resolved
/// at the session boundary into a single notice write; none crash the
/// application and none are retried.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Local precondition failure (empty required field). Never reaches
    /// the network.
    #[error("validation failed: {0}")]
    Validation(String),
    /// Any network or HTTP failure from the remote service, not
    /// distinguished by status code.
    #[error("remote service call failed: {0}")]
    Remote(String),
    /// The device speech capability is missing or refused the request.
    #[error("speech output is not supported on this device")]
    SpeechUnavailable,
}

impl ClientError {
    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}
