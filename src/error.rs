// Error taxonomy for payload parsing and derived notification properties.
//
// Nothing here is recovered locally. Callers decide whether a failure means
// skipping one notification or aborting the whole batch.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WeverseError {
    /// A required key was absent. `field` is the dotted path, e.g. `message.values`.
    #[error("missing required field `{field}`")]
    MissingField { field: &'static str },

    /// The payload is JSON, but a field has the wrong shape.
    #[error("invalid notification payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("no post id pattern found in messageId {message_id:?}")]
    PatternNotFound { message_id: String },

    #[error("cannot compare a Notification with a value of another type")]
    UnsupportedComparison,
}

pub type Result<T> = std::result::Result<T, WeverseError>;

/// Unwrap an optional wire field or report it as missing.
pub(crate) fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(WeverseError::MissingField { field })
}
