/// Convenience result type used across algotrace.
pub type TraceResult<T> = Result<T, TraceError>;

/// Top-level error taxonomy used by generator and playback APIs.
///
/// Invalid-but-well-typed input (an empty array, a disconnected graph, a maze with no open
/// path) is never an error: generators answer it with a short, well-formed trace.
#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    /// Malformed caller input, rejected before any record is produced.
    #[error("validation error: {0}")]
    Validation(String),

    /// Timeline controller used out of order.
    #[error("playback error: {0}")]
    Playback(PlaybackMisuse),

    /// Errors when serializing or deserializing inputs and traces.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Programming errors reported synchronously by the timeline controller.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackMisuse {
    /// `play` or a manual step was requested before a trace was generated.
    #[error("no trace has been generated")]
    NoTrace,
    /// `play` was requested for a trace with no records.
    #[error("cannot play an empty trace")]
    EmptyTrace,
    /// `play` was requested after the terminal record was applied.
    #[error("playback already reached the terminal record")]
    AlreadyComplete,
    /// Manual stepping was requested while auto-play is running.
    #[error("manual stepping is not allowed while playing")]
    SteppingWhilePlaying,
    /// A zero speed would mean an infinite delay.
    #[error("speed must be at least 1")]
    ZeroSpeed,
}

impl TraceError {
    /// Build a [`TraceError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TraceError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return the playback misuse carried by this error, if any.
    pub fn misuse(&self) -> Option<PlaybackMisuse> {
        match self {
            Self::Playback(m) => Some(*m),
            _ => None,
        }
    }
}

impl From<PlaybackMisuse> for TraceError {
    fn from(m: PlaybackMisuse) -> Self {
        Self::Playback(m)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
