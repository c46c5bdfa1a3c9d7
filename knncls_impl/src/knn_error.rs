use thiserror::Error;

/// A list specifying categories of [`KnnError`](crate::KnnError).
///
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum KnnError {
    /// The peer performed an orderly close before a required read completed.
    #[error("Connection closed by peer")]
    PeerClosed,

    /// Transport or file I/O failed with a system-level cause.
    #[error("I/O error: {source}")]
    Io {
        /// The causing Error.
        source: std::io::Error,
    },

    /// The accept deadline elapsed without an incoming connection.
    #[error("No incoming connection within the accept deadline")]
    AcceptTimeout,

    /// Two points of incomparable arities were handed to a metric.
    #[error("Points of incomparable arities ({left} and {right})")]
    ArityMismatch { left: usize, right: usize },

    /// A metric key that is not in the registry.
    #[error("Unknown distance metric: {0}")]
    UnknownMetric(String),

    /// A k value outside the admissible range.
    #[error("Invalid value for K: {k} (expected between 1 and {limit})")]
    InvalidK { k: usize, limit: usize },

    /// A CSV field could not be parsed as a number.
    #[error("Cannot parse numeric field {field:?}")]
    Parse { field: String },

    /// A menu choice that is non-numeric or out of range.
    #[error("Invalid Command")]
    InvalidCommand,

    /// The peer sent a frame that violates the dialogue.
    #[error("Protocol violation: {0}")]
    Protocol(String),

    /// Error occured in thread synchronization.
    #[error("Error occured in thread synchronization")]
    Poison,
}

/// Abbreviation of `Result<T, KnnError>`.
pub type KnnResult<T> = std::result::Result<T, KnnError>;

impl KnnError {
    /// Whether the error ends the session, as opposed to a single command.
    ///
    /// Commands recover from everything else by reporting an error line and
    /// returning control to the menu.
    #[must_use]
    pub fn is_session_fatal(&self) -> bool {
        matches!(
            self,
            Self::PeerClosed | Self::Io { .. } | Self::Protocol(_) | Self::Poison
        )
    }
}

impl From<std::io::Error> for KnnError {
    fn from(error: std::io::Error) -> Self {
        // An orderly close surfaces as a short read.
        if error.kind() == std::io::ErrorKind::UnexpectedEof {
            Self::PeerClosed
        } else {
            Self::Io { source: error }
        }
    }
}

impl<G> From<std::sync::PoisonError<G>> for KnnError {
    fn from(_error: std::sync::PoisonError<G>) -> Self {
        Self::Poison
    }
}
