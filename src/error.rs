use thiserror::Error;

/// Crate-wide error type.
///
/// Nothing here is fatal to the process: projections degrade to a
/// corrective message, store failures are surfaced for a manual retry,
/// and advisory failures are shown in place of the advisory text.
#[derive(Debug, Error)]
pub enum Error {
    /// Required cycle fields are missing or unparseable.
    #[error("profile is missing required cycle data; check your settings")]
    IncompleteProfile,

    /// No profile document exists yet for this user.
    #[error("no user profile found; complete onboarding first")]
    ProfileMissing,

    /// A caller-supplied field failed validation.
    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: &'static str,
        message: String,
    },

    /// The profile store could not be reached.
    #[error("profile store request failed: {0}")]
    StoreUnavailable(#[source] reqwest::Error),

    /// The profile store answered with a non-success status.
    #[error("profile store rejected the request: {0}")]
    StoreRejected(reqwest::StatusCode),

    /// The advisory endpoint could not be reached.
    #[error("advisory request failed: {0}")]
    InsightTransport(#[source] reqwest::Error),

    /// The advisory endpoint answered with a non-retryable status.
    #[error("advisory endpoint returned {status}: {body}")]
    InsightStatus {
        status: reqwest::StatusCode,
        body: String,
    },

    /// A success response carried no generated text.
    #[error("no generated text in advisory response")]
    InsightShape,

    /// Failed to build the shared HTTP client.
    #[error("HTTP client error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings error: {0}")]
    Settings(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings(message.into())
    }

    pub fn invalid_input(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            message: message.into(),
        }
    }

    /// True for store failures the user may retry manually.
    pub fn is_store_failure(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::StoreRejected(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = Error::IncompleteProfile;
        assert!(err.to_string().contains("cycle data"));

        let err = Error::invalid_input("age", "must be greater than zero");
        assert!(err.to_string().contains("age"));
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn store_failure_predicate() {
        assert!(Error::StoreRejected(reqwest::StatusCode::SERVICE_UNAVAILABLE).is_store_failure());
        assert!(!Error::IncompleteProfile.is_store_failure());
        assert!(!Error::InsightShape.is_store_failure());
    }
}
