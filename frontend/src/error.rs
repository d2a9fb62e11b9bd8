use thiserror::Error;

/// Problems caught in the browser before any request is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Source and destination accounts must be different")]
    SameTransferAccounts,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Amount must be a positive number")]
    InvalidAmount,
    #[error("Balance must be a number")]
    InvalidBalance,
    #[error("Description must be at most {0} characters")]
    DescriptionTooLong(usize),
    #[error("Category '{category}' cannot be used for {kind}")]
    CategoryNotAllowed { category: String, kind: &'static str },
}

/// Error type for every call made through the API client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("session expired or is invalid")]
    Unauthorized,
    #[error("request rejected with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

impl ApiError {
    /// Text for the notification channel. `None` for 401s, which are handled
    /// globally by redirecting to the login screen.
    pub fn notification(&self, fallback: &str) -> Option<String> {
        match self {
            ApiError::Unauthorized => None,
            ApiError::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message.clone()),
            ApiError::Invalid(err) => Some(err.to_string()),
            _ => Some(fallback.to_string()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_wins_over_fallback() {
        let err = ApiError::Rejected {
            status: 400,
            message: Some("Insufficient balance".into()),
        };
        assert_eq!(
            err.notification("Action failed").as_deref(),
            Some("Insufficient balance")
        );
    }

    #[test]
    fn blank_or_missing_message_uses_fallback() {
        let blank = ApiError::Rejected {
            status: 500,
            message: Some("   ".into()),
        };
        assert_eq!(blank.notification("Delete failed").as_deref(), Some("Delete failed"));
        let network = ApiError::Network("offline".into());
        assert_eq!(network.notification("Login failed").as_deref(), Some("Login failed"));
    }

    #[test]
    fn unauthorized_is_silent() {
        assert_eq!(ApiError::Unauthorized.notification("Action failed"), None);
    }

    #[test]
    fn validation_errors_surface_their_own_text() {
        let err = ApiError::from(ValidationError::SameTransferAccounts);
        assert_eq!(
            err.notification("Action failed").as_deref(),
            Some("Source and destination accounts must be different")
        );
    }
}
