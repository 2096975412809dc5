use thiserror::Error;

/// Fallback text shown when the analysis service fails without a `detail`.
pub const GENERIC_ANALYSIS_FAILURE: &str = "Analysis failed";

#[derive(Error, Debug)]
pub enum TalentError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("No {kind} with id '{id}'")]
    NotFound { kind: &'static str, id: String },

    #[error("Remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl TalentError {
    pub fn not_found(kind: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    /// The text a user should see for this failure.
    ///
    /// Remote failures surface the server's own message; everything else uses
    /// the display form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote { message, .. } => message.clone(),
            Self::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, TalentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_user_message_is_server_detail() {
        let err = TalentError::Remote {
            status: 500,
            message: "bad file".to_string(),
        };
        assert_eq!(err.user_message(), "bad file");
        assert_eq!(err.to_string(), "Remote error (500): bad file");
    }

    #[test]
    fn not_found_display() {
        let err = TalentError::not_found("template", "TPL404");
        assert_eq!(err.to_string(), "No template with id 'TPL404'");
    }
}
