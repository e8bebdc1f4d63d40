use async_trait::async_trait;

use crate::ContactMessage;

/// Delivers a contact message to the support center.
#[async_trait]
pub trait ContactSender: Send + Sync {
    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), SendError>;
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    #[error("backend is not running")]
    BackendUnavailable,

    #[error("network error: {0}")]
    Network(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("received an HTML page instead of JSON")]
    HtmlResponse,

    #[error("request timed out")]
    TimedOut,

    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Other(String),
}

impl SendError {
    /// Recognizes the failure texts produced by the contact API and its
    /// browser client. First match wins.
    pub fn recognize(text: &str) -> Option<Self> {
        if text.contains("Backend не запущен") {
            return Some(Self::BackendUnavailable);
        }

        if text.contains("Failed to fetch") || text.contains("NetworkError") {
            return Some(Self::Network(text.to_owned()));
        }

        if text.contains("Unexpected token") {
            return Some(Self::MalformedResponse(text.to_owned()));
        }

        if text.contains("HTML страницу вместо JSON") {
            return Some(Self::HtmlResponse);
        }

        None
    }

    /// Classifies the failure message of a negative API reply, unrecognized
    /// text is passed through as a rejection.
    pub fn from_message(text: impl Into<String>) -> Self {
        let text = text.into();

        Self::recognize(&text).unwrap_or(Self::Rejected(text))
    }
}

impl From<reqwest::Error> for SendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::TimedOut;
        }

        if err.is_connect() || err.is_request() {
            return Self::Network(err.to_string());
        }

        if err.is_decode() || err.is_body() {
            return Self::MalformedResponse(err.to_string());
        }

        Self::Other(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_in_precedence_order() {
        assert_eq!(
            SendError::from_message("Backend не запущен: Failed to fetch"),
            SendError::BackendUnavailable
        );
        assert_eq!(
            SendError::from_message("TypeError: Failed to fetch"),
            SendError::Network("TypeError: Failed to fetch".to_owned())
        );
        assert_eq!(
            SendError::from_message("NetworkError when attempting to fetch resource."),
            SendError::Network("NetworkError when attempting to fetch resource.".to_owned())
        );
        assert_eq!(
            SendError::from_message("Unexpected token < in JSON, HTML страницу вместо JSON"),
            SendError::MalformedResponse(
                "Unexpected token < in JSON, HTML страницу вместо JSON".to_owned()
            )
        );
        assert_eq!(
            SendError::from_message("Сервер вернул HTML страницу вместо JSON"),
            SendError::HtmlResponse
        );
    }

    #[test]
    fn unknown_text_is_kept() {
        assert_eq!(SendError::recognize("quota exceeded"), None);
        assert_eq!(
            SendError::from_message("quota exceeded"),
            SendError::Rejected("quota exceeded".to_owned())
        );
    }
}
