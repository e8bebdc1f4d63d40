use psycenter_shared::Language;
use strum::{AsRefStr, Display};

use crate::SendError;

/// User-facing reason of a failed submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Failure {
    ServerDown,
    Connection,
    ServerError,
    BackendNotStarted,
    TimedOut,
    Other(String),
}

impl From<&SendError> for Failure {
    fn from(err: &SendError) -> Self {
        match err {
            SendError::BackendUnavailable => Failure::ServerDown,
            SendError::Network(_) => Failure::Connection,
            SendError::MalformedResponse(_) => Failure::ServerError,
            SendError::HtmlResponse => Failure::BackendNotStarted,
            SendError::TimedOut => Failure::TimedOut,
            SendError::Rejected(message) | SendError::Other(message) => {
                Failure::Other(message.to_owned())
            }
        }
    }
}

impl Failure {
    pub fn message(&self, lang: Language) -> String {
        let key = match self {
            Failure::ServerDown => "contact.status.server_down",
            Failure::Connection => "contact.status.connection",
            Failure::ServerError => "contact.status.server_error",
            Failure::BackendNotStarted => "contact.status.backend_not_started",
            Failure::TimedOut => "contact.status.timed_out",
            Failure::Other(message) => {
                return psycenter_shared::t_message("contact.status.failed", lang, message);
            }
        };

        psycenter_shared::t(key, lang)
    }
}

#[derive(Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq)]
#[strum(serialize_all = "lowercase")]
pub enum Tone {
    Info,
    Success,
    Error,
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(Failure),
}

impl SubmissionStatus {
    /// Status line shown under the submit button, empty while idle.
    pub fn text(&self, lang: Language) -> String {
        match self {
            SubmissionStatus::Idle => String::new(),
            SubmissionStatus::Sending => psycenter_shared::t("contact.status.sending", lang),
            SubmissionStatus::Sent => psycenter_shared::t("contact.status.sent", lang),
            SubmissionStatus::Failed(failure) => failure.message(lang),
        }
    }

    pub fn tone(&self) -> Option<Tone> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some(Tone::Info),
            SubmissionStatus::Sent => Some(Tone::Success),
            SubmissionStatus::Failed(_) => Some(Tone::Error),
        }
    }
}
