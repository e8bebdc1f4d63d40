use serde::Serialize;

use crate::{FormState, Subject};

/// Payload handed to a [`crate::ContactSender`].
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: Option<Subject>,
    pub message: String,
    pub privacy: bool,
}

impl From<&FormState> for ContactMessage {
    fn from(form: &FormState) -> Self {
        Self {
            name: form.name.to_owned(),
            email: form.email.to_owned(),
            phone: form.phone.to_owned(),
            subject: form.subject,
            message: form.message.to_owned(),
            privacy: form.privacy,
        }
    }
}
