use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use psycenter_shared::Language;

use crate::{
    ContactMessage, ContactSender, Failure, FieldErrors, FieldInput, FormState, SubmissionStatus,
};

/// Shared view of the "is submitting" state of a form.
#[derive(Clone, Default, Debug)]
pub struct SubmittingFlag(Arc<AtomicBool>);

impl SubmittingFlag {
    pub fn get(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    fn acquire(&self) -> SubmittingGuard {
        self.0.store(true, Ordering::Release);

        SubmittingGuard(self.clone())
    }
}

/// Holds the flag set until dropped, whatever way the attempt ends.
struct SubmittingGuard(SubmittingFlag);

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        self.0.0.store(false, Ordering::Release);
    }
}

/// Outcome of one call to [`ContactForm::submit`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Attempt {
    /// Validation failed, nothing was sent.
    Invalid,
    Sent,
    Failed(Failure),
}

/// The contact form of one page: values, validation errors and submission status.
#[derive(Debug)]
pub struct ContactForm {
    lang: Language,
    values: FormState,
    errors: FieldErrors,
    status: SubmissionStatus,
    submitting: SubmittingFlag,
}

impl ContactForm {
    pub fn new(lang: Language) -> Self {
        Self {
            lang,
            values: FormState::default(),
            errors: FieldErrors::default(),
            status: SubmissionStatus::default(),
            submitting: SubmittingFlag::default(),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn values(&self) -> &FormState {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn status_text(&self) -> String {
        self.status.text(self.lang)
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting.get()
    }

    pub fn submitting_flag(&self) -> SubmittingFlag {
        self.submitting.clone()
    }

    /// Applies an edit and drops the stale error of the edited field only.
    pub fn set_field(&mut self, input: FieldInput) {
        let field = input.field();
        self.values = std::mem::take(&mut self.values).with(input);
        self.errors.clear(field);
    }

    pub fn set_raw(&mut self, name: &str, value: &str) -> psycenter_shared::Result<()> {
        self.set_field(FieldInput::parse(name, value)?);

        Ok(())
    }

    pub fn reset(&mut self) {
        self.values = FormState::default();
    }

    pub fn validate(&self) -> FieldErrors {
        crate::validate(&self.values, self.lang)
    }

    /// Validates the form and, when valid, hands it to `sender`.
    ///
    /// Taking `&mut self` keeps a second submission of the same form from
    /// starting while one is awaiting the sender.
    #[tracing::instrument(skip_all, fields(lang = %self.lang))]
    pub async fn submit<S: ContactSender + ?Sized>(&mut self, sender: &S) -> Attempt {
        self.errors = self.validate();
        if !self.errors.is_empty() {
            tracing::debug!(
                fields = ?self.errors.fields().collect::<Vec<_>>(),
                "contact form is invalid"
            );
            return Attempt::Invalid;
        }

        let _guard = self.submitting.acquire();
        self.status = SubmissionStatus::Sending;
        let message = ContactMessage::from(&self.values);

        match sender.send_contact_message(&message).await {
            Ok(()) => {
                tracing::info!(subject = ?message.subject, "contact message sent");
                self.status = SubmissionStatus::Sent;
                self.reset();

                Attempt::Sent
            }
            Err(err) => {
                tracing::error!(error = %err, kind = ?err, "failed to send contact message");
                let failure = Failure::from(&err);
                self.status = SubmissionStatus::Failed(failure.clone());

                Attempt::Failed(failure)
            }
        }
    }
}
