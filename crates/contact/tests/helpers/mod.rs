use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use psycenter_contact::{
    ContactForm, ContactMessage, ContactSender, FieldInput, SendError, Subject, SubmittingFlag,
};
use psycenter_shared::Language;

/// Sender double answering every call with the same result.
pub struct ScriptedSender {
    result: Result<(), SendError>,
    calls: AtomicUsize,
    received: Mutex<Vec<ContactMessage>>,
    flag: Option<SubmittingFlag>,
    flag_seen: Mutex<Vec<bool>>,
}

#[allow(dead_code)]
impl ScriptedSender {
    pub fn ok() -> Self {
        Self::answering(Ok(()))
    }

    pub fn failing(err: SendError) -> Self {
        Self::answering(Err(err))
    }

    pub fn answering(result: Result<(), SendError>) -> Self {
        Self {
            result,
            calls: AtomicUsize::new(0),
            received: Mutex::new(vec![]),
            flag: None,
            flag_seen: Mutex::new(vec![]),
        }
    }

    /// Records the form's busy flag each time the sender is awaited.
    pub fn observing(mut self, flag: SubmittingFlag) -> Self {
        self.flag = Some(flag);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn received(&self) -> Vec<ContactMessage> {
        self.received.lock().unwrap().clone()
    }

    pub fn flag_seen(&self) -> Vec<bool> {
        self.flag_seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactSender for ScriptedSender {
    async fn send_contact_message(&self, message: &ContactMessage) -> Result<(), SendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.received.lock().unwrap().push(message.clone());

        if let Some(flag) = &self.flag {
            self.flag_seen.lock().unwrap().push(flag.get());
        }

        self.result.clone()
    }
}

#[allow(dead_code)]
pub fn filled_form(lang: Language) -> ContactForm {
    let mut form = ContactForm::new(lang);
    form.set_field(FieldInput::Name("Aigerim".to_owned()));
    form.set_field(FieldInput::Email("a@test.kz".to_owned()));
    form.set_field(FieldInput::Phone(String::new()));
    form.set_field(FieldInput::Subject(Some(Subject::Question)));
    form.set_field(FieldInput::Message("Hello".to_owned()));
    form.set_field(FieldInput::Privacy(true));

    form
}
