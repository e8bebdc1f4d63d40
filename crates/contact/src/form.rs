use std::str::FromStr;

use psycenter_shared::invalid_value;
use validator::Validate;

use crate::{
    Field, Subject,
    validate::{RE_EMAIL, not_blank},
};

/// Values of the contact form as currently entered.
#[derive(Validate, Default, Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        regex(path = *RE_EMAIL, code = "email")
    )]
    pub email: String,
    pub phone: String,
    #[validate(required)]
    pub subject: Option<Subject>,
    #[validate(custom(function = "not_blank"))]
    pub message: String,
    pub privacy: bool,
}

/// A single edit of one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldInput {
    Name(String),
    Email(String),
    Phone(String),
    Subject(Option<Subject>),
    Message(String),
    Privacy(bool),
}

impl FieldInput {
    pub fn field(&self) -> Field {
        match self {
            FieldInput::Name(_) => Field::Name,
            FieldInput::Email(_) => Field::Email,
            FieldInput::Phone(_) => Field::Phone,
            FieldInput::Subject(_) => Field::Subject,
            FieldInput::Message(_) => Field::Message,
            FieldInput::Privacy(_) => Field::Privacy,
        }
    }

    /// Builds an edit from a `name=value` pair as posted by an HTML form.
    ///
    /// The checkbox is checked by `true`, `on`, `1` or `yes`; an empty subject
    /// means no option selected.
    pub fn parse(name: &str, value: &str) -> psycenter_shared::Result<Self> {
        let field = Field::from_str(name.trim())
            .map_err(|_| psycenter_shared::Error::UnknownField(name.to_owned()))?;

        let input = match field {
            Field::Name => FieldInput::Name(value.to_owned()),
            Field::Email => FieldInput::Email(value.to_owned()),
            Field::Phone => FieldInput::Phone(value.to_owned()),
            Field::Message => FieldInput::Message(value.to_owned()),
            Field::Privacy => FieldInput::Privacy(matches!(
                value.trim().to_lowercase().as_str(),
                "true" | "on" | "1" | "yes"
            )),
            Field::Subject if value.trim().is_empty() => FieldInput::Subject(None),
            Field::Subject => match Subject::from_str(value.trim()) {
                Ok(subject) => FieldInput::Subject(Some(subject)),
                Err(_) => invalid_value!(field, value),
            },
        };

        Ok(input)
    }
}

impl FormState {
    /// Returns the state with one field replaced.
    pub fn with(mut self, input: FieldInput) -> Self {
        match input {
            FieldInput::Name(value) => self.name = value,
            FieldInput::Email(value) => self.email = value,
            FieldInput::Phone(value) => self.phone = value,
            FieldInput::Subject(value) => self.subject = value,
            FieldInput::Message(value) => self.message = value,
            FieldInput::Privacy(value) => self.privacy = value,
        }

        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
