use std::{collections::BTreeMap, str::FromStr, sync::LazyLock};

use psycenter_shared::Language;
use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{Field, FormState};

// U+FEFF counts as whitespace, the way browsers trim form input
pub(crate) static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").unwrap()
});

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
    {
        return Err(ValidationError::new("required"));
    }

    Ok(())
}

/// Localized validation messages keyed by the invalid field.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    fn from_validation(errors: &ValidationErrors, lang: Language) -> Self {
        let mut fields = BTreeMap::new();

        for (name, errors) in errors.field_errors() {
            let Ok(field) = Field::from_str(&name) else {
                tracing::warn!(field = %name, "validation error for unknown field");
                continue;
            };

            // an empty value fails every rule on the field, report it as missing
            let Some(error) = errors
                .iter()
                .find(|e| e.code == "required")
                .or_else(|| errors.first())
            else {
                continue;
            };

            // every code raised by the form rules has a `contact.error.*` entry
            let key = format!("contact.error.{}", error.code);
            fields.insert(field, psycenter_shared::t(&key, lang));
        }

        Self(fields)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Drops the error of `field`, returns whether there was one.
    pub fn clear(&mut self, field: Field) -> bool {
        self.0.remove(&field).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

/// Checks every rule of the form and returns the failures in `lang`.
///
/// An empty result means the form can be submitted.
pub fn validate(form: &FormState, lang: Language) -> FieldErrors {
    let mut errors = match form.validate() {
        Ok(()) => ValidationErrors::new(),
        Err(errors) => errors,
    };

    if !form.privacy {
        errors.add("privacy", ValidationError::new("privacy"));
    }

    FieldErrors::from_validation(&errors, lang)
}
