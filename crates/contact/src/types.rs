use psycenter_shared::Language;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
    Privacy,
}

impl Field {
    pub fn label(&self, lang: Language) -> String {
        psycenter_shared::t(&format!("contact.field.{self}"), lang)
    }
}

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Consultation,
    Question,
    Feedback,
    Other,
}

impl Subject {
    pub fn label(&self, lang: Language) -> String {
        psycenter_shared::t(&format!("contact.subject.{self}"), lang)
    }
}
