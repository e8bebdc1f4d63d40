use std::str::FromStr;

use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

/// Interface languages of the site.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    Kz,
}

impl Language {
    pub fn parse(value: &str) -> crate::Result<Self> {
        Self::from_str(value.trim()).map_err(|_| crate::Error::UnknownLanguage(value.to_owned()))
    }
}
