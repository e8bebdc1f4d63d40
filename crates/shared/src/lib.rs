mod error;
mod language;

pub use error::*;
pub use language::*;

rust_i18n::i18n!("locales", fallback = "ru");

/// Looks up `key` in the locale dictionary of `lang`.
///
/// Keys missing from the Kazakh dictionary fall back to Russian.
pub fn t(key: &str, lang: Language) -> String {
    rust_i18n::t!(key, locale = lang.as_ref()).to_string()
}

/// Same as [`t`] but fills the `%{message}` placeholder of the entry.
pub fn t_message(key: &str, lang: Language, message: &str) -> String {
    rust_i18n::t!(key, locale = lang.as_ref(), message = message).to_string()
}
