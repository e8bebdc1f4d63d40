mod submit;
mod validate;

pub use submit::submit_command;
pub use validate::validate_command;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use psycenter_contact::{ContactForm, FieldErrors};
use psycenter_shared::Language;

use crate::Config;

/// psycenter - contact form of the psychological support center
#[derive(Parser)]
#[command(name = "psycenter")]
#[command(about = "Validate and send contact requests to the support center", long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check the form fields and print localized errors
    Validate(FormArgs),
    /// Validate the form and send it to the contact API
    Submit(FormArgs),
}

#[derive(Args, Debug, Default)]
pub struct FormArgs {
    /// Interface language, ru or kz (defaults to the configured locale)
    #[arg(long)]
    pub lang: Option<String>,

    /// Form fields: name, email, phone, subject, message, privacy
    #[arg(value_name = "FIELD=VALUE")]
    pub fields: Vec<String>,
}

impl FormArgs {
    pub fn language(&self, config: &Config) -> anyhow::Result<Language> {
        let lang = match &self.lang {
            Some(lang) => Language::parse(lang)?,
            None => config.locale.language()?,
        };

        Ok(lang)
    }

    /// Builds a form the same way a user would fill it, one field at a time.
    pub fn form(&self, config: &Config) -> anyhow::Result<ContactForm> {
        let mut form = ContactForm::new(self.language(config)?);

        for pair in &self.fields {
            let (name, value) = pair
                .split_once('=')
                .with_context(|| format!("expected FIELD=VALUE, got `{pair}`"))?;
            form.set_raw(name.trim(), value)?;
        }

        Ok(form)
    }
}

/// One `label: message` line per invalid field.
pub fn render_errors(errors: &FieldErrors, lang: Language) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {message}", field.label(lang)))
        .collect::<Vec<_>>()
        .join("\n")
}
