use psycenter_shared::t;

use super::{FormArgs, render_errors};
use crate::Config;

/// Prints the localized errors of the given fields, returns whether the form is valid.
#[tracing::instrument(skip_all)]
pub fn validate_command(config: &Config, args: &FormArgs) -> anyhow::Result<bool> {
    let form = args.form(config)?;
    let errors = form.validate();

    if errors.is_empty() {
        tracing::debug!("contact form is valid");
        println!("{}", t("contact.status.valid", form.language()));
        return Ok(true);
    }

    println!("{}", render_errors(&errors, form.language()));

    Ok(false)
}
