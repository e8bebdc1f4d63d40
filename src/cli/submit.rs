use psycenter_contact::{Attempt, HttpContactSender};

use super::{FormArgs, render_errors};
use crate::Config;

/// Runs the whole form pipeline against the configured contact API.
#[tracing::instrument(skip_all, fields(base_url = %config.api.base_url))]
pub async fn submit_command(config: &Config, args: &FormArgs) -> anyhow::Result<bool> {
    let mut form = args.form(config)?;
    let sender = HttpContactSender::new(
        &config.api.base_url,
        &config.api.contact_path,
        config.api.timeout(),
    )?;

    tracing::info!(endpoint = sender.endpoint(), "sending contact form");

    let sent = match form.submit(&sender).await {
        Attempt::Invalid => {
            println!("{}", render_errors(form.errors(), form.language()));
            false
        }
        Attempt::Sent => {
            println!("{}", form.status_text());
            true
        }
        Attempt::Failed(_) => {
            eprintln!("{}", form.status_text());
            false
        }
    };

    Ok(sent)
}
