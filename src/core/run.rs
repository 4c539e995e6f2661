use crate::config::SampleConfig;
use crate::core::callbacks::global_callback;
use crate::domain::mailer::BasicMailer;
use crate::domain::ports::Mailer;
use crate::utils::error::Result;
use std::io::{self, Write};

/// Sends the welcome message with a [`BasicMailer`] and prints the configured
/// notification to stdout. `SampleConfig::default()` prints the default one.
pub fn run(config: &SampleConfig) -> Result<()> {
    let mailer = BasicMailer::new();
    run_with(&mailer, &mut io::stdout().lock(), config.message())
}

/// Writes `message` to `out` as exactly one line. The mailer is asked to send
/// its welcome message first and `global_callback` runs last.
pub fn run_with<M, W>(mailer: &M, out: &mut W, message: &str) -> Result<()>
where
    M: Mailer + ?Sized,
    W: Write,
{
    tracing::info!("Running mailer sample");

    let contextual_variable = message.to_string();
    let mut notification_callback = || writeln!(out, "{}", contextual_variable);

    mailer.send_welcome_message();

    notification_callback()?;
    global_callback();

    tracing::debug!("Mailer sample finished");
    Ok(())
}
