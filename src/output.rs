use crate::config::Config;
use crate::mt::error::{MtError, MtResult};
use std::io::Write;
use std::process::Command;
use tracing::debug;

/// Where the translated text goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputSink {
    Stdout,
    /// Desktop notification through the configured notify command
    Notification,
}

impl OutputSink {
    pub fn from_flag(notify: bool) -> Self {
        if notify {
            OutputSink::Notification
        } else {
            OutputSink::Stdout
        }
    }

    /// Deliver `text`; stdout output goes to `writer`
    pub fn emit<W: Write>(
        &self,
        writer: &mut W,
        config: &Config,
        title: &str,
        text: &str,
    ) -> MtResult<()> {
        match self {
            OutputSink::Stdout => {
                writeln!(writer, "{}", text)?;
                writer.flush()?;
                Ok(())
            }
            OutputSink::Notification => send_notification(&config.notify_command, title, text),
        }
    }
}

/// Title for the notification, e.g. `En > Ru`
pub fn notification_title(source_lang: &str, target_lang: &str) -> String {
    title_case(&format!("{} > {}", source_lang, target_lang))
}

/// Upper-case the first letter of every word
///
/// A word starts at the beginning of the string or after any character that
/// is not alphanumeric or `_`, so `zh-cn` becomes `Zh-Cn`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = !(c.is_alphanumeric() || c == '_');
    }
    out
}

fn send_notification(program: &str, title: &str, body: &str) -> MtResult<()> {
    debug!(%program, %title, "Sending desktop notification");
    let status = Command::new(program)
        .arg(title)
        .arg(body)
        .status()
        .map_err(|e| MtError::Io(format!("Failed to run {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(MtError::ExternalCommand(format!(
            "{} exited with {}",
            program, status
        )))
    }
}
