//! The read → translate → emit pipeline behind the binary

use crate::config::Config;
use crate::deps::check_dependencies;
use crate::input::InputSource;
use crate::mt::error::MtResult;
use crate::mt::translator::MachineTranslator;
use crate::output::{OutputSink, notification_title};
use std::io::Write;
use tracing::info;

/// One fully resolved invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub source_lang: String,
    pub target_lang: String,
    pub input: InputSource,
    pub sink: OutputSink,
}

/// Read the input, translate it and deliver the result
///
/// External utilities are checked before any text is read so a missing
/// `xsel` or `notify-send` fails before the network call.
pub async fn run<T, W>(
    request: &Request,
    config: &Config,
    translator: &T,
    writer: &mut W,
) -> MtResult<()>
where
    T: MachineTranslator + ?Sized,
    W: Write,
{
    check_dependencies(config, &request.input, request.sink)?;

    let text = request.input.read_text(config)?;

    info!(
        provider = translator.provider_name(),
        source = %request.source_lang,
        target = %request.target_lang,
        chars = text.chars().count(),
        "Translating"
    );
    let translated = translator
        .translate(&text, &request.source_lang, &request.target_lang)
        .await?;

    let title = notification_title(&request.source_lang, &request.target_lang);
    request.sink.emit(writer, config, &title, &translated)
}
