use clap::{Arg, ArgAction, ArgMatches, Command};
use xtranslate::input::{INPUT_SELECTION, INPUT_STDIN};
use xtranslate::{InputSource, OutputSink, Request};

pub fn build_cli() -> Command {
    Command::new("xtranslate")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Translate text from the command line, stdin or the X primary selection")
        .arg(
            Arg::new("source")
                .short('s')
                .help("Source language")
                .default_value("en"),
        )
        .arg(
            Arg::new("target")
                .short('t')
                .help("Target language")
                .default_value("ru"),
        )
        .arg(
            Arg::new("notify")
                .short('n')
                .help("Show the result as a desktop notification (notify-send)")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .help(format!(
                    "Text to translate: `{}` reads standard input, `{}` reads the X primary \
                     selection, anything else is translated as is",
                    INPUT_STDIN, INPUT_SELECTION
                ))
                .allow_hyphen_values(true),
        )
}

/// Turn parsed arguments into a request; `None` means usage should be shown
pub fn request_from_matches(matches: &ArgMatches) -> Option<Request> {
    let source_lang = matches.get_one::<String>("source")?;
    let target_lang = matches.get_one::<String>("target")?;
    let input = matches
        .get_one::<String>("input")
        .map(String::as_str)
        .unwrap_or("");

    if source_lang.is_empty() || target_lang.is_empty() {
        return None;
    }

    Some(Request {
        source_lang: source_lang.clone(),
        target_lang: target_lang.clone(),
        input: InputSource::parse(input)?,
        sink: OutputSink::from_flag(matches.get_flag("notify")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Request> {
        let matches = build_cli()
            .try_get_matches_from(std::iter::once("xtranslate").chain(args.iter().copied()))
            .unwrap();
        request_from_matches(&matches)
    }

    #[test]
    fn test_defaults_without_input_show_usage() {
        assert_eq!(parse(&[]), None);
    }

    #[test]
    fn test_literal_input_with_defaults() {
        let request = parse(&["-i", "hello world"]).unwrap();
        assert_eq!(request.source_lang, "en");
        assert_eq!(request.target_lang, "ru");
        assert_eq!(request.input, InputSource::Literal("hello world".to_string()));
        assert_eq!(request.sink, OutputSink::Stdout);
    }

    #[test]
    fn test_stdin_marker_is_a_value() {
        let request = parse(&["-i", "--"]).unwrap();
        assert_eq!(request.input, InputSource::Stdin);
    }

    #[test]
    fn test_selection_with_notification() {
        let request = parse(&["-s", "de", "-t", "en", "-n", "-i", "s"]).unwrap();
        assert_eq!(request.source_lang, "de");
        assert_eq!(request.target_lang, "en");
        assert_eq!(request.input, InputSource::Selection);
        assert_eq!(request.sink, OutputSink::Notification);
    }

    #[test]
    fn test_hyphenated_literal() {
        let request = parse(&["-i", "-5 degrees"]).unwrap();
        assert_eq!(request.input, InputSource::Literal("-5 degrees".to_string()));
    }

    #[test]
    fn test_empty_language_shows_usage() {
        assert_eq!(parse(&["-s", "", "-i", "hi"]), None);
        assert_eq!(parse(&["-t", "", "-i", "hi"]), None);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let result = build_cli().try_get_matches_from(["xtranslate", "-x"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli().debug_assert();
    }
}
