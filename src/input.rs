use crate::config::Config;
use crate::mt::error::{MtError, MtResult};
use std::io::Read;
use std::process::Command;
use tracing::debug;

/// `-i` value that reads standard input
pub const INPUT_STDIN: &str = "--";
/// `-i` value that reads the X primary selection
pub const INPUT_SELECTION: &str = "s";

/// Where the text to translate comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// The `-i` value itself
    Literal(String),
    Stdin,
    /// Output of the configured selection command
    Selection,
}

impl InputSource {
    /// Interpret the `-i` flag; an empty value means no input was given
    pub fn parse(flag: &str) -> Option<Self> {
        match flag {
            "" => None,
            INPUT_STDIN => Some(InputSource::Stdin),
            INPUT_SELECTION => Some(InputSource::Selection),
            text => Some(InputSource::Literal(text.to_string())),
        }
    }

    /// Fetch the text, reading stdin or running the selection command as needed
    pub fn read_text(&self, config: &Config) -> MtResult<String> {
        match self {
            InputSource::Literal(text) => Ok(text.clone()),
            InputSource::Stdin => read_all(std::io::stdin().lock()),
            InputSource::Selection => read_selection(&config.selection_command),
        }
    }
}

/// Read a reader to the end as UTF-8
pub fn read_all<R: Read>(mut reader: R) -> MtResult<String> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| MtError::Io(format!("Failed to read standard input: {}", e)))?;
    Ok(text)
}

fn read_selection(command: &[String]) -> MtResult<String> {
    let (program, args) = command
        .split_first()
        .ok_or_else(|| MtError::Config("Selection command is empty".to_string()))?;

    debug!(%program, "Reading primary selection");
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| MtError::Io(format!("Failed to run {}: {}", program, e)))?;

    if !output.status.success() {
        return Err(MtError::ExternalCommand(format!(
            "{} exited with {}: {}",
            program,
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_input_flag() {
        assert_eq!(InputSource::parse(""), None);
        assert_eq!(InputSource::parse("--"), Some(InputSource::Stdin));
        assert_eq!(InputSource::parse("s"), Some(InputSource::Selection));
        assert_eq!(
            InputSource::parse("hello world"),
            Some(InputSource::Literal("hello world".to_string()))
        );
    }

    #[test]
    fn test_literal_is_returned_as_is() {
        let source = InputSource::Literal("  spaced\n".to_string());
        assert_eq!(source.read_text(&Config::default()).unwrap(), "  spaced\n");
    }

    #[test]
    fn test_read_all_keeps_trailing_newline() {
        let text = read_all("line one\nline two\n".as_bytes()).unwrap();
        assert_eq!(text, "line one\nline two\n");
    }

    #[test]
    fn test_read_all_rejects_invalid_utf8() {
        let bytes: &[u8] = &[0xff, 0xfe, 0x00];
        assert!(matches!(read_all(bytes), Err(MtError::Io(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_selection_uses_configured_command() {
        let config = Config::default().with_selection_command(command(&["printf", "selected text"]));
        let text = InputSource::Selection.read_text(&config).unwrap();
        assert_eq!(text, "selected text");
    }

    #[cfg(unix)]
    #[test]
    fn test_selection_command_failure() {
        let config = Config::default().with_selection_command(command(&["false"]));
        let result = InputSource::Selection.read_text(&config);
        assert!(matches!(result, Err(MtError::ExternalCommand(_))));
    }

    #[test]
    fn test_selection_command_missing() {
        let config = Config::default()
            .with_selection_command(command(&["xtranslate-no-such-selection-tool"]));
        let result = InputSource::Selection.read_text(&config);
        match result {
            Err(MtError::Io(msg)) => assert!(msg.contains("xtranslate-no-such-selection-tool")),
            other => panic!("Expected Io error, got {:?}", other),
        }
    }

    #[test]
    fn test_selection_command_empty() {
        let config = Config::default().with_selection_command(Vec::new());
        let result = InputSource::Selection.read_text(&config);
        assert!(matches!(result, Err(MtError::Config(_))));
    }
}
