//! Precondition check for external utilities
//!
//! Only the utilities the current invocation will run are checked, so plain
//! `-i "text"` to stdout works on a machine without X tools installed.

use crate::config::Config;
use crate::input::InputSource;
use crate::mt::error::{MtError, MtResult};
use crate::output::OutputSink;
use std::path::{Path, PathBuf};

/// Programs the invocation will spawn, in the order they run
pub fn required_programs<'a>(
    config: &'a Config,
    input: &InputSource,
    sink: OutputSink,
) -> Vec<&'a str> {
    let mut programs = Vec::new();
    if *input == InputSource::Selection {
        if let Some(program) = config.selection_command.first() {
            programs.push(program.as_str());
        }
    }
    if sink == OutputSink::Notification {
        programs.push(config.notify_command.as_str());
    }
    programs
}

/// Fail with `MissingDependency` for the first required program not found
pub fn check_dependencies(config: &Config, input: &InputSource, sink: OutputSink) -> MtResult<()> {
    let path = std::env::var_os("PATH").unwrap_or_default();
    let dirs: Vec<PathBuf> = std::env::split_paths(&path).collect();

    for program in required_programs(config, input, sink) {
        if find_program(program, &dirs).is_none() {
            return Err(MtError::MissingDependency(program.to_string()));
        }
    }
    Ok(())
}

/// Resolve `program` against `dirs`; names containing a separator are used as paths
pub fn find_program(program: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    dirs.iter()
        .map(|dir| dir.join(program))
        .find(|path| is_executable(path))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_to_stdout_needs_nothing() {
        let config = Config::default();
        let input = InputSource::Literal("hi".to_string());
        assert!(required_programs(&config, &input, OutputSink::Stdout).is_empty());
        assert!(check_dependencies(&config, &input, OutputSink::Stdout).is_ok());
    }

    #[test]
    fn test_selection_and_notification_required() {
        let config = Config::default();
        assert_eq!(
            required_programs(&config, &InputSource::Selection, OutputSink::Notification),
            vec!["xsel", "notify-send"]
        );
        assert_eq!(
            required_programs(&config, &InputSource::Stdin, OutputSink::Notification),
            vec!["notify-send"]
        );
    }

    #[test]
    fn test_missing_program_reported_by_name() {
        let config = Config::default().with_notify_command("xtranslate-no-such-notifier");
        let result = check_dependencies(&config, &InputSource::Stdin, OutputSink::Notification);
        assert_eq!(
            result,
            Err(MtError::MissingDependency(
                "xtranslate-no-such-notifier".to_string()
            ))
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_find_program_in_dirs() {
        let dirs = vec![
            PathBuf::from("/nonexistent-dir"),
            PathBuf::from("/bin"),
            PathBuf::from("/usr/bin"),
        ];
        let found = find_program("sh", &dirs);
        assert!(found.is_some());
        assert!(find_program("xtranslate-no-such-tool", &dirs).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_program_with_explicit_path() {
        assert_eq!(find_program("/bin/sh", &[]), Some(PathBuf::from("/bin/sh")));
        assert!(find_program("/nonexistent-dir/sh", &[]).is_none());
    }
}
