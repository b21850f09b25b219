//! Command-line argument parsing.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ResumeConfig;
use crate::theme::ThemeChoice;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the viewer (default)
    Run(CliOptions),
}

/// Overrides given on the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub file: Option<PathBuf>,
    pub url: Option<String>,
    pub theme: Option<ThemeChoice>,
}

impl CliOptions {
    /// Layer these options over `config`. `--file` wins over `--url`.
    pub fn apply(self, mut config: ResumeConfig) -> ResumeConfig {
        if let Some(url) = self.url {
            config = config.with_url(url);
        }
        if let Some(path) = self.file {
            config = config.with_file(path);
        }
        if let Some(theme) = self.theme {
            config = config.with_theme(theme);
        }
        config
    }
}

/// Invalid command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("unknown theme '{0}' (expected default or alternative)")]
    UnknownTheme(String),
    #[error("unrecognized argument '{0}'")]
    Unrecognized(String),
}

/// Usage text printed by `--help`.
pub const USAGE: &str = "\
Usage: resume [OPTIONS]

Options:
  --file <PATH>   Read the resume document from a local JSON file
  --url <URL>     Download the resume document from URL
  --theme <NAME>  Initial theme: default or alternative
  -V, --version   Print version
  -h, --help      Print this help

Environment:
  RESUME_FILE, RESUME_URL, RESUME_THEME, RESUME_LOG";

/// Parse command-line arguments (including the program name).
///
/// # Examples
///
/// ```
/// use resume::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["resume".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut options = CliOptions::default();
    // Skip the program name
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--file" => {
                let path = args.next().ok_or(ArgsError::MissingValue("--file"))?;
                options.file = Some(PathBuf::from(path));
            }
            "--url" => {
                options.url = Some(args.next().ok_or(ArgsError::MissingValue("--url"))?);
            }
            "--theme" => {
                let name = args.next().ok_or(ArgsError::MissingValue("--theme"))?;
                let theme = ThemeChoice::parse(&name).ok_or(ArgsError::UnknownTheme(name))?;
                options.theme = Some(theme);
            }
            _ => return Err(ArgsError::Unrecognized(arg)),
        }
    }

    Ok(CliCommand::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DocumentSource;

    fn parse(args: &[&str]) -> Result<CliCommand, ArgsError> {
        let mut all = vec!["resume".to_string()];
        all.extend(args.iter().map(|a| a.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]), Ok(CliCommand::Run(CliOptions::default())));
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
        assert_eq!(parse(&["-V"]), Ok(CliCommand::Version));
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]), Ok(CliCommand::Help));
        assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    }

    #[test]
    fn test_parse_options() {
        let command = parse(&["--file", "me.json", "--theme", "alt"]).unwrap();
        assert_eq!(
            command,
            CliCommand::Run(CliOptions {
                file: Some(PathBuf::from("me.json")),
                url: None,
                theme: Some(ThemeChoice::Alternative),
            })
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(parse(&["--url"]), Err(ArgsError::MissingValue("--url")));
    }

    #[test]
    fn test_parse_unknown_theme() {
        assert_eq!(
            parse(&["--theme", "neon"]),
            Err(ArgsError::UnknownTheme("neon".to_string()))
        );
    }

    #[test]
    fn test_parse_unrecognized() {
        assert_eq!(
            parse(&["--sync"]),
            Err(ArgsError::Unrecognized("--sync".to_string()))
        );
    }

    #[test]
    fn test_apply_overrides_config() {
        let config = ResumeConfig::default().with_file("env.json");
        let options = CliOptions {
            file: None,
            url: Some("https://example.com/r.json".to_string()),
            theme: Some(ThemeChoice::Alternative),
        };
        let config = options.apply(config);
        assert_eq!(
            config.source,
            DocumentSource::Remote {
                url: "https://example.com/r.json".to_string()
            }
        );
        assert_eq!(config.theme, ThemeChoice::Alternative);
    }
}
