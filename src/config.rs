//! Runtime configuration.
//!
//! Values come from defaults, then the environment, then command-line flags
//! (see [`crate::cli::CliOptions::apply`]).

use std::path::PathBuf;

use crate::adapters::DEFAULT_RESUME_URL;
use crate::theme::ThemeChoice;

/// Where the resume document is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// HTTP GET against a URL.
    Remote { url: String },
    /// A local JSON file.
    Bundled { path: PathBuf },
}

impl Default for DocumentSource {
    fn default() -> Self {
        DocumentSource::Remote {
            url: DEFAULT_RESUME_URL.to_string(),
        }
    }
}

impl std::fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentSource::Remote { url } => write!(f, "{}", url),
            DocumentSource::Bundled { path } => write!(f, "{}", path.display()),
        }
    }
}

/// Application configuration.
///
/// # Example
///
/// ```
/// use resume::config::{DocumentSource, ResumeConfig};
/// use resume::theme::ThemeChoice;
///
/// let config = ResumeConfig::default()
///     .with_file("resume.json")
///     .with_theme(ThemeChoice::Alternative);
/// assert!(matches!(config.source, DocumentSource::Bundled { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeConfig {
    /// Document location (default: the published resume URL)
    pub source: DocumentSource,
    /// Theme applied once the screen is up (default: Default)
    pub theme: ThemeChoice,
    /// `tracing` filter directive (default: "info")
    pub log_filter: String,
    /// Log file; `None` means `<cache dir>/resume/resume.log`
    pub log_file: Option<PathBuf>,
    /// Problems found while reading the environment. They are collected
    /// here because logging is not installed yet when config is read.
    pub warnings: Vec<String>,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            source: DocumentSource::default(),
            theme: ThemeChoice::Default,
            log_filter: "info".to_string(),
            log_file: None,
            warnings: Vec::new(),
        }
    }
}

impl ResumeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the document from a URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.source = DocumentSource::Remote { url: url.into() };
        self
    }

    /// Read the document from a local file.
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.source = DocumentSource::Bundled { path: path.into() };
        self
    }

    pub fn with_theme(mut self, theme: ThemeChoice) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Create config from `RESUME_URL`, `RESUME_FILE`, `RESUME_THEME` and
    /// `RESUME_LOG`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`](Self::from_env) with a custom variable lookup.
    /// `RESUME_FILE` wins over `RESUME_URL`; unknown theme names are ignored
    /// and recorded in `warnings`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = non_empty("RESUME_URL") {
            config = config.with_url(url);
        }
        if let Some(path) = non_empty("RESUME_FILE") {
            config = config.with_file(path);
        }
        if let Some(name) = non_empty("RESUME_THEME") {
            match ThemeChoice::parse(&name) {
                Some(choice) => config = config.with_theme(choice),
                None => config
                    .warnings
                    .push(format!("Ignoring unknown RESUME_THEME '{}'", name)),
            }
        }
        if let Some(filter) = non_empty("RESUME_LOG") {
            config = config.with_log_filter(filter);
        }

        config
    }

    /// The log file actually used: the configured one, else the cache dir.
    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            dirs::cache_dir().map(|dir| dir.join("resume").join("resume.log"))
        })
    }
}
