use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub lint: LintConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

/// How the frontmatter rule is driven.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct LintConfig {
    /// Files handed to the rule are bare frontmatter YAML, already split from
    /// the document body, so no delimiter lines are expected.
    #[serde(default)]
    pub pre_split: bool,
    /// Default report format when none is given on the command line.
    #[serde(default)]
    pub format: ReportFormat,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Config file that was read, or looked for when falling back to defaults.
    pub path: PathBuf,
    /// Whether `path` existed and was loaded.
    pub from_file: bool,
    pub logging: LoggingConfig,
    pub lint: LintConfig,
}

impl ResolvedConfig {
    /// Built-in defaults, used when no config file exists.
    pub fn defaults(path: PathBuf) -> Self {
        Self {
            path,
            from_file: false,
            logging: LoggingConfig::default(),
            lint: LintConfig::default(),
        }
    }
}
