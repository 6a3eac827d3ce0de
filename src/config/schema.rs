use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// User configuration.
///
/// Example YAML:
/// ```yaml
/// jobs_file: /srv/fitment/jobs.yaml
/// strict: true
/// log_level: info
/// colors: never
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Job catalogue used by `match`, `open` and `save` when `--jobs` is not given.
    /// A relative path is resolved against the config file's directory; `~` is
    /// not expanded.
    #[serde(default)]
    pub jobs_file: Option<PathBuf>,

    /// Refuse to score submissions that fail validation
    #[serde(default)]
    pub strict: bool,

    /// Log filter directive (e.g. "info", "fitment=debug")
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub colors: ColorMode,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}
