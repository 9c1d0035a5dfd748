//! Configuration for Kickoff.
//!
//! Settings are read from `~/.kickoff/config.toml`. A missing file means
//! defaults; a malformed one is reported so the caller can warn and carry on.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//! reduced_motion = false
//! start_in_presentation = false
//!
//! [presentation]
//! wheel_cooldown_ms = 700
//! scroll_duration_ms = 250
//! scroll_root = "container"
//!
//! [deck]
//! path = "~/decks/kickoff.toml"
//! ```

mod deck;

pub use deck::{DeckLoadError, DeckParseError, load_deck, parse_deck};

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

/// Environment variable overriding the configured deck path.
pub const DECK_ENV: &str = "KICKOFF_DECK";

const fn default_wheel_cooldown_ms() -> u64 {
    700
}

const fn default_scroll_duration_ms() -> u64 {
    250
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KickoffConfig {
    pub app: AppConfig,
    pub presentation: PresentationConfig,
    pub deck: DeckConfig,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for arrows and separators.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Jump instead of animating scroll.
    pub reduced_motion: bool,
    /// Enter presentation mode right after startup.
    pub start_in_presentation: bool,
}

/// Which pane scope the navigator controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollRoot {
    #[default]
    Container,
    Document,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PresentationConfig {
    pub wheel_cooldown_ms: u64,
    pub scroll_duration_ms: u64,
    pub scroll_root: ScrollRoot,
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            wheel_cooldown_ms: default_wheel_cooldown_ms(),
            scroll_duration_ms: default_scroll_duration_ms(),
            scroll_root: ScrollRoot::default(),
        }
    }
}

impl PresentationConfig {
    #[must_use]
    pub fn wheel_cooldown(&self) -> Duration {
        Duration::from_millis(self.wheel_cooldown_ms)
    }

    #[must_use]
    pub fn scroll_duration(&self) -> Duration {
        Duration::from_millis(self.scroll_duration_ms)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub path: Option<String>,
}

impl KickoffConfig {
    /// Loads the user config. `Ok(None)` when there is no home directory or
    /// no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }
        Self::load_from(&path).map(Some)
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    /// Deck file to load, by precedence: command line, `KICKOFF_DECK`, config.
    ///
    /// `None` means the embedded deck.
    #[must_use]
    pub fn deck_path(&self, cli: Option<&Path>) -> Option<PathBuf> {
        let from_env = env::var(DECK_ENV).ok();
        resolve_deck_path(cli, from_env.as_deref(), self.deck.path.as_deref())
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".kickoff").join("config.toml"))
}

fn resolve_deck_path(
    cli: Option<&Path>,
    from_env: Option<&str>,
    configured: Option<&str>,
) -> Option<PathBuf> {
    if let Some(path) = cli {
        return Some(path.to_path_buf());
    }
    let non_blank = |raw: &&str| !raw.trim().is_empty();
    from_env
        .filter(non_blank)
        .or(configured.filter(non_blank))
        .map(|raw| expand_home(raw.trim()))
}

/// Expands a leading `~/` to the home directory.
fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(raw),
        },
        None => PathBuf::from(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, KickoffConfig, ScrollRoot, expand_home, resolve_deck_path};
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    #[test]
    fn empty_file_yields_defaults() {
        let config: KickoffConfig = toml::from_str("").unwrap();
        assert_eq!(config, KickoffConfig::default());
        assert_eq!(config.presentation.wheel_cooldown(), Duration::from_millis(700));
        assert_eq!(config.presentation.scroll_duration(), Duration::from_millis(250));
        assert_eq!(config.presentation.scroll_root, ScrollRoot::Container);
        assert!(!config.app.start_in_presentation);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: KickoffConfig = toml::from_str(
            r#"
[app]
reduced_motion = true

[presentation]
scroll_root = "document"
"#,
        )
        .unwrap();
        assert!(config.app.reduced_motion);
        assert!(!config.app.ascii_only);
        assert_eq!(config.presentation.scroll_root, ScrollRoot::Document);
        assert_eq!(config.presentation.wheel_cooldown_ms, 700);
        assert_eq!(config.deck.path, None);
    }

    #[test]
    fn load_from_reports_parse_errors_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[presentation]\nwheel_cooldown_ms = \"soon\"\n").unwrap();

        let err = KickoffConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), path.as_path());
    }

    #[test]
    fn load_from_reports_missing_file_as_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = KickoffConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_from_reads_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[presentation]\nwheel_cooldown_ms = 300\n[deck]\npath = \"/tmp/deck.toml\"\n",
        )
        .unwrap();

        let config = KickoffConfig::load_from(&path).unwrap();
        assert_eq!(config.presentation.wheel_cooldown(), Duration::from_millis(300));
        assert_eq!(config.deck.path.as_deref(), Some("/tmp/deck.toml"));
    }

    #[test]
    fn deck_path_precedence() {
        let cli = Path::new("/cli.toml");
        assert_eq!(
            resolve_deck_path(Some(cli), Some("/env.toml"), Some("/cfg.toml")),
            Some(PathBuf::from("/cli.toml"))
        );
        assert_eq!(
            resolve_deck_path(None, Some("/env.toml"), Some("/cfg.toml")),
            Some(PathBuf::from("/env.toml"))
        );
        assert_eq!(
            resolve_deck_path(None, None, Some("/cfg.toml")),
            Some(PathBuf::from("/cfg.toml"))
        );
        assert_eq!(resolve_deck_path(None, Some("  "), None), None);
        assert_eq!(resolve_deck_path(None, None, None), None);
    }

    #[test]
    fn expand_home_leaves_absolute_paths_alone() {
        assert_eq!(expand_home("/srv/deck.toml"), PathBuf::from("/srv/deck.toml"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/deck.toml"), home.join("deck.toml"));
        }
    }
}
