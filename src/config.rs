// config.rs - Optional iconsmith.toml (output directory, sizes, failure policy)
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{IconError, Result};

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "iconsmith.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[output]` table. Every key is optional; unset keys fall back to the
/// built-in defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
    pub sizes: Option<Vec<u32>>,
    pub keep_going: Option<bool>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| IconError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::parse(&content, path)
    }

    /// `origin` only labels errors.
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| IconError::Config {
            path: origin.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Loads `explicit` if given (it must exist), otherwise `iconsmith.toml`
    /// from `dir` when present. Returns the path actually used, if any.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<(Config, Option<PathBuf>)> {
        if let Some(path) = explicit {
            return Ok((Self::load(path)?, Some(path.to_path_buf())));
        }
        let fallback = dir.join(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            return Ok((Self::load(&fallback)?, Some(fallback)));
        }
        Ok((Config::default(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Config> {
        Config::parse(s, Path::new("test.toml"))
    }

    #[test]
    fn test_full_config() {
        let config = parse(
            r#"
[output]
dir = "out/icons"
sizes = [16, 64]
keep_going = true
"#,
        )
        .unwrap();
        assert_eq!(config.output.dir, Some(PathBuf::from("out/icons")));
        assert_eq!(config.output.sizes, Some(vec![16, 64]));
        assert_eq!(config.output.keep_going, Some(true));
    }

    #[test]
    fn test_empty_config_is_all_defaults() {
        let config = parse("").unwrap();
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let err = parse("[output]\ncolour = \"red\"\n").unwrap_err();
        match err {
            IconError::Config { path, message } => {
                assert_eq!(path, PathBuf::from("test.toml"));
                assert!(message.contains("colour"));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_negative_size_rejected() {
        assert!(parse("[output]\nsizes = [-16]\n").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_error() {
        let dir = std::env::temp_dir();
        let missing = dir.join(format!("iconsmith-missing-{}.toml", std::process::id()));
        assert!(Config::discover(Some(&missing), &dir).is_err());
    }

    #[test]
    fn test_discover_without_file_uses_defaults() {
        let dir = std::env::temp_dir().join(format!("iconsmith-config-none-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let (config, used) = Config::discover(None, &dir).unwrap();
        assert!(used.is_none());
        assert_eq!(config.output, OutputConfig::default());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_discover_picks_up_default_file() {
        let dir = std::env::temp_dir().join(format!("iconsmith-config-found-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(DEFAULT_CONFIG_FILE), "[output]\nsizes = [24]\n").unwrap();
        let (config, used) = Config::discover(None, &dir).unwrap();
        assert_eq!(used, Some(dir.join(DEFAULT_CONFIG_FILE)));
        assert_eq!(config.output.sizes, Some(vec![24]));
        fs::remove_dir_all(&dir).unwrap();
    }
}
