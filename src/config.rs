use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::app_dirs::AppDirs;
use crate::error::Result;
use crate::text_source::{next_word_count, SourceKind};
use crate::typing_policy::ScoringMode;

/// User settings. Only settings are stored, never results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub number_of_words: usize,
    pub source: SourceKind,
    pub scoring_mode: ScoringMode,
    /// Fixed text from the command line; lives for one run only
    #[serde(skip)]
    pub prompt: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            number_of_words: 25,
            source: SourceKind::Words,
            scoring_mode: ScoringMode::default(),
            prompt: None,
        }
    }
}

impl Config {
    /// Switch between generated sources. A fixed prompt is dropped first.
    pub fn cycle_source(&mut self) {
        if self.prompt.take().is_none() {
            self.source = self.source.toggled();
        }
    }

    pub fn cycle_word_count(&mut self) {
        self.number_of_words = next_word_count(self.number_of_words);
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("typing_game.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        let Ok(bytes) = fs::read(&self.path) else {
            return Config::default();
        };
        serde_json::from_slice::<Config>(&bytes).unwrap_or_else(|e| {
            warn!(path = %self.path.display(), error = %e, "ignoring unreadable config");
            Config::default()
        })
    }

    fn save(&self, cfg: &Config) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            number_of_words: 50,
            source: SourceKind::Quote,
            scoring_mode: ScoringMode::WholeWordExact,
            prompt: None,
        };
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn prompt_is_not_persisted() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("config.json"));
        let cfg = Config {
            prompt: Some("just this once".to_string()),
            ..Config::default()
        };
        store.save(&cfg).unwrap();

        let raw = fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("just this once"));
        assert_eq!(store.load().prompt, None);
    }

    #[test]
    fn missing_file_gives_default() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn corrupt_file_gives_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "source": "quote" }"#).unwrap();

        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.source, SourceKind::Quote);
        assert_eq!(cfg.number_of_words, 25);
        assert_eq!(cfg.scoring_mode, ScoringMode::PerCharacterPartial);
    }

    #[test]
    fn cycle_source_drops_prompt_first() {
        let mut cfg = Config {
            prompt: Some("fixed".to_string()),
            ..Config::default()
        };

        cfg.cycle_source();
        assert_eq!(cfg.prompt, None);
        assert_eq!(cfg.source, SourceKind::Words);

        cfg.cycle_source();
        assert_eq!(cfg.source, SourceKind::Quote);
    }

    #[test]
    fn cycle_word_count() {
        let mut cfg = Config::default();
        cfg.cycle_word_count();
        assert_eq!(cfg.number_of_words, 50);
    }
}
