// Sat Oct 17 2026 - Alex

use crate::pattern::{PatternError, PriorityList, WordList};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where the analyzer reads its word settings from.
pub trait WordSource {
    fn words_enabled(&self) -> bool;
    fn word_list(&self) -> &WordList;
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<PatternError> for ConfigError {
    fn from(e: PatternError) -> Self {
        ConfigError::Validation(e.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub words_enabled: bool,
    pub word_list: WordList,
    pub match_priorities: PriorityList,
    pub parallel_scan: bool,
    pub parallel_threshold: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            words_enabled: true,
            word_list: WordList::new(),
            match_priorities: PriorityList::defaults(),
            parallel_scan: true,
            parallel_threshold: 256,
        }
    }
}

impl AnalyzerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_word(mut self, word: &str, template: &str) -> Self {
        self.word_list.insert(word, template);
        self
    }

    pub fn with_words_enabled(mut self, enabled: bool) -> Self {
        self.words_enabled = enabled;
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let ext = path.extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        if !ext.eq_ignore_ascii_case("json") {
            return Err(ConfigError::UnsupportedFormat(ext.to_string()));
        }

        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        log::info!("Loaded {} words from {}", config.word_list.len(), path.display());
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.word_list.validate()?;

        if let Some(dup) = self.match_priorities.first_duplicate() {
            return Err(ConfigError::Validation(format!("Duplicate match priority: {}", dup)));
        }
        Ok(())
    }
}

impl WordSource for AnalyzerConfig {
    fn words_enabled(&self) -> bool {
        self.words_enabled
    }

    fn word_list(&self) -> &WordList {
        &self.word_list
    }
}
