// Sat Oct 17 2026 - Alex

use crate::pattern::wildcard::{Template, WILDCARD};
use crate::pattern::PatternError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named word templates. Iteration follows insertion order, which decides
/// the winner when several templates match the same code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordList {
    words: IndexMap<String, String>,
}

impl WordList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-inserting an existing word keeps its original position.
    pub fn insert(&mut self, word: &str, template: &str) -> Option<String> {
        self.words.insert(word.to_string(), template.to_string())
    }

    pub fn with_word(mut self, word: &str, template: &str) -> Self {
        self.insert(word, template);
        self
    }

    pub fn remove(&mut self, word: &str) -> Option<String> {
        self.words.shift_remove(word)
    }

    pub fn get(&self, word: &str) -> Option<&str> {
        self.words.get(word).map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.words.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), PatternError> {
        for (word, template) in self.iter() {
            if word.trim().is_empty() || template.is_empty() {
                return Err(PatternError::EmptyTemplate(word.to_string()));
            }
            if let Some(bad) = template
                .chars()
                .map(|c| c.to_ascii_uppercase())
                .find(|&c| c != WILDCARD && !c.is_ascii_hexdigit())
            {
                return Err(PatternError::InvalidTemplate {
                    word: word.to_string(),
                    character: bad,
                });
            }
        }
        Ok(())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for WordList {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        let mut list = WordList::new();
        for (word, template) in iter {
            list.insert(word, template);
        }
        list
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WordMatcher {
    enabled: bool,
}

impl WordMatcher {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Name of the first word in `words` whose template matches `hex`.
    pub fn find_match<'w>(&self, hex: &str, words: &'w WordList) -> Option<&'w str> {
        if !self.enabled {
            return None;
        }

        let hex = hex.to_uppercase();
        let hit = words
            .iter()
            .find(|(_, template)| Template::new(template).matches(&hex))
            .map(|(word, _)| word);

        if let Some(word) = hit {
            log::debug!("{} matched word '{}'", hex, word);
        }
        hit
    }
}

impl Default for WordMatcher {
    fn default() -> Self {
        Self::new(true)
    }
}

pub fn match_word<'w>(hex: &str, words: &'w WordList, enabled: bool) -> Option<&'w str> {
    WordMatcher::new(enabled).find_match(hex, words)
}
