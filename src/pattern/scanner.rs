// Sat Oct 17 2026 - Alex

use crate::pattern::{PatternDetector, PatternKind, WordList, WordMatcher};
use indexmap::IndexMap;
use rayon::prelude::*;
use std::collections::HashSet;

/// Identifier to hex code, as handed over by the piece registry.
pub type HexCodes = IndexMap<String, String>;

pub struct PatternScanner {
    detector: PatternDetector,
    use_parallel: bool,
    parallel_threshold: usize,
}

impl PatternScanner {
    pub fn new() -> Self {
        Self {
            detector: PatternDetector::new(),
            use_parallel: true,
            parallel_threshold: 256,
        }
    }

    pub fn use_parallel(mut self, parallel: bool) -> Self {
        self.use_parallel = parallel;
        self
    }

    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Ids whose code classifies as exactly `kind`, payload included.
    pub fn pieces_with_pattern(&self, kind: PatternKind, codes: &HexCodes) -> HashSet<String> {
        let matches = self.filter(codes, |hex| self.detector.has_pattern(hex, kind));
        log::info!("{} of {} pieces have pattern {}", matches.len(), codes.len(), kind);
        matches
    }

    pub fn pieces_with_words(&self, codes: &HexCodes, words: &WordList, enabled: bool) -> HashSet<String> {
        let matcher = WordMatcher::new(enabled);
        let matches = self.filter(codes, |hex| matcher.find_match(hex, words).is_some());
        log::info!("{} of {} pieces match a word", matches.len(), codes.len());
        matches
    }

    fn filter<F>(&self, codes: &HexCodes, predicate: F) -> HashSet<String>
    where
        F: Fn(&str) -> bool + Sync,
    {
        if self.use_parallel && codes.len() >= self.parallel_threshold {
            log::debug!("Scanning {} pieces in parallel", codes.len());
            codes.par_iter()
                .filter(|(_, hex)| predicate(hex.as_str()))
                .map(|(id, _)| id.clone())
                .collect()
        } else {
            codes.iter()
                .filter(|(_, hex)| predicate(hex.as_str()))
                .map(|(id, _)| id.clone())
                .collect()
        }
    }
}

impl Default for PatternScanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::{detect_pattern, match_word};

    fn codes() -> HexCodes {
        [
            ("p1", "AABBCC"),
            ("p2", "aabbcc"),
            ("r1", "ABCABC"),
            ("pal", "ABCCBA"),
            ("ax", "A1A2A3"),
            ("bx", "B1B2B3"),
            ("none", "123456"),
            ("short", "AABB"),
            ("empty", ""),
            ("long", "AABBCCDD"),
        ]
        .into_iter()
        .map(|(id, hex)| (id.to_string(), hex.to_string()))
        .collect()
    }

    fn ids(list: &[&str]) -> HashSet<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pieces_with_pattern() {
        let scanner = PatternScanner::new();
        let codes = codes();
        assert_eq!(scanner.pieces_with_pattern(PatternKind::Paired, &codes), ids(&["p1", "p2"]));
        assert_eq!(scanner.pieces_with_pattern(PatternKind::AxBxCx('A'), &codes), ids(&["ax"]));
        assert_eq!(scanner.pieces_with_pattern(PatternKind::AxBxCx('C'), &codes), ids(&[]));
    }

    #[test]
    fn test_pieces_with_words() {
        let scanner = PatternScanner::new();
        let words = WordList::new().with_word("abc", "ABC").with_word("b2", "XB2");
        let found = scanner.pieces_with_words(&codes(), &words, true);
        assert_eq!(found, ids(&["r1", "pal", "bx"]));
        assert!(scanner.pieces_with_words(&codes(), &words, false).is_empty());
    }

    #[test]
    fn test_short_codes_can_match_words() {
        let scanner = PatternScanner::new();
        let words = WordList::new().with_word("aabb", "AABB");
        let found = scanner.pieces_with_words(&codes(), &words, true);
        assert_eq!(found, ids(&["p1", "p2", "short", "long"]));
    }

    #[test]
    fn test_parallel_agrees_with_single_calls() {
        let mut codes = HexCodes::new();
        for i in 0..2000u32 {
            codes.insert(format!("piece-{}", i), format!("{:06X}", i.wrapping_mul(2654435761) & 0xFFFFFF));
        }
        let words = WordList::new().with_word("f", "FXF").with_word("ace", "ACE");

        let parallel = PatternScanner::new().with_parallel_threshold(1);
        let sequential = PatternScanner::new().use_parallel(false);

        for kind in [
            PatternKind::Paired,
            PatternKind::Repeating,
            PatternKind::Palindrome,
            PatternKind::AxBxCx('0'),
        ] {
            let expected: HashSet<String> = codes
                .iter()
                .filter(|(_, hex)| detect_pattern(hex) == Some(kind))
                .map(|(id, _)| id.clone())
                .collect();
            assert_eq!(parallel.pieces_with_pattern(kind, &codes), expected);
            assert_eq!(sequential.pieces_with_pattern(kind, &codes), expected);
        }

        let expected: HashSet<String> = codes
            .iter()
            .filter(|(_, hex)| match_word(hex, &words, true).is_some())
            .map(|(id, _)| id.clone())
            .collect();
        assert_eq!(parallel.pieces_with_words(&codes, &words, true), expected);
        assert_eq!(sequential.pieces_with_words(&codes, &words, true), expected);
    }
}
