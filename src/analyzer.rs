// Sat Oct 17 2026 - Alex

use crate::config::{AnalyzerConfig, WordSource};
use crate::pattern::{
    Classification, HexCodes, MatchPriority, PatternDetector, PatternKind, PatternScanner,
    PriorityList, WordMatcher,
};
use indexmap::IndexMap;
use std::collections::HashSet;

/// Entry point for hosts. Built once and passed around by reference.
pub struct PatternAnalyzer<S: WordSource = AnalyzerConfig> {
    source: S,
    detector: PatternDetector,
    scanner: PatternScanner,
    priorities: PriorityList,
}

impl<S: WordSource> PatternAnalyzer<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            detector: PatternDetector::new(),
            scanner: PatternScanner::new(),
            priorities: PriorityList::defaults(),
        }
    }

    pub fn with_scanner(mut self, scanner: PatternScanner) -> Self {
        self.scanner = scanner;
        self
    }

    pub fn with_priorities(mut self, priorities: PriorityList) -> Self {
        self.priorities = priorities;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn priorities(&self) -> &PriorityList {
        &self.priorities
    }

    pub fn detect_pattern(&self, hex: &str) -> Option<PatternKind> {
        self.detector.detect(hex)
    }

    pub fn detect_word_match(&self, hex: &str) -> Option<&str> {
        WordMatcher::new(self.source.words_enabled()).find_match(hex, self.source.word_list())
    }

    pub fn classify(&self, hex: &str) -> Classification {
        Classification {
            pattern: self.detect_pattern(hex),
            word: self.detect_word_match(hex).map(str::to_string),
        }
    }

    pub fn best_match(&self, hex: &str) -> Option<MatchPriority> {
        self.priorities.best_match(&self.classify(hex))
    }

    pub fn pieces_with_pattern(&self, kind: PatternKind, codes: &HexCodes) -> HashSet<String> {
        self.scanner.pieces_with_pattern(kind, codes)
    }

    pub fn pieces_with_words(&self, codes: &HexCodes) -> HashSet<String> {
        self.scanner.pieces_with_words(codes, self.source.word_list(), self.source.words_enabled())
    }

    /// Every id with any match, tagged with its winning priority, in input order.
    pub fn highlight_targets(&self, codes: &HexCodes) -> IndexMap<String, MatchPriority> {
        codes
            .iter()
            .filter_map(|(id, hex)| self.best_match(hex).map(|p| (id.clone(), p)))
            .collect()
    }
}

impl PatternAnalyzer<AnalyzerConfig> {
    pub fn from_config(config: AnalyzerConfig) -> Self {
        let scanner = PatternScanner::new()
            .use_parallel(config.parallel_scan)
            .with_parallel_threshold(config.parallel_threshold);
        let priorities = config.match_priorities.clone();

        Self::new(config)
            .with_scanner(scanner)
            .with_priorities(priorities)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::WordList;

    struct StaticWords {
        enabled: bool,
        words: WordList,
    }

    impl WordSource for StaticWords {
        fn words_enabled(&self) -> bool {
            self.enabled
        }

        fn word_list(&self) -> &WordList {
            &self.words
        }
    }

    fn codes(pairs: &[(&str, &str)]) -> HexCodes {
        pairs.iter().map(|(id, hex)| (id.to_string(), hex.to_string())).collect()
    }

    #[test]
    fn test_custom_source() {
        let analyzer = PatternAnalyzer::new(StaticWords {
            enabled: true,
            words: WordList::new().with_word("test", "XAX"),
        });
        assert_eq!(analyzer.detect_word_match("BFAFFF"), Some("test"));
        assert_eq!(analyzer.detect_pattern("aabbcc"), Some(PatternKind::Paired));

        let disabled = PatternAnalyzer::new(StaticWords {
            enabled: false,
            words: WordList::new().with_word("test", "XAX"),
        });
        assert_eq!(disabled.detect_word_match("BFAFFF"), None);
    }

    #[test]
    fn test_classify() {
        let analyzer = PatternAnalyzer::from_config(AnalyzerConfig::new().with_word("ace", "ACE"));
        let c = analyzer.classify("ACEACE");
        assert_eq!(c.pattern, Some(PatternKind::Repeating));
        assert_eq!(c.word.as_deref(), Some("ace"));
        assert_eq!(analyzer.best_match("ACEACE"), Some(MatchPriority::Word));
        assert_eq!(analyzer.best_match("123456"), None);
    }

    #[test]
    fn test_config_priorities_applied() {
        let mut config = AnalyzerConfig::new().with_word("ace", "ACE");
        config.match_priorities.move_item(2, 0);
        let analyzer = PatternAnalyzer::from_config(config);
        assert_eq!(analyzer.priorities().as_slice()[0], MatchPriority::Repeating);
        assert_eq!(analyzer.best_match("ACEACE"), Some(MatchPriority::Repeating));
    }

    #[test]
    fn test_bulk_queries() {
        let analyzer = PatternAnalyzer::from_config(AnalyzerConfig::new().with_word("cafe", "CAFE"));
        let codes = codes(&[("a", "CAFE00"), ("b", "A1A2A3"), ("c", "123456"), ("d", "bad")]);

        let words = analyzer.pieces_with_words(&codes);
        assert_eq!(words.len(), 1);
        assert!(words.contains("a"));

        let ax = analyzer.pieces_with_pattern(PatternKind::AxBxCx('A'), &codes);
        assert_eq!(ax.into_iter().collect::<Vec<_>>(), vec!["b".to_string()]);
    }

    #[test]
    fn test_highlight_targets() {
        let analyzer = PatternAnalyzer::from_config(AnalyzerConfig::new().with_word("cafe", "CAFE"));
        let codes = codes(&[("z", "A1A2A3"), ("y", "123456"), ("x", "CAFEEE"), ("w", "112233")]);
        let targets = analyzer.highlight_targets(&codes);
        assert_eq!(
            targets.into_iter().collect::<Vec<_>>(),
            vec![
                ("z".to_string(), MatchPriority::AxBxCx),
                ("x".to_string(), MatchPriority::Word),
                ("w".to_string(), MatchPriority::Paired),
            ]
        );
    }
}
