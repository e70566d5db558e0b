// Sat Oct 17 2026 - Alex

pub mod analyzer;
pub mod config;
pub mod pattern;
pub mod ui;
pub mod utils;

pub use analyzer::PatternAnalyzer;
pub use config::{AnalyzerConfig, ConfigError, WordSource};
pub use pattern::{
    detect_pattern, match_word, Classification, HexCodes, MatchPriority, PatternDetector,
    PatternError, PatternKind, PatternScanner, PriorityList, WordList, WordMatcher,
};
