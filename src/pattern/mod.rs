// Sat Oct 17 2026 - Alex

pub mod detector;
pub mod error;
pub mod kind;
pub mod priority;
pub mod scanner;
pub mod wildcard;
pub mod word;

pub use detector::{detect_pattern, PatternDetector, HEX_CODE_LEN};
pub use error::PatternError;
pub use kind::PatternKind;
pub use priority::{Classification, MatchPriority, PriorityList};
pub use scanner::{HexCodes, PatternScanner};
pub use wildcard::{template_matches, Template, Wildcard};
pub use word::{match_word, WordList, WordMatcher};
