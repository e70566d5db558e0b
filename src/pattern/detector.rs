// Sat Oct 17 2026 - Alex

use crate::pattern::PatternKind;

pub const HEX_CODE_LEN: usize = 6;

/// Classifies hex codes into the structural shapes of [`PatternKind`].
///
/// Stateless; a single value can be shared freely between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternDetector;

impl PatternDetector {
    pub fn new() -> Self {
        Self
    }

    /// Returns `None` for anything that is not exactly 6 characters.
    ///
    /// Shapes are checked in order Paired, Repeating, Palindrome, AxBxCx and
    /// the first hit wins, so `AAAAAA` is reported as `Paired`.
    pub fn detect(&self, hex: &str) -> Option<PatternKind> {
        let c: Vec<char> = hex.chars().map(|ch| ch.to_ascii_uppercase()).collect();
        if c.len() != HEX_CODE_LEN {
            return None;
        }

        let kind = if c[0] == c[1] && c[2] == c[3] && c[4] == c[5] {
            Some(PatternKind::Paired)
        } else if c[0] == c[3] && c[1] == c[4] && c[2] == c[5] {
            Some(PatternKind::Repeating)
        } else if c[0] == c[5] && c[1] == c[4] && c[2] == c[3] {
            Some(PatternKind::Palindrome)
        } else if c[0] == c[2] && c[2] == c[4] {
            Some(PatternKind::AxBxCx(c[0]))
        } else {
            None
        };

        log::trace!("{} -> {:?}", hex, kind);
        kind
    }

    pub fn has_pattern(&self, hex: &str, kind: PatternKind) -> bool {
        self.detect(hex) == Some(kind)
    }
}

pub fn detect_pattern(hex: &str) -> Option<PatternKind> {
    PatternDetector::new().detect(hex)
}
