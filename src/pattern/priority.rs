// Sat Oct 17 2026 - Alex

use crate::pattern::PatternKind;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPriority {
    Word,
    Paired,
    Repeating,
    Palindrome,
    #[serde(rename = "axbxcx")]
    AxBxCx,
}

impl MatchPriority {
    pub const ALL: [MatchPriority; 5] = [
        Self::Word,
        Self::Paired,
        Self::Repeating,
        Self::Palindrome,
        Self::AxBxCx,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Word => "Word Match",
            Self::Paired => "Paired",
            Self::Repeating => "Repeating",
            Self::Palindrome => "Palindrome",
            Self::AxBxCx => "AxBxCx",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Word => "Hex contains a configured word template",
            Self::Paired => "AABBCC style codes",
            Self::Repeating => "ABCABC style codes",
            Self::Palindrome => "ABCCBA style codes",
            Self::AxBxCx => "Same character at every even position",
        }
    }

    pub fn for_kind(kind: PatternKind) -> Self {
        match kind {
            PatternKind::Paired => Self::Paired,
            PatternKind::Repeating => Self::Repeating,
            PatternKind::Palindrome => Self::Palindrome,
            PatternKind::AxBxCx(_) => Self::AxBxCx,
        }
    }

    pub fn is_satisfied_by(&self, classification: &Classification) -> bool {
        match self {
            Self::Word => classification.word.is_some(),
            _ => classification.pattern.map(Self::for_kind) == Some(*self),
        }
    }
}

impl fmt::Display for MatchPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Everything the engine found for one hex code.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classification {
    pub pattern: Option<PatternKind>,
    pub word: Option<String>,
}

impl Classification {
    pub fn is_match(&self) -> bool {
        self.pattern.is_some() || self.word.is_some()
    }
}

/// User ordering of match categories, highest priority first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityList {
    order: Vec<MatchPriority>,
}

impl PriorityList {
    pub fn defaults() -> Self {
        Self {
            order: MatchPriority::ALL.to_vec(),
        }
    }

    pub fn from_order(order: Vec<MatchPriority>) -> Self {
        Self { order }
    }

    pub fn as_slice(&self) -> &[MatchPriority] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn rank(&self, priority: MatchPriority) -> Option<usize> {
        self.order.iter().position(|&p| p == priority)
    }

    /// Moves the entry at `from` to `to`, clamping `to` into the list.
    /// Returns `false` when nothing moved.
    pub fn move_item(&mut self, from: usize, to: usize) -> bool {
        if from >= self.order.len() {
            return false;
        }
        let to = to.min(self.order.len() - 1);
        if from == to {
            return false;
        }
        let item = self.order.remove(from);
        self.order.insert(to, item);
        true
    }

    pub fn reset(&mut self) {
        *self = Self::defaults();
    }

    pub fn first_duplicate(&self) -> Option<MatchPriority> {
        self.order
            .iter()
            .enumerate()
            .find(|(i, p)| self.order[..*i].contains(*p))
            .map(|(_, p)| *p)
    }

    pub fn best_match(&self, classification: &Classification) -> Option<MatchPriority> {
        self.order
            .iter()
            .copied()
            .find(|p| p.is_satisfied_by(classification))
    }
}

impl Default for PriorityList {
    fn default() -> Self {
        Self::defaults()
    }
}
