// Sat Oct 17 2026 - Alex

use std::fmt;

pub const WILDCARD: char = 'X';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Wildcard {
    Any,
    Char(char),
}

impl Wildcard {
    pub fn matches(&self, c: char) -> bool {
        match self {
            Self::Any => true,
            Self::Char(expected) => *expected == c,
        }
    }

    pub fn from_char(c: char) -> Self {
        let upper = c.to_ascii_uppercase();
        if upper == WILDCARD {
            Self::Any
        } else {
            Self::Char(upper)
        }
    }
}

impl From<char> for Wildcard {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}

/// A word template such as `"XAX"` or `"C0FFEE"`.
///
/// Templates with at least one `X` are matched position by position over
/// every window of the code. Templates without one are a plain substring
/// search. Either way the template may be shorter than the code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    cells: Vec<Wildcard>,
    literal: String,
}

impl Template {
    pub fn new(template: &str) -> Self {
        let literal = template.to_uppercase();
        let cells = literal.chars().map(Wildcard::from_char).collect();
        Self { cells, literal }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn has_wildcards(&self) -> bool {
        self.cells.iter().any(|c| *c == Wildcard::Any)
    }

    pub fn cells(&self) -> &[Wildcard] {
        &self.cells
    }

    /// `hex` is uppercased before comparison.
    pub fn matches(&self, hex: &str) -> bool {
        let hex = hex.to_uppercase();
        if self.has_wildcards() {
            let chars: Vec<char> = hex.chars().collect();
            self.find_in(&chars).is_some()
        } else {
            hex.contains(self.literal.as_str())
        }
    }

    /// First window offset where every cell accepts the code's character.
    pub fn find_in(&self, hex: &[char]) -> Option<usize> {
        if self.cells.len() > hex.len() {
            return None;
        }

        (0..=hex.len() - self.cells.len()).find(|&start| {
            self.cells
                .iter()
                .zip(&hex[start..])
                .all(|(cell, &c)| cell.matches(c))
        })
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.literal)
    }
}

pub fn template_matches(hex: &str, template: &str) -> bool {
    Template::new(template).matches(hex)
}
