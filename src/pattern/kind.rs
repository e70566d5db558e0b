// Sat Oct 17 2026 - Alex

use crate::pattern::PatternError;
use std::fmt;
use std::str::FromStr;

/// Structural shape of a 6 character hex code.
///
/// `AxBxCx` only looks at the even positions, so `A1A2A3` and `A9A8A7`
/// both report `AxBxCx('A')`. The odd positions are never compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    Paired,
    Repeating,
    Palindrome,
    AxBxCx(char),
}

impl PatternKind {
    pub fn display_name(&self) -> String {
        match self {
            Self::Paired => "Paired".to_string(),
            Self::Repeating => "Repeating".to_string(),
            Self::Palindrome => "Palindrome".to_string(),
            Self::AxBxCx(c) => format!("AxBxCx ({})", c),
        }
    }

    pub fn is_axbxcx(&self) -> bool {
        matches!(self, Self::AxBxCx(_))
    }

    /// Same variant, ignoring the `AxBxCx` payload.
    pub fn same_shape(&self, other: &PatternKind) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paired => write!(f, "paired"),
            Self::Repeating => write!(f, "repeating"),
            Self::Palindrome => write!(f, "palindrome"),
            Self::AxBxCx(c) => write!(f, "axbxcx_{}", c),
        }
    }
}

impl FromStr for PatternKind {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        match lower.as_str() {
            "paired" => return Ok(Self::Paired),
            "repeating" => return Ok(Self::Repeating),
            "palindrome" => return Ok(Self::Palindrome),
            _ => {}
        }

        if let Some(payload) = lower.strip_prefix("axbxcx_") {
            let mut chars = payload.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                if c.is_ascii_hexdigit() {
                    return Ok(Self::AxBxCx(c.to_ascii_uppercase()));
                }
            }
        }

        Err(PatternError::UnknownKind(s.to_string()))
    }
}
