use thiserror::Error;

/// Why a safe number could not be built.
///
/// This is the only failure the AST defines: everything else, including every
/// conversion back to native values, is total.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumberFormatError {
    #[error("empty number literal")]
    Empty,

    #[error("unexpected {found:?} at offset {offset} in number literal {literal:?}, expected {expected}")]
    UnexpectedChar {
        literal: String,
        offset: usize,
        found: char,
        expected: &'static str,
    },

    #[error("number literal {literal:?} ends early, expected {expected}")]
    UnexpectedEnd {
        literal: String,
        expected: &'static str,
    },

    #[error("leading zero in number literal {literal:?}")]
    LeadingZero { literal: String },

    #[error("number literal {literal:?} overflows the finite numeric range")]
    OutOfRange { literal: String },

    #[error("{value} is not a finite number")]
    NonFinite { value: f64 },
}

impl NumberFormatError {
    /// The rejected text, when the input was text.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Self::Empty => Some(""),
            Self::UnexpectedChar { literal, .. }
            | Self::UnexpectedEnd { literal, .. }
            | Self::LeadingZero { literal }
            | Self::OutOfRange { literal } => Some(literal),
            Self::NonFinite { .. } => None,
        }
    }
}
