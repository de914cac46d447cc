use crate::poker::Card;
use thiserror::Error;

/// What is wrong with a figure that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Defect {
    #[error("row {row} has length {found}, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unexpected character {ch:?} at row {row}, column {col}")]
    UnexpectedChar { ch: char, row: usize, col: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    /// The figure is not a rectangular grid over `+`, `-`, `|` and space
    #[error("Invalid figure: {0}")]
    InvalidFigure(Defect),
    #[error("Account entry must have 3 glyph rows, found {0}")]
    AccountRows(usize),
    /// The glyph at this digit position matches no digit
    #[error("Illegible digit at position {0}")]
    IllegibleDigit(usize),
    /// All digits are legible, but the number does not fit in 64 bits
    #[error("Account number of {0} digits is too large")]
    AccountOverflow(usize),
    #[error("Card {0:?} could not be parsed")]
    InvalidCard(String),
    #[error("A poker hand has 5 cards, found {0}")]
    HandSize(usize),
    #[error("Card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("Line width must be at least 1 column")]
    ZeroColumns,
}

impl From<Defect> for Error {
    fn from(defect: Defect) -> Error {
        Error::InvalidFigure(defect)
    }
}
