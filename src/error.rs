use thiserror::Error;

/// Errors raised while building positions from external text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("invalid FEN '{fen}': {reason}")]
    InvalidFen { fen: String, reason: String },

    #[error("illegal move '{mv}' in position {fen}")]
    IllegalMove { mv: String, fen: String },
}
