use thiserror::Error;

/// Errors raised by the core board and move-generation layer.
///
/// These are all fatal at their point of origin; nothing in the core
/// silently recovers. The editor layer catches and reports them.
/// Normal termination conditions of the ray walker (holes, blocked
/// paths, bouncer cycles) are not errors.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("coordinate ({x}, {y}) is outside the board")]
    OutOfBounds { x: i32, y: i32 },

    #[error("no piece at ({x}, {y})")]
    NoPieceAt { x: i32, y: i32 },

    #[error("invalid board document: {0}")]
    InvalidDocument(String),

    #[error("invalid move direction {0}; expected 0..8")]
    InvalidDirection(u8),
}
