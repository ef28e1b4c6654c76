/*
 *  An implementation of carom chess in Rust: multi-team chess on a
 *  rectangular board with holes and ray-reflecting bouncer squares.
 */

pub(crate) mod board;
pub(crate) mod consts;
pub mod coords;
pub mod error;
pub mod notation;
pub mod pieces;
pub mod squares;

pub mod prelude {
    pub(crate) use crate::utils::prelude::*;

    pub use super::{
        board::{Board, BoardState, LocatedPiece, PieceMove},
        consts::*,
        coords::{self, Move, MoveDir},
        error::GameError,
        notation::*,
        pieces::{Facing, Pawn, Piece, PieceKind, PieceType},
        squares::{BounceKind, Square},
    };
}
