pub(crate) mod bulk;
pub(crate) mod fingerprint;
pub(crate) mod movegen;
pub(crate) mod pretty;
pub(crate) mod state;

use std::sync::Arc;

use super::coords::Move;
use super::error::GameError;
use super::pieces::{Facing, Piece, PieceKind};
use super::squares::Square;

pub use state::{BoardState, LocatedPiece, PieceMove};

/// A rectangular playing field of optional squares and optional pieces,
/// stored row-major.
///
/// The squares array sits behind an `Arc` and is shared between a board
/// and its trial copies; search never touches squares, and the editor
/// mutates them copy-on-write, so sharing is safe. Pieces are owned per
/// board.
#[derive(Clone, Debug)]
pub struct Board {
    w: usize,
    h: usize,
    squares: Arc<Vec<Option<Square>>>,
    pieces: Vec<Option<Piece>>,
}

impl Board {
    /// Produces an empty board of normal squares with no pieces.
    pub fn new(w: usize, h: usize) -> Board {
        Board {
            w,
            h,
            squares: Arc::new(vec![Some(Square::Normal); w * h]),
            pieces: vec![None; w * h],
        }
    }

    pub(super) fn with_parts(
        w: usize,
        h: usize,
        squares: Vec<Option<Square>>,
        pieces: Vec<Option<Piece>>,
    ) -> Board {
        Board {
            w,
            h,
            squares: Arc::new(squares),
            pieces,
        }
    }

    pub fn w(&self) -> usize {
        self.w
    }

    pub fn h(&self) -> usize {
        self.h
    }

    /// The number of cells on the board.
    pub fn size(&self) -> usize {
        self.w * self.h
    }

    /// Maps a coordinate to its row-major index, or `None` when the
    /// coordinate lies outside the board.
    pub fn coords_to_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.w as i32 || y < 0 || y >= self.h as i32 {
            return None;
        }
        Some(y as usize * self.w + x as usize)
    }

    /// The square at a coordinate; `None` for holes and out-of-range
    /// coordinates alike.
    pub fn get_square(&self, x: i32, y: i32) -> Option<Square> {
        self.coords_to_index(x, y).and_then(|i| self.squares[i])
    }

    /// Replaces the square at a coordinate. Copy-on-write: trial copies
    /// and undo snapshots sharing the old squares array are unaffected.
    pub fn set_square(&mut self, x: i32, y: i32, square: Option<Square>) -> Result<(), GameError> {
        let i = self
            .coords_to_index(x, y)
            .ok_or(GameError::OutOfBounds { x, y })?;
        Arc::make_mut(&mut self.squares)[i] = square;
        Ok(())
    }

    /// The piece at a coordinate; `None` for empty cells and
    /// out-of-range coordinates alike.
    pub fn get_piece(&self, x: i32, y: i32) -> Option<Piece> {
        self.coords_to_index(x, y).and_then(|i| self.pieces[i])
    }

    /// Places or removes the piece at a coordinate.
    pub fn set_piece(&mut self, x: i32, y: i32, piece: Option<Piece>) -> Result<(), GameError> {
        let i = self
            .coords_to_index(x, y)
            .ok_or(GameError::OutOfBounds { x, y })?;
        self.pieces[i] = piece;
        Ok(())
    }

    /// Whether the cell at a coordinate refuses pieces: a hole, a solid
    /// square, or off the board entirely.
    pub fn solid_at(&self, x: i32, y: i32) -> bool {
        match self.get_square(x, y) {
            Some(square) => square.solid(),
            None => true,
        }
    }

    /// A copy sharing this board's squares but owning its own pieces,
    /// for trying out moves without disturbing the original.
    pub fn trial_copy(&self) -> Board {
        self.clone()
    }

    /// Executes a piece move: the piece leaves its recorded cell and
    /// lands on the move's destination, overwriting (capturing) whatever
    /// stood there. A moved pawn loses its double step, and a cardinal
    /// arrival direction re-orients its facing; bouncers make arrival
    /// directions other than the pawn's own facing reachable.
    pub fn apply(&mut self, piece_move: &PieceMove) -> Result<(), GameError> {
        let from = piece_move.piece;
        let to = piece_move.mv;
        self.coords_to_index(to.x, to.y)
            .ok_or(GameError::OutOfBounds { x: to.x, y: to.y })?;
        self.set_piece(from.x, from.y, None)?;
        self.set_piece(to.x, to.y, Some(Self::arrived(from.piece, &to)))?;
        Ok(())
    }

    /// Unchecked variant of [`Board::apply`]; engine use only. The
    /// seeker only ever applies moves generated from this very board, so
    /// both cells are known to be in range.
    pub(crate) fn apply_unchecked(&mut self, piece_move: &PieceMove) {
        let from = piece_move.piece;
        let to = piece_move.mv;
        let from_i = from.y as usize * self.w + from.x as usize;
        let to_i = to.y as usize * self.w + to.x as usize;
        self.pieces[from_i] = None;
        self.pieces[to_i] = Some(Self::arrived(from.piece, &to));
    }

    fn arrived(mut piece: Piece, mv: &Move) -> Piece {
        if let PieceKind::Pawn(mut pawn) = piece.kind {
            pawn.long_range = false;
            if let Some(facing) = Facing::from_move_dir(mv.dir) {
                pawn.facing = facing;
            }
            piece.kind = PieceKind::Pawn(pawn);
        }
        piece
    }
}
