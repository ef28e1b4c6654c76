use super::Board;

/// The character a hole contributes to a fingerprint.
const HOLE_SENTINEL: char = '#';

impl Board {
    /// A deterministic fingerprint of the whole configuration:
    /// dimensions, then each cell row-major. A hole emits `#`; a square
    /// emits its defining character, followed by the team digit and
    /// piece glyph when occupied. Boards with equal fingerprints are
    /// interchangeable for move generation and scoring, so the string
    /// doubles as a cache key.
    pub fn state_id(&self) -> String {
        let mut id = format!("{}x{}:", self.w, self.h);
        for i in 0..self.size() {
            match self.squares[i] {
                None => id.push(HOLE_SENTINEL),
                Some(square) => {
                    id.push(square.glyph());
                    if let Some(piece) = self.pieces[i] {
                        id.push(char::from_digit(piece.team as u32, 10).unwrap_or('?'));
                        id.push(piece.glyph());
                    }
                }
            }
        }
        id
    }
}

#[cfg(test)]
mod tests {
    use crate::carom_chess::board::Board;
    use crate::carom_chess::board::fixtures::basic_board;
    use crate::carom_chess::pieces::{Facing, Piece, PieceKind};
    use crate::carom_chess::squares::{BounceKind, Square};

    #[test]
    fn fingerprints_are_deterministic() {
        let board = basic_board();
        assert_eq!(board.state_id(), board.state_id());
        assert_eq!(board.state_id(), basic_board().state_id());
    }

    #[test]
    fn fingerprints_track_every_cell_kind() {
        let mut board = Board::new(2, 1);
        board.set_square(0, 0, None).unwrap();
        board
            .set_square(1, 0, Some(Square::Bounce(BounceKind::Slash)))
            .unwrap();
        assert_eq!(board.state_id(), "2x1:#/");
        board.set_square(1, 0, Some(Square::Normal)).unwrap();
        board
            .set_piece(1, 0, Some(Piece::pawn(3, Facing::Left, true)))
            .unwrap();
        assert_eq!(board.state_id(), "2x1:#.3↞");
    }

    #[test]
    fn fingerprints_distinguish_configurations() {
        let board = basic_board();
        let mut moved = board.trial_copy();
        let pawn = moved.get_piece(4, 2).unwrap();
        moved.set_piece(4, 2, None).unwrap();
        moved.set_piece(4, 4, Some(pawn)).unwrap();
        assert_ne!(board.state_id(), moved.state_id());

        let mut resized = board.trial_copy();
        resized.resize(1, 0);
        assert_ne!(board.state_id(), resized.state_id());
    }

    #[test]
    fn equal_fingerprints_for_equal_piece_state() {
        let mut a = Board::new(3, 3);
        let mut b = Board::new(3, 3);
        let piece = Piece::new(2, PieceKind::Knight);
        a.set_piece(1, 1, Some(piece)).unwrap();
        b.set_piece(1, 1, Some(piece)).unwrap();
        assert_eq!(a.state_id(), b.state_id());
    }
}
