use std::collections::HashSet;

use super::Board;
use crate::carom_chess::consts::Team;
use crate::carom_chess::coords::{Move, MoveDir};
use crate::carom_chess::error::GameError;
use crate::carom_chess::pieces::{Piece, PieceKind};

/// Whether a candidate cell may, must, or must not hold an enemy piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CapturePolicy {
    Either,
    Never,
    Must,
}

/// Outcome of probing one cell along a ray.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Probe {
    /// The ray ends here; the cell yields no move.
    Stop,
    /// The cell is a bouncer that reflects this approach; keep walking
    /// in the new direction from the same cell.
    Bounce(MoveDir),
    /// The cell is a legal destination.
    Accept { would_capture: bool },
}

/// The knight's eight offsets, each with the nominal direction of its
/// longer axis.
static KNIGHT_OFFSETS: [(i32, i32, MoveDir); 8] = [
    (-1, -2, MoveDir::N),
    (1, -2, MoveDir::N),
    (2, -1, MoveDir::E),
    (2, 1, MoveDir::E),
    (1, 2, MoveDir::S),
    (-1, 2, MoveDir::S),
    (-2, 1, MoveDir::W),
    (-2, -1, MoveDir::W),
];

/// One move-generation pass for a single piece. The visited set spans
/// the whole pass: a (x, y, dir) triple is probed at most once, which
/// both deduplicates results and halts rays that bouncers bend into
/// cycles.
struct MoveGen<'a> {
    board: &'a Board,
    origin: (i32, i32),
    team: Team,
    visited: HashSet<Move>,
    result: Vec<Move>,
}

impl Board {
    /// Enumerates the legal moves of the piece at (x, y). The returned
    /// list is duplicate-free, in discovery order; callers that need set
    /// semantics may collect it. An empty cell is a caller error.
    pub fn get_moves(&self, x: i32, y: i32) -> Result<Vec<Move>, GameError> {
        let piece = self
            .get_piece(x, y)
            .ok_or(GameError::NoPieceAt { x, y })?;
        Ok(self.moves_for(x, y, &piece))
    }

    /// Move enumeration for a piece already fetched from (x, y);
    /// engine use only.
    pub(crate) fn moves_for(&self, x: i32, y: i32, piece: &Piece) -> Vec<Move> {
        let mut walker = MoveGen {
            board: self,
            origin: (x, y),
            team: piece.team,
            visited: HashSet::new(),
            result: Vec::new(),
        };
        walker.run(piece);
        walker.result
    }
}

impl<'a> MoveGen<'a> {
    fn run(&mut self, piece: &Piece) {
        match piece.kind {
            PieceKind::King => {
                for dir in MoveDir::all() {
                    self.walk(dir, Some(1), CapturePolicy::Either);
                }
            }
            PieceKind::Queen => {
                for dir in MoveDir::all() {
                    self.walk(dir, None, CapturePolicy::Either);
                }
            }
            PieceKind::Rook => {
                for dir in MoveDir::cardinals() {
                    self.walk(dir, None, CapturePolicy::Either);
                }
            }
            PieceKind::Bishop => {
                for dir in MoveDir::diagonals() {
                    self.walk(dir, None, CapturePolicy::Either);
                }
            }
            PieceKind::Knight => {
                // Knights jump: probe each landing cell directly.
                for (dx, dy, dir) in KNIGHT_OFFSETS {
                    self.check_cell(
                        self.origin.0 + dx,
                        self.origin.1 + dy,
                        dir,
                        CapturePolicy::Either,
                    );
                }
            }
            PieceKind::Pawn(pawn) => {
                let forward = pawn.facing.move_dir();
                // Diagonal moves are legal only as captures.
                for side in [-1, 1] {
                    let dir = forward.rotated(side);
                    let (dx, dy) = dir.step();
                    self.check_cell(
                        self.origin.0 + dx,
                        self.origin.1 + dy,
                        dir,
                        CapturePolicy::Must,
                    );
                }
                // The advance may never capture; bounces along it are fine.
                let range = if pawn.long_range { 2 } else { 1 };
                self.walk(forward, Some(range), CapturePolicy::Never);
            }
        }
    }

    /// Walks a ray from the origin, following bouncer reflections.
    /// A bounce consumes no step; a capture ends the ray.
    fn walk(&mut self, dir: MoveDir, max_steps: Option<usize>, policy: CapturePolicy) {
        let mut dir = dir;
        let (mut dx, mut dy) = dir.step();
        let (mut x, mut y) = (self.origin.0 + dx, self.origin.1 + dy);
        let mut steps = 0;
        loop {
            match self.check_cell(x, y, dir, policy) {
                Probe::Stop => return,
                Probe::Bounce(reflected) => {
                    dir = reflected;
                    (dx, dy) = dir.step();
                }
                Probe::Accept { would_capture } => {
                    if would_capture {
                        return;
                    }
                    steps += 1;
                    if max_steps.is_some_and(|max| steps >= max) {
                        return;
                    }
                }
            }
            x += dx;
            y += dy;
        }
    }

    /// Probes one cell approached along `dir`, recording the move when
    /// it is legal under `policy`.
    fn check_cell(&mut self, x: i32, y: i32, dir: MoveDir, policy: CapturePolicy) -> Probe {
        let Some(index) = self.board.coords_to_index(x, y) else {
            return Probe::Stop;
        };
        let mv = Move::new(x, y, dir);
        if !self.visited.insert(mv) {
            return Probe::Stop;
        }
        let Some(square) = self.board.squares[index] else {
            return Probe::Stop;
        };
        if let Some(reflected) = square.bounce_for(dir) {
            return Probe::Bounce(reflected);
        }
        if square.solid() {
            return Probe::Stop;
        }
        let mut would_capture = false;
        if (x, y) != self.origin {
            if let Some(other) = self.board.pieces[index] {
                if other.team == self.team {
                    return Probe::Stop;
                }
                would_capture = true;
            }
        }
        match policy {
            CapturePolicy::Never if would_capture => Probe::Stop,
            CapturePolicy::Must if !would_capture => Probe::Stop,
            _ => {
                self.result.push(mv);
                Probe::Accept { would_capture }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::carom_chess::board::Board;
    use crate::carom_chess::board::fixtures::basic_board;
    use crate::carom_chess::coords::{Move, MoveDir};
    use crate::carom_chess::error::GameError;
    use crate::carom_chess::pieces::{Facing, Piece, PieceKind};
    use crate::carom_chess::squares::{BounceKind, Square};

    fn destinations(moves: &[Move]) -> HashSet<(i32, i32)> {
        moves.iter().map(|m| (m.x, m.y)).collect()
    }

    #[test]
    fn empty_cell_is_a_caller_error() {
        let board = Board::new(3, 3);
        assert_eq!(
            board.get_moves(1, 1),
            Err(GameError::NoPieceAt { x: 1, y: 1 })
        );
    }

    #[test]
    fn king_walks_one_step_in_every_direction() {
        let mut board = Board::new(3, 3);
        board
            .set_piece(1, 1, Some(Piece::new(0, PieceKind::King)))
            .unwrap();
        let moves = board.get_moves(1, 1).unwrap();
        assert_eq!(moves.len(), 8);
        assert!(destinations(&moves).contains(&(0, 0)));
        assert!(!destinations(&moves).contains(&(1, 1)));
    }

    #[test]
    fn rook_rays_stop_at_friends_and_capture_enemies() {
        let mut board = Board::new(5, 5);
        board
            .set_piece(2, 2, Some(Piece::new(0, PieceKind::Rook)))
            .unwrap();
        board
            .set_piece(2, 0, Some(Piece::new(0, PieceKind::Knight)))
            .unwrap();
        board
            .set_piece(4, 2, Some(Piece::new(3, PieceKind::Knight)))
            .unwrap();
        let moves = board.get_moves(2, 2).unwrap();
        let dests = destinations(&moves);
        // North stops short of the friendly knight.
        assert!(dests.contains(&(2, 1)));
        assert!(!dests.contains(&(2, 0)));
        // East captures the enemy knight and stops there.
        assert!(dests.contains(&(3, 2)));
        assert!(dests.contains(&(4, 2)));
        assert_eq!(moves.len(), 2 + 1 + 2 + 2);
    }

    #[test]
    fn backslash_reflects_a_westward_rook_north() {
        let mut board = Board::new(4, 4);
        board
            .set_square(0, 3, Some(Square::Bounce(BounceKind::Backslash)))
            .unwrap();
        board
            .set_piece(2, 3, Some(Piece::new(0, PieceKind::Rook)))
            .unwrap();
        let moves = board.get_moves(2, 3).unwrap();
        // The west ray reaches (1,3), bounces at (0,3) and runs north
        // along the file to the top edge.
        assert!(moves.contains(&Move::new(1, 3, MoveDir::W)));
        assert!(moves.contains(&Move::new(0, 2, MoveDir::N)));
        assert!(moves.contains(&Move::new(0, 1, MoveDir::N)));
        assert!(moves.contains(&Move::new(0, 0, MoveDir::N)));
        // The bouncer's own cell is not a destination.
        assert!(!destinations(&moves).contains(&(0, 3)));
        for m in &moves {
            assert!(m.x >= 0 && m.y >= 0);
        }
    }

    #[test]
    fn unlisted_approach_terminates_at_the_bouncer() {
        let mut board = Board::new(3, 3);
        // A backslash does not reflect a ray arriving from the SE.
        board
            .set_square(1, 1, Some(Square::Bounce(BounceKind::Backslash)))
            .unwrap();
        board
            .set_piece(2, 2, Some(Piece::new(0, PieceKind::Bishop)))
            .unwrap();
        let moves = board.get_moves(2, 2).unwrap();
        assert!(!destinations(&moves).contains(&(1, 1)));
        assert!(!destinations(&moves).contains(&(0, 0)));
    }

    #[test]
    fn bouncer_cycles_terminate() {
        // Four mirrors forming a closed loop around the rook's row.
        let mut board = Board::new(3, 3);
        board
            .set_square(2, 0, Some(Square::Bounce(BounceKind::Backslash)))
            .unwrap();
        board
            .set_square(2, 2, Some(Square::Bounce(BounceKind::Slash)))
            .unwrap();
        board
            .set_square(0, 2, Some(Square::Bounce(BounceKind::Backslash)))
            .unwrap();
        board
            .set_square(0, 0, Some(Square::Bounce(BounceKind::Slash)))
            .unwrap();
        board
            .set_piece(1, 0, Some(Piece::new(0, PieceKind::Rook)))
            .unwrap();
        let moves = board.get_moves(1, 0).unwrap();
        // The east ray loops the whole perimeter and arrives back at the
        // origin heading east; the visited set cuts it there.
        assert!(moves.contains(&Move::new(1, 2, MoveDir::W)));
        let unique: HashSet<Move> = moves.iter().copied().collect();
        assert_eq!(unique.len(), moves.len());
    }

    #[test]
    fn same_cell_from_two_directions_is_two_moves() {
        let mut board = Board::new(3, 3);
        board
            .set_square(2, 0, Some(Square::Bounce(BounceKind::Backslash)))
            .unwrap();
        board
            .set_piece(0, 0, Some(Piece::new(0, PieceKind::Queen)))
            .unwrap();
        let moves = board.get_moves(0, 0).unwrap();
        // (2,2) is reached directly by the SE diagonal and again heading
        // south off the mirror at (2,0).
        let arrivals: Vec<MoveDir> = moves
            .iter()
            .filter(|m| (m.x, m.y) == (2, 2))
            .map(|m| m.dir)
            .collect();
        assert!(arrivals.contains(&MoveDir::SE));
        assert!(arrivals.contains(&MoveDir::S));
    }

    #[test]
    fn holes_block_movement_and_listing() {
        let mut board = Board::new(4, 4);
        board.set_square(2, 1, None).unwrap();
        board
            .set_piece(1, 2, Some(Piece::new(0, PieceKind::King)))
            .unwrap();
        let pieces = board.list_pieces();
        assert_eq!(pieces.len(), 1);
        assert_eq!((pieces[0].x, pieces[0].y), (1, 2));
        let moves = board.get_moves(1, 2).unwrap();
        assert!(!destinations(&moves).contains(&(2, 1)));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn knight_jumps_ignore_intervening_cells() {
        let mut board = Board::new(5, 5);
        board
            .set_piece(2, 2, Some(Piece::new(0, PieceKind::Knight)))
            .unwrap();
        // Wall the knight in completely; jumps are unaffected.
        for (x, y) in [(1, 1), (2, 1), (3, 1), (1, 2), (3, 2), (1, 3), (2, 3), (3, 3)] {
            board.set_square(x, y, Some(Square::Enter)).unwrap();
        }
        let moves = board.get_moves(2, 2).unwrap();
        assert_eq!(moves.len(), 8);
        assert!(destinations(&moves).contains(&(1, 0)));
        assert!(destinations(&moves).contains(&(4, 3)));
    }

    #[test]
    fn knight_respects_teams_on_landing() {
        let mut board = Board::new(5, 5);
        board
            .set_piece(2, 2, Some(Piece::new(0, PieceKind::Knight)))
            .unwrap();
        board
            .set_piece(1, 0, Some(Piece::pawn(0, Facing::Up, false)))
            .unwrap();
        board
            .set_piece(3, 0, Some(Piece::new(1, PieceKind::Rook)))
            .unwrap();
        let moves = board.get_moves(2, 2).unwrap();
        let dests = destinations(&moves);
        assert!(!dests.contains(&(1, 0)));
        assert!(dests.contains(&(3, 0)));
        assert_eq!(moves.len(), 7);
    }

    #[test]
    fn pawns_advance_without_capturing() {
        let mut board = Board::new(3, 4);
        board
            .set_piece(1, 3, Some(Piece::pawn(0, Facing::Up, true)))
            .unwrap();
        let moves = board.get_moves(1, 3).unwrap();
        assert_eq!(destinations(&moves), HashSet::from([(1, 2), (1, 1)]));

        // An enemy directly ahead blocks the advance entirely.
        board
            .set_piece(1, 2, Some(Piece::new(1, PieceKind::Rook)))
            .unwrap();
        let moves = board.get_moves(1, 3).unwrap();
        assert!(moves.is_empty());
    }

    #[test]
    fn short_pawns_advance_a_single_step() {
        let mut board = Board::new(3, 4);
        board
            .set_piece(1, 3, Some(Piece::pawn(0, Facing::Up, false)))
            .unwrap();
        let moves = board.get_moves(1, 3).unwrap();
        assert_eq!(destinations(&moves), HashSet::from([(1, 2)]));
    }

    #[test]
    fn pawn_diagonals_require_a_capture() {
        let mut board = Board::new(3, 3);
        board
            .set_piece(1, 2, Some(Piece::pawn(0, Facing::Up, false)))
            .unwrap();
        board
            .set_piece(0, 1, Some(Piece::new(2, PieceKind::Rook)))
            .unwrap();
        let moves = board.get_moves(1, 2).unwrap();
        let dests = destinations(&moves);
        // NW holds an enemy: capturable. NE is empty: no move there.
        assert!(dests.contains(&(0, 1)));
        assert!(!dests.contains(&(2, 1)));
        assert!(dests.contains(&(1, 1)));
    }

    #[test]
    fn sideways_pawns_move_in_their_own_frame() {
        let mut board = Board::new(4, 3);
        board
            .set_piece(0, 1, Some(Piece::pawn(0, Facing::Right, false)))
            .unwrap();
        board
            .set_piece(1, 0, Some(Piece::new(1, PieceKind::Rook)))
            .unwrap();
        let moves = board.get_moves(0, 1).unwrap();
        let dests = destinations(&moves);
        // Forward is east; diagonals are NE and SE.
        assert!(dests.contains(&(1, 1)));
        assert!(dests.contains(&(1, 0)));
        assert!(!dests.contains(&(1, 2)));
    }

    #[test]
    fn pawn_advances_may_bounce() {
        let mut board = Board::new(3, 4);
        board
            .set_square(1, 1, Some(Square::Bounce(BounceKind::Backslash)))
            .unwrap();
        board
            .set_piece(1, 3, Some(Piece::pawn(0, Facing::Up, true)))
            .unwrap();
        let moves = board.get_moves(1, 3).unwrap();
        // First step north to (1,2); the second strikes the mirror and
        // is deflected west to (0,1).
        assert!(moves.contains(&Move::new(1, 2, MoveDir::N)));
        assert!(moves.contains(&Move::new(0, 1, MoveDir::W)));
        assert_eq!(moves.len(), 2);
    }

    #[test]
    fn generated_moves_are_legal_destinations() {
        let board = basic_board();
        for lp in board.list_pieces() {
            for m in board.get_moves(lp.x, lp.y).unwrap() {
                assert!(board.coords_to_index(m.x, m.y).is_some());
                assert!(!board.solid_at(m.x, m.y));
                if let Some(other) = board.get_piece(m.x, m.y) {
                    assert_ne!(other.team, lp.piece.team, "self-capture generated");
                }
            }
        }
    }
}
