use std::collections::{BTreeMap, BTreeSet};

use super::Board;
use crate::carom_chess::consts::Team;
use crate::carom_chess::coords::Move;
use crate::carom_chess::pieces::{Piece, PieceType};

/// A piece together with the cell it stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocatedPiece {
    pub x: i32,
    pub y: i32,
    pub piece: Piece,
}

impl LocatedPiece {
    pub fn new(x: i32, y: i32, piece: Piece) -> LocatedPiece {
        LocatedPiece { x, y, piece }
    }
}

/// A located piece and one of its legal moves; the unit the seeker
/// scores and [`Board::apply`] executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PieceMove {
    pub piece: LocatedPiece,
    pub mv: Move,
}

impl PieceMove {
    pub fn new(piece: LocatedPiece, mv: Move) -> PieceMove {
        PieceMove { piece, mv }
    }
}

/// A read-only summary of a board at one instant: every piece with its
/// move set, per-team material histograms, and the set of teams still
/// on the board. Entries exist exactly for the teams present.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub state_id: String,
    pub pieces_and_moves: BTreeMap<Team, Vec<(LocatedPiece, Vec<Move>)>>,
    pub material: BTreeMap<Team, BTreeMap<PieceType, usize>>,
    pub teams: BTreeSet<Team>,
}

impl Board {
    /// Every piece on the board, row-major.
    pub fn list_pieces(&self) -> Vec<LocatedPiece> {
        let mut pieces = Vec::new();
        for y in 0..self.h() as i32 {
            for x in 0..self.w() as i32 {
                if let Some(piece) = self.get_piece(x, y) {
                    pieces.push(LocatedPiece::new(x, y, piece));
                }
            }
        }
        pieces
    }

    /// Summarizes the board for scoring and search.
    pub fn get_state(&self) -> BoardState {
        let mut pieces_and_moves: BTreeMap<Team, Vec<(LocatedPiece, Vec<Move>)>> = BTreeMap::new();
        for lp in self.list_pieces() {
            let moves = self.moves_for(lp.x, lp.y, &lp.piece);
            pieces_and_moves
                .entry(lp.piece.team)
                .or_default()
                .push((lp, moves));
        }

        let mut material: BTreeMap<Team, BTreeMap<PieceType, usize>> = BTreeMap::new();
        for (&team, entries) in &pieces_and_moves {
            let histogram = material.entry(team).or_default();
            for (lp, _) in entries {
                *histogram.entry(lp.piece.piece_type()).or_insert(0) += 1;
            }
        }

        let teams = pieces_and_moves.keys().copied().collect();
        BoardState {
            state_id: self.state_id(),
            pieces_and_moves,
            material,
            teams,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carom_chess::board::fixtures::basic_board;
    use crate::carom_chess::pieces::PieceKind;

    #[test]
    fn state_covers_exactly_the_teams_present() {
        let state = basic_board().get_state();
        assert_eq!(state.teams, BTreeSet::from([0, 1]));
        for team in &state.teams {
            assert!(state.pieces_and_moves.contains_key(team));
            assert!(state.material.contains_key(team));
        }
        assert!(!state.pieces_and_moves.contains_key(&2));
        assert!(!state.material.contains_key(&2));
    }

    #[test]
    fn material_histograms_count_types() {
        let state = basic_board().get_state();
        for team in [0, 1] {
            let histogram = &state.material[&team];
            assert_eq!(histogram[&PieceType::Pawn], 8);
            assert_eq!(histogram[&PieceType::Rook], 2);
            assert_eq!(histogram[&PieceType::Knight], 2);
            assert_eq!(histogram[&PieceType::Bishop], 2);
            assert_eq!(histogram[&PieceType::King], 1);
            assert_eq!(histogram[&PieceType::Queen], 1);
        }
    }

    #[test]
    fn pieces_enumerate_row_major() {
        let mut board = Board::new(3, 3);
        board
            .set_piece(2, 0, Some(Piece::new(0, PieceKind::King)))
            .unwrap();
        board
            .set_piece(0, 2, Some(Piece::new(1, PieceKind::Queen)))
            .unwrap();
        let pieces = board.list_pieces();
        assert_eq!((pieces[0].x, pieces[0].y), (2, 0));
        assert_eq!((pieces[1].x, pieces[1].y), (0, 2));
    }

    #[test]
    fn state_carries_the_fingerprint() {
        let board = basic_board();
        assert_eq!(board.get_state().state_id, board.state_id());
    }
}
