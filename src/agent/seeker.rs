use super::evaluator::{Evaluator, Score};
use crate::carom_chess::prelude::*;

/// Move selection by bounded look-ahead. The seeker enumerates its
/// team's legal moves, plays each on a trial board, and scores the
/// result; with future sight it recurses through the other teams'
/// best replies, one ply per team, before scoring.
#[derive(Clone, Debug)]
pub struct FutureSeeker {
    pub team: Team,
    /// How many plies beyond the candidate move to look ahead.
    pub future_sight: usize,
    evaluator: Evaluator,
}

impl FutureSeeker {
    pub fn new(team: Team) -> FutureSeeker {
        FutureSeeker::with_future_sight(team, 0)
    }

    pub fn with_future_sight(team: Team, future_sight: usize) -> FutureSeeker {
        FutureSeeker {
            team,
            future_sight,
            evaluator: Evaluator::new(team),
        }
    }

    /// The best move for this seeker's team, or `None` when the team
    /// cannot move.
    pub fn find_next_move(&self, board: &Board) -> Option<(PieceMove, Score)> {
        self.find_next_moves(board).into_iter().next()
    }

    /// Every legal move for this seeker's team, scored and sorted best
    /// to worst.
    pub fn find_next_moves(&self, board: &Board) -> Vec<(PieceMove, Score)> {
        self.seek(board, self.future_sight, self.team, false)
            .into_iter()
            .filter_map(|(mv, score)| mv.map(|mv| (mv, score)))
            .collect()
    }

    /// The recursive enumeration. Cycles through the teams, one ply
    /// each, so the seeker understands its opponents' best replies. A
    /// team with no moves contributes a pass (the "empty move") so the
    /// remaining plies stay aligned across teams.
    fn seek(
        &self,
        board: &Board,
        future: usize,
        team: Team,
        allow_the_empty_move: bool,
    ) -> Vec<(Option<PieceMove>, Score)> {
        let state = board.get_state();
        let entries = state.pieces_and_moves.get(&team);
        let cannot_move = entries
            .is_none_or(|entries| entries.iter().all(|(_, moves)| moves.is_empty()));
        if cannot_move {
            if allow_the_empty_move {
                let score = self.board_score(board, None, future, team);
                return vec![(None, score)];
            }
            return vec![];
        }

        let mut moves_and_scores = Vec::new();
        for (piece, moves) in &state.pieces_and_moves[&team] {
            for mv in moves {
                let piece_move = PieceMove::new(*piece, *mv);
                let score = self.board_score(board, Some(&piece_move), future, team);
                moves_and_scores.push((Some(piece_move), score));
            }
        }
        moves_and_scores.sort_by(|a, b| b.1.total_cmp(&a.1));
        moves_and_scores
    }

    /// Scores the board reached by `piece_move` (or the board itself
    /// for a pass), recursing through the next team's replies while
    /// future plies remain.
    fn board_score(
        &self,
        board: &Board,
        piece_move: Option<&PieceMove>,
        future: usize,
        team: Team,
    ) -> Score {
        let trial;
        let reached = match piece_move {
            Some(piece_move) => {
                let mut next = board.trial_copy();
                next.apply_unchecked(piece_move);
                trial = next;
                &trial
            }
            None => board,
        };
        if future > 0 {
            let replies = self.seek(reached, future - 1, (team + 1) % NUM_TEAMS, true);
            // Never empty: a moveless team passes instead.
            replies[0].1
        } else {
            self.evaluator.score(&reached.get_state())
        }
    }
}
