use crate::carom_chess::prelude::*;

/// Worth of each available move a team has when scoring a state.
pub const MOVE_WEIGHT: f64 = 0.02;

/// Worth of each piece a team has with no available moves.
pub const STUCK_PIECE_WEIGHT: f64 = -0.1;

pub type Score = f64;

/// Scores board states from one team's point of view. Material and
/// mobility belonging to the evaluator's own team count positively;
/// every other team's count against it.
#[derive(Clone, Debug)]
pub struct Evaluator {
    pub team: Team,
    material_weight: [f64; NUM_TEAMS],
    move_weight: [f64; NUM_TEAMS],
    stuck_weight: [f64; NUM_TEAMS],
}

impl Evaluator {
    pub fn new(team: Team) -> Evaluator {
        let signs: [f64; NUM_TEAMS] =
            std::array::from_fn(|other| if other == team { 1.0 } else { -1.0 });
        Evaluator {
            team,
            material_weight: signs,
            move_weight: signs.map(|sign| MOVE_WEIGHT * sign),
            stuck_weight: signs.map(|sign| STUCK_PIECE_WEIGHT * sign),
        }
    }

    /// The score of a summarized board: a material term over the
    /// per-team histograms plus a mobility term where every available
    /// move helps its team and every stuck piece hurts it.
    pub fn score(&self, state: &BoardState) -> Score {
        let mut material_score = 0.0;
        let mut moves_score = 0.0;
        let mut stuck_pieces_score = 0.0;
        for &team in &state.teams {
            for (&piece_type, &count) in &state.material[&team] {
                material_score += piece_type.value() * count as f64 * self.material_weight[team];
            }
            for (_, moves) in &state.pieces_and_moves[&team] {
                if moves.is_empty() {
                    stuck_pieces_score += self.stuck_weight[team];
                } else {
                    moves_score += moves.len() as f64 * self.move_weight[team];
                }
            }
        }
        material_score + moves_score + stuck_pieces_score
    }
}
