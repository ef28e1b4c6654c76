mod evaluator;
mod seeker;

pub use evaluator::{Evaluator, MOVE_WEIGHT, STUCK_PIECE_WEIGHT, Score};
pub use seeker::FutureSeeker;
