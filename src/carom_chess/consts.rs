/// A team identifier. Team 0 is conventionally the player's own team;
/// everything else is an opponent.
pub type Team = usize;

/// The fixed number of teams a board can host.
pub const NUM_TEAMS: usize = 5;

/// Cap on the editor's undo/redo snapshot stacks.
pub const MAX_UNDO_STACK_SIZE: usize = 100;
