use super::error::GameError;

/// The eight ray directions, numbered clockwise from North.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveDir {
    N = 0,
    NE = 1,
    E = 2,
    SE = 3,
    S = 4,
    SW = 5,
    W = 6,
    NW = 7,
}

/// Unit steps per direction, indexed by `MoveDir as usize`.
pub static MOVE_DIRS_TO_COORDS: [(i32, i32); 8] = [
    (0, -1),  // N
    (1, -1),  // NE
    (1, 0),   // E
    (1, 1),   // SE
    (0, 1),   // S
    (-1, 1),  // SW
    (-1, 0),  // W
    (-1, -1), // NW
];

impl MoveDir {
    /// All directions, clockwise from North.
    pub fn all() -> [MoveDir; 8] {
        use MoveDir::*;
        [N, NE, E, SE, S, SW, W, NW]
    }

    /// The four cardinal directions.
    pub fn cardinals() -> [MoveDir; 4] {
        use MoveDir::*;
        [N, E, S, W]
    }

    /// The four diagonal directions.
    pub fn diagonals() -> [MoveDir; 4] {
        use MoveDir::*;
        [NE, SE, SW, NW]
    }

    /// Checked conversion from a raw direction index.
    pub fn from_index(index: u8) -> Result<MoveDir, GameError> {
        use MoveDir::*;
        Ok(match index {
            0 => N,
            1 => NE,
            2 => E,
            3 => SE,
            4 => S,
            5 => SW,
            6 => W,
            7 => NW,
            _ => return Err(GameError::InvalidDirection(index)),
        })
    }

    /// The unit step (dx, dy) for this direction.
    pub fn step(self) -> (i32, i32) {
        MOVE_DIRS_TO_COORDS[self as usize]
    }

    /// Rotates clockwise by `eighths` turns of 45 degrees; negative
    /// values rotate counterclockwise.
    pub fn rotated(self, eighths: i8) -> MoveDir {
        MoveDir::from((self as i8 + eighths).rem_euclid(8) as u8)
    }

    /// The opposite direction.
    pub fn opposite(self) -> MoveDir {
        self.rotated(4)
    }

    /// Whether this direction is one of the four cardinals.
    pub fn is_cardinal(self) -> bool {
        self as u8 % 2 == 0
    }
}

impl From<u8> for MoveDir {
    fn from(value: u8) -> Self {
        match MoveDir::from_index(value) {
            Ok(dir) => dir,
            Err(_) => panic!("expected direction index of 0-7, received {value}"),
        }
    }
}

/// A destination cell together with the direction a piece was travelling
/// when it arrived there. Two moves to the same cell from different
/// directions are distinct; bouncers make both reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    pub x: i32,
    pub y: i32,
    pub dir: MoveDir,
}

impl Move {
    pub fn new(x: i32, y: i32, dir: MoveDir) -> Move {
        Move { x, y, dir }
    }
}
