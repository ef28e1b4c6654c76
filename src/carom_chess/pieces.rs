use super::consts::Team;
use super::coords::MoveDir;
use super::error::GameError;

/// The eight pawn glyphs: short-range then long-range, each in facing
/// order Up, Left, Down, Right. Index = long_range * 4 + facing index.
pub static PAWN_GLYPHS: [char; 8] = ['↑', '←', '↓', '→', '↟', '↞', '↡', '↠'];

/// Glyphs for the non-pawn piece kinds.
pub static PIECE_TYPE_GLYPHS: [char; 6] = ['K', 'Q', 'B', 'N', 'R', 'P'];

/// A pawn's forward direction. Unlike ordinary chess, facing belongs to
/// the piece, not to its team.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facing {
    Up = 0,
    Left = 1,
    Down = 2,
    Right = 3,
}

impl Facing {
    /// The ray direction a pawn with this facing advances along.
    pub fn move_dir(self) -> MoveDir {
        match self {
            Facing::Up => MoveDir::N,
            Facing::Left => MoveDir::W,
            Facing::Down => MoveDir::S,
            Facing::Right => MoveDir::E,
        }
    }

    /// The facing matching a cardinal ray direction, if any. Diagonal
    /// directions have no facing.
    pub fn from_move_dir(dir: MoveDir) -> Option<Facing> {
        match dir {
            MoveDir::N => Some(Facing::Up),
            MoveDir::W => Some(Facing::Left),
            MoveDir::S => Some(Facing::Down),
            MoveDir::E => Some(Facing::Right),
            _ => None,
        }
    }
}

/// Pawn-specific state: which way it advances, and whether it can still
/// take its initial double step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pawn {
    pub facing: Facing,
    pub long_range: bool,
}

/// What a piece is. Only pawns carry extra state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn(Pawn),
}

/// The flat six-way classification of pieces, used for material
/// histograms and piece values.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PieceType {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceType {
    /// All piece types, in glyph order.
    pub fn all() -> [PieceType; 6] {
        use PieceType::*;
        [King, Queen, Bishop, Knight, Rook, Pawn]
    }

    /// The relative worth of this piece type when scoring material.
    pub fn value(self) -> f64 {
        match self {
            PieceType::King => 1000.0,
            PieceType::Queen => 9.0,
            PieceType::Rook => 5.0,
            PieceType::Bishop => 3.0,
            PieceType::Knight => 3.0,
            PieceType::Pawn => 1.0,
        }
    }
}

/// A piece on the board: a team plus a kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub team: Team,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(team: Team, kind: PieceKind) -> Piece {
        Piece { team, kind }
    }

    /// A pawn of the given team, facing and range.
    pub fn pawn(team: Team, facing: Facing, long_range: bool) -> Piece {
        Piece::new(team, PieceKind::Pawn(Pawn { facing, long_range }))
    }

    /// The flat classification of this piece.
    pub fn piece_type(&self) -> PieceType {
        match self.kind {
            PieceKind::King => PieceType::King,
            PieceKind::Queen => PieceType::Queen,
            PieceKind::Bishop => PieceType::Bishop,
            PieceKind::Knight => PieceType::Knight,
            PieceKind::Rook => PieceType::Rook,
            PieceKind::Pawn(_) => PieceType::Pawn,
        }
    }

    /// Pawn state, if this piece is a pawn.
    pub fn pawn_state(&self) -> Option<Pawn> {
        match self.kind {
            PieceKind::Pawn(pawn) => Some(pawn),
            _ => None,
        }
    }

    /// The single character identifying this piece in rendering,
    /// fingerprints and board documents. For pawns the glyph encodes
    /// both facing and range.
    pub fn glyph(&self) -> char {
        match self.kind {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Rook => 'R',
            PieceKind::Pawn(pawn) => {
                PAWN_GLYPHS[pawn.long_range as usize * 4 + pawn.facing as usize]
            }
        }
    }

    /// Decodes a piece from its glyph. The glyph is authoritative for a
    /// pawn's facing and range; nothing else is encoded.
    pub fn from_glyph(glyph: char, team: Team) -> Result<Piece, GameError> {
        let kind = match glyph {
            'K' => PieceKind::King,
            'Q' => PieceKind::Queen,
            'B' => PieceKind::Bishop,
            'N' => PieceKind::Knight,
            'R' => PieceKind::Rook,
            _ => match PAWN_GLYPHS.iter().position(|&g| g == glyph) {
                Some(index) => {
                    let facing = match index % 4 {
                        0 => Facing::Up,
                        1 => Facing::Left,
                        2 => Facing::Down,
                        _ => Facing::Right,
                    };
                    PieceKind::Pawn(Pawn {
                        facing,
                        long_range: index >= 4,
                    })
                }
                None => {
                    return Err(GameError::InvalidDocument(format!(
                        "unknown piece glyph {glyph:?}"
                    )));
                }
            },
        };
        Ok(Piece::new(team, kind))
    }
}
