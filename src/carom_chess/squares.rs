use super::coords::MoveDir;
use super::error::GameError;

/// The four bouncer shapes. Each reflects rays that strike it along a
/// physically consistent direction and terminates every other ray.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BounceKind {
    Backslash,
    Slash,
    Hyphen,
    Pipe,
}

/// A square's decoration. `Normal` is the only kind a piece may stand on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Square {
    Normal,
    Enter,
    Exit,
    Bounce(BounceKind),
}

impl Square {
    /// If solid, pieces cannot go on top of this square.
    pub fn solid(&self) -> bool {
        *self != Square::Normal
    }

    /// The reflected direction for a ray travelling along `dir` when it
    /// strikes this square, or `None` if the square does not bounce that
    /// approach (the ray terminates).
    pub fn bounce_for(&self, dir: MoveDir) -> Option<MoveDir> {
        use MoveDir::*;
        let kind = match self {
            Square::Bounce(kind) => kind,
            _ => return None,
        };
        match kind {
            BounceKind::Backslash => match dir {
                N => Some(W),
                W => Some(N),
                E => Some(S),
                S => Some(E),
                NE => Some(SW),
                SW => Some(NE),
                _ => None,
            },
            BounceKind::Slash => match dir {
                N => Some(E),
                E => Some(N),
                W => Some(S),
                S => Some(W),
                NW => Some(SE),
                SE => Some(NW),
                _ => None,
            },
            BounceKind::Hyphen => match dir {
                N => Some(S),
                S => Some(N),
                NE => Some(SE),
                SE => Some(NE),
                NW => Some(SW),
                SW => Some(NW),
                _ => None,
            },
            BounceKind::Pipe => match dir {
                E => Some(W),
                W => Some(E),
                NE => Some(NW),
                NW => Some(NE),
                SE => Some(SW),
                SW => Some(SE),
                _ => None,
            },
        }
    }

    /// The square's defining character, used in fingerprints and board
    /// documents.
    pub fn glyph(&self) -> char {
        match self {
            Square::Normal => '.',
            Square::Enter => 'E',
            Square::Exit => 'X',
            Square::Bounce(BounceKind::Backslash) => '\\',
            Square::Bounce(BounceKind::Slash) => '/',
            Square::Bounce(BounceKind::Hyphen) => '-',
            Square::Bounce(BounceKind::Pipe) => '|',
        }
    }

    /// Decodes a square from its defining character.
    pub fn from_glyph(glyph: char) -> Result<Square, GameError> {
        Ok(match glyph {
            '.' => Square::Normal,
            'E' => Square::Enter,
            'X' => Square::Exit,
            '\\' => Square::Bounce(BounceKind::Backslash),
            '/' => Square::Bounce(BounceKind::Slash),
            '-' => Square::Bounce(BounceKind::Hyphen),
            '|' => Square::Bounce(BounceKind::Pipe),
            _ => {
                return Err(GameError::InvalidDocument(format!(
                    "unknown square character {glyph:?}"
                )));
            }
        })
    }
}
