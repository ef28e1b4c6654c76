use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::board::Board;
use super::consts::{NUM_TEAMS, Team};
use super::error::GameError;
use super::pieces::Piece;
use super::squares::Square;
use crate::utils::prelude::*;

/// The on-disk board document. Squares are one-element sequences of
/// the square's defining character; pieces are (glyph, team) pairs;
/// holes and empty cells are nulls. Both arrays are row-major and
/// exactly w*h long.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardDoc {
    pub w: usize,
    pub h: usize,
    pub squares: Vec<Option<(char,)>>,
    pub pieces: Vec<Option<(char, Team)>>,
}

impl Board {
    /// Encodes the board as a document. `load` inverts this exactly.
    pub fn dump(&self) -> BoardDoc {
        let mut squares = Vec::with_capacity(self.size());
        let mut pieces = Vec::with_capacity(self.size());
        for y in 0..self.h() as i32 {
            for x in 0..self.w() as i32 {
                squares.push(self.get_square(x, y).map(|s| (s.glyph(),)));
                pieces.push(self.get_piece(x, y).map(|p| (p.glyph(), p.team)));
            }
        }
        BoardDoc {
            w: self.w(),
            h: self.h(),
            squares,
            pieces,
        }
    }

    /// Decodes a document, validating the schema: sequence lengths,
    /// square characters, piece glyphs and team range.
    pub fn load(doc: &BoardDoc) -> std::result::Result<Board, GameError> {
        let size = doc.w * doc.h;
        if doc.squares.len() != size {
            return Err(GameError::InvalidDocument(format!(
                "expected {size} squares, found {}",
                doc.squares.len()
            )));
        }
        if doc.pieces.len() != size {
            return Err(GameError::InvalidDocument(format!(
                "expected {size} pieces, found {}",
                doc.pieces.len()
            )));
        }
        let squares = doc
            .squares
            .iter()
            .copied()
            .map(|entry| entry.map(|(glyph,)| Square::from_glyph(glyph)).transpose())
            .collect::<std::result::Result<Vec<Option<Square>>, GameError>>()?;
        let pieces = doc
            .pieces
            .iter()
            .copied()
            .map(|entry| {
                entry
                    .map(|(glyph, team)| {
                        if team >= NUM_TEAMS {
                            return Err(GameError::InvalidDocument(format!(
                                "team {team} is out of range 0..{NUM_TEAMS}"
                            )));
                        }
                        Piece::from_glyph(glyph, team)
                    })
                    .transpose()
            })
            .collect::<std::result::Result<Vec<Option<Piece>>, GameError>>()?;
        Ok(Board::with_parts(doc.w, doc.h, squares, pieces))
    }

    /// Reads a board from a JSON document file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Board> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading board file {}", path.display()))?;
        let doc: BoardDoc = serde_json::from_str(&text)
            .with_context(|| format!("parsing board file {}", path.display()))?;
        Ok(Board::load(&doc)?)
    }

    /// Writes the board to a JSON document file.
    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let text = serde_json::to_string_pretty(&self.dump())?;
        fs::write(path, text).with_context(|| format!("writing board file {}", path.display()))?;
        Ok(())
    }
}
