use itertools::Itertools;

use super::Board;
use crate::carom_chess::squares::{BounceKind, Square};

const BORDER: char = '%';
const HOLE: char = '╬';

impl Board {
    /// Renders the board for terminals, framed by a border. Pieces show
    /// their glyphs; holes a sentinel; normal squares a checker pattern;
    /// bouncers box-drawing glyphs matching their shape.
    pub fn render(&self) -> String {
        let frame: String = std::iter::repeat_n(BORDER, self.w() + 2).collect();
        let rows = (0..self.h() as i32).map(|y| {
            let cells: String = (0..self.w() as i32)
                .map(|x| self.render_cell(x, y))
                .collect();
            format!("{BORDER}{cells}{BORDER}")
        });
        std::iter::once(frame.clone())
            .chain(rows)
            .chain(std::iter::once(frame))
            .join("\n")
    }

    fn render_cell(&self, x: i32, y: i32) -> char {
        if let Some(piece) = self.get_piece(x, y) {
            return piece.glyph();
        }
        match self.get_square(x, y) {
            None => HOLE,
            Some(Square::Normal) => {
                if (x + y) % 2 == 1 {
                    '░'
                } else {
                    ' '
                }
            }
            Some(Square::Enter) => 'E',
            Some(Square::Exit) => 'X',
            Some(Square::Bounce(BounceKind::Backslash)) => '╲',
            Some(Square::Bounce(BounceKind::Slash)) => '╱',
            Some(Square::Bounce(BounceKind::Hyphen)) => '─',
            Some(Square::Bounce(BounceKind::Pipe)) => '│',
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::carom_chess::board::fixtures::basic_board;

    #[test]
    fn renders_the_basic_opening() {
        let expected = "\
%%%%%%%%%%%%
%╬╬╬╬╬╬╬╬╬╬%
%╬RNBKQBNR╬%
%╬↡↡↡↡↡↡↡↡╬%
%╬ ░ ░ ░ ░╬%
%╬░ ░ ░ ░ ╬%
%╬ ░ ░ ░ ░╬%
%╬░ ░ ░ ░ ╬%
%╬↟↟↟↟↟↟↟↟╬%
%╬RNBKQBNR╬%
%╬╬╬╬╬╬╬╬╬╬%
%%%%%%%%%%%%";
        assert_eq!(basic_board().render(), expected);
    }
}
