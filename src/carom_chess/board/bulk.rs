use std::sync::Arc;

use super::Board;

impl Board {
    /// Shifts every cell toroidally: (x, y) moves to
    /// ((x + add_x) mod w, (y + add_y) mod h). Squares and pieces travel
    /// together; negative offsets scroll the other way.
    pub fn scroll(&mut self, add_x: i32, add_y: i32) {
        if self.size() == 0 {
            return;
        }
        let (w, h) = (self.w as i32, self.h as i32);
        let mut squares = vec![None; self.size()];
        let mut pieces = vec![None; self.size()];
        for y in 0..h {
            for x in 0..w {
                let from = (y * w + x) as usize;
                let to_x = (x + add_x).rem_euclid(w);
                let to_y = (y + add_y).rem_euclid(h);
                let to = (to_y * w + to_x) as usize;
                squares[to] = self.squares[from];
                pieces[to] = self.pieces[from];
            }
        }
        self.squares = Arc::new(squares);
        self.pieces = pieces;
    }

    /// Grows or shrinks the board to (w + add_w, h + add_h). Cells in
    /// the overlapping region keep their content; added rows and columns
    /// are holes; shrinking drops cells. The new dimensions must not be
    /// negative.
    pub fn resize(&mut self, add_w: i32, add_h: i32) {
        let new_w = self.w as i32 + add_w;
        let new_h = self.h as i32 + add_h;
        assert!(
            new_w >= 0 && new_h >= 0,
            "resize to {new_w}x{new_h} would make the board negative"
        );
        let (new_w, new_h) = (new_w as usize, new_h as usize);
        let mut squares = vec![None; new_w * new_h];
        let mut pieces = vec![None; new_w * new_h];
        for y in 0..new_h.min(self.h) {
            for x in 0..new_w.min(self.w) {
                let from = y * self.w + x;
                let to = y * new_w + x;
                squares[to] = self.squares[from];
                pieces[to] = self.pieces[from];
            }
        }
        self.w = new_w;
        self.h = new_h;
        self.squares = Arc::new(squares);
        self.pieces = pieces;
    }
}
