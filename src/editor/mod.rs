mod options;

use std::io::{BufRead, Write as _};
use std::process::exit;
use std::str::FromStr;

use itertools::Itertools;
pub use options::EditorOptions;

use crate::agent::{Evaluator, FutureSeeker};
use crate::carom_chess::prelude::*;

const DEFAULT_FILENAME: &str = "board.json";

/// A line-command board editor and game driver. Every structural
/// mutation snapshots the board first, so `undo`/`redo` walk cheap
/// whole-board copies; the squares arrays of those copies are shared
/// until edited.
pub struct Editor {
    board: Board,
    filename: String,
    future_sight: usize,
    undo_stack: Vec<Board>,
    redo_stack: Vec<Board>,
}

impl Editor {
    pub fn new(options: EditorOptions) -> Result<Editor> {
        let filename = options
            .filename
            .clone()
            .unwrap_or_else(|| DEFAULT_FILENAME.into());
        let board = if options.load {
            Board::from_file(&filename)?
        } else {
            Board::new(options.width, options.height)
        };
        Ok(Editor {
            board,
            filename,
            future_sight: options.future_sight,
            undo_stack: vec![],
            redo_stack: vec![],
        })
    }

    /// Runs the editor loop over stdin until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        println!("{}", self.board.render());
        let stdin = std::io::stdin();
        let mut line = String::new();
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            line.clear();
            if stdin.lock().read_line(&mut line)? == 0 {
                return Ok(());
            }

            let args: Vec<&str> = line.split_whitespace().collect();
            let cmd = *args.first().unwrap_or(&"");
            match self.apply(cmd, &args[1..]) {
                Ok(()) => {
                    log::debug!("command completed: {cmd} {}", args[1..].join(" "));
                }
                Err(err) => {
                    log::warn!("encountered recoverable error:\n{err}");
                    println!("error: {err}");
                }
            }
        }
    }

    /// Runs a single command.
    fn apply(&mut self, cmd: &str, args: &[&str]) -> Result<()> {
        match cmd {
            | "" => Ok(()),
            | "show" => self.show(),
            | "new" => self.new_board(args),
            | "square" => self.set_square(args),
            | "hole" => self.set_hole(args),
            | "piece" => self.set_piece(args),
            | "clear" => self.clear_piece(args),
            | "moves" => self.show_moves(args),
            | "move" => self.move_piece(args),
            | "scroll" => self.scroll(args),
            | "resize" => self.resize(args),
            | "state" => self.show_state(),
            | "score" => self.show_score(args),
            | "best" => self.show_best(args),
            | "ai" => self.engine_move(args),
            | "save" => self.save(args),
            | "load" => self.load(args),
            | "undo" => self.undo(),
            | "redo" => self.redo(),
            | "help" => self.help(),
            | "quit" => exit(0),
            | _ => Err(anyhow!("unrecognized command {cmd}")),
        }
    }

    fn help(&self) -> Result<()> {
        println!(
            "{}",
            [
                "show                          render the board",
                "new <w> <h>                   start a fresh board",
                "square <x> <y> <char>         set a square (. E X \\ / - |)",
                "hole <x> <y>                  remove the square entirely",
                "piece <x> <y> <glyph> <team>  place a piece",
                "clear <x> <y>                 remove a piece",
                "moves <x> <y>                 list legal moves from a cell",
                "move <x0> <y0> <x1> <y1> [dir]  play a legal move",
                "scroll <dx> <dy>              shift all cells toroidally",
                "resize <dw> <dh>              grow or shrink the board",
                "state                         print the state fingerprint",
                "score <team>                  score the position for a team",
                "best <team> [count]           show a team's best moves",
                "ai <team>                     let the engine move for a team",
                "save [file] / load [file]     board file I/O",
                "undo / redo                   walk the edit history",
                "quit",
            ]
            .join("\n")
        );
        Ok(())
    }

    fn show(&self) -> Result<()> {
        println!("{}", self.board.render());
        Ok(())
    }

    fn new_board(&mut self, args: &[&str]) -> Result<()> {
        let w = parse_arg(args, 0, "width")?;
        let h = parse_arg(args, 1, "height")?;
        self.push_board();
        self.board = Board::new(w, h);
        self.show()
    }

    /// Snapshots the board ahead of a mutation so it can be undone.
    fn push_board(&mut self) {
        if self.undo_stack.len() >= MAX_UNDO_STACK_SIZE {
            self.undo_stack.remove(0);
        }
        self.undo_stack.push(self.board.clone());
        self.redo_stack.clear();
    }

    fn undo(&mut self) -> Result<()> {
        let board = self.undo_stack.pop().ok_or(anyhow!("nothing to undo"))?;
        self.redo_stack.push(std::mem::replace(&mut self.board, board));
        self.show()
    }

    fn redo(&mut self) -> Result<()> {
        let board = self.redo_stack.pop().ok_or(anyhow!("nothing to redo"))?;
        self.undo_stack.push(std::mem::replace(&mut self.board, board));
        self.show()
    }

    fn set_square(&mut self, args: &[&str]) -> Result<()> {
        let x = parse_arg(args, 0, "x")?;
        let y = parse_arg(args, 1, "y")?;
        let glyph: char = parse_arg(args, 2, "square char")?;
        let square = Square::from_glyph(glyph)?;
        self.push_board();
        self.board.set_square(x, y, Some(square))?;
        if square.solid() {
            // Pieces cannot stand on solid squares.
            self.board.set_piece(x, y, None)?;
        }
        self.show()
    }

    fn set_hole(&mut self, args: &[&str]) -> Result<()> {
        let x = parse_arg(args, 0, "x")?;
        let y = parse_arg(args, 1, "y")?;
        self.push_board();
        self.board.set_square(x, y, None)?;
        self.board.set_piece(x, y, None)?;
        self.show()
    }

    fn set_piece(&mut self, args: &[&str]) -> Result<()> {
        let x = parse_arg(args, 0, "x")?;
        let y = parse_arg(args, 1, "y")?;
        let glyph: char = parse_arg(args, 2, "piece glyph")?;
        let team: Team = parse_arg(args, 3, "team")?;
        if team >= NUM_TEAMS {
            return Err(anyhow!("team {team} is out of range 0..{NUM_TEAMS}"));
        }
        let piece = Piece::from_glyph(glyph, team)?;
        if self.board.solid_at(x, y) {
            return Err(anyhow!("({x}, {y}) cannot hold a piece"));
        }
        self.push_board();
        self.board.set_piece(x, y, Some(piece))?;
        self.show()
    }

    fn clear_piece(&mut self, args: &[&str]) -> Result<()> {
        let x = parse_arg(args, 0, "x")?;
        let y = parse_arg(args, 1, "y")?;
        self.push_board();
        self.board.set_piece(x, y, None)?;
        self.show()
    }

    fn show_moves(&self, args: &[&str]) -> Result<()> {
        let x = parse_arg(args, 0, "x")?;
        let y = parse_arg(args, 1, "y")?;
        let moves = self.board.get_moves(x, y)?;
        if moves.is_empty() {
            println!("no moves");
        } else {
            println!(
                "{}",
                moves
                    .iter()
                    .map(|m| format!("({}, {}) dir {}", m.x, m.y, m.dir as u8))
                    .join("\n")
            );
        }
        Ok(())
    }

    fn move_piece(&mut self, args: &[&str]) -> Result<()> {
        let x0 = parse_arg(args, 0, "x0")?;
        let y0 = parse_arg(args, 1, "y0")?;
        let x1 = parse_arg(args, 2, "x1")?;
        let y1 = parse_arg(args, 3, "y1")?;
        let dir = match args.get(4) {
            Some(raw) => Some(MoveDir::from_index(raw.parse::<u8>()?)?),
            None => None,
        };

        let piece = self
            .board
            .get_piece(x0, y0)
            .ok_or(GameError::NoPieceAt { x: x0, y: y0 })?;
        let candidates: Vec<Move> = self
            .board
            .get_moves(x0, y0)?
            .into_iter()
            .filter(|m| (m.x, m.y) == (x1, y1))
            .filter(|m| dir.is_none_or(|dir| m.dir == dir))
            .collect();
        let mv = match candidates.as_slice() {
            [] => return Err(anyhow!("({x0}, {y0}) cannot move to ({x1}, {y1})")),
            [only] => *only,
            many if piece.pawn_state().is_some() => {
                // The arrival direction decides where the pawn faces next.
                let dirs = many.iter().map(|m| m.dir as u8).join(", ");
                return Err(anyhow!(
                    "ambiguous pawn move; pick an arrival direction out of: {dirs}"
                ));
            }
            many => many[0],
        };

        self.push_board();
        self.board
            .apply(&PieceMove::new(LocatedPiece::new(x0, y0, piece), mv))?;
        self.show()
    }

    fn scroll(&mut self, args: &[&str]) -> Result<()> {
        let dx = parse_arg(args, 0, "dx")?;
        let dy = parse_arg(args, 1, "dy")?;
        self.push_board();
        self.board.scroll(dx, dy);
        self.show()
    }

    fn resize(&mut self, args: &[&str]) -> Result<()> {
        let dw: i32 = parse_arg(args, 0, "dw")?;
        let dh: i32 = parse_arg(args, 1, "dh")?;
        if self.board.w() as i32 + dw < 0 || self.board.h() as i32 + dh < 0 {
            return Err(anyhow!("the board cannot shrink below 0x0"));
        }
        self.push_board();
        self.board.resize(dw, dh);
        self.show()
    }

    fn show_state(&self) -> Result<()> {
        println!("{}", self.board.state_id());
        Ok(())
    }

    fn show_score(&self, args: &[&str]) -> Result<()> {
        let team = self.parse_team(args, 0)?;
        let state = self.board.get_state();
        println!("{}", Evaluator::new(team).score(&state));
        Ok(())
    }

    fn show_best(&self, args: &[&str]) -> Result<()> {
        let team = self.parse_team(args, 0)?;
        let count: usize = match args.get(1) {
            Some(raw) => raw.parse()?,
            None => 3,
        };
        let seeker = FutureSeeker::with_future_sight(team, self.future_sight);
        let next_moves = seeker.find_next_moves(&self.board);
        if next_moves.is_empty() {
            println!("team {team} has no moves");
            return Ok(());
        }
        for (piece_move, score) in next_moves.iter().take(count) {
            println!(
                "{} ({}, {}) -> ({}, {}): {score}",
                piece_move.piece.piece.glyph(),
                piece_move.piece.x,
                piece_move.piece.y,
                piece_move.mv.x,
                piece_move.mv.y,
            );
        }
        Ok(())
    }

    fn engine_move(&mut self, args: &[&str]) -> Result<()> {
        let team = self.parse_team(args, 0)?;
        let seeker = FutureSeeker::with_future_sight(team, self.future_sight);
        let (piece_move, score) = seeker
            .find_next_move(&self.board)
            .ok_or(anyhow!("team {team} has no moves"))?;
        log::info!(
            "team {team} plays {} to ({}, {}) scoring {score}",
            piece_move.piece.piece.glyph(),
            piece_move.mv.x,
            piece_move.mv.y,
        );
        self.push_board();
        self.board.apply(&piece_move)?;
        self.show()
    }

    fn save(&mut self, args: &[&str]) -> Result<()> {
        if let Some(&filename) = args.first() {
            self.filename = filename.to_owned();
        }
        self.board.save_file(&self.filename)?;
        println!("saved to {}", self.filename);
        Ok(())
    }

    fn load(&mut self, args: &[&str]) -> Result<()> {
        if let Some(&filename) = args.first() {
            self.filename = filename.to_owned();
        }
        let board = Board::from_file(&self.filename)?;
        self.push_board();
        self.board = board;
        self.show()
    }

    fn parse_team(&self, args: &[&str], index: usize) -> Result<Team> {
        let team: Team = parse_arg(args, index, "team")?;
        if team >= NUM_TEAMS {
            return Err(anyhow!("team {team} is out of range 0..{NUM_TEAMS}"));
        }
        Ok(team)
    }
}

fn parse_arg<T>(args: &[&str], index: usize, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = args
        .get(index)
        .ok_or(anyhow!("missing argument <{what}>"))?;
    raw.parse::<T>()
        .with_context(|| format!("parsing <{what}> from {raw:?}"))
}
