//! Line-oriented text front end.
//!
//! Reads one command per line and answers on the output stream. This is the
//! thin collaborator that drives a [`GameState`]: it does selection, move
//! entry and board printing, while every rule decision stays in the engine.

use std::fmt;
use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::board::{FenError, Move, MoveError, Piece, Square, SquareError};
use crate::game::{ClickOutcome, GameState};

pub mod command;
pub mod options;

use command::{parse_command, Command};
use options::SessionOptions;

/// Error type for a command that could not be carried out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// A square argument did not parse
    InvalidSquare(SquareError),
    /// A position command carried a bad placement or side
    InvalidPosition(FenError),
    /// The position command had no placement
    MissingParts,
    /// The option name or value was not recognised
    UnknownOption,
    /// The game refused the move or selection
    Refused(MoveError),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::InvalidSquare(e) => write!(f, "{e}"),
            CommandError::InvalidPosition(e) => write!(f, "Invalid position: {e}"),
            CommandError::MissingParts => write!(f, "Missing required parts in position command"),
            CommandError::UnknownOption => write!(f, "unknown option"),
            CommandError::Refused(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<SquareError> for CommandError {
    fn from(e: SquareError) -> Self {
        CommandError::InvalidSquare(e)
    }
}

impl From<FenError> for CommandError {
    fn from(e: FenError) -> Self {
        CommandError::InvalidPosition(e)
    }
}

impl From<MoveError> for CommandError {
    fn from(e: MoveError) -> Self {
        CommandError::Refused(e)
    }
}

/// Whether the loop should keep reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One game plus its display settings.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub game: GameState,
    pub options: SessionOptions,
}

fn join_squares(squares: &[Square]) -> String {
    if squares.is_empty() {
        return "none".to_string();
    }
    squares
        .iter()
        .map(Square::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn move_report(from: Square, to: Square, captured: Option<Piece>) -> String {
    match captured {
        Some(piece) => format!("ok {from}{to} captures {piece}\n"),
        None => format!("ok {from}{to}\n"),
    }
}

impl Session {
    #[must_use]
    pub fn new(options: SessionOptions) -> Self {
        Session {
            game: GameState::new(),
            options,
        }
    }

    /// Run one command, writing its answer to `out`.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        if cmd == Command::Quit {
            return Ok(Flow::Quit);
        }
        match self.respond(cmd) {
            Ok(reply) => out.write_all(reply.as_bytes())?,
            Err(CommandError::Refused(e)) => writeln!(out, "illegal: {e}")?,
            Err(e) => writeln!(out, "error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    /// The text answer to a command other than `quit`.
    pub fn respond(&mut self, cmd: Command) -> Result<String, CommandError> {
        debug!("command: {cmd:?}");
        let reply = match cmd {
            Command::NewGame => {
                self.game = GameState::new();
                String::new()
            }
            Command::Board => self.board_text(&[]),
            Command::Turn => format!("{}\n", self.game.current_turn()),
            Command::Moves(square) => {
                let from: Square = square.parse()?;
                let destinations = self.game.board().legal_destinations(from);
                format!("moves {from}: {}\n", join_squares(&destinations))
            }
            Command::Select(square) => {
                let square: Square = square.parse()?;
                let destinations = self.game.select(square)?;
                self.selection_text(square, &destinations)
            }
            Command::Click(square) => match self.game.click(square.parse()?) {
                ClickOutcome::Selected {
                    square,
                    destinations,
                } => self.selection_text(square, &destinations),
                ClickOutcome::Moved { from, to, captured } => move_report(from, to, captured),
                ClickOutcome::Deselected => "deselected\n".to_string(),
                ClickOutcome::Ignored => "ignored\n".to_string(),
            },
            Command::Play(mv) => {
                let mv: Move = mv.parse().map_err(MoveError::from)?;
                let captured = self.game.play(mv.from, mv.to)?;
                move_report(mv.from, mv.to, captured)
            }
            Command::Position(parts) => {
                let placement = parts.get(1).ok_or(CommandError::MissingParts)?;
                let side = parts.get(2).map_or("w", String::as_str);
                self.game = GameState::from_placement(placement, side)?;
                "ok\n".to_string()
            }
            Command::SetOption(parts) => {
                if !self.options.apply_setoption_parts(&parts) {
                    return Err(CommandError::UnknownOption);
                }
                String::new()
            }
            Command::Quit => String::new(),
            Command::Unknown(line) => format!("unknown command: {line}\n"),
        };
        Ok(reply)
    }

    fn board_text(&self, marks: &[Square]) -> String {
        let board = self
            .game
            .board()
            .render_marked(self.options.render_style(), marks);
        format!("{board}{} to move\n", self.game.current_turn())
    }

    fn selection_text(&self, square: Square, destinations: &[Square]) -> String {
        let mut text = format!("selected {square}: {}\n", join_squares(destinations));
        if self.options.highlight {
            text.push_str(&self.board_text(destinations));
        }
        text
    }
}

/// Read commands from `input` until `quit` or end of input.
pub fn run<R: BufRead, W: Write>(input: R, mut output: W, options: SessionOptions) -> io::Result<()> {
    let mut session = Session::new(options);
    info!("session started, {} to move", session.game.current_turn());

    for line in input.lines() {
        let line = line?;
        let Some(cmd) = parse_command(&line) else {
            continue;
        };
        let flow = session.execute(cmd, &mut output)?;
        output.flush()?;
        if flow == Flow::Quit {
            break;
        }
    }

    info!("session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str, options: SessionOptions) -> String {
        let mut out = Vec::new();
        run(script.as_bytes(), &mut out, options).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn plain() -> SessionOptions {
        SessionOptions {
            glyphs: false,
            coordinates: true,
            highlight: false,
        }
    }

    #[test]
    fn test_play_and_turn() {
        let out = run_script("e2e4\nturn\nmove e7e5\nturn\n", plain());
        assert_eq!(out, "ok e2e4\nBlack\nok e7e5\nWhite\n");
    }

    #[test]
    fn test_refused_moves() {
        let out = run_script("e7e5\ne2e5\ne4e5\n", plain());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.starts_with("illegal: ")));
        assert!(lines[0].contains("White"));
        assert!(lines[1].contains("e2e5"));
        assert!(lines[2].contains("e4"));
    }

    #[test]
    fn test_moves_listing() {
        let out = run_script("moves g1\nmoves c1\nmoves z9\n", plain());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "moves g1: f3 h3");
        assert_eq!(lines[1], "moves c1: none");
        assert!(lines[2].starts_with("error: "));
    }

    #[test]
    fn test_click_flow() {
        let out = run_script("click g8\nclick g1\nclick f3\nclick b8\nclick b6\n", plain());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "ignored",
                "selected g1: f3 h3",
                "ok g1f3",
                "selected b8: a6 c6",
                "deselected"
            ]
        );
    }

    #[test]
    fn test_capture_report() {
        let out = run_script("position 8/8/8/3p4/4P3/8/8/8 w\ne4d5\n", plain());
        assert_eq!(out, "ok\nok e4d5 captures p\n");
    }

    #[test]
    fn test_position_errors() {
        let out = run_script("position\nposition 8/8 w\nposition 8/8/8/8/8/8/8/8 x\n", plain());
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.starts_with("error: ")));
    }

    #[test]
    fn test_board_with_highlight() {
        let mut options = plain();
        options.highlight = true;
        let out = run_script("select b1\n", options);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "selected b1: a3 c3");
        assert_eq!(lines[6], "3 * . * . . . . .");
        assert_eq!(lines[10], "White to move");
    }

    #[test]
    fn test_setoption_changes_rendering() {
        let out = run_script("setoption name Glyphs value true\nboard\n", plain());
        assert!(out.contains("♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜"));
        let out = run_script("setoption name Bogus value true\n", plain());
        assert_eq!(out, "error: unknown option\n");
    }

    #[test]
    fn test_quit_stops_reading() {
        let out = run_script("quit\ne2e4\n", plain());
        assert!(out.is_empty());
    }

    #[test]
    fn test_new_resets() {
        let out = run_script("e2e4\nnew\nturn\nfoo bar\n", plain());
        assert_eq!(out, "ok e2e4\nWhite\nunknown command: foo bar\n");
    }
}
