#![cfg(feature = "std")]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::string::String;

use crate::{
    common::{BoardError, ShotOutcome},
    player::Player,
    position::Position,
};

/// Why a line of input could not be read as a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Anything other than exactly two tokens.
    WrongArity,
    /// A token that is not a non-negative integer.
    NotANumber,
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::WrongArity => write!(f, "Enter two coordinates!"),
            InputError::NotANumber => write!(f, "Enter numbers!"),
        }
    }
}

impl std::error::Error for InputError {}

/// Parse "row col" with 1-based numbers into a 0-based position. Range is not
/// checked here; the board rejects targets outside the grid.
pub fn parse_target(input: &str) -> Result<Position, InputError> {
    let mut parts = input.split_whitespace();
    let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(InputError::WrongArity);
    };
    let row = parse_number(row)?;
    let col = parse_number(col)?;
    Ok(Position::new(row - 1, col - 1))
}

fn parse_number(token: &str) -> Result<i32, InputError> {
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(InputError::NotANumber);
    }
    token.parse().map_err(|_| InputError::NotANumber)
}

/// Human player reading targets from a line-based input stream.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
    buf: String,
}

impl CliPlayer<io::StdinLock<'static>, io::Stdout> {
    /// Player on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            buf: String::new(),
        }
    }

    /// Give back the output stream, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn say(&mut self, msg: impl fmt::Display) {
        // Console output failures are not worth aborting a shot over.
        let _ = writeln!(self.output, "{}", msg);
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self) -> anyhow::Result<Position> {
        loop {
            write!(self.output, "Your move: ")?;
            self.output.flush()?;
            self.buf.clear();
            if self.input.read_line(&mut self.buf)? == 0 {
                anyhow::bail!("input closed");
            }
            match parse_target(&self.buf) {
                Ok(target) => return Ok(target),
                Err(e) => self.say(format_args!(" {} ", e)),
            }
        }
    }

    fn handle_shot_error(&mut self, _target: Position, error: BoardError) {
        self.say(error);
    }

    fn handle_guess_result(&mut self, _target: Position, outcome: ShotOutcome) {
        self.say(match outcome {
            ShotOutcome::Miss => "Miss!",
            ShotOutcome::Hit => "Hit! Fire again.",
            ShotOutcome::Sunk => "Ship sunk!",
        });
    }
}
