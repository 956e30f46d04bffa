//! Line-oriented session: read commands, answer on the output writer.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use arbiter_core::{GameStatus, Position, divide, perft};

use crate::command::{Command, parse_command};
use crate::error::ShellError;

/// Whether the session should keep reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// A shell session holding the current position.
///
/// The position is only ever replaced, never edited: a failing command
/// leaves it exactly as it was.
pub struct Session {
    position: Position,
}

impl Session {
    /// Create a session at the starting position.
    pub fn new() -> Self {
        Self::with_position(Position::starting_position())
    }

    /// Create a session at `position`.
    pub fn with_position(position: Position) -> Self {
        Self { position }
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Read commands from `input` until `quit` or end of input.
    ///
    /// Command errors are reported on `output` as `error: <message>` and the
    /// session carries on. Only I/O failures end it early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> Result<(), ShellError> {
        info!(fen = %self.position, "session started");

        for line in input.lines() {
            let line = line?;
            debug!(cmd = %line.trim(), "received command");

            let flow = match parse_command(&line) {
                Ok(None) => continue,
                Ok(Some(command)) => self.execute(command, output),
                Err(err) => Err(err),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(ShellError::Io { source }) => return Err(source.into()),
                Err(err) => {
                    warn!(error = %err, "command failed");
                    writeln!(output, "error: {err}")?;
                }
            }
            output.flush()?;
        }

        output.flush()?;
        info!("session ended");
        Ok(())
    }

    fn execute<W: Write>(&mut self, command: Command, out: &mut W) -> Result<Flow, ShellError> {
        let position = &self.position;
        match command {
            Command::Position(next) => self.position = next,
            Command::Fen => writeln!(out, "{position}")?,
            Command::Side => writeln!(out, "{}", position.side_to_move().name())?,
            Command::Check(color) => {
                let color = color.unwrap_or(position.side_to_move());
                writeln!(out, "{}", position.in_check(color))?;
            }
            Command::Checkmate => writeln!(out, "{}", position.status() == GameStatus::Checkmate)?,
            Command::Stalemate => writeln!(out, "{}", position.status() == GameStatus::Stalemate)?,
            Command::Status => writeln!(out, "{}", position.status())?,
            Command::Moves => {
                let moves: Vec<String> = position.legal_moves().iter().map(|mv| mv.to_uci()).collect();
                writeln!(out, "{}", moves.join(" "))?;
            }
            Command::Play(moves) => {
                let next = moves
                    .iter()
                    .try_fold(*position, |position, text| position.play_uci(text))?;
                self.position = next;
            }
            Command::San(movetext) => self.position = position.play_movetext(&movetext)?,
            Command::Perft(depth) => writeln!(out, "{}", perft(position, depth))?,
            Command::Divide(depth) => {
                let split = divide(position, depth);
                for (mv, count) in &split {
                    writeln!(out, "{mv}: {count}")?;
                }
                writeln!(out, "total: {}", split.iter().map(|(_, count)| count).sum::<u64>())?;
            }
            Command::Display => writeln!(out, "{}", position.pretty())?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
