//! Shell protocol errors.

use arbiter_core::{FenError, MoveError};

/// Errors that can occur while handling a shell command.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// The first word of the line is not a known command.
    #[error("unknown command: {name}")]
    UnknownCommand {
        /// The unrecognised command word.
        name: String,
    },

    /// The `position` command is missing `startpos` or `fen` keyword.
    #[error("malformed position command: expected startpos or fen")]
    MalformedPosition,

    /// The FEN given to `position fen` was rejected.
    #[error("invalid FEN \"{fen}\": {source}")]
    InvalidFen {
        /// The FEN text as received.
        fen: String,
        #[source]
        source: FenError,
    },

    /// A move could not be parsed or is not legal in the current position.
    #[error(transparent)]
    Move(#[from] MoveError),

    /// A command that needs an argument did not get one.
    #[error("{command}: missing argument")]
    MissingArgument {
        /// The command that was short of arguments.
        command: &'static str,
    },

    /// The depth given to `perft` or `divide` is not a number in range.
    #[error("invalid depth: {value} (expected 0..={max})")]
    InvalidDepth {
        /// The depth text as received.
        value: String,
        /// The largest accepted depth.
        max: usize,
    },

    /// `check` was given something other than a color.
    #[error("invalid color: {value} (expected white or black)")]
    InvalidColor {
        /// The color text as received.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
