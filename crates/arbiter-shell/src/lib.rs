//! Text shell over the arbiter rules engine.
//!
//! One command per line in, one answer per line out. See [`Session`].

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, MAX_PERFT_DEPTH, parse_command};
pub use error::ShellError;
pub use session::Session;
