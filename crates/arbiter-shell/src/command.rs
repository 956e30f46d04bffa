//! Shell command parsing.

use arbiter_core::{Color, Position};

use crate::error::ShellError;

/// Deepest `perft`/`divide` the shell will run.
pub const MAX_PERFT_DEPTH: usize = 7;

/// A parsed shell command.
#[derive(Debug)]
pub enum Command {
    /// `position` -- replace the current position, with optional moves applied.
    Position(Position),
    /// `fen` -- print the current FEN.
    Fen,
    /// `side` -- print the side to move.
    Side,
    /// `check [white|black]` -- is that side's king attacked? Defaults to the side to move.
    Check(Option<Color>),
    /// `checkmate` -- is the side to move checkmated?
    Checkmate,
    /// `stalemate` -- is the side to move stalemated?
    Stalemate,
    /// `status` -- ongoing, checkmate or stalemate.
    Status,
    /// `moves` -- list the legal moves.
    Moves,
    /// `play` -- apply long algebraic moves to the current position, all or nothing.
    Play(Vec<String>),
    /// `san` -- apply PGN movetext (`1. e4 e5 2. Nf3`) to the current position, all or nothing.
    San(String),
    /// `perft` -- count leaf nodes to a depth.
    Perft(usize),
    /// `divide` -- per-move perft breakdown.
    Divide(usize),
    /// `display` -- print the board.
    Display,
    /// `quit` -- end the session.
    Quit,
}

/// Parse a single line of input. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, ShellError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match name {
        "position" => parse_position(args)?,
        "fen" => Command::Fen,
        "side" => Command::Side,
        "check" => Command::Check(args.first().map(|value| parse_color(value)).transpose()?),
        "checkmate" => Command::Checkmate,
        "stalemate" => Command::Stalemate,
        "status" => Command::Status,
        "moves" => Command::Moves,
        "play" => {
            if args.is_empty() {
                return Err(ShellError::MissingArgument { command: "play" });
            }
            Command::Play(args.iter().map(|mv| mv.to_string()).collect())
        }
        "san" => {
            if args.is_empty() {
                return Err(ShellError::MissingArgument { command: "san" });
            }
            Command::San(args.join(" "))
        }
        "perft" => Command::Perft(parse_depth(args.first(), "perft")?),
        "divide" => Command::Divide(parse_depth(args.first(), "divide")?),
        "display" | "d" => Command::Display,
        "quit" | "exit" => Command::Quit,
        other => {
            return Err(ShellError::UnknownCommand {
                name: other.to_string(),
            });
        }
    };
    Ok(Some(command))
}

/// Parse the `position` command arguments.
///
/// Supports:
/// - `position startpos [moves e2e4 d7d5 ...]`
/// - `position fen <fen-string> [moves e2e4 d7d5 ...]`
/// - either form with `san 1. e4 d5 ...` in place of `moves`
fn parse_position(tokens: &[&str]) -> Result<Command, ShellError> {
    let (position, rest) = match tokens.split_first() {
        Some((&"startpos", rest)) => (Position::starting_position(), rest),
        Some((&"fen", rest)) => {
            // FEN is 6 space-separated fields
            let split = rest.len().min(6);
            let fen = rest[..split].join(" ");
            let position = fen
                .parse::<Position>()
                .map_err(|source| ShellError::InvalidFen { fen, source })?;
            (position, &rest[split..])
        }
        _ => return Err(ShellError::MalformedPosition),
    };

    match rest.split_first() {
        None => Ok(Command::Position(position)),
        Some((&"moves", moves)) => {
            let position = moves
                .iter()
                .try_fold(position, |position, text| position.play_uci(text))?;
            Ok(Command::Position(position))
        }
        Some((&"san", movetext)) => Ok(Command::Position(position.play_movetext(&movetext.join(" "))?)),
        Some(_) => Err(ShellError::MalformedPosition),
    }
}

fn parse_color(value: &str) -> Result<Color, ShellError> {
    match value {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => Err(ShellError::InvalidColor {
            value: value.to_string(),
        }),
    }
}

fn parse_depth(token: Option<&&str>, command: &'static str) -> Result<usize, ShellError> {
    let value = token.ok_or(ShellError::MissingArgument { command })?;
    value
        .parse::<usize>()
        .ok()
        .filter(|depth| *depth <= MAX_PERFT_DEPTH)
        .ok_or_else(|| ShellError::InvalidDepth {
            value: value.to_string(),
            max: MAX_PERFT_DEPTH,
        })
}

#[cfg(test)]
mod tests {
    use arbiter_core::{Color, MoveError};

    use super::*;

    #[test]
    fn parse_blank_line() {
        assert!(parse_command("").unwrap().is_none());
        assert!(parse_command("   \t").unwrap().is_none());
    }

    #[test]
    fn parse_simple_commands() {
        assert!(matches!(parse_command("fen").unwrap(), Some(Command::Fen)));
        assert!(matches!(parse_command("side").unwrap(), Some(Command::Side)));
        assert!(matches!(parse_command("status").unwrap(), Some(Command::Status)));
        assert!(matches!(parse_command("moves").unwrap(), Some(Command::Moves)));
        assert!(matches!(parse_command("  quit ").unwrap(), Some(Command::Quit)));
    }

    #[test]
    fn parse_check_with_and_without_color() {
        assert!(matches!(parse_command("check").unwrap(), Some(Command::Check(None))));
        assert!(matches!(
            parse_command("check black").unwrap(),
            Some(Command::Check(Some(Color::Black)))
        ));
        assert!(matches!(
            parse_command("check purple"),
            Err(ShellError::InvalidColor { .. })
        ));
    }

    #[test]
    fn parse_position_startpos_with_moves() {
        match parse_command("position startpos moves e2e4 e7e5").unwrap() {
            Some(Command::Position(position)) => assert_eq!(
                position.to_fen(),
                "rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq e6 0 2"
            ),
            other => panic!("expected Position, got {other:?}"),
        }
    }

    #[test]
    fn parse_position_fen() {
        let cmd = parse_command("position fen 8/8/7k/4K3/8/8/8/8 w - - 0 1").unwrap();
        assert!(matches!(cmd, Some(Command::Position(_))));
    }

    #[test]
    fn parse_position_errors() {
        assert!(matches!(parse_command("position"), Err(ShellError::MalformedPosition)));
        assert!(matches!(parse_command("position fen invalid"), Err(ShellError::InvalidFen { .. })));
        assert!(matches!(
            parse_command("position startpos e2e4"),
            Err(ShellError::MalformedPosition)
        ));
        assert!(matches!(
            parse_command("position startpos moves e2e5"),
            Err(ShellError::Move(MoveError::Illegal { .. }))
        ));
    }

    #[test]
    fn parse_play() {
        match parse_command("play e2e4 e7e5").unwrap() {
            Some(Command::Play(moves)) => assert_eq!(moves, vec!["e2e4", "e7e5"]),
            other => panic!("expected Play, got {other:?}"),
        }
        assert!(matches!(parse_command("play"), Err(ShellError::MissingArgument { .. })));
    }

    #[test]
    fn parse_position_with_san() {
        match parse_command("position startpos san 1. e4 c5 2. Nf3 *").unwrap() {
            Some(Command::Position(position)) => assert_eq!(
                position.to_fen(),
                "rnbqkbnr/pp1ppppp/8/2p5/4P3/5N2/PPPP1PPP/RNBQKB1R b KQkq - 1 2"
            ),
            other => panic!("expected Position, got {other:?}"),
        }
        assert!(matches!(
            parse_command("position startpos san 1. e4 e5 2. Nc6"),
            Err(ShellError::Move(MoveError::Illegal { .. }))
        ));
    }

    #[test]
    fn parse_san_movetext() {
        match parse_command("san 1. e4   e5 2. Nf3").unwrap() {
            Some(Command::San(movetext)) => assert_eq!(movetext, "1. e4 e5 2. Nf3"),
            other => panic!("expected San, got {other:?}"),
        }
        assert!(matches!(parse_command("san"), Err(ShellError::MissingArgument { command: "san" })));
    }

    #[test]
    fn parse_depths() {
        assert!(matches!(parse_command("perft 3").unwrap(), Some(Command::Perft(3))));
        assert!(matches!(parse_command("divide 1").unwrap(), Some(Command::Divide(1))));
        assert!(matches!(parse_command("perft"), Err(ShellError::MissingArgument { .. })));
        assert!(matches!(parse_command("perft x"), Err(ShellError::InvalidDepth { .. })));
        assert!(matches!(parse_command("perft 99"), Err(ShellError::InvalidDepth { .. })));
    }

    #[test]
    fn parse_unknown_command() {
        assert!(matches!(
            parse_command("foobar"),
            Err(ShellError::UnknownCommand { name }) if name == "foobar"
        ));
    }
}
