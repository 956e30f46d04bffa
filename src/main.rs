use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{Level, info};

use arbiter_core::Position;
use arbiter_shell::Session;

/// Chess rules arbiter: check, checkmate and stalemate for any FEN.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Report on this position and exit instead of starting the shell.
    #[arg(long)]
    fen: Option<String>,

    /// Moves in long algebraic notation to play before reporting.
    #[arg(requires = "fen")]
    moves: Vec<String>,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn report(fen: &str, moves: &[String]) -> Result<()> {
    let mut position: Position = fen.parse().with_context(|| format!("cannot read position {fen:?}"))?;
    for text in moves {
        position = position.play_uci(text)?;
    }

    let legal: Vec<String> = position.legal_moves().iter().map(|mv| mv.to_uci()).collect();
    println!("fen:       {position}");
    println!("to move:   {}", position.side_to_move().name());
    println!("in check:  {}", position.is_check());
    println!("checkmate: {}", position.is_checkmate());
    println!("stalemate: {}", position.is_stalemate());
    println!("moves:     {}", legal.join(" "));
    Ok(())
}

fn main() -> Result<()> {
    let args = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(io::stderr)
        .init();
    info!("arbiter starting");

    match &args.fen {
        Some(fen) => report(fen, &args.moves),
        None => {
            let stdin = io::stdin();
            let mut stdout = io::stdout().lock();
            Session::new().run(stdin.lock(), &mut stdout)?;
            Ok(())
        }
    }
}
