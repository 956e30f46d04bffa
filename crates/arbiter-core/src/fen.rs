//! Reading and writing positions as FEN text.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::{FenError, ParseError};
use crate::file::File;
use crate::piece::Piece;
use crate::position::Position;
use crate::rank::Rank;
use crate::square::Square;

/// FEN of the standard initial position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse FEN text. Fields may be separated by any run of whitespace.
    pub fn from_fen(fen: &str) -> Result<Position, FenError> {
        fen.parse()
    }

    /// Canonical FEN text: single spaces, minimal digit runs, `KQkq` order.
    pub fn to_fen(&self) -> String {
        self.to_string()
    }
}

fn parse_placement(field: &str, position: &mut Position) -> Result<(), ParseError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseError::WrongRankCount { found: ranks.len() });
    }

    // FEN lists rank 8 first.
    for (rank, text) in Rank::ALL.into_iter().rev().zip(ranks) {
        let bad_length = |length: usize| ParseError::BadRankLength {
            rank: rank.index() + 1,
            length,
        };
        let mut file_index: usize = 0;
        for c in text.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(ParseError::InvalidPieceChar { character: c });
                }
                file_index += run as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(ParseError::InvalidPieceChar { character: c })?;
            if file_index >= 8 {
                return Err(bad_length(file_index + 1));
            }
            position.put_piece(Square::new(rank, File::ALL[file_index]), piece);
            file_index += 1;
        }
        if file_index != 8 {
            return Err(bad_length(file_index));
        }
    }
    Ok(())
}

fn parse_counter(field: &'static str, text: &str) -> Result<u32, ParseError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidMoveCounter {
            field,
            found: text.to_string(),
        });
    }
    // Only digits remain, so the sole failure left is overflow.
    text.parse().map_err(|_| ParseError::MoveCounterOutOfRange {
        field,
        found: text.to_string(),
    })
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        let &[placement, side, castling, en_passant, halfmove, fullmove] = fields.as_slice() else {
            return Err(ParseError::WrongFieldCount { found: fields.len() }.into());
        };

        let mut position = Position::empty();
        parse_placement(placement, &mut position)?;

        let side_to_move = match side {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(ParseError::InvalidSideToMove {
                    found: other.to_string(),
                }
                .into());
            }
        };
        position.set_side_to_move(side_to_move);
        position.set_castling(CastleRights::from_fen(castling)?);

        let en_passant = match en_passant {
            "-" => None,
            text => Some(Square::from_algebraic(text).ok_or_else(|| ParseError::InvalidEnPassant {
                found: text.to_string(),
            })?),
        };
        position.set_en_passant(en_passant);

        position.set_halfmove_clock(parse_counter("halfmove clock", halfmove)?);
        position.set_fullmove_number(parse_counter("fullmove number", fullmove)?);

        position.validate()?;
        debug!(fen = %position, "parsed position");
        Ok(position)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            let mut empty_run = 0;
            for file in File::ALL {
                match self.piece_on(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty_run > 0 {
                            write!(f, "{empty_run}")?;
                            empty_run = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                write!(f, "{empty_run}")?;
            }
            if rank != Rank::Rank1 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;
        match self.en_passant() {
            Some(sq) => write!(f, " {sq}")?,
            None => write!(f, " -")?,
        }
        write!(f, " {} {}", self.halfmove_clock(), self.fullmove_number())
    }
}
