//! Errors raised while reading positions and applying moves.

use crate::chess_move::Move;
use crate::color::Color;
use crate::square::Square;

/// Malformed FEN text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The text does not split into exactly six fields.
    #[error("expected 6 FEN fields, found {found}")]
    WrongFieldCount { found: usize },

    /// The placement field does not have eight `/`-separated ranks.
    #[error("expected 8 ranks in piece placement, found {found}")]
    WrongRankCount { found: usize },

    /// A rank describes more or fewer than eight squares.
    #[error("rank {rank} describes {length} squares, expected 8")]
    BadRankLength {
        /// Rank number as printed on the board (8 for the first FEN rank).
        rank: usize,
        length: usize,
    },

    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar { character: char },

    #[error("invalid side to move: \"{found}\"")]
    InvalidSideToMove { found: String },

    #[error("invalid castling character: '{character}'")]
    InvalidCastlingChar { character: char },

    #[error("invalid en passant square: \"{found}\"")]
    InvalidEnPassant { found: String },

    /// A counter is not a non-negative integer.
    #[error("invalid {field}: \"{found}\"")]
    InvalidMoveCounter { field: &'static str, found: String },

    /// A counter is a non-negative integer too large to store.
    #[error("{field} out of range: {found} exceeds {}", u32::MAX)]
    MoveCounterOutOfRange { field: &'static str, found: String },
}

/// Well-formed FEN describing a position that cannot occur.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// A side has no king, or more than one.
    #[error("expected 1 {} king, found {count}", .color.name())]
    InvalidKingCount { color: Color, count: u32 },

    /// A pawn stands on rank 1 or rank 8.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,

    /// The en passant target is on the wrong rank or is occupied.
    #[error("en passant target {square} is not on the capturing side's sixth rank or is occupied")]
    EnPassantMisplaced { square: Square },

    /// No enemy pawn stands behind the en passant target.
    #[error("en passant target {square} has no pushed pawn behind it")]
    EnPassantWithoutPawn { square: Square },
}

/// Either failure mode of reading a FEN string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    #[error("malformed FEN: {0}")]
    Parse(#[from] ParseError),

    #[error("invalid position: {0}")]
    InvalidPosition(#[from] PositionError),
}

/// A move the caller asked for that cannot be played.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// The text is neither long algebraic nor standard algebraic notation.
    #[error("malformed move: \"{text}\"")]
    Malformed { text: String },

    /// The move is not among the legal moves of the position.
    #[error("illegal move: {text}")]
    Illegal { text: String },

    /// Standard algebraic text that fits more than one legal move.
    #[error("ambiguous move {text}: matches both {first} and {second}")]
    Ambiguous { text: String, first: Move, second: Move },
}

#[cfg(test)]
mod tests {
    use super::{FenError, MoveError, ParseError, PositionError};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn parse_error_display() {
        let err = ParseError::WrongFieldCount { found: 4 };
        assert_eq!(err.to_string(), "expected 6 FEN fields, found 4");
    }

    #[test]
    fn position_error_display() {
        let err = PositionError::InvalidKingCount { color: Color::Black, count: 0 };
        assert_eq!(err.to_string(), "expected 1 black king, found 0");
        let err = PositionError::EnPassantWithoutPawn { square: Square::D6 };
        assert_eq!(err.to_string(), "en passant target d6 has no pushed pawn behind it");
    }

    #[test]
    fn fen_error_wraps_both_kinds() {
        let err: FenError = ParseError::InvalidPieceChar { character: 'x' }.into();
        assert!(matches!(err, FenError::Parse(_)));
        let err: FenError = PositionError::PawnsOnBackRank.into();
        assert!(matches!(err, FenError::InvalidPosition(_)));
        assert_eq!(err.to_string(), "invalid position: pawns found on back rank");
    }

    #[test]
    fn move_error_display() {
        let err = MoveError::Illegal { text: "e1e3".to_string() };
        assert_eq!(err.to_string(), "illegal move: e1e3");
        let err = MoveError::Ambiguous {
            text: "Nd2".to_string(),
            first: Move::quiet(Square::B1, Square::D2),
            second: Move::quiet(Square::F3, Square::D2),
        };
        assert_eq!(err.to_string(), "ambiguous move Nd2: matches both b1d2 and f3d2");
    }

    #[test]
    fn counter_overflow_names_the_limit() {
        let err = ParseError::MoveCounterOutOfRange {
            field: "fullmove number",
            found: "4294967296".to_string(),
        };
        assert_eq!(err.to_string(), "fullmove number out of range: 4294967296 exceeds 4294967295");
    }
}
