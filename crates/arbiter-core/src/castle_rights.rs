//! Castling rights and the geometry of the four castling moves.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::error::ParseError;
use crate::square::Square;

/// Which wing to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Home square of the castling king.
    pub const fn king_from(color: Color) -> Square {
        match color {
            Color::White => Square::E1,
            Color::Black => Square::E8,
        }
    }

    /// Where the king lands.
    pub const fn king_to(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::KingSide, Color::White) => Square::G1,
            (CastleSide::QueenSide, Color::White) => Square::C1,
            (CastleSide::KingSide, Color::Black) => Square::G8,
            (CastleSide::QueenSide, Color::Black) => Square::C8,
        }
    }

    /// Corner the rook starts on.
    pub const fn rook_from(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::KingSide, Color::White) => Square::H1,
            (CastleSide::QueenSide, Color::White) => Square::A1,
            (CastleSide::KingSide, Color::Black) => Square::H8,
            (CastleSide::QueenSide, Color::Black) => Square::A8,
        }
    }

    /// Where the rook lands, the square the king passes over.
    pub const fn rook_to(self, color: Color) -> Square {
        match (self, color) {
            (CastleSide::KingSide, Color::White) => Square::F1,
            (CastleSide::QueenSide, Color::White) => Square::D1,
            (CastleSide::KingSide, Color::Black) => Square::F8,
            (CastleSide::QueenSide, Color::Black) => Square::D8,
        }
    }

    /// Squares strictly between king and rook; all must be empty.
    pub fn empty_path(self, color: Color) -> Bitboard {
        let king = CastleSide::king_from(color).index() as u8;
        let rook = self.rook_from(color).index() as u8;
        let (lo, hi) = if king < rook { (king, rook) } else { (rook, king) };
        ((lo + 1)..hi).filter_map(Square::from_index).collect()
    }

    /// Squares the king stands on, crosses, and lands on; none may be attacked.
    pub fn king_walk(self, color: Color) -> Bitboard {
        Bitboard::EMPTY
            .with(CastleSide::king_from(color))
            .with(self.rook_to(color))
            .with(self.king_to(color))
    }
}

/// The four castling flags, one bit each: WK, WQ, BK, BQ.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights(u8);

impl CastleRights {
    pub const NONE: CastleRights = CastleRights(0);
    pub const ALL: CastleRights = CastleRights(0b1111);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    pub const WHITE_BOTH: CastleRights = CastleRights(0b0011);
    pub const BLACK_BOTH: CastleRights = CastleRights(0b1100);

    /// FEN letters in canonical order, paired with their flags.
    const LETTERS: [(char, CastleRights); 4] = [
        ('K', Self::WHITE_KING),
        ('Q', Self::WHITE_QUEEN),
        ('k', Self::BLACK_KING),
        ('q', Self::BLACK_QUEEN),
    ];

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return `true` if every flag of `other` is set.
    #[inline]
    pub const fn contains(self, other: CastleRights) -> bool {
        (self.0 & other.0) == other.0
    }

    #[inline]
    pub const fn insert(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 | other.0)
    }

    #[inline]
    pub const fn remove(self, other: CastleRights) -> CastleRights {
        CastleRights(self.0 & !other.0)
    }

    /// The flag for one color castling to one side.
    pub const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        self.contains(Self::flag(color, side))
    }

    /// Parse the FEN castling field. Any mix of `KQkq-` is accepted.
    pub fn from_fen(s: &str) -> Result<CastleRights, ParseError> {
        s.chars().try_fold(CastleRights::NONE, |rights, c| {
            if c == '-' {
                return Ok(rights);
            }
            Self::LETTERS
                .iter()
                .find(|(letter, _)| *letter == c)
                .map(|&(_, flag)| rights.insert(flag))
                .ok_or(ParseError::InvalidCastlingChar { character: c })
        })
    }

    /// Canonical FEN castling field: `KQkq` order, or `-` when empty.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        Self::LETTERS
            .iter()
            .filter(|(_, flag)| self.contains(*flag))
            .map(|(letter, _)| *letter)
            .collect()
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}
