//! The two sides of a chess game.

use std::fmt;
use std::ops::Not;

use crate::rank::Rank;

/// A side: White or Black.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Total number of colors.
    pub const COUNT: usize = 2;

    /// Both colors, White first.
    pub const ALL: [Color; 2] = [Color::White, Color::Black];

    /// Return the index (0 for White, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Return the opponent.
    #[inline]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Build a color from the `is_white` flag used across the binding boundary.
    #[inline]
    pub const fn from_is_white(is_white: bool) -> Color {
        if is_white { Color::White } else { Color::Black }
    }

    /// Lowercase English name, as used in logs and the shell.
    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
        }
    }

    /// Rank the pawns of this color start on.
    #[inline]
    pub const fn pawn_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank2,
            Color::Black => Rank::Rank7,
        }
    }

    /// Rank a pawn of this color promotes on.
    #[inline]
    pub const fn promotion_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank8,
            Color::Black => Rank::Rank1,
        }
    }

    /// Rank holding the en passant target this color may capture onto.
    #[inline]
    pub const fn en_passant_rank(self) -> Rank {
        match self {
            Color::White => Rank::Rank6,
            Color::Black => Rank::Rank3,
        }
    }
}

impl Not for Color {
    type Output = Color;

    #[inline]
    fn not(self) -> Color {
        self.opponent()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Color;
    use crate::rank::Rank;

    #[test]
    fn opponent_is_an_involution() {
        for color in Color::ALL {
            assert_ne!(color.opponent(), color);
            assert_eq!(!!color, color);
        }
    }

    #[test]
    fn from_is_white() {
        assert_eq!(Color::from_is_white(true), Color::White);
        assert_eq!(Color::from_is_white(false), Color::Black);
    }

    #[test]
    fn relative_ranks() {
        assert_eq!(Color::White.pawn_rank(), Rank::Rank2);
        assert_eq!(Color::Black.pawn_rank(), Rank::Rank7);
        assert_eq!(Color::White.promotion_rank(), Rank::Rank8);
        assert_eq!(Color::Black.promotion_rank(), Rank::Rank1);
        assert_eq!(Color::White.en_passant_rank(), Rank::Rank6);
        assert_eq!(Color::Black.en_passant_rank(), Rank::Rank3);
    }

    #[test]
    fn display_and_name() {
        assert_eq!(format!("{}", Color::White), "w");
        assert_eq!(format!("{}", Color::Black), "b");
        assert_eq!(Color::Black.name(), "black");
    }
}
