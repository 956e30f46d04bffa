//! Sets of squares packed into a `u64`, one bit per square.

use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Not};

use crate::square::Square;

/// A set of squares. Bit `n` is set when [`Square`] index `n` is a member.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(u64);

impl Bitboard {
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Ranks 1 and 8.
    pub const RANK_1: Bitboard = Bitboard(0xFF);
    pub const RANK_8: Bitboard = Bitboard(0xFF << 56);

    #[inline]
    pub const fn new(bits: u64) -> Bitboard {
        Bitboard(bits)
    }

    #[inline]
    const fn bit(sq: Square) -> u64 {
        1 << sq.index()
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_nonempty(self) -> bool {
        !self.is_empty()
    }

    /// Number of members.
    #[inline]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & Self::bit(sq) != 0
    }

    #[inline]
    pub const fn with(self, sq: Square) -> Bitboard {
        Bitboard(self.0 | Self::bit(sq))
    }

    #[inline]
    pub const fn without(self, sq: Square) -> Bitboard {
        Bitboard(self.0 & !Self::bit(sq))
    }

    /// Member with the smallest index, if any.
    #[inline]
    pub const fn lsb(self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => Some(Square::from_index_unchecked(bits.trailing_zeros() as u8)),
        }
    }

    /// Member with the largest index, if any.
    #[inline]
    pub const fn msb(self) -> Option<Square> {
        match self.0 {
            0 => None,
            bits => Some(Square::from_index_unchecked(63 - bits.leading_zeros() as u8)),
        }
    }
}

macro_rules! set_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait for Bitboard {
            type Output = Bitboard;

            #[inline]
            fn $method(self, rhs: Bitboard) -> Bitboard {
                Bitboard(self.0 $op rhs.0)
            }
        }
    };
}

set_op!(BitAnd, bitand, &);
set_op!(BitOr, bitor, |);
set_op!(BitXor, bitxor, ^);

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Bitboard {
        Bitboard(!self.0)
    }
}

impl FromIterator<Square> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Bitboard {
        iter.into_iter().fold(Bitboard::EMPTY, Bitboard::with)
    }
}

/// Drains the set from a1 towards h8.
impl Iterator for Bitboard {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        let sq = self.lsb()?;
        self.0 &= self.0 - 1;
        Some(sq)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bitboard {}

/// Eight rows, rank 8 on top, `x` for members.
impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.0.to_be_bytes() {
            writeln!(f)?;
            for file in 0..8 {
                f.write_str(if row >> file & 1 == 1 { " x" } else { " ." })?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Bitboard;
    use crate::square::Square;

    #[test]
    fn membership() {
        let set = Bitboard::EMPTY.with(Square::E4).with(Square::A8);
        assert!(set.contains(Square::E4) && set.contains(Square::A8));
        assert!(!set.contains(Square::E5));
        assert_eq!(set.count(), 2);
        assert!(set.without(Square::A8).without(Square::E4).is_empty());
        assert_eq!(set.with(Square::E4), set);
    }

    #[test]
    fn extreme_members() {
        assert_eq!(Bitboard::EMPTY.msb(), None);
        let set: Bitboard = [Square::F6, Square::C3, Square::D5].into_iter().collect();
        assert_eq!(set.lsb(), Some(Square::C3));
        assert_eq!(set.msb(), Some(Square::F6));
        assert_eq!(Bitboard::RANK_8.lsb(), Some(Square::A8));
        assert_eq!(Bitboard::RANK_1.msb(), Some(Square::H1));
    }

    #[test]
    fn drains_in_index_order() {
        let set: Bitboard = [Square::H8, Square::A1, Square::E4].into_iter().collect();
        assert_eq!(set.len(), 3);
        assert_eq!(set.collect::<Vec<_>>(), vec![Square::A1, Square::E4, Square::H8]);
    }

    #[test]
    fn set_algebra() {
        let a: Bitboard = [Square::A1, Square::B2].into_iter().collect();
        let b: Bitboard = [Square::B2, Square::C3].into_iter().collect();
        assert_eq!(a & b, Bitboard::EMPTY.with(Square::B2));
        assert_eq!((a | b).count(), 3);
        assert_eq!(a ^ b, Bitboard::EMPTY.with(Square::A1).with(Square::C3));
        assert_eq!((!a).count(), 62);
    }

    #[test]
    fn debug_draws_rank_eight_first() {
        let text = format!("{:?}", Bitboard::EMPTY.with(Square::A8).with(Square::H1));
        let rows: Vec<&str> = text.lines().skip(1).collect();
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0], " x . . . . . . .");
        assert_eq!(rows[7], " . . . . . . . x");
    }
}
