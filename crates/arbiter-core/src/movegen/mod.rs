//! Pseudo-legal move generation.
//!
//! Moves here obey each piece's geometry but may leave the mover's king
//! attacked; [`Position::legal_moves`] filters them. Castling is the one
//! exception: its attacked-square conditions are checked at generation time.

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::bitboard::Bitboard;
use crate::chess_move::Move;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knights;
use self::pawns::gen_pawns;
use self::sliders::gen_sliders;

/// No reachable position has more than 218 moves.
const CAPACITY: usize = 256;

/// Fixed-capacity list of generated moves, in generation order.
pub struct MoveList {
    moves: [Move; CAPACITY],
    len: u16,
}

impl MoveList {
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::NULL; CAPACITY],
            len: 0,
        }
    }

    #[inline]
    pub fn push(&mut self, mv: Move) {
        let slot = self.len();
        debug_assert!(slot < CAPACITY, "move list overflow");
        self.moves[slot] = mv;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        usize::from(self.len)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len()]
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }
}

impl Default for MoveList {
    fn default() -> MoveList {
        MoveList::new()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, i: usize) -> &Move {
        &self.as_slice()[i]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> std::slice::Iter<'a, Move> {
        self.iter()
    }
}

/// A quiet move or a capture, depending on what stands on `to`.
#[inline]
fn push_simple(position: &Position, from: Square, to: Square, list: &mut MoveList) {
    if position.piece_on(to).is_some() {
        list.push(Move::capture(from, to));
    } else {
        list.push(Move::quiet(from, to));
    }
}

impl Position {
    /// Every move the side to move could make ignoring king safety.
    ///
    /// Order is fixed: pawns, knights, bishops, rooks, queens, king, castles.
    /// Within a piece kind, origins ascend from a1 and so do destinations.
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut list = MoveList::new();
        let us = self.side_to_move();
        // Own pieces block; the enemy king is never a capture target.
        let targets: Bitboard = !self.side(us) & !self.pieces_of(PieceKind::King, !us);

        gen_pawns(self, targets, &mut list);
        gen_knights(self, targets, &mut list);
        gen_sliders(self, targets, &mut list);
        gen_king(self, targets, &mut list);

        list
    }
}
