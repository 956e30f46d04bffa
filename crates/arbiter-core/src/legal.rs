//! Filtering pseudo-legal moves down to legal ones.
//!
//! A move is legal when, after it is played, the mover's king is not
//! attacked. Each candidate is applied to a copy and tested.

use crate::chess_move::Move;
use crate::movegen::MoveList;
use crate::position::Position;

impl Position {
    /// Every legal move for the side to move, in generation order.
    pub fn legal_moves(&self) -> MoveList {
        let mut legal = MoveList::new();
        for &mv in &self.pseudo_legal_moves() {
            if self.keeps_king_safe(mv) {
                legal.push(mv);
            }
        }
        legal
    }

    /// Whether at least one legal move exists. Stops at the first one found.
    pub fn has_legal_moves(&self) -> bool {
        self.pseudo_legal_moves().iter().any(|&mv| self.keeps_king_safe(mv))
    }

    /// Whether `mv` is one of this position's legal moves.
    pub fn is_legal(&self, mv: Move) -> bool {
        self.pseudo_legal_moves().contains(mv) && self.keeps_king_safe(mv)
    }

    fn keeps_king_safe(&self, mv: Move) -> bool {
        !self.make_move(mv).in_check(self.side_to_move())
    }
}
