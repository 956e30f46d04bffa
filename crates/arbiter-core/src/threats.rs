//! Which squares a side attacks, and whether a king stands in check.

use crate::attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, piece_attacks, rook_attacks};
use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Every square attacked by at least one of `color`'s pieces.
    ///
    /// A square counts as attacked whether it is empty or occupied by either
    /// side. Pawns contribute their diagonals only.
    pub fn attacks_from(&self, color: Color) -> Bitboard {
        let occupied = self.occupied();
        self.side(color).fold(Bitboard::EMPTY, |acc, sq| match self.piece_on(sq) {
            Some(piece) => acc | piece_attacks(piece, sq, occupied),
            None => acc,
        })
    }

    /// Is `sq` attacked by any piece of color `by`?
    ///
    /// Looks outward from `sq` with each piece's pattern and intersects with
    /// the attacker's pieces of that kind.
    pub fn is_attacked(&self, sq: Square, by: Color) -> bool {
        let them = self.side(by);
        let occupied = self.occupied();
        let queens = self.pieces(PieceKind::Queen);

        (knight_attacks(sq) & them & self.pieces(PieceKind::Knight)).is_nonempty()
            || (king_attacks(sq) & them & self.pieces(PieceKind::King)).is_nonempty()
            || (pawn_attacks(!by, sq) & them & self.pieces(PieceKind::Pawn)).is_nonempty()
            || (rook_attacks(sq, occupied) & them & (self.pieces(PieceKind::Rook) | queens)).is_nonempty()
            || (bishop_attacks(sq, occupied) & them & (self.pieces(PieceKind::Bishop) | queens)).is_nonempty()
    }

    /// Is `color`'s king attacked by the other side?
    ///
    /// Answers for either color regardless of whose turn it is.
    pub fn in_check(&self, color: Color) -> bool {
        self.is_attacked(self.king_square(color), !color)
    }

    /// Is the side to move in check?
    #[inline]
    pub fn is_check(&self) -> bool {
        self.in_check(self.side_to_move())
    }
}
