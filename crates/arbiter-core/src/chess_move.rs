//! Moves packed into 16 bits: origin, destination and a 4-bit flag nibble.

use std::fmt;

use crate::piece_kind::PieceKind;
use crate::square::Square;

const FROM_MASK: u16 = 0x003F;
const TO_SHIFT: u32 = 6;
const TO_MASK: u16 = 0x0FC0;
const FLAG_SHIFT: u32 = 12;

// Flag nibble: bit 3 = promotion, bit 2 = capture, bits 0-1 = special.
const QUIET: u16 = 0b0000;
const DOUBLE_PAWN_PUSH: u16 = 0b0001;
const KING_CASTLE: u16 = 0b0010;
const QUEEN_CASTLE: u16 = 0b0011;
const CAPTURE: u16 = 0b0100;
const EN_PASSANT: u16 = 0b0101;
const PROMOTION: u16 = 0b1000;

/// What a move does besides relocating a piece.
///
/// Promotions report [`MoveKind::Quiet`] or [`MoveKind::Capture`]; the
/// promoted piece is read with [`Move::promotion_piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    Quiet,
    DoublePawnPush,
    KingCastle,
    QueenCastle,
    Capture,
    EnPassant,
}

/// A move from one square to another.
///
/// ```text
/// bits  0-5:  origin square
/// bits  6-11: destination square
/// bits 12-15: flags
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move(u16);

impl Move {
    /// Filler for unused move-list slots; never generated.
    pub(crate) const NULL: Move = Move(0);

    const fn pack(from: Square, to: Square, flags: u16) -> Move {
        Move(from.index() as u16 | (to.index() as u16) << TO_SHIFT | flags << FLAG_SHIFT)
    }

    /// A non-capturing move.
    pub const fn quiet(from: Square, to: Square) -> Move {
        Move::pack(from, to, QUIET)
    }

    /// A capture of the piece standing on `to`.
    pub const fn capture(from: Square, to: Square) -> Move {
        Move::pack(from, to, CAPTURE)
    }

    /// A pawn advancing two squares from its home rank.
    pub const fn double_pawn_push(from: Square, to: Square) -> Move {
        Move::pack(from, to, DOUBLE_PAWN_PUSH)
    }

    /// A pawn capturing onto the en passant target.
    pub const fn en_passant(from: Square, to: Square) -> Move {
        Move::pack(from, to, EN_PASSANT)
    }

    /// Castling, given as the king's own move.
    pub const fn castle(from: Square, to: Square, king_side: bool) -> Move {
        Move::pack(from, to, if king_side { KING_CASTLE } else { QUEEN_CASTLE })
    }

    /// A pawn reaching the last rank and becoming `piece`.
    pub const fn promotion(from: Square, to: Square, piece: PieceKind, is_capture: bool) -> Move {
        let piece_bits = match piece {
            PieceKind::Knight => 0,
            PieceKind::Bishop => 1,
            PieceKind::Rook => 2,
            _ => 3,
        };
        let capture_bit = if is_capture { CAPTURE } else { 0 };
        Move::pack(from, to, PROMOTION | capture_bit | piece_bits)
    }

    #[inline]
    const fn flags(self) -> u16 {
        self.0 >> FLAG_SHIFT
    }

    #[inline]
    pub const fn from(self) -> Square {
        Square::from_index_unchecked((self.0 & FROM_MASK) as u8)
    }

    #[inline]
    pub const fn to(self) -> Square {
        Square::from_index_unchecked(((self.0 & TO_MASK) >> TO_SHIFT) as u8)
    }

    pub const fn kind(self) -> MoveKind {
        match self.flags() {
            DOUBLE_PAWN_PUSH => MoveKind::DoublePawnPush,
            KING_CASTLE => MoveKind::KingCastle,
            QUEEN_CASTLE => MoveKind::QueenCastle,
            EN_PASSANT => MoveKind::EnPassant,
            f if f & CAPTURE != 0 => MoveKind::Capture,
            _ => MoveKind::Quiet,
        }
    }

    /// The piece a pawn becomes, if this is a promotion.
    pub const fn promotion_piece(self) -> Option<PieceKind> {
        let flags = self.flags();
        if flags & PROMOTION == 0 {
            return None;
        }
        Some(match flags & 0b11 {
            0 => PieceKind::Knight,
            1 => PieceKind::Bishop,
            2 => PieceKind::Rook,
            _ => PieceKind::Queen,
        })
    }

    /// Captures a piece, en passant included.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.flags() & CAPTURE != 0
    }

    #[inline]
    pub const fn is_castle(self) -> bool {
        matches!(self.flags(), KING_CASTLE | QUEEN_CASTLE)
    }

    #[inline]
    pub const fn is_en_passant(self) -> bool {
        self.flags() == EN_PASSANT
    }

    #[inline]
    pub const fn is_double_pawn_push(self) -> bool {
        self.flags() == DOUBLE_PAWN_PUSH
    }

    #[inline]
    pub const fn is_promotion(self) -> bool {
        self.flags() & PROMOTION != 0
    }

    /// Long algebraic form: `e2e4`, `e7e8q`, `e1g1`.
    pub fn to_uci(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(piece) = self.promotion_piece() {
            write!(f, "{}", piece.fen_char())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({self} {:?})", self.kind())
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind};
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn size_of_move() {
        assert_eq!(std::mem::size_of::<Move>(), 2);
    }

    #[test]
    fn squares_survive_packing() {
        let mv = Move::quiet(Square::H1, Square::A8);
        assert_eq!(mv.from(), Square::H1);
        assert_eq!(mv.to(), Square::A8);
        assert_eq!(mv.kind(), MoveKind::Quiet);
        assert_eq!(mv.promotion_piece(), None);
    }

    #[test]
    fn kinds_and_predicates() {
        let push = Move::double_pawn_push(Square::E2, Square::E4);
        assert_eq!(push.kind(), MoveKind::DoublePawnPush);
        assert!(push.is_double_pawn_push() && !push.is_capture());

        let ep = Move::en_passant(Square::E5, Square::D6);
        assert_eq!(ep.kind(), MoveKind::EnPassant);
        assert!(ep.is_en_passant() && ep.is_capture());

        let short = Move::castle(Square::E1, Square::G1, true);
        let long = Move::castle(Square::E8, Square::C8, false);
        assert_eq!(short.kind(), MoveKind::KingCastle);
        assert_eq!(long.kind(), MoveKind::QueenCastle);
        assert!(short.is_castle() && long.is_castle() && !long.is_capture());

        let take = Move::capture(Square::D1, Square::D8);
        assert_eq!(take.kind(), MoveKind::Capture);
        assert!(!take.is_castle());
    }

    #[test]
    fn promotions_keep_piece_and_capture_bit() {
        for piece in PieceKind::PROMOTIONS {
            let quiet = Move::promotion(Square::B7, Square::B8, piece, false);
            assert_eq!(quiet.promotion_piece(), Some(piece));
            assert_eq!(quiet.kind(), MoveKind::Quiet);

            let take = Move::promotion(Square::B7, Square::A8, piece, true);
            assert_eq!(take.promotion_piece(), Some(piece));
            assert_eq!(take.kind(), MoveKind::Capture);
            assert!(take.is_promotion() && take.is_capture());
        }
    }

    #[test]
    fn long_algebraic_text() {
        assert_eq!(Move::quiet(Square::G1, Square::F3).to_uci(), "g1f3");
        let promo = Move::promotion(Square::E7, Square::E8, PieceKind::Knight, false);
        assert_eq!(promo.to_string(), "e7e8n");
        assert_eq!(format!("{:?}", Move::capture(Square::E4, Square::D5)), "Move(e4d5 Capture)");
    }
}
