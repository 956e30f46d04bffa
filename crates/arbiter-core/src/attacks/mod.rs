//! Per-piece attack geometry.
//!
//! Every function answers "which squares does a piece standing here
//! threaten", regardless of who occupies those squares. Sliding rays stop at
//! the first occupied square and include it.

mod tables;

use crate::bitboard::Bitboard;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::tables::{DIAGONAL, FIRST_DESCENDING, KING_ATTACKS, KNIGHT_ATTACKS, ORTHOGONAL, PAWN_ATTACKS, RAYS};

#[inline]
pub fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

/// The two diagonal squares ahead of a pawn of `color`.
#[inline]
pub fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Cast one ray and cut it just past the nearest blocker.
fn ray_attacks(dir: usize, sq: Square, occupied: Bitboard) -> Bitboard {
    let ray = RAYS[dir][sq.index()];
    let blockers = ray & occupied;
    let nearest = if dir < FIRST_DESCENDING { blockers.lsb() } else { blockers.msb() };
    match nearest {
        Some(blocker) => ray ^ RAYS[dir][blocker.index()],
        None => ray,
    }
}

fn slide(dirs: [usize; 4], sq: Square, occupied: Bitboard) -> Bitboard {
    dirs.into_iter()
        .fold(Bitboard::EMPTY, |acc, dir| acc | ray_attacks(dir, sq, occupied))
}

pub fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(ORTHOGONAL, sq, occupied)
}

pub fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    slide(DIAGONAL, sq, occupied)
}

pub fn queen_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    rook_attacks(sq, occupied) | bishop_attacks(sq, occupied)
}

/// Squares threatened by `piece` standing on `sq`.
pub fn piece_attacks(piece: Piece, sq: Square, occupied: Bitboard) -> Bitboard {
    match piece.kind() {
        PieceKind::Pawn => pawn_attacks(piece.color(), sq),
        PieceKind::Knight => knight_attacks(sq),
        PieceKind::Bishop => bishop_attacks(sq, occupied),
        PieceKind::Rook => rook_attacks(sq, occupied),
        PieceKind::Queen => queen_attacks(sq, occupied),
        PieceKind::King => king_attacks(sq),
    }
}
