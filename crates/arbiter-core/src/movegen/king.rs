//! King step and castling generation.

use crate::attacks::king_attacks;
use crate::bitboard::Bitboard;
use crate::castle_rights::CastleSide;
use crate::chess_move::Move;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::{MoveList, push_simple};

pub(super) fn gen_king(position: &Position, targets: Bitboard, list: &mut MoveList) {
    let us = position.side_to_move();
    let from = position.king_square(us);
    for to in king_attacks(from) & targets {
        push_simple(position, from, to, list);
    }
    gen_castles(position, list);
}

/// Castle only when the right is held, king and rook are home, the squares
/// between them are empty, and the king neither starts on, crosses, nor lands
/// on an attacked square.
fn gen_castles(position: &Position, list: &mut MoveList) {
    let us = position.side_to_move();
    let them = !us;
    let home = CastleSide::king_from(us);
    if position.king_square(us) != home {
        return;
    }

    let rook = Piece::new(PieceKind::Rook, us);
    let occupied = position.occupied();
    for side in CastleSide::ALL {
        if !position.castling().has(us, side) || position.piece_on(side.rook_from(us)) != Some(rook) {
            continue;
        }
        if (side.empty_path(us) & occupied).is_nonempty() {
            continue;
        }
        if side.king_walk(us).any(|sq| position.is_attacked(sq, them)) {
            continue;
        }
        list.push(Move::castle(home, side.king_to(us), side == CastleSide::KingSide));
    }
}
