//! Knight move generation.

use crate::attacks::knight_attacks;
use crate::bitboard::Bitboard;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::{MoveList, push_simple};

pub(super) fn gen_knights(position: &Position, targets: Bitboard, list: &mut MoveList) {
    let us = position.side_to_move();
    for from in position.pieces_of(PieceKind::Knight, us) {
        for to in knight_attacks(from) & targets {
            push_simple(position, from, to, list);
        }
    }
}
