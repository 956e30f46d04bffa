//! Pawn move generation.

use crate::attacks::pawn_attacks;
use crate::bitboard::Bitboard;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use super::MoveList;

/// Push a pawn move, expanding it into four promotions on the last rank.
fn push_pawn_move(from: Square, to: Square, is_capture: bool, last_rank: bool, list: &mut MoveList) {
    if last_rank {
        for piece in PieceKind::PROMOTIONS {
            list.push(Move::promotion(from, to, piece, is_capture));
        }
    } else if is_capture {
        list.push(Move::capture(from, to));
    } else {
        list.push(Move::quiet(from, to));
    }
}

/// Generate pushes, double pushes, captures, en passant and promotions.
pub(super) fn gen_pawns(position: &Position, targets: Bitboard, list: &mut MoveList) {
    let us = position.side_to_move();
    let enemy = position.side(!us) & targets;
    let empty = !position.occupied();
    let forward: i8 = match us {
        Color::White => 1,
        Color::Black => -1,
    };

    for from in position.pieces_of(PieceKind::Pawn, us) {
        if let Some(one) = from.offset(0, forward)
            && empty.contains(one)
        {
            push_pawn_move(from, one, false, one.rank() == us.promotion_rank(), list);
            if from.rank() == us.pawn_rank()
                && let Some(two) = one.offset(0, forward)
                && empty.contains(two)
            {
                list.push(Move::double_pawn_push(from, two));
            }
        }

        let reach = pawn_attacks(us, from);
        for to in reach & enemy {
            push_pawn_move(from, to, true, to.rank() == us.promotion_rank(), list);
        }

        if let Some(target) = position.en_passant()
            && reach.contains(target)
        {
            list.push(Move::en_passant(from, target));
        }
    }
}
