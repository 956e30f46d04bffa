//! Move execution via copy-make.

use crate::castle_rights::{CastleRights, CastleSide};
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Castling rights lost when a move starts or ends on each square.
const CASTLE_RIGHTS_REVOKE: [CastleRights; 64] = {
    let mut table = [CastleRights::NONE; 64];
    table[Square::E1.index()] = CastleRights::WHITE_BOTH;
    table[Square::A1.index()] = CastleRights::WHITE_QUEEN;
    table[Square::H1.index()] = CastleRights::WHITE_KING;
    table[Square::E8.index()] = CastleRights::BLACK_BOTH;
    table[Square::A8.index()] = CastleRights::BLACK_QUEEN;
    table[Square::H8.index()] = CastleRights::BLACK_KING;
    table
};

impl Position {
    /// Apply a generated move and return the resulting position. `self` is untouched.
    ///
    /// The move must come from this position's generator; nothing is checked
    /// beyond what is needed to keep the placement consistent.
    pub(crate) fn make_move(&self, mv: Move) -> Position {
        let mut next = *self;
        let us = self.side_to_move();
        let from = mv.from();
        let to = mv.to();

        let Some(moving) = next.remove_piece(from) else {
            return next;
        };

        let captured = match mv.kind() {
            MoveKind::EnPassant => {
                let behind = match us {
                    Color::White => to.offset(0, -1),
                    Color::Black => to.offset(0, 1),
                };
                behind.and_then(|sq| next.remove_piece(sq))
            }
            _ => next.remove_piece(to),
        };

        let landing = match mv.promotion_piece() {
            Some(kind) => Piece::new(kind, us),
            None => moving,
        };
        next.put_piece(to, landing);

        if mv.is_castle() {
            let side = if mv.kind() == MoveKind::KingCastle {
                CastleSide::KingSide
            } else {
                CastleSide::QueenSide
            };
            next.relocate(side.rook_from(us), side.rook_to(us));
        }

        next.set_castling(
            self.castling()
                .remove(CASTLE_RIGHTS_REVOKE[from.index()])
                .remove(CASTLE_RIGHTS_REVOKE[to.index()]),
        );

        // The target is the square the pawn skipped.
        let en_passant = if mv.is_double_pawn_push() {
            match us {
                Color::White => from.offset(0, 1),
                Color::Black => from.offset(0, -1),
            }
        } else {
            None
        };
        next.set_en_passant(en_passant);

        if moving.kind() == PieceKind::Pawn || captured.is_some() {
            next.set_halfmove_clock(0);
        } else {
            next.set_halfmove_clock(self.halfmove_clock().saturating_add(1));
        }

        if us == Color::Black {
            next.set_fullmove_number(self.fullmove_number().saturating_add(1));
        }
        next.set_side_to_move(!us);

        next
    }
}
