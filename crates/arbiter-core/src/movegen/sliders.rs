//! Sliding piece (bishop, rook, queen) move generation.

use crate::attacks::piece_attacks;
use crate::bitboard::Bitboard;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;

use super::{MoveList, push_simple};

const SLIDERS: [PieceKind; 3] = [PieceKind::Bishop, PieceKind::Rook, PieceKind::Queen];

pub(super) fn gen_sliders(position: &Position, targets: Bitboard, list: &mut MoveList) {
    let us = position.side_to_move();
    let occupied = position.occupied();

    for kind in SLIDERS {
        let piece = Piece::new(kind, us);
        for from in position.pieces_of(kind, us) {
            for to in piece_attacks(piece, from, occupied) & targets {
                push_simple(position, from, to, list);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_move::Move;
    use crate::position::Position;
    use crate::square::Square;

    #[test]
    fn rook_stops_at_first_blocker() {
        let pos: Position = "4k3/8/8/8/1p1R2P1/8/8/4K3 w - - 0 1".parse().unwrap();
        let rook: Vec<Move> = pos
            .pseudo_legal_moves()
            .iter()
            .copied()
            .filter(|mv| mv.from() == Square::D4)
            .collect();
        assert!(rook.contains(&Move::capture(Square::D4, Square::B4)));
        assert!(!rook.iter().any(|mv| mv.to() == Square::A4));
        assert!(rook.contains(&Move::quiet(Square::D4, Square::F4)));
        assert!(!rook.iter().any(|mv| mv.to() == Square::G4));
        // b4, c4, e4, f4 across; d1..d3 and d5..d8 along the file.
        assert_eq!(rook.len(), 4 + 7);
    }

    #[test]
    fn queen_combines_both_patterns() {
        let pos: Position = "k7/8/8/8/3Q4/8/8/7K w - - 0 1".parse().unwrap();
        let queen = pos
            .pseudo_legal_moves()
            .iter()
            .filter(|mv| mv.from() == Square::D4)
            .count();
        assert_eq!(queen, 27);
    }
}
