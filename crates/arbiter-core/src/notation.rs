//! Long algebraic move text and applying moves to a position.

use tracing::debug;

use crate::chess_move::Move;
use crate::error::MoveError;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// The squares and promotion piece named by long algebraic text.
fn split_move_text(text: &str) -> Option<(Square, Square, Option<PieceKind>)> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return None;
    }
    let from = Square::from_algebraic(&text[0..2])?;
    let to = Square::from_algebraic(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => None,
        Some(c @ ('n' | 'b' | 'r' | 'q')) => Some(PieceKind::from_fen_char(c)?),
        Some(_) => return None,
    };
    Some((from, to, promotion))
}

impl Position {
    /// Resolve long algebraic text (`e2e4`, `e7e8q`, `e1g1`) to one of this
    /// position's legal moves.
    ///
    /// # Errors
    ///
    /// [`MoveError::Malformed`] when the text is not long algebraic notation,
    /// [`MoveError::Illegal`] when it names no legal move.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveError> {
        let (from, to, promotion) = split_move_text(text).ok_or_else(|| MoveError::Malformed {
            text: text.to_string(),
        })?;

        self.legal_moves()
            .iter()
            .copied()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promotion_piece() == promotion)
            .ok_or_else(|| {
                debug!(fen = %self, mv = text, "no legal move matches");
                MoveError::Illegal { text: text.to_string() }
            })
    }

    /// Apply a legal move, returning the new position.
    ///
    /// # Errors
    ///
    /// [`MoveError::Illegal`] when `mv` is not among [`Position::legal_moves`].
    pub fn play(&self, mv: Move) -> Result<Position, MoveError> {
        if !self.is_legal(mv) {
            debug!(fen = %self, mv = %mv, "rejected illegal move");
            return Err(MoveError::Illegal { text: mv.to_uci() });
        }
        Ok(self.make_move(mv))
    }

    /// Parse long algebraic text and apply the move it names.
    pub fn play_uci(&self, text: &str) -> Result<Position, MoveError> {
        let mv = self.parse_move(text)?;
        Ok(self.make_move(mv))
    }
}

#[cfg(test)]
mod tests {
    use crate::chess_move::Move;
    use crate::error::MoveError;
    use crate::piece_kind::PieceKind;
    use crate::position::Position;
    use crate::square::Square;

    fn position(fen: &str) -> Position {
        fen.parse().unwrap()
    }

    #[test]
    fn resolves_flags_from_position() {
        let start = Position::starting_position();
        assert_eq!(start.parse_move("e2e4"), Ok(Move::double_pawn_push(Square::E2, Square::E4)));
        assert_eq!(start.parse_move("g1f3"), Ok(Move::quiet(Square::G1, Square::F3)));

        let castle = position("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1");
        assert_eq!(castle.parse_move("e1c1"), Ok(Move::castle(Square::E1, Square::C1, false)));
    }

    #[test]
    fn promotion_letter_is_required() {
        let pos = position("4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
        assert_eq!(
            pos.parse_move("a7a8r"),
            Ok(Move::promotion(Square::A7, Square::A8, PieceKind::Rook, false))
        );
        assert!(matches!(pos.parse_move("a7a8"), Err(MoveError::Illegal { .. })));
        assert!(matches!(pos.parse_move("e1e2q"), Err(MoveError::Illegal { .. })));
    }

    #[test]
    fn malformed_text() {
        let start = Position::starting_position();
        for text in ["", "e2", "e2e9", "e2e4k", "e2e4qq", "E2E4", "e2-e4", "é2e4"] {
            assert!(
                matches!(start.parse_move(text), Err(MoveError::Malformed { .. })),
                "{text:?} should be malformed"
            );
        }
    }

    #[test]
    fn illegal_moves_are_rejected() {
        let start = Position::starting_position();
        assert_eq!(
            start.parse_move("e2e5"),
            Err(MoveError::Illegal { text: "e2e5".to_string() })
        );
        assert_eq!(
            start.play(Move::quiet(Square::E1, Square::E2)),
            Err(MoveError::Illegal { text: "e1e2".to_string() })
        );
    }

    #[test]
    fn play_returns_a_new_position() {
        let start = Position::starting_position();
        let after = start.play_uci("e2e4").unwrap().play_uci("c7c5").unwrap();
        assert_eq!(after.to_fen(), "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w KQkq c6 0 2");
        assert_eq!(start, Position::starting_position());
    }

    #[test]
    fn fools_mate() {
        let mut pos = Position::starting_position();
        for text in ["f2f3", "e7e5", "g2g4", "d8h4"] {
            pos = pos.play_uci(text).unwrap();
        }
        assert!(pos.is_checkmate());
    }
}
