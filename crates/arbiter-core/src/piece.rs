//! A piece on the board: a kind owned by a color.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// The contents of an occupied square.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Parse a FEN letter: uppercase is White, lowercase is Black.
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_fen_char(c)?;
        let color = if c.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(kind, color))
    }

    /// FEN letter for this piece.
    pub fn fen_char(self) -> char {
        let c = self.kind.fen_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fen_char())
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:?}", self.color.name(), self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::Piece;
    use crate::color::Color;
    use crate::piece_kind::PieceKind;

    #[test]
    fn fen_letters_carry_color() {
        assert_eq!(Piece::from_fen_char('N'), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert_eq!(Piece::from_fen_char('q'), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(Piece::from_fen_char('z'), None);
    }

    #[test]
    fn fen_char_roundtrip() {
        for color in Color::ALL {
            for kind in PieceKind::ALL {
                let piece = Piece::new(kind, color);
                assert_eq!(Piece::from_fen_char(piece.fen_char()), Some(piece));
            }
        }
    }

    #[test]
    fn debug_names_color_and_kind() {
        let piece = Piece::new(PieceKind::Rook, Color::Black);
        assert_eq!(format!("{piece:?}"), "black:Rook");
        assert_eq!(format!("{piece}"), "r");
    }
}
