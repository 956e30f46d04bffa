//! Piece kinds, independent of color.

use std::fmt;

/// What a piece is, without saying whose it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Lowercase FEN letters, indexed by [`PieceKind::index`].
const LETTERS: [char; PieceKind::COUNT] = ['p', 'n', 'b', 'r', 'q', 'k'];

impl PieceKind {
    pub const COUNT: usize = 6;

    /// In index order.
    pub const ALL: [PieceKind; PieceKind::COUNT] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// What a pawn may become, in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [PieceKind::Queen, PieceKind::Rook, PieceKind::Bishop, PieceKind::Knight];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn fen_char(self) -> char {
        LETTERS[self.index()]
    }

    /// Either case is accepted.
    pub fn from_fen_char(c: char) -> Option<PieceKind> {
        let lower = c.to_ascii_lowercase();
        LETTERS.iter().position(|&letter| letter == lower).map(|i| PieceKind::ALL[i])
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.fen_char().encode_utf8(&mut [0; 4]))
    }
}
