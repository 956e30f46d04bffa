//! The position value: placement, side to move, castling, en passant, counters.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::castle_rights::CastleRights;
use crate::color::Color;
use crate::error::PositionError;
use crate::file::File;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::rank::Rank;
use crate::square::Square;

/// An immutable snapshot of a game.
///
/// Placement is held twice: a square-indexed mailbox answers "what is on
/// e4" and per-kind/per-side bitboards answer "where are the black rooks".
/// Every constructor keeps the two views in agreement, and every public
/// constructor guarantees one king per side.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    squares: [Option<Piece>; Square::COUNT],
    pieces: [Bitboard; PieceKind::COUNT],
    sides: [Bitboard; Color::COUNT],
    side_to_move: Color,
    castling: CastleRights,
    en_passant: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Position {
    /// The standard initial position.
    pub fn starting_position() -> Position {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut position = Position::empty();
        for (file, kind) in File::ALL.into_iter().zip(BACK_RANK) {
            position.put_piece(Square::new(Rank::Rank1, file), Piece::new(kind, Color::White));
            position.put_piece(Square::new(Rank::Rank2, file), Piece::new(PieceKind::Pawn, Color::White));
            position.put_piece(Square::new(Rank::Rank7, file), Piece::new(PieceKind::Pawn, Color::Black));
            position.put_piece(Square::new(Rank::Rank8, file), Piece::new(kind, Color::Black));
        }
        position.castling = CastleRights::ALL;
        position
    }

    /// An empty board, White to move, no rights. Not a valid position on its own.
    pub(crate) fn empty() -> Position {
        Position {
            squares: [None; Square::COUNT],
            pieces: [Bitboard::EMPTY; PieceKind::COUNT],
            sides: [Bitboard::EMPTY; Color::COUNT],
            side_to_move: Color::White,
            castling: CastleRights::NONE,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Place `piece` on an empty square.
    pub(crate) fn put_piece(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.squares[sq.index()].is_none(), "square {sq} already occupied");
        self.squares[sq.index()] = Some(piece);
        self.pieces[piece.kind().index()] = self.pieces[piece.kind().index()].with(sq);
        self.sides[piece.color().index()] = self.sides[piece.color().index()].with(sq);
    }

    /// Lift whatever stands on `sq`.
    pub(crate) fn remove_piece(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.squares[sq.index()].take()?;
        self.pieces[piece.kind().index()] = self.pieces[piece.kind().index()].without(sq);
        self.sides[piece.color().index()] = self.sides[piece.color().index()].without(sq);
        Some(piece)
    }

    /// Move the piece on `from` to the empty square `to`.
    pub(crate) fn relocate(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.remove_piece(from) {
            self.put_piece(to, piece);
        }
    }

    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    pub(crate) fn set_castling(&mut self, rights: CastleRights) {
        self.castling = rights;
    }

    pub(crate) fn set_en_passant(&mut self, sq: Option<Square>) {
        self.en_passant = sq;
    }

    pub(crate) fn set_halfmove_clock(&mut self, clock: u32) {
        self.halfmove_clock = clock;
    }

    pub(crate) fn set_fullmove_number(&mut self, number: u32) {
        self.fullmove_number = number;
    }

    /// The piece on `sq`, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index()]
    }

    #[inline]
    pub fn kind_on(&self, sq: Square) -> Option<PieceKind> {
        self.piece_on(sq).map(Piece::kind)
    }

    #[inline]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_on(sq).map(Piece::color)
    }

    /// Squares holding `kind`, both colors.
    #[inline]
    pub fn pieces(&self, kind: PieceKind) -> Bitboard {
        self.pieces[kind.index()]
    }

    /// Squares holding `color`'s pieces.
    #[inline]
    pub fn side(&self, color: Color) -> Bitboard {
        self.sides[color.index()]
    }

    /// Squares holding `color`'s pieces of `kind`.
    #[inline]
    pub fn pieces_of(&self, kind: PieceKind, color: Color) -> Bitboard {
        self.pieces(kind) & self.side(color)
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.sides[Color::White.index()] | self.sides[Color::Black.index()]
    }

    /// Where `color`'s king stands.
    ///
    /// # Panics
    ///
    /// Never for a position obtained from this crate: parsing rejects boards
    /// without exactly one king per side and generated moves never capture one.
    pub fn king_square(&self, color: Color) -> Square {
        self.pieces_of(PieceKind::King, color)
            .lsb()
            .expect("position must hold a king for each side")
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling(&self) -> CastleRights {
        self.castling
    }

    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// Check the invariants a parsed position must satisfy.
    pub(crate) fn validate(&self) -> Result<(), PositionError> {
        for color in Color::ALL {
            let count = self.pieces_of(PieceKind::King, color).count();
            if count != 1 {
                return Err(PositionError::InvalidKingCount { color, count });
            }
        }

        if (self.pieces(PieceKind::Pawn) & (Bitboard::RANK_1 | Bitboard::RANK_8)).is_nonempty() {
            return Err(PositionError::PawnsOnBackRank);
        }

        if let Some(square) = self.en_passant {
            let us = self.side_to_move;
            if square.rank() != us.en_passant_rank() || self.piece_on(square).is_some() {
                return Err(PositionError::EnPassantMisplaced { square });
            }
            let pushed = match us {
                Color::White => square.offset(0, -1),
                Color::Black => square.offset(0, 1),
            };
            let pawn = Piece::new(PieceKind::Pawn, !us);
            if pushed.and_then(|sq| self.piece_on(sq)) != Some(pawn) {
                return Err(PositionError::EnPassantWithoutPawn { square });
            }
        }

        Ok(())
    }

    /// A printable 8x8 diagram.
    pub fn pretty(&self) -> PrettyPosition<'_> {
        PrettyPosition(self)
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{self}\")")
    }
}

/// Diagram view of a [`Position`], rank 8 at the top.
pub struct PrettyPosition<'a>(&'a Position);

impl fmt::Display for PrettyPosition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in Rank::ALL.into_iter().rev() {
            write!(f, "{rank} ")?;
            for file in File::ALL {
                let c = self.0.piece_on(Square::new(rank, file)).map_or('.', Piece::fen_char);
                write!(f, " {c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::color::Color;
    use crate::error::PositionError;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn starting_position_layout() {
        let position = Position::starting_position();
        assert_eq!(position.kind_on(Square::E1), Some(PieceKind::King));
        assert_eq!(position.kind_on(Square::D8), Some(PieceKind::Queen));
        assert_eq!(position.color_on(Square::B8), Some(Color::Black));
        assert_eq!(position.piece_on(Square::E4), None);
        assert_eq!(position.occupied().count(), 32);
        assert_eq!(position.pieces_of(PieceKind::Pawn, Color::White).count(), 8);
        position.validate().unwrap();
    }

    #[test]
    fn king_squares() {
        let position = Position::starting_position();
        assert_eq!(position.king_square(Color::White), Square::E1);
        assert_eq!(position.king_square(Color::Black), Square::E8);
    }

    #[test]
    fn mailbox_and_bitboards_agree() {
        let mut position = Position::starting_position();
        position.relocate(Square::G1, Square::F3);
        let removed = position.remove_piece(Square::D7);
        assert_eq!(removed, Some(Piece::new(PieceKind::Pawn, Color::Black)));

        for sq in Square::all() {
            match position.piece_on(sq) {
                Some(piece) => {
                    assert!(position.pieces(piece.kind()).contains(sq));
                    assert!(position.side(piece.color()).contains(sq));
                }
                None => assert!(!position.occupied().contains(sq)),
            }
        }
    }

    #[test]
    fn validate_counts_kings() {
        let mut position = Position::starting_position();
        position.remove_piece(Square::E8);
        assert_eq!(
            position.validate(),
            Err(PositionError::InvalidKingCount { color: Color::Black, count: 0 })
        );
        position.put_piece(Square::E8, Piece::new(PieceKind::King, Color::Black));
        position.put_piece(Square::E4, Piece::new(PieceKind::King, Color::White));
        assert_eq!(
            position.validate(),
            Err(PositionError::InvalidKingCount { color: Color::White, count: 2 })
        );
    }

    #[test]
    fn pretty_print() {
        let text = Position::starting_position().pretty().to_string();
        assert!(text.starts_with("8  r n b q k b n r"));
        assert!(text.contains("1  R N B Q K B N R"));
        assert!(text.ends_with("a b c d e f g h"));
    }
}
