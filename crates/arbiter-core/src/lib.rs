//! Chess rules: positions, FEN, attack sets, legal moves, check, checkmate
//! and stalemate.
//!
//! Every operation takes a [`Position`] by reference and returns a fresh
//! value; nothing is mutated in place, so positions can be shared across
//! threads freely.

mod attacks;
mod bitboard;
mod castle_rights;
mod chess_move;
mod color;
mod error;
mod fen;
mod file;
mod legal;
mod make_move;
mod movegen;
mod notation;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod rank;
mod san;
mod square;
mod status;
mod threats;

pub use attacks::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, piece_attacks, queen_attacks, rook_attacks};
pub use bitboard::Bitboard;
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{FenError, MoveError, ParseError, PositionError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use movegen::MoveList;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyPosition};
pub use rank::Rank;
pub use square::Square;
pub use status::GameStatus;
