//! Standard algebraic notation (`Nf3`, `exd5`, `O-O`, `e8=Q`) and PGN movetext.

use tracing::debug;

use crate::castle_rights::CastleSide;
use crate::chess_move::{Move, MoveKind};
use crate::error::MoveError;
use crate::file::File;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::rank::Rank;
use crate::square::Square;

/// Game termination markers that may close a movetext.
const RESULTS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// SAN text broken into its parts, before it is matched against a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum San {
    Castle(CastleSide),
    Normal {
        piece: PieceKind,
        file: Option<File>,
        rank: Option<Rank>,
        capture: bool,
        to: Square,
        promotion: Option<PieceKind>,
    },
}

impl San {
    fn parse(text: &str) -> Option<San> {
        // Check marks and annotation glyphs carry no information here.
        let text = text.trim_end_matches(['+', '#', '!', '?']);
        match text {
            "O-O" | "0-0" => return Some(San::Castle(CastleSide::KingSide)),
            "O-O-O" | "0-0-0" => return Some(San::Castle(CastleSide::QueenSide)),
            _ => {}
        }
        if !text.is_ascii() {
            return None;
        }

        let (piece, mut rest) = match text.chars().next()? {
            c @ ('N' | 'B' | 'R' | 'Q' | 'K') => (PieceKind::from_fen_char(c)?, &text[1..]),
            _ => (PieceKind::Pawn, text),
        };

        let mut promotion = None;
        if piece == PieceKind::Pawn
            && let Some(c @ ('N' | 'B' | 'R' | 'Q')) = rest.chars().last()
        {
            promotion = PieceKind::from_fen_char(c);
            let body = &rest[..rest.len() - 1];
            rest = body.strip_suffix('=').unwrap_or(body);
        }

        let split = rest.len().checked_sub(2)?;
        let to = Square::from_algebraic(&rest[split..])?;

        let mut prefix = rest[..split].chars().peekable();
        let file = prefix.next_if(|c| matches!(c, 'a'..='h')).and_then(File::from_char);
        let rank = prefix.next_if(|c| matches!(c, '1'..='8')).and_then(Rank::from_char);
        let capture = prefix.next_if(|&c| c == 'x' || c == ':').is_some();
        if prefix.next().is_some() {
            return None;
        }

        // Pawns name their file when capturing and nothing otherwise.
        if piece == PieceKind::Pawn && (rank.is_some() || capture != file.is_some()) {
            return None;
        }

        Some(San::Normal {
            piece,
            file,
            rank,
            capture,
            to,
            promotion,
        })
    }

    fn matches(&self, position: &Position, mv: Move) -> bool {
        match *self {
            San::Castle(CastleSide::KingSide) => mv.kind() == MoveKind::KingCastle,
            San::Castle(CastleSide::QueenSide) => mv.kind() == MoveKind::QueenCastle,
            San::Normal {
                piece,
                file,
                rank,
                capture,
                to,
                promotion,
            } => {
                let from = mv.from();
                position.kind_on(from) == Some(piece)
                    && mv.to() == to
                    && mv.promotion_piece() == promotion
                    && file.is_none_or(|f| from.file() == f)
                    && rank.is_none_or(|r| from.rank() == r)
                    && (!capture || mv.is_capture())
                    && (piece != PieceKind::Pawn || capture == mv.is_capture())
            }
        }
    }
}

/// The move text inside a movetext token, or `None` for move numbers and results.
///
/// `12.`, `12...` and `*` are skipped; `1.e4` yields `e4`.
fn move_token(token: &str) -> Option<&str> {
    if RESULTS.contains(&token) {
        return None;
    }
    let after_number = token.trim_start_matches(|c: char| c.is_ascii_digit());
    let after_dots = after_number.trim_start_matches('.');
    if after_dots.len() == after_number.len() {
        // No dot after the digits: `0-0` or a plain move.
        return Some(token);
    }
    (!after_dots.is_empty()).then_some(after_dots)
}

fn san_letter(kind: PieceKind) -> char {
    kind.fen_char().to_ascii_uppercase()
}

impl Position {
    /// Resolve standard algebraic text to one of this position's legal moves.
    ///
    /// Check marks and `!`/`?` suffixes are ignored; `0-0` is accepted for
    /// `O-O`. A capture sign on a non-pawn move must match a capture, but a
    /// missing one is tolerated.
    ///
    /// # Errors
    ///
    /// [`MoveError::Malformed`] when the text is not SAN,
    /// [`MoveError::Illegal`] when no legal move fits it,
    /// [`MoveError::Ambiguous`] when more than one does.
    pub fn parse_san(&self, text: &str) -> Result<Move, MoveError> {
        let san = San::parse(text).ok_or_else(|| MoveError::Malformed {
            text: text.to_string(),
        })?;

        let mut found = None;
        for &mv in &self.legal_moves() {
            if !san.matches(self, mv) {
                continue;
            }
            if let Some(first) = found {
                debug!(fen = %self, mv = text, "ambiguous move");
                return Err(MoveError::Ambiguous {
                    text: text.to_string(),
                    first,
                    second: mv,
                });
            }
            found = Some(mv);
        }

        found.ok_or_else(|| {
            debug!(fen = %self, mv = text, "no legal move matches");
            MoveError::Illegal { text: text.to_string() }
        })
    }

    /// Parse standard algebraic text and apply the move it names.
    pub fn play_san(&self, text: &str) -> Result<Position, MoveError> {
        let mv = self.parse_san(text)?;
        Ok(self.make_move(mv))
    }

    /// Play a run of PGN movetext such as `1. e4 e5 2. Nf3 Nc6 *`.
    ///
    /// Move numbers and result markers are skipped. Nothing is applied
    /// unless every move is legal in turn.
    pub fn play_movetext(&self, movetext: &str) -> Result<Position, MoveError> {
        movetext
            .split_whitespace()
            .filter_map(move_token)
            .try_fold(*self, |position, text| position.play_san(text))
    }

    /// Standard algebraic text for `mv`, with `+` or `#` when it gives check
    /// or mate. `mv` must be legal here.
    pub fn to_san(&self, mv: Move) -> String {
        let mut text = match mv.kind() {
            MoveKind::KingCastle => "O-O".to_string(),
            MoveKind::QueenCastle => "O-O-O".to_string(),
            _ => self.san_body(mv),
        };

        let after = self.make_move(mv);
        if after.is_check() {
            text.push(if after.has_legal_moves() { '+' } else { '#' });
        }
        text
    }

    fn san_body(&self, mv: Move) -> String {
        let (from, to) = (mv.from(), mv.to());
        let mut text = String::new();

        match self.kind_on(from) {
            Some(PieceKind::Pawn) | None => {
                if mv.is_capture() {
                    text.push_str(&format!("{}x", from.file()));
                }
                text.push_str(&to.to_string());
                if let Some(kind) = mv.promotion_piece() {
                    text.push('=');
                    text.push(san_letter(kind));
                }
            }
            Some(kind) => {
                text.push(san_letter(kind));

                let rivals: Vec<Square> = self
                    .legal_moves()
                    .iter()
                    .filter(|other| other.to() == to && other.from() != from && self.kind_on(other.from()) == Some(kind))
                    .map(|other| other.from())
                    .collect();
                if !rivals.is_empty() {
                    let shares_file = rivals.iter().any(|sq| sq.file() == from.file());
                    let shares_rank = rivals.iter().any(|sq| sq.rank() == from.rank());
                    if !shares_file {
                        text.push_str(&from.file().to_string());
                    } else if !shares_rank {
                        text.push_str(&from.rank().to_string());
                    } else {
                        text.push_str(&from.to_string());
                    }
                }

                if mv.is_capture() {
                    text.push('x');
                }
                text.push_str(&to.to_string());
            }
        }
        text
    }
}
