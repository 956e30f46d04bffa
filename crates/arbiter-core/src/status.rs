//! Classifying a position as ongoing, checkmate or stalemate.

use std::fmt;

use crate::position::Position;

/// Outcome of the position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// At least one legal move exists.
    Ongoing,
    /// In check with no legal move.
    Checkmate,
    /// Not in check, no legal move.
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameStatus::Ongoing => "ongoing",
            GameStatus::Checkmate => "checkmate",
            GameStatus::Stalemate => "stalemate",
        };
        f.write_str(name)
    }
}

impl Position {
    pub fn status(&self) -> GameStatus {
        if self.has_legal_moves() {
            GameStatus::Ongoing
        } else if self.is_check() {
            GameStatus::Checkmate
        } else {
            GameStatus::Stalemate
        }
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.status() == GameStatus::Checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.status() == GameStatus::Stalemate
    }
}

#[cfg(test)]
mod tests {
    use super::GameStatus;
    use crate::position::Position;

    fn status(fen: &str) -> GameStatus {
        fen.parse::<Position>().unwrap().status()
    }

    #[test]
    fn start_is_ongoing() {
        assert_eq!(Position::starting_position().status(), GameStatus::Ongoing);
    }

    #[test]
    fn back_rank_mate() {
        assert_eq!(status("4k1R1/8/4K3/8/8/8/8/8 b - - 0 1"), GameStatus::Checkmate);
        assert_eq!(status("6k1/5ppp/8/8/8/8/8/R3K3 w - - 0 1"), GameStatus::Ongoing);
        assert_eq!(status("R5k1/5ppp/8/8/8/8/8/4K3 b - - 0 1"), GameStatus::Checkmate);
    }

    #[test]
    fn cornered_king_stalemate() {
        assert_eq!(status("7k/6R1/6K1/8/8/8/8/8 b - - 0 1"), GameStatus::Stalemate);
        assert_eq!(status("k7/2Q5/8/8/8/8/8/4K3 b - - 0 1"), GameStatus::Stalemate);
    }

    #[test]
    fn check_with_escape_is_ongoing() {
        let pos: Position = "4k3/8/8/8/8/8/8/4RK2 b - - 0 1".parse().unwrap();
        assert!(pos.is_check());
        assert_eq!(pos.status(), GameStatus::Ongoing);
        assert!(!pos.is_checkmate());
        assert!(!pos.is_stalemate());
    }

    #[test]
    fn display_names() {
        assert_eq!(GameStatus::Checkmate.to_string(), "checkmate");
        assert_eq!(GameStatus::Ongoing.to_string(), "ongoing");
    }
}
