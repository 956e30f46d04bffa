//! Compile-time attack tables for leapers and empty-board rays.

use crate::bitboard::Bitboard;

/// Ray directions as (file step, rank step).
///
/// The first four point towards higher square indices, the last four towards lower ones.
pub(crate) const DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),   // north
    (1, 1),   // north-east
    (1, 0),   // east
    (-1, 1),  // north-west
    (0, -1),  // south
    (-1, -1), // south-west
    (-1, 0),  // west
    (1, -1),  // south-east
];

/// Index of the first direction that walks towards lower square indices.
pub(crate) const FIRST_DESCENDING: usize = 4;

pub(crate) const ORTHOGONAL: [usize; 4] = [0, 2, 4, 6];
pub(crate) const DIAGONAL: [usize; 4] = [1, 3, 5, 7];

const KNIGHT_STEPS: [(i8, i8); 8] = [
    (1, 2), (2, 1), (2, -1), (1, -2),
    (-1, -2), (-2, -1), (-2, 1), (-1, 2),
];

const KING_STEPS: [(i8, i8); 8] = [
    (0, 1), (1, 1), (1, 0), (1, -1),
    (0, -1), (-1, -1), (-1, 0), (-1, 1),
];

const fn step(sq: usize, (df, dr): (i8, i8)) -> Option<usize> {
    let file = (sq % 8) as i8 + df;
    let rank = (sq / 8) as i8 + dr;
    if file < 0 || file > 7 || rank < 0 || rank > 7 {
        None
    } else {
        Some(rank as usize * 8 + file as usize)
    }
}

const fn leaper_table(steps: &[(i8, i8)]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    let mut sq = 0;
    while sq < 64 {
        let mut bits = 0u64;
        let mut i = 0;
        while i < steps.len() {
            if let Some(target) = step(sq, steps[i]) {
                bits |= 1u64 << target;
            }
            i += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

/// Index 0 holds White pawn captures (north), index 1 Black (south).
const fn pawn_table() -> [[Bitboard; 64]; 2] {
    [
        leaper_table(&[(-1, 1), (1, 1)]),
        leaper_table(&[(-1, -1), (1, -1)]),
    ]
}

/// Every square reachable from each square in each direction on an empty board.
const fn ray_table() -> [[Bitboard; 64]; 8] {
    let mut table = [[Bitboard::EMPTY; 64]; 8];
    let mut dir = 0;
    while dir < 8 {
        let mut sq = 0;
        while sq < 64 {
            let mut bits = 0u64;
            let mut cursor = step(sq, DIRECTIONS[dir]);
            while let Some(next) = cursor {
                bits |= 1u64 << next;
                cursor = step(next, DIRECTIONS[dir]);
            }
            table[dir][sq] = Bitboard::new(bits);
            sq += 1;
        }
        dir += 1;
    }
    table
}

pub(crate) static KNIGHT_ATTACKS: [Bitboard; 64] = leaper_table(&KNIGHT_STEPS);
pub(crate) static KING_ATTACKS: [Bitboard; 64] = leaper_table(&KING_STEPS);
pub(crate) static PAWN_ATTACKS: [[Bitboard; 64]; 2] = pawn_table();
pub(crate) static RAYS: [[Bitboard; 64]; 8] = ray_table();

#[cfg(test)]
mod tests {
    use super::{DIRECTIONS, FIRST_DESCENDING, RAYS};
    use crate::square::Square;

    #[test]
    fn ascending_rays_point_up_the_index() {
        for (dir, &(df, dr)) in DIRECTIONS.iter().enumerate() {
            let delta = dr * 8 + df;
            assert_eq!(delta > 0, dir < FIRST_DESCENDING, "direction {dir}");
        }
    }

    #[test]
    fn rays_from_corner() {
        // North from a1 covers the rest of the a-file.
        assert_eq!(RAYS[0][Square::A1.index()].count(), 7);
        // North-east from a1 is the long diagonal.
        assert!(RAYS[1][Square::A1.index()].contains(Square::H8));
        // Nothing lies west of a1.
        assert!(RAYS[6][Square::A1.index()].is_empty());
    }
}
