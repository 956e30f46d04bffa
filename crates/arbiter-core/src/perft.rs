//! Move-path enumeration, used to check the generator against known counts.

use tracing::trace;

use crate::position::Position;

/// Number of distinct legal move sequences of length `depth`.
///
/// At the last ply the legal moves are counted rather than played.
pub fn perft(position: &Position, depth: usize) -> u64 {
    match depth {
        0 => 1,
        1 => position.legal_moves().len() as u64,
        _ => {
            let mut nodes = 0;
            for &mv in &position.legal_moves() {
                nodes += perft(&position.make_move(mv), depth - 1);
            }
            nodes
        }
    }
}

/// [`perft`] split by first move, as `(long algebraic move, count)` sorted
/// by move text. Depth 0 is treated as depth 1.
pub fn divide(position: &Position, depth: usize) -> Vec<(String, u64)> {
    let remaining = depth.saturating_sub(1);
    let mut split = Vec::new();
    for &mv in &position.legal_moves() {
        let count = perft(&position.make_move(mv), remaining);
        trace!(%mv, count, "divide");
        split.push((mv.to_uci(), count));
    }
    split.sort_unstable();
    split
}
