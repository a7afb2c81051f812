use crate::Point;
use crate::goban::Goban;

/// Find every chain on the board with zero liberties.
///
/// Row-major sweep with a shared processed bitset: each unprocessed stone
/// seeds a flood fill, the whole chain is marked processed, and the chain
/// is kept when no member borders an empty cell. The sweep never mutates
/// the board, so every chain is judged against the same snapshot; removal
/// is the caller's batch step. All colors are examined, which makes
/// self-capture reportable like any other capture - move legality is not
/// decided here.
pub fn captured_chains(goban: &Goban) -> Vec<Vec<Point>> {
    let mut processed = vec![false; goban.board().len()];
    let mut dead = Vec::new();

    for row in 0..goban.size() {
        for col in 0..goban.size() {
            let seed = (row, col);
            if goban.stone_at(seed).is_none() || processed[goban.idx(seed)] {
                continue;
            }
            let chain = goban.chain_from(seed, &mut processed);
            if !goban.has_liberty(&chain) {
                dead.push(chain);
            }
        }
    }

    dead
}
