use crate::board::Move;

/// Checks first, then captures, then everything else. The sort is stable,
/// so each bucket keeps the generator's order.
pub fn order(mut moves: Vec<Move>) -> Vec<Move> {
    moves.sort_by_key(bucket);
    moves
}

fn bucket(m: &Move) -> u8 {
    if m.gives_check() {
        0
    } else if m.is_capture() {
        1
    } else {
        2
    }
}
