use crate::board::Position;

/// Leaf count of the legal move tree below `position`, through the same
/// immutable apply path the search uses. Positions drawn by rule count as
/// leaves with no children.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = position.legal_moves();
    if depth == 1 { return moves.len() as u64; }
    moves.iter().map(|m| perft(&position.apply(m), depth - 1)).sum()
}

/// Per-move leaf counts at the root, in generator order.
pub fn divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    position
        .legal_moves()
        .iter()
        .map(|m| (m.uci(), perft(&position.apply(m), depth.saturating_sub(1))))
        .collect()
}
