use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::board::{Move, Position, Status};
use crate::search::eval::{evaluate, Score, LOSS_SCORE, WIN_SCORE};
use crate::search::ordering::order;

pub const DEFAULT_DEPTH: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Lookahead in plies; each recursion level consumes one.
    pub depth: u32,
    /// Try checks, then captures, before quiet moves.
    pub order_moves: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self { depth: DEFAULT_DEPTH, order_moves: true }
    }
}

impl SearchParams {
    pub fn with_depth(depth: u32) -> Self {
        Self { depth, ..Self::default() }
    }

    /// `moves` full moves of lookahead, i.e. two plies each.
    pub fn from_full_moves(moves: u32) -> Self {
        Self::with_depth(moves.saturating_mul(2))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: Score,
    pub nodes: u64,
}

/// Fixed-depth negamax with alpha-beta pruning. Holds nothing between
/// searches except the node counter of the last one.
#[derive(Debug)]
pub struct Searcher {
    nodes: u64,
    order_moves: bool,
}

impl Default for Searcher {
    fn default() -> Self {
        Self { nodes: 0, order_moves: true }
    }
}

impl Searcher {
    pub fn new() -> Self { Self::default() }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 { self.nodes }

    pub fn search(&mut self, position: &Position, params: SearchParams) -> SearchResult {
        check_rules_contract(position);
        self.nodes = 0;
        self.order_moves = params.order_moves;
        let started = Instant::now();
        let (score, best_move) = self.negamax(position, LOSS_SCORE, WIN_SCORE, params.depth);
        log::debug!(
            "search depth={} best={} score={} nodes={} elapsed={:.3}s",
            params.depth,
            best_move.map(|m| m.uci()).unwrap_or_else(|| "(none)".to_string()),
            score,
            self.nodes,
            started.elapsed().as_secs_f64()
        );
        SearchResult { best_move, score, nodes: self.nodes }
    }

    /// Scores `position` for its side to move, searching `depth` plies.
    ///
    /// Returns the score and the move that produced it. A move scoring at or
    /// above `beta` is returned immediately with its own score (fail-soft).
    /// Among equal scores the first move in search order wins; if every move
    /// loses outright, the first one is still reported.
    pub fn negamax(&mut self, position: &Position, mut alpha: Score, beta: Score, depth: u32) -> (Score, Option<Move>) {
        self.nodes += 1;
        if depth == 0 {
            return (evaluate(position, position.side_to_move()), None);
        }
        let moves = position.legal_moves();
        if moves.is_empty() {
            return (evaluate(position, position.side_to_move()), None);
        }
        let moves = if self.order_moves { order(moves) } else { moves };

        let mut best_score = LOSS_SCORE;
        let mut best_move: Option<Move> = None;
        for mv in moves {
            let child = position.apply(&mv);
            let (child_score, _) = self.negamax(&child, -beta, -alpha, depth - 1);
            let score = -child_score;
            if score >= beta {
                return (score, Some(mv));
            }
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(mv);
                if score > alpha { alpha = score; }
            }
        }
        (best_score, best_move)
    }
}

/// Best move for the side to move, looking `depth` plies ahead.
/// `None` when `depth` is 0 or the game is already over. A lost but ongoing
/// position still yields a move: the first in search order.
pub fn search(position: &Position, depth: u32) -> Option<Move> {
    Searcher::new().search(position, SearchParams::with_depth(depth)).best_move
}

// An ongoing position must have moves and a finished one must have none.
fn check_rules_contract(position: &Position) {
    let ongoing = position.status() == Status::Ongoing;
    let has_moves = !position.legal_moves().is_empty();
    assert_eq!(ongoing, has_moves, "status and legal moves disagree in {position}");
}
