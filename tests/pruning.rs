use gambit::search::eval::{evaluate, Score};
use gambit::{Position, SearchParams, Searcher};
use pretty_assertions::assert_eq;

// Plain negamax over every move, no window.
fn full_negamax(position: &Position, depth: u32) -> Score {
    let moves = position.legal_moves();
    if depth == 0 || moves.is_empty() {
        return evaluate(position, position.side_to_move());
    }
    moves
        .iter()
        .map(|m| -full_negamax(&position.apply(m), depth - 1))
        .fold(f64::NEG_INFINITY, f64::max)
}

fn check(fen: &str, max_depth: u32) {
    let p = Position::from_fen(fen).expect("valid fen");
    for depth in 1..=max_depth {
        let expected = full_negamax(&p, depth);
        for order_moves in [true, false] {
            let res = Searcher::new().search(&p, SearchParams { depth, order_moves });
            assert_eq!(res.score, expected, "{fen} depth {depth} ordered={order_moves}");
        }
    }
}

#[test]
fn pruning_matches_full_minimax_in_openings() {
    check("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1", 3);
    check("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3", 2);
}

#[test]
fn pruning_matches_full_minimax_in_tactics() {
    check("r1bqk2r/ppp2ppp/2n2n2/3pp3/1bB1P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 0 6", 2);
    check("k7/8/8/8/8/8/3qQ3/7K w - - 0 1", 3);
}

#[test]
fn pruning_matches_full_minimax_with_mates() {
    check("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1", 3);
    check("7k/5K2/8/8/8/8/8/6R1 b - - 0 1", 3);
    check("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3);
}

#[test]
fn pruning_visits_fewer_nodes_than_the_full_tree() {
    let p = Position::startpos();
    let res = Searcher::new().search(&p, SearchParams::with_depth(3));
    // 1 + 20 + 400 + 8902 nodes without pruning
    assert!(res.nodes < 9323, "nodes {}", res.nodes);
}
