use gambit::search::search;
use gambit::{Position, SearchParams, Searcher, Status};
use pretty_assertions::assert_eq;

fn pos(fen: &str) -> Position {
    Position::from_fen(fen).expect("valid fen")
}

#[test]
fn depth_zero_returns_no_move() {
    let p = Position::startpos();
    assert!(search(&p, 0).is_none());
    let res = Searcher::new().search(&p, SearchParams::with_depth(0));
    assert!(res.best_move.is_none());
    assert_eq!(res.nodes, 1);
}

#[test]
fn startpos_depth_two_gives_legal_move_and_finite_score() {
    let p = Position::startpos();
    let res = Searcher::new().search(&p, SearchParams::with_depth(2));
    let mv = res.best_move.expect("a move at depth 2");
    assert!(p.legal_moves().contains(&mv));
    assert!(res.score.is_finite(), "score {}", res.score);
}

#[test]
fn returned_move_is_legal_across_positions() {
    let fens = [
        "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    ];
    for fen in fens {
        let p = pos(fen);
        for depth in 1..=2 {
            let mv = search(&p, depth).expect("non-terminal position has a move");
            assert!(p.legal_moves().contains(&mv), "{mv} not legal in {fen}");
        }
    }
}

#[test]
fn prefers_winning_queen_capture() {
    let p = pos("k7/8/8/8/8/8/3qQ3/7K w - - 0 1");
    for depth in 1..=2 {
        let bm = search(&p, depth).expect("expected a best move");
        assert_eq!(bm.uci(), "e2d2", "depth {depth}");
    }
}

#[test]
fn finds_mate_in_one_with_infinite_score() {
    let p = pos("6k1/5ppp/8/8/8/8/5PPP/R5K1 w - - 0 1");
    for depth in 1..=3 {
        let res = Searcher::new().search(&p, SearchParams::with_depth(depth));
        let mv = res.best_move.expect("mate available");
        assert_eq!(mv.uci(), "a1a8");
        assert_eq!(res.score, f64::INFINITY);
        assert_eq!(p.apply(&mv).status(), Status::Checkmate);
    }
}

#[test]
fn single_legal_move_is_always_returned() {
    // Kh7 is the only move and walks into Rh1#.
    let p = pos("7k/5K2/8/8/8/8/8/6R1 b - - 0 1");
    assert_eq!(p.legal_moves().len(), 1);
    for depth in 1..=3 {
        let res = Searcher::new().search(&p, SearchParams::with_depth(depth));
        assert_eq!(res.best_move.map(|m| m.uci()), Some("h8h7".to_string()), "depth {depth}");
    }
    let deep = Searcher::new().search(&p, SearchParams::with_depth(2));
    assert_eq!(deep.score, f64::NEG_INFINITY);
    assert_eq!(search(&p, 2).map(|m| m.uci()), Some("h8h7".to_string()));
}

#[test]
fn terminal_positions_return_no_move() {
    let mated = Position::from_start_and_moves(
        &["f2f3", "e7e6", "g2g4", "d8h4"].iter().map(|s| s.to_string()).collect::<Vec<_>>(),
    )
    .unwrap();
    let stalemate = pos("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    let bare = pos("8/8/4k3/8/8/4K3/8/8 w - - 0 1");

    let res = Searcher::new().search(&mated, SearchParams::with_depth(3));
    assert!(res.best_move.is_none());
    assert_eq!(res.score, f64::NEG_INFINITY);

    for p in [stalemate, bare] {
        let res = Searcher::new().search(&p, SearchParams::with_depth(3));
        assert!(res.best_move.is_none());
        assert_eq!(res.score, 0.0);
    }
}

#[test]
fn full_move_depth_is_two_plies() {
    assert_eq!(SearchParams::from_full_moves(2).depth, 4);
    assert_eq!(SearchParams::default().depth, 4);
    assert!(SearchParams::default().order_moves);
}

#[test]
fn search_is_deterministic() {
    let p = pos("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3");
    let a = Searcher::new().search(&p, SearchParams::with_depth(3));
    let b = Searcher::new().search(&p, SearchParams::with_depth(3));
    assert_eq!(a.best_move.map(|m| m.uci()), b.best_move.map(|m| m.uci()));
    assert_eq!(a.score, b.score);
    assert_eq!(a.nodes, b.nodes);
}
