use gambit::perft::{divide, perft};
use gambit::Position;

#[test]
fn perft_startpos_small_depths() {
    let p = Position::startpos();
    assert_eq!(perft(&p, 1), 20);
    assert_eq!(perft(&p, 2), 400);
    assert_eq!(perft(&p, 3), 8902);
}

#[test]
fn perft_kiwipete() {
    let p = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1").unwrap();
    assert_eq!(perft(&p, 1), 48);
    assert_eq!(perft(&p, 2), 2039);
}

#[test]
fn perft_rook_endgame() {
    let p = Position::from_fen("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1").unwrap();
    assert_eq!(perft(&p, 1), 14);
    assert_eq!(perft(&p, 2), 191);
    assert_eq!(perft(&p, 3), 2812);
}

#[test]
fn divide_sums_to_perft() {
    let p = Position::startpos();
    let counts = divide(&p, 2);
    assert_eq!(counts.len(), 20);
    assert_eq!(counts.iter().map(|(_, n)| n).sum::<u64>(), 400);
    assert!(counts.iter().any(|(mv, n)| mv == "e2e4" && *n == 20));
}
