use cozy_chess::{Board, Color, Piece};

use crate::board::{Position, Status};

/// Relative advantage in pawns. Won and lost positions are +/- infinity.
pub type Score = f64;

pub const WIN_SCORE: Score = f64::INFINITY;
pub const LOSS_SCORE: Score = f64::NEG_INFINITY;
pub const DRAW_SCORE: Score = 0.0;

const CP_PER_PAWN: f64 = 100.0;

// Centipawns, indexed by `Piece as usize`: pawn, knight, bishop, rook, queen, king.
const PIECE_VALUES: [i32; 6] = [100, 300, 300, 500, 900, 0];

// Piece-square tables, written from White's side with a8 at index 0.
#[rustfmt::skip]
const PAWN_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
    50, 50, 50, 50, 50, 50, 50, 50,
    10, 10, 20, 30, 30, 20, 10, 10,
     5,  5, 10, 25, 25, 10,  5,  5,
     0,  0,  0, 20, 20,  0,  0,  0,
     5, -5,-10,  0,  0,-10, -5,  5,
     5, 10, 10,-20,-20, 10, 10,  5,
     0,  0,  0,  0,  0,  0,  0,  0,
];

#[rustfmt::skip]
const KNIGHT_TABLE: [i32; 64] = [
    -50,-40,-30,-30,-30,-30,-40,-50,
    -40,-20,  0,  0,  0,  0,-20,-40,
    -30,  0, 10, 15, 15, 10,  0,-30,
    -30,  5, 15, 20, 20, 15,  5,-30,
    -30,  0, 15, 20, 20, 15,  0,-30,
    -30,  5, 10, 15, 15, 10,  5,-30,
    -40,-20,  0,  5,  5,  0,-20,-40,
    -50,-40,-30,-30,-30,-30,-40,-50,
];

#[rustfmt::skip]
const BISHOP_TABLE: [i32; 64] = [
    -20,-10,-10,-10,-10,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5, 10, 10,  5,  0,-10,
    -10,  5,  5, 10, 10,  5,  5,-10,
    -10,  0, 10, 10, 10, 10,  0,-10,
    -10, 10, 10, 10, 10, 10, 10,-10,
    -10,  5,  0,  0,  0,  0,  5,-10,
    -20,-10,-10,-10,-10,-10,-10,-20,
];

#[rustfmt::skip]
const ROOK_TABLE: [i32; 64] = [
     0,  0,  0,  0,  0,  0,  0,  0,
     5, 10, 10, 10, 10, 10, 10,  5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
    -5,  0,  0,  0,  0,  0,  0, -5,
     0,  0,  0,  5,  5,  0,  0,  0,
];

#[rustfmt::skip]
const QUEEN_TABLE: [i32; 64] = [
    -20,-10,-10, -5, -5,-10,-10,-20,
    -10,  0,  0,  0,  0,  0,  0,-10,
    -10,  0,  5,  5,  5,  5,  0,-10,
     -5,  0,  5,  5,  5,  5,  0, -5,
      0,  0,  5,  5,  5,  5,  0, -5,
    -10,  5,  5,  5,  5,  5,  0,-10,
    -10,  0,  5,  0,  0,  0,  0,-10,
    -20,-10,-10, -5, -5,-10,-10,-20,
];

#[rustfmt::skip]
const KING_TABLE: [i32; 64] = [
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -30,-40,-40,-50,-50,-40,-40,-30,
    -20,-30,-30,-40,-40,-30,-30,-20,
    -10,-20,-20,-20,-20,-20,-20,-10,
     20, 20,  0,  0,  0,  0, 20, 20,
     20, 30, 10,  0,  0, 10, 30, 20,
];

const PIECE_SQUARE_TABLES: [&[i32; 64]; 6] =
    [&PAWN_TABLE, &KNIGHT_TABLE, &BISHOP_TABLE, &ROOK_TABLE, &QUEEN_TABLE, &KING_TABLE];

/// Table index for a piece of `color` on `(file, rank)`. White reads the
/// tables with the rank flipped, so both colors see their own side at the bottom.
fn table_index(color: Color, file: usize, rank: usize) -> usize {
    let row = if color == Color::White { 7 - rank } else { rank };
    row * 8 + file
}

fn material_cp(board: &Board, color: Color) -> i32 {
    Piece::ALL
        .iter()
        .map(|&p| (board.colors(color) & board.pieces(p)).len() as i32 * PIECE_VALUES[p as usize])
        .sum()
}

fn positional_cp(board: &Board, color: Color) -> i32 {
    let mut total = 0;
    for &piece in Piece::ALL.iter() {
        let table = PIECE_SQUARE_TABLES[piece as usize];
        for sq in board.colors(color) & board.pieces(piece) {
            total += table[table_index(color, sq.file() as usize, sq.rank() as usize)];
        }
    }
    total
}

fn heuristic_cp(board: &Board, color: Color) -> i32 {
    material_cp(board, color) + positional_cp(board, color)
}

/// Material of `color` in pawns (king excluded).
pub fn material(board: &Board, color: Color) -> Score {
    material_cp(board, color) as f64 / CP_PER_PAWN
}

/// Piece-square bonus of `color` in pawns.
pub fn positional_bonus(board: &Board, color: Color) -> Score {
    positional_cp(board, color) as f64 / CP_PER_PAWN
}

/// Material plus positional bonus for one side, ignoring the opponent.
pub fn heuristic(board: &Board, color: Color) -> Score {
    heuristic_cp(board, color) as f64 / CP_PER_PAWN
}

/// Scores `position` for `color`.
///
/// Draws are 0. A checkmate is lost for the side to move and won for the
/// other side. Anything else is own material and placement minus the
/// opponent's, so `evaluate(p, c) == -evaluate(p, !c)` always holds.
pub fn evaluate(position: &Position, color: Color) -> Score {
    match position.status() {
        Status::Checkmate => {
            if position.side_to_move() == color { LOSS_SCORE } else { WIN_SCORE }
        }
        s if s.is_draw() => DRAW_SCORE,
        _ => {
            let board = position.board();
            let diff = heuristic_cp(board, color) - heuristic_cp(board, !color);
            diff as f64 / CP_PER_PAWN
        }
    }
}
