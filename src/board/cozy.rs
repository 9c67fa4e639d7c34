use cozy_chess::{Board as CozyBoard, Color, Piece, Square};
use std::fmt;
use std::sync::Arc;

use crate::board::{Move, Status};
use crate::error::PositionError;

/// Zobrist hashes of the ancestors of a position, newest first.
/// Shared between sibling positions, cut at irreversible moves.
#[derive(Debug)]
struct Trail {
    hash: u64,
    prev: Option<Arc<Trail>>,
}

/// An immutable chess position: the board plus enough history to detect
/// repetitions. `apply` returns a new value and never touches `self`.
#[derive(Clone, Debug)]
pub struct Position {
    board: CozyBoard,
    trail: Option<Arc<Trail>>,
}

impl Position {
    pub fn startpos() -> Self {
        Self::from_board(CozyBoard::default())
    }

    pub fn from_board(board: CozyBoard) -> Self {
        Self { board, trail: None }
    }

    pub fn from_fen(fen: &str) -> Result<Self, PositionError> {
        CozyBoard::from_fen(fen.trim(), false)
            .map(Self::from_board)
            .map_err(|e| PositionError::InvalidFen { fen: fen.to_string(), reason: format!("{e:?}") })
    }

    /// Replays UCI moves from the standard starting position.
    pub fn from_start_and_moves(moves: &[String]) -> Result<Self, PositionError> {
        Self::startpos().play_all(moves)
    }

    pub fn play_all(&self, moves: &[String]) -> Result<Self, PositionError> {
        let mut pos = self.clone();
        for m in moves {
            pos = pos.play_uci(m)?;
        }
        Ok(pos)
    }

    /// Plays a move given as UCI text. Castling is accepted both as the
    /// king's two-square step (`e1g1`) and as king-takes-rook (`e1h1`).
    pub fn play_uci(&self, mv_uci: &str) -> Result<Self, PositionError> {
        let text = mv_uci.trim();
        self.legal_moves()
            .into_iter()
            .find(|m| m.uci() == text || m.raw_uci() == text)
            .map(|m| self.apply(&m))
            .ok_or_else(|| PositionError::IllegalMove { mv: text.to_string(), fen: self.fen() })
    }

    pub fn board(&self) -> &CozyBoard { &self.board }
    pub fn side_to_move(&self) -> Color { self.board.side_to_move() }
    pub fn hash(&self) -> u64 { self.board.hash() }
    pub fn halfmove_clock(&self) -> u8 { self.board.halfmove_clock() }
    pub fn fullmove_number(&self) -> u16 { self.board.fullmove_number() }
    pub fn fen(&self) -> String { format!("{}", self.board) }

    pub fn piece_at(&self, sq: Square) -> Option<(Piece, Color)> {
        Some((self.board.piece_on(sq)?, self.board.color_on(sq)?))
    }

    /// Every occupied square with its piece, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece, Color)> + '_ {
        self.board
            .occupied()
            .into_iter()
            .filter_map(move |sq| self.piece_at(sq).map(|(p, c)| (sq, p, c)))
    }

    /// Legal moves in generator order, tagged with capture/check/castle.
    /// Empty once the game is over, draw rules included.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        if self.draw_by_rule().is_some() {
            return moves;
        }
        let us = self.board.side_to_move();
        let ours = self.board.colors(us);
        let theirs = self.board.colors(!us);
        self.board.generate_moves(|piece_moves| {
            let piece = piece_moves.piece;
            for raw in piece_moves {
                let castle = piece == Piece::King && ours.has(raw.to);
                let en_passant = piece == Piece::Pawn && raw.from.file() != raw.to.file();
                let capture = theirs.has(raw.to) || en_passant;
                let mut child = self.board.clone();
                child.play_unchecked(raw);
                let check = !child.checkers().is_empty();
                moves.push(Move::new(raw, capture, check, castle));
            }
            false
        });
        moves
    }

    /// The position after `mv`, which must be legal here.
    pub fn apply(&self, mv: &Move) -> Self {
        debug_assert!(self.board.is_legal(mv.raw()), "illegal move {} in {}", mv, self.fen());
        let mut board = self.board.clone();
        board.play_unchecked(mv.raw());
        let trail = if board.halfmove_clock() == 0 {
            None
        } else {
            Some(Arc::new(Trail { hash: self.board.hash(), prev: self.trail.clone() }))
        };
        Self { board, trail }
    }

    pub fn status(&self) -> Status {
        if !self.has_moves() {
            return if self.board.checkers().is_empty() { Status::Stalemate } else { Status::Checkmate };
        }
        self.draw_by_rule().unwrap_or(Status::Ongoing)
    }

    /// How many times the current position has occurred, counting itself.
    pub fn repetitions(&self) -> usize {
        let key = self.board.hash();
        let window = self.board.halfmove_clock() as usize;
        let mut count = 1;
        let mut node = self.trail.as_deref();
        let mut steps = 0;
        while let Some(t) = node {
            if steps >= window { break; }
            if t.hash == key { count += 1; }
            steps += 1;
            node = t.prev.as_deref();
        }
        count
    }

    pub fn insufficient_material(&self) -> bool {
        let b = &self.board;
        let heavy = b.pieces(Piece::Pawn) | b.pieces(Piece::Rook) | b.pieces(Piece::Queen);
        if !heavy.is_empty() {
            return false;
        }
        let knights = b.pieces(Piece::Knight);
        let bishops = b.pieces(Piece::Bishop);
        if (knights | bishops).len() <= 1 {
            return true;
        }
        // K+B vs K+B with both bishops on the same square color
        if knights.is_empty() && bishops.len() == 2 && (bishops & b.colors(Color::White)).len() == 1 {
            let mut shades = bishops.into_iter().map(square_shade);
            return shades.next() == shades.next();
        }
        false
    }

    fn has_moves(&self) -> bool {
        self.board.generate_moves(|moves| !moves.is_empty())
    }

    fn draw_by_rule(&self) -> Option<Status> {
        if self.insufficient_material() {
            Some(Status::InsufficientMaterial)
        } else if self.repetitions() >= 3 {
            Some(Status::Repetition)
        } else if self.board.halfmove_clock() >= 100 {
            Some(Status::MoveRule)
        } else {
            None
        }
    }
}

impl Default for Position {
    fn default() -> Self { Self::startpos() }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

fn square_shade(sq: Square) -> usize {
    (sq.file() as usize + sq.rank() as usize) % 2
}
