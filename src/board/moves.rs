use cozy_chess::{File, Move as RawMove, Piece, Square};
use std::fmt;

/// A legal move tagged with the facts move ordering cares about.
///
/// Two moves compare equal when they share origin and destination squares;
/// promotion choice and tags are not part of the identity.
#[derive(Clone, Copy, Debug)]
pub struct Move {
    raw: RawMove,
    capture: bool,
    check: bool,
    castle: bool,
}

impl Move {
    pub(crate) fn new(raw: RawMove, capture: bool, check: bool, castle: bool) -> Self {
        Self { raw, capture, check, castle }
    }

    /// The underlying cozy-chess move (castling encoded as king-takes-rook).
    pub fn raw(&self) -> RawMove { self.raw }
    pub fn from(&self) -> Square { self.raw.from }
    pub fn to(&self) -> Square { self.raw.to }
    pub fn promotion(&self) -> Option<Piece> { self.raw.promotion }
    pub fn is_capture(&self) -> bool { self.capture }
    pub fn gives_check(&self) -> bool { self.check }
    pub fn is_castle(&self) -> bool { self.castle }

    /// Standard UCI text; castling is written as the king's two-square step.
    pub fn uci(&self) -> String {
        format!("{}", self)
    }

    /// Text in cozy-chess's own notation (castling as king-takes-rook).
    pub fn raw_uci(&self) -> String {
        format!("{}", self.raw)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.raw.from == other.raw.from && self.raw.to == other.raw.to
    }
}

impl Eq for Move {}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.castle {
            return write!(f, "{}", self.raw);
        }
        let kingside = self.raw.to.file() as usize > self.raw.from.file() as usize;
        let file = if kingside { File::G } else { File::C };
        let king_to = Square::new(file, self.raw.from.rank());
        write!(f, "{}{}", self.raw.from, king_to)
    }
}
