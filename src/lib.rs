//! Fixed-depth negamax chess engine: piece-square evaluation, alpha-beta
//! search with check/capture ordering, on top of cozy-chess move generation.
pub mod board;
pub mod error;
pub mod perft;
pub mod search;
pub mod selfplay;

pub use board::{Move, Position, Status};
pub use error::PositionError;
pub use search::{evaluate, search, Score, SearchParams, SearchResult, Searcher};
