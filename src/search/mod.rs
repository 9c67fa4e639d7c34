pub mod alphabeta;
pub mod eval;
pub mod ordering;

pub use alphabeta::{search, SearchParams, SearchResult, Searcher};
pub use eval::{evaluate, Score};
pub use ordering::order;
