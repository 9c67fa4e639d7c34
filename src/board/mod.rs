//! Rules adapter: cozy-chess boards behind an immutable position type.

pub mod cozy;
pub mod moves;
pub mod status;

pub use cozy::Position;
pub use moves::Move;
pub use status::Status;
