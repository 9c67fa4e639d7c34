use serde::{Deserialize, Serialize};

/// Terminal classification of a position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Ongoing,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    Repetition,
    MoveRule,
}

impl Status {
    pub fn is_terminal(self) -> bool { self != Status::Ongoing }

    /// True for every terminal status that ends the game without a winner.
    pub fn is_draw(self) -> bool {
        matches!(
            self,
            Status::Stalemate | Status::InsufficientMaterial | Status::Repetition | Status::MoveRule
        )
    }
}
