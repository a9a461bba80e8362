//! The per-frame event threaded from the player through every obstacle

use serde::{Deserialize, Serialize};

/// Exactly one message flows through a frame's obstacle pipeline.
///
/// Each obstacle either passes it along or replaces it; the level reads
/// whatever comes out of the last obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Where the player is this frame
    PlayerMovement { position: u32, attacking: bool },
    /// The player ran into an obstacle at `position` without attacking
    ObstacleCollision { position: u32 },
    /// The player stepped onto the goal
    GoalReached,
}

impl Message {
    /// True for messages that end a level
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Message::ObstacleCollision { .. } | Message::GoalReached
        )
    }
}
