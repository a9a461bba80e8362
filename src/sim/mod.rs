//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only arrives as caller-supplied millisecond timestamps
//! - Every update consumes the old state and returns the new one
//! - Stable iteration order (layout order for obstacles)
//! - No hardware or transport dependencies

pub mod animation;
pub mod level;
pub mod light;
pub mod message;
pub mod obstacle;
pub mod player;
pub mod timer;

pub use animation::Animation;
pub use level::{Level, LevelState};
pub use light::{Color, Light};
pub use message::Message;
pub use obstacle::{Obstacle, ObstacleKind};
pub use player::{Direction, Player, PlayerState};
pub use timer::Timer;
