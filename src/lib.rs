//! Beetle Lights - a one-dimensional game played on an addressable LED strip
//!
//! Core modules:
//! - `sim`: Deterministic frame simulation (timers, player, obstacles, levels)
//! - `input`: Controller samples and their wire format
//! - `levels`: Level catalog parsed from layout text
//! - `game`: Top-level context that swaps levels as they resolve
//! - `strip`: Framebuffer the frame lights are applied to
//! - `settings`: Runner configuration
//! - `demo`: Seeded controller for headless runs

pub mod demo;
pub mod game;
pub mod input;
pub mod levels;
pub mod settings;
pub mod sim;
pub mod strip;

pub use game::Game;
pub use input::{ControllerInput, InputError};
pub use levels::{CatalogError, LevelCatalog};
pub use settings::{Settings, SettingsError};
pub use strip::Strip;

/// Game configuration constants
pub mod consts {
    use crate::sim::Color;

    /// Milliseconds it takes the player to move a single tile
    pub const PLAYER_MOVEMENT_MS: u32 = 10;
    /// How long an attack lasts
    pub const PLAYER_ATTACK_MS: u32 = 1000;
    /// Recovery period after an attack, during which the player cannot attack
    pub const PLAYER_DEBUFF_MS: u32 = 2000;

    /// Tilt thresholds on the raw x axis (12-bit ADC, centered around 2048)
    pub const X_TOLERANCE_MIN: u32 = 1000;
    pub const X_TOLERANCE_MAX: u32 = 3000;

    /// Milliseconds between obstacle steps
    pub const ENEMY_MOVEMENT_MS: u32 = 100;
    /// How far a patrolling obstacle wanders from its origin, in tiles
    pub const PATROL_DISTANCE: u32 = 10;
    /// Lights on each side of a snake's center
    pub const SNAKE_HALF_WIDTH: u32 = 2;

    /// Maximum obstacles a level will accept from its layout
    pub const OBSTACLE_CAPACITY: usize = 15;

    /// Milliseconds between frame statistics in the log
    pub const DEBUG_INTERVAL_MS: u32 = 1000;

    /// Completion animation timing
    pub const ANIMATION_TOTAL_MS: u32 = 3000;
    pub const ANIMATION_STEP_MS: u32 = 30;
    /// Maximum lights an animation emits per frame
    pub const ANIMATION_LIGHT_CAPACITY: usize = 100;

    pub const PLAYER_IDLE_COLOR: Color = Color::new(255, 255, 255);
    pub const PLAYER_ATTACK_COLOR: Color = Color::new(0, 255, 0);
    pub const PLAYER_RECOVERY_COLOR: Color = Color::new(100, 0, 100);
    pub const PAWN_COLOR: Color = Color::new(255, 0, 0);
    pub const SNAKE_COLOR: Color = Color::new(100, 100, 0);
    pub const GOAL_COLOR: Color = Color::new(200, 200, 200);
    pub const SUCCESS_COLOR: Color = Color::new(0, 255, 0);
    pub const FAILURE_COLOR: Color = Color::new(255, 0, 0);
}
