//! The player token
//!
//! Movement is gated by its own timer; attacks run an attack timer followed
//! by a recovery period before the next attack is allowed.

use serde::{Deserialize, Serialize};

use super::light::{Color, Light};
use super::message::Message;
use super::timer::Timer;
use crate::consts::*;
use crate::input::ControllerInput;

/// Facing along the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
    #[default]
    Idle,
}

impl Direction {
    /// Facing selected by a raw x-axis sample
    pub fn from_tilt(x: u32) -> Self {
        if x > X_TOLERANCE_MAX {
            Direction::Right
        } else if x < X_TOLERANCE_MIN {
            Direction::Left
        } else {
            Direction::Idle
        }
    }

    /// One step from `position`, saturating at zero
    pub fn step(self, position: u32) -> u32 {
        match self {
            Direction::Left => position.saturating_sub(1),
            Direction::Right => position + 1,
            Direction::Idle => position,
        }
    }
}

/// Player state machine; each state owns the timer it is waiting on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerState {
    Idle,
    Attacking { attack: Timer, recovery: Timer },
    Recovering { recovery: Timer },
    /// Absorbing; only entered through [`Player::apply`]
    Dead,
}

impl PlayerState {
    pub fn is_attacking(&self) -> bool {
        matches!(self, PlayerState::Attacking { .. })
    }

    fn color(&self) -> Option<Color> {
        match self {
            PlayerState::Idle => Some(PLAYER_IDLE_COLOR),
            PlayerState::Attacking { .. } => Some(PLAYER_ATTACK_COLOR),
            PlayerState::Recovering { .. } => Some(PLAYER_RECOVERY_COLOR),
            PlayerState::Dead => None,
        }
    }

    /// Advance whichever timer the current state is waiting on
    fn advance(self, now: u32) -> Self {
        match self {
            PlayerState::Attacking { attack, .. } => {
                // The recovery window only starts counting once the attack ends.
                let recovery = Timer::started(PLAYER_DEBUFF_MS, now);
                let (attack, done) = attack.tick(now);
                if done {
                    log::debug!("attack complete at {now}");
                    PlayerState::Recovering { recovery }
                } else {
                    PlayerState::Attacking { attack, recovery }
                }
            }
            PlayerState::Recovering { recovery } => {
                let (recovery, done) = recovery.tick(now);
                if done {
                    PlayerState::Idle
                } else {
                    PlayerState::Recovering { recovery }
                }
            }
            state @ (PlayerState::Idle | PlayerState::Dead) => state,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    position: u32,
    direction: Direction,
    state: PlayerState,
    movement_timer: Timer,
    lights: Vec<Light>,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Player {
    pub fn new(position: u32) -> Self {
        Self {
            position,
            direction: Direction::Idle,
            state: PlayerState::Idle,
            movement_timer: Timer::new(PLAYER_MOVEMENT_MS),
            lights: Vec::with_capacity(1),
        }
    }

    pub fn position(&self) -> u32 {
        self.position
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn is_dead(&self) -> bool {
        self.state == PlayerState::Dead
    }

    /// Lights produced by the last frame
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Advance the player one frame and report where it stands.
    pub fn frame(mut self, now: u32, input: Option<ControllerInput>) -> (Self, Message) {
        self.lights.clear();

        if self.is_dead() {
            let message = Message::PlayerMovement {
                position: self.position,
                attacking: false,
            };
            return (self, message);
        }

        let (movement_timer, did_move) = self.movement_timer.tick(now);
        self.movement_timer = if did_move {
            Timer::started(PLAYER_MOVEMENT_MS, now)
        } else {
            movement_timer
        };
        if did_move {
            self.position = self.direction.step(self.position);
        }

        self.state = self.state.advance(now);

        if let Some(input) = input {
            if input.is_attacking() && self.state == PlayerState::Idle {
                log::debug!("starting attack (duration {PLAYER_ATTACK_MS}) at {now}");
                self.state = PlayerState::Attacking {
                    attack: Timer::started(PLAYER_ATTACK_MS, now),
                    recovery: Timer::started(PLAYER_DEBUFF_MS, now),
                };
            }

            let direction = Direction::from_tilt(input.x);
            if direction != self.direction {
                log::debug!("facing {:?} ({})", direction, input.x);
            }
            self.direction = direction;
        }

        if let Some(color) = self.state.color() {
            self.lights.push(Light::new(self.position, color));
        }

        let message = Message::PlayerMovement {
            position: self.position,
            attacking: self.state.is_attacking(),
        };
        (self, message)
    }

    /// Apply the message that came out of the obstacle pipeline.
    ///
    /// A collision kills the player; everything else leaves it untouched.
    pub fn apply(mut self, message: &Message) -> Self {
        if let Message::ObstacleCollision { position } = message {
            log::debug!("player is dead (hit at {position})");
            self.state = PlayerState::Dead;
        }
        self
    }
}
