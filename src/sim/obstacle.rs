//! Obstacles: patrolling hazards, the goal, and what is left of defeated pawns
//!
//! Every obstacle sees the message produced by whatever ran before it this
//! frame and hands back the message for whatever runs next.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::light::Light;
use super::message::Message;
use super::player::Direction;
use super::timer::Timer;
use crate::consts::*;

/// Back-and-forth movement around an origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patrol {
    pub position: u32,
    pub origin: u32,
    pub direction: Direction,
    movement_timer: Timer,
}

impl Patrol {
    pub fn new(origin: u32) -> Self {
        Self {
            position: origin,
            origin,
            direction: Direction::Right,
            movement_timer: Timer::new(ENEMY_MOVEMENT_MS),
        }
    }

    /// Step once per movement interval, turning around on reaching
    /// `origin +/- PATROL_DISTANCE` (both edges inclusive) or position 0.
    fn advance(mut self, now: u32) -> Self {
        let (timer, moved) = self.movement_timer.tick(now);
        if !moved {
            self.movement_timer = timer;
            return self;
        }
        self.movement_timer = Timer::started(ENEMY_MOVEMENT_MS, now);
        self.position = self.direction.step(self.position);

        match self.direction {
            Direction::Right if self.position >= self.origin + PATROL_DISTANCE => {
                self.direction = Direction::Left;
            }
            Direction::Left
                if self.position == 0 || self.position + PATROL_DISTANCE <= self.origin =>
            {
                self.direction = Direction::Right;
            }
            _ => {}
        }
        self
    }

    /// Positions covered by a band of `half_width` lights on each side
    fn band(&self, half_width: u32) -> RangeInclusive<u32> {
        self.position.saturating_sub(half_width)..=self.position + half_width
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Single-light patroller; dies when attacked
    Pawn(Patrol),
    /// Wide patroller; cannot be killed
    Snake(Patrol),
    Goal { position: u32 },
    /// A defeated pawn
    Corpse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    kind: ObstacleKind,
    lights: Vec<Light>,
}

impl Obstacle {
    pub fn new(kind: ObstacleKind) -> Self {
        Self {
            kind,
            lights: Vec::new(),
        }
    }

    pub fn pawn(position: u32) -> Self {
        Self::new(ObstacleKind::Pawn(Patrol::new(position)))
    }

    pub fn snake(position: u32) -> Self {
        Self::new(ObstacleKind::Snake(Patrol::new(position)))
    }

    pub fn goal(position: u32) -> Self {
        Self::new(ObstacleKind::Goal { position })
    }

    /// Build the obstacle a layout symbol stands for
    pub fn from_symbol(symbol: char, position: u32) -> Option<Self> {
        let obstacle = match symbol {
            'x' => Self::pawn(position),
            's' => Self::snake(position),
            'g' => Self::goal(position),
            _ => return None,
        };
        log::debug!("creating {:?} at {}", obstacle.kind, position);
        Some(obstacle)
    }

    pub fn kind(&self) -> &ObstacleKind {
        &self.kind
    }

    /// Lights produced by the last frame
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Advance one frame, reacting to the message from upstream.
    pub fn frame(mut self, now: u32, message: Message) -> (Self, Message) {
        self.lights.clear();

        let (kind, message) = match self.kind {
            ObstacleKind::Pawn(patrol) => {
                if let Message::PlayerMovement {
                    position,
                    attacking,
                } = message
                {
                    if position == patrol.position {
                        if attacking {
                            log::debug!("pawn at {position} defeated");
                            return (Self::new(ObstacleKind::Corpse), message);
                        }
                        self.lights.push(Light::new(patrol.position, PAWN_COLOR));
                        return (
                            self,
                            Message::ObstacleCollision {
                                position: patrol.position,
                            },
                        );
                    }
                }

                let patrol = patrol.advance(now);
                self.lights.push(Light::new(patrol.position, PAWN_COLOR));
                (ObstacleKind::Pawn(patrol), message)
            }
            ObstacleKind::Snake(patrol) => {
                let hit = match message {
                    Message::PlayerMovement {
                        position,
                        attacking: false,
                    } if patrol.band(SNAKE_HALF_WIDTH).any(|p| p == position) => {
                        Some(Message::ObstacleCollision { position })
                    }
                    _ => None,
                };

                let patrol = if hit.is_some() { patrol } else { patrol.advance(now) };
                self.lights.extend(
                    patrol
                        .band(SNAKE_HALF_WIDTH)
                        .map(|p| Light::new(p, SNAKE_COLOR)),
                );
                (ObstacleKind::Snake(patrol), hit.unwrap_or(message))
            }
            ObstacleKind::Goal { position } => {
                self.lights.push(Light::new(position, GOAL_COLOR));
                let message = match message {
                    Message::PlayerMovement { position: p, .. } if p == position => {
                        Message::GoalReached
                    }
                    other => other,
                };
                (ObstacleKind::Goal { position }, message)
            }
            ObstacleKind::Corpse => (ObstacleKind::Corpse, message),
        };

        self.kind = kind;
        (self, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn walking(position: u32) -> Message {
        Message::PlayerMovement {
            position,
            attacking: false,
        }
    }

    fn attacking(position: u32) -> Message {
        Message::PlayerMovement {
            position,
            attacking: true,
        }
    }

    /// Run a lone obstacle for `steps` movement intervals with no player nearby
    fn patrol_positions(obstacle: Obstacle, steps: u32) -> Vec<u32> {
        let far = walking(10_000);
        let (mut obstacle, _) = obstacle.frame(0, far);
        let mut positions = Vec::new();
        for k in 1..=steps {
            let (next, _) = obstacle.frame(k * ENEMY_MOVEMENT_MS, far);
            obstacle = next;
            match obstacle.kind() {
                ObstacleKind::Pawn(patrol) | ObstacleKind::Snake(patrol) => {
                    positions.push(patrol.position)
                }
                other => panic!("unexpected {other:?}"),
            }
        }
        positions
    }

    #[test]
    fn test_from_symbol() {
        assert!(matches!(
            Obstacle::from_symbol('x', 3).map(|o| *o.kind()),
            Some(ObstacleKind::Pawn(Patrol { position: 3, .. }))
        ));
        assert!(matches!(
            Obstacle::from_symbol('s', 4).map(|o| *o.kind()),
            Some(ObstacleKind::Snake(_))
        ));
        assert_eq!(
            Obstacle::from_symbol('g', 5).map(|o| *o.kind()),
            Some(ObstacleKind::Goal { position: 5 })
        );
        assert!(Obstacle::from_symbol('?', 1).is_none());
        assert!(Obstacle::from_symbol(' ', 1).is_none());
    }

    #[test]
    fn test_pawn_defeated_by_attack() {
        let (pawn, message) = Obstacle::pawn(7).frame(0, attacking(7));
        assert_eq!(*pawn.kind(), ObstacleKind::Corpse);
        assert_eq!(message, attacking(7));
        assert!(pawn.lights().is_empty());

        let (corpse, message) = pawn.frame(500, walking(7));
        assert_eq!(*corpse.kind(), ObstacleKind::Corpse);
        assert_eq!(message, walking(7));
        assert!(corpse.lights().is_empty());
    }

    #[test]
    fn test_pawn_collides_with_walking_player() {
        let (pawn, message) = Obstacle::pawn(7).frame(0, walking(7));
        assert!(matches!(pawn.kind(), ObstacleKind::Pawn(_)));
        assert_eq!(message, Message::ObstacleCollision { position: 7 });
        assert_eq!(pawn.lights(), &[Light::new(7, PAWN_COLOR)]);
    }

    #[test]
    fn test_pawn_checks_position_before_stepping() {
        let (pawn, _) = Obstacle::pawn(7).frame(0, walking(0));
        // The pawn steps to 8 this frame, but the player is compared against 7
        let (pawn, message) = pawn.frame(ENEMY_MOVEMENT_MS, walking(8));
        assert_eq!(message, walking(8));
        assert_eq!(pawn.lights(), &[Light::new(8, PAWN_COLOR)]);

        let (_, message) = pawn.frame(ENEMY_MOVEMENT_MS + 1, walking(8));
        assert_eq!(message, Message::ObstacleCollision { position: 8 });
    }

    #[test]
    fn test_pawn_ignores_other_messages() {
        let collision = Message::ObstacleCollision { position: 7 };
        let (pawn, message) = Obstacle::pawn(7).frame(0, collision);
        assert_eq!(message, collision);
        assert!(matches!(pawn.kind(), ObstacleKind::Pawn(_)));

        let (_, message) = Obstacle::pawn(7).frame(0, Message::GoalReached);
        assert_eq!(message, Message::GoalReached);
    }

    #[test]
    fn test_patrol_turns_at_inclusive_edges() {
        let positions = patrol_positions(Obstacle::pawn(20), 4 * PATROL_DISTANCE);
        let d = PATROL_DISTANCE as usize;

        // Out to origin + d, back through origin to origin - d, then out again
        assert_eq!(positions[d - 1], 20 + PATROL_DISTANCE);
        assert_eq!(positions[d], 20 + PATROL_DISTANCE - 1);
        assert_eq!(positions[3 * d - 1], 20 - PATROL_DISTANCE);
        assert_eq!(positions[3 * d], 20 - PATROL_DISTANCE + 1);
        assert_eq!(positions.iter().max(), Some(&(20 + PATROL_DISTANCE)));
        assert_eq!(positions.iter().min(), Some(&(20 - PATROL_DISTANCE)));
    }

    #[test]
    fn test_patrol_turns_at_zero() {
        let positions = patrol_positions(Obstacle::pawn(2), 4 * PATROL_DISTANCE);
        assert_eq!(positions.iter().min(), Some(&0));
        assert_eq!(positions.iter().max(), Some(&(2 + PATROL_DISTANCE)));
        let zero = positions.iter().position(|&p| p == 0).unwrap();
        assert_eq!(positions[zero + 1], 1);
    }

    #[test]
    fn test_snake_emits_band() {
        let (snake, _) = Obstacle::snake(10).frame(0, walking(100));
        let positions: Vec<u32> = snake.lights().iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![8, 9, 10, 11, 12]);
        assert!(snake.lights().iter().all(|l| l.color == SNAKE_COLOR));

        let (snake, _) = Obstacle::snake(1).frame(0, walking(100));
        let positions: Vec<u32> = snake.lights().iter().map(|l| l.position).collect();
        assert_eq!(positions, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_snake_collides_anywhere_in_band() {
        for p in 8..=12 {
            let (_, message) = Obstacle::snake(10).frame(0, walking(p));
            assert_eq!(message, Message::ObstacleCollision { position: p });
        }
        let (_, message) = Obstacle::snake(10).frame(0, walking(13));
        assert_eq!(message, walking(13));
    }

    #[test]
    fn test_snake_survives_attack() {
        let (snake, message) = Obstacle::snake(10).frame(0, attacking(9));
        assert!(matches!(snake.kind(), ObstacleKind::Snake(_)));
        assert_eq!(message, attacking(9));
        assert_eq!(snake.lights().len(), 5);
    }

    #[test]
    fn test_goal_reached() {
        let (goal, message) = Obstacle::goal(5).frame(0, walking(5));
        assert_eq!(message, Message::GoalReached);
        assert_eq!(goal.lights(), &[Light::new(5, GOAL_COLOR)]);

        let (_, message) = Obstacle::goal(5).frame(0, attacking(5));
        assert_eq!(message, Message::GoalReached);

        let (goal, message) = Obstacle::goal(5).frame(0, walking(4));
        assert_eq!(message, walking(4));
        assert_eq!(*goal.kind(), ObstacleKind::Goal { position: 5 });
    }

    #[test]
    fn test_goal_does_not_override_collision() {
        let collision = Message::ObstacleCollision { position: 5 };
        let (_, message) = Obstacle::goal(5).frame(0, collision);
        assert_eq!(message, collision);
    }
}
