//! One playthrough of a layout
//!
//! While running, each frame threads a single [`Message`] from the player
//! through every obstacle in layout order. The first obstacle to turn it
//! into a collision or a goal decides the frame; the level then swaps the
//! player and obstacles for a completion animation.

use serde::{Deserialize, Serialize};

use super::animation::Animation;
use super::light::Light;
use super::message::Message;
use super::obstacle::Obstacle;
use super::player::Player;
use crate::consts::*;
use crate::input::ControllerInput;

/// Result reported to whoever drives the level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelState {
    InProgress,
    Failed,
    Complete,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunningState {
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletedState {
    pub animation: Animation,
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LevelPhase {
    Running(RunningState),
    Completed(CompletedState),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    phase: LevelPhase,
    boundary: u32,
    /// Lights for the current frame
    lights: Vec<Light>,
}

impl Default for Level {
    fn default() -> Self {
        Self::new("", 0)
    }
}

impl Level {
    /// Build a level from one line of layout text.
    ///
    /// Each character index within `[0, boundary)` is a strip position.
    /// Unknown symbols are skipped; the layout ends at a newline or NUL.
    pub fn new(layout: &str, boundary: u32) -> Self {
        let mut obstacles = Vec::with_capacity(OBSTACLE_CAPACITY);

        for (position, symbol) in (0..boundary).zip(layout.chars()) {
            if symbol == '\n' || symbol == '\0' {
                break;
            }
            let Some(obstacle) = Obstacle::from_symbol(symbol, position) else {
                continue;
            };
            if obstacles.len() >= OBSTACLE_CAPACITY {
                log::warn!("obstacle capacity reached, dropping '{symbol}' at {position}");
                continue;
            }
            obstacles.push(obstacle);
        }

        let clipped = layout
            .lines()
            .next()
            .map(|line| line.chars().count() as u32 > boundary)
            .unwrap_or(false);
        if clipped {
            log::warn!("layout is wider than the strip ({boundary}); the rest is ignored");
        }

        Self {
            phase: LevelPhase::Running(RunningState {
                player: Player::default(),
                obstacles,
            }),
            boundary,
            lights: Vec::new(),
        }
    }

    pub fn boundary(&self) -> u32 {
        self.boundary
    }

    pub fn phase(&self) -> &LevelPhase {
        &self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, LevelPhase::Running(_))
    }

    /// Lights to show for the frame just computed, in application order
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Terminal only once the completion animation has finished
    pub fn state(&self) -> LevelState {
        match &self.phase {
            LevelPhase::Completed(completed) if completed.animation.is_done() => {
                if completed.success {
                    LevelState::Complete
                } else {
                    LevelState::Failed
                }
            }
            _ => LevelState::InProgress,
        }
    }

    pub fn frame(mut self, now: u32, input: Option<ControllerInput>) -> Self {
        self.lights.clear();

        self.phase = match self.phase {
            LevelPhase::Completed(CompletedState { animation, success }) => {
                let animation = animation.tick(now);
                self.lights.extend_from_slice(animation.lights());
                LevelPhase::Completed(CompletedState { animation, success })
            }
            LevelPhase::Running(RunningState { player, obstacles }) => {
                let (player, message) = player.frame(now, input);

                let mut lights = std::mem::take(&mut self.lights);
                let (obstacles, message) = obstacles.into_iter().fold(
                    (Vec::with_capacity(OBSTACLE_CAPACITY), message),
                    |(mut updated, message), obstacle| {
                        let (obstacle, message) = obstacle.frame(now, message);
                        lights.extend_from_slice(obstacle.lights());
                        updated.push(obstacle);
                        (updated, message)
                    },
                );
                lights.extend_from_slice(player.lights());
                self.lights = lights;

                let player = player.apply(&message);
                if message.is_terminal() {
                    self.lights.clear();
                }
                match message {
                    Message::GoalReached => {
                        log::info!("goal reached at {now}");
                        Self::completed(Animation::success(self.boundary), now)
                    }
                    Message::ObstacleCollision { position } => {
                        log::info!("player hit obstacle at {position} ({now})");
                        Self::completed(Animation::failure(self.boundary), now)
                    }
                    _ => LevelPhase::Running(RunningState { player, obstacles }),
                }
            }
        };

        self
    }

    /// Start the completion animation at `now`
    fn completed(animation: Animation, now: u32) -> LevelPhase {
        let success = animation.is_success();
        LevelPhase::Completed(CompletedState {
            animation: animation.tick(now),
            success,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Color, ObstacleKind};

    fn obstacles(level: &Level) -> &[Obstacle] {
        match level.phase() {
            LevelPhase::Running(running) => &running.obstacles,
            LevelPhase::Completed(_) => panic!("level already completed"),
        }
    }

    fn right_and_attack() -> Option<ControllerInput> {
        Some(ControllerInput::new(4000, 2048, 1))
    }

    #[test]
    fn test_parse_layout_uses_character_index() {
        let level = Level::new("  x  g s?q", 20);
        let kinds: Vec<ObstacleKind> = obstacles(&level).iter().map(|o| *o.kind()).collect();
        assert_eq!(kinds.len(), 3);
        assert!(matches!(kinds[0], ObstacleKind::Pawn(p) if p.position == 2));
        assert_eq!(kinds[1], ObstacleKind::Goal { position: 5 });
        assert!(matches!(kinds[2], ObstacleKind::Snake(p) if p.position == 7));
    }

    #[test]
    fn test_parse_stops_at_boundary_and_newline() {
        let level = Level::new("x x x", 3);
        assert_eq!(obstacles(&level).len(), 2);

        let level = Level::new("x\nx x", 10);
        assert_eq!(obstacles(&level).len(), 1);
    }

    #[test]
    fn test_parse_drops_obstacles_past_capacity() {
        let layout = "x".repeat(OBSTACLE_CAPACITY + 5);
        let level = Level::new(&layout, 100);
        assert_eq!(obstacles(&level).len(), OBSTACLE_CAPACITY);
    }

    #[test]
    fn test_lights_in_layout_order_then_player() {
        let level = Level::new("  x  g", 12).frame(0, None);
        assert_eq!(
            level.lights(),
            &[
                Light::new(2, PAWN_COLOR),
                Light::new(5, GOAL_COLOR),
                Light::new(0, PLAYER_IDLE_COLOR),
            ]
        );
        assert_eq!(level.state(), LevelState::InProgress);
    }

    #[test]
    fn test_collision_fails_level() {
        // Pawn sits on the player's starting tile
        let level = Level::new("x", 12).frame(0, None);
        assert!(!level.is_running());
        assert!(level.lights().is_empty());
        assert_eq!(level.state(), LevelState::InProgress);

        let level = level.frame(ANIMATION_TOTAL_MS, None);
        assert_eq!(level.state(), LevelState::Failed);
    }

    #[test]
    fn test_goal_completes_level() {
        let level = Level::new("g", 12).frame(0, None);
        assert!(!level.is_running());
        assert_eq!(level.state(), LevelState::InProgress);

        let level = level.frame(ANIMATION_STEP_MS, None);
        assert!(!level.lights().is_empty());
        assert!(level.lights().iter().all(|l| l.color == SUCCESS_COLOR));
        assert_eq!(level.state(), LevelState::InProgress);

        let level = level.frame(ANIMATION_TOTAL_MS - 1, None);
        assert_eq!(level.state(), LevelState::InProgress);
        let level = level.frame(ANIMATION_TOTAL_MS, None);
        assert_eq!(level.state(), LevelState::Complete);

        // Completion is terminal
        let level = level.frame(ANIMATION_TOTAL_MS + 100, right_and_attack());
        assert_eq!(level.state(), LevelState::Complete);
    }

    #[test]
    fn test_first_matching_obstacle_wins() {
        // Goal and pawn share the player's tile; whichever comes first decides
        let pawn_first = RunningState {
            player: Player::default(),
            obstacles: vec![Obstacle::pawn(0), Obstacle::goal(0)],
        };
        let level = Level {
            phase: LevelPhase::Running(pawn_first),
            boundary: 12,
            lights: Vec::new(),
        }
        .frame(0, None);
        assert!(matches!(
            level.phase(),
            LevelPhase::Completed(CompletedState { success: false, .. })
        ));

        let goal_first = RunningState {
            player: Player::default(),
            obstacles: vec![Obstacle::goal(0), Obstacle::pawn(0)],
        };
        let level = Level {
            phase: LevelPhase::Running(goal_first),
            boundary: 12,
            lights: Vec::new(),
        }
        .frame(0, None);
        assert!(matches!(
            level.phase(),
            LevelPhase::Completed(CompletedState { success: true, .. })
        ));
    }

    #[test]
    fn test_attacking_player_clears_pawn() {
        let level = Level::new("x", 12).frame(0, right_and_attack());
        assert!(level.is_running());
        assert!(matches!(obstacles(&level)[0].kind(), ObstacleKind::Corpse));
        // Only the player remains lit
        assert_eq!(level.lights(), &[Light::new(0, PLAYER_ATTACK_COLOR)]);
    }

    #[test]
    fn test_empty_level_just_runs() {
        let level = Level::default().frame(0, None).frame(10, None);
        assert!(level.is_running());
        assert_eq!(level.lights(), &[Light::new(0, Color::new(255, 255, 255))]);
    }
}
