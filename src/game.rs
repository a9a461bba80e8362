//! Top-level game context
//!
//! Owns everything that outlives a single level: the catalog, which level is
//! being played, the most recent controller sample and the diagnostics
//! timer. The simulation itself never sees this state.

use crate::consts::*;
use crate::input::ControllerInput;
use crate::levels::LevelCatalog;
use crate::sim::{Level, LevelState, Light, Timer};

pub struct Game {
    catalog: LevelCatalog,
    boundary: u32,
    level_index: usize,
    level: Level,
    /// Lights of the last frame
    lights: Vec<Light>,
    /// How the most recently finished level ended
    last_outcome: Option<LevelState>,
    /// Latest sample not yet handed to a frame
    pending_input: Option<ControllerInput>,
    debug_timer: Timer,
    debug_interval: u32,
    frames_since_debug: u32,
}

impl Game {
    pub fn new(catalog: LevelCatalog, boundary: u32) -> Self {
        let level = Self::build_level(&catalog, 0, boundary);
        Self {
            catalog,
            boundary,
            level_index: 0,
            level,
            lights: Vec::new(),
            last_outcome: None,
            pending_input: None,
            debug_timer: Timer::new(DEBUG_INTERVAL_MS),
            debug_interval: DEBUG_INTERVAL_MS,
            frames_since_debug: 0,
        }
    }

    /// Change how often frame statistics are logged
    pub fn with_debug_interval(mut self, interval_ms: u32) -> Self {
        self.debug_timer = Timer::new(interval_ms);
        self.debug_interval = interval_ms;
        self
    }

    /// Store a controller sample for the next frame; newer samples replace
    /// ones that have not been consumed yet.
    pub fn receive(&mut self, input: ControllerInput) {
        self.pending_input = Some(input);
    }

    /// Advance the current level and move on to the next one once it has
    /// resolved and its animation finished.
    pub fn frame(&mut self, now: u32) -> &[Light] {
        self.log_statistics(now);

        let input = self.pending_input.take();
        let level = std::mem::take(&mut self.level);
        self.level = level.frame(now, input);

        self.lights.clear();
        self.lights.extend_from_slice(self.level.lights());

        let state = self.level.state();
        if state != LevelState::InProgress {
            let next = self.catalog.next_index(self.level_index, state);
            log::info!(
                "level {} finished ({:?}), loading level {}",
                self.level_index,
                state,
                next
            );
            self.level_index = next;
            self.last_outcome = Some(state);
            self.level = Self::build_level(&self.catalog, next, self.boundary);
        }

        &self.lights
    }

    /// Lights of the last frame
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_state(&self) -> LevelState {
        self.level.state()
    }

    pub fn last_outcome(&self) -> Option<LevelState> {
        self.last_outcome
    }

    pub fn catalog(&self) -> &LevelCatalog {
        &self.catalog
    }

    fn build_level(catalog: &LevelCatalog, index: usize, boundary: u32) -> Level {
        let layout = catalog.get(index).unwrap_or_default();
        log::debug!("level {index}: '{layout}'");
        Level::new(layout, boundary)
    }

    fn log_statistics(&mut self, now: u32) {
        self.frames_since_debug += 1;
        let (timer, due) = self.debug_timer.tick(now);
        self.debug_timer = if due {
            Timer::started(self.debug_interval, now)
        } else {
            timer
        };
        if due {
            log::debug!(
                "{} frames in the last {} ms (level {})",
                self.frames_since_debug,
                self.debug_interval,
                self.level_index
            );
            self.frames_since_debug = 0;
        }
    }
}
