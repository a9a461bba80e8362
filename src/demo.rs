//! Demo controller
//!
//! Stands in for the handheld controller during headless runs. Seeded, so
//! the same seed always plays the same game.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::ControllerInput;
use crate::sim::Timer;

/// Center of the 12-bit joystick range
const STICK_CENTER: u32 = 2048;
const STICK_MAX: u32 = 4095;

/// Chance per sample of pressing attack
const ATTACK_CHANCE: f64 = 0.08;
/// Chance per sample of drifting back to center or left instead of pushing right
const WANDER_CHANCE: f64 = 0.15;

pub struct DemoController {
    seed: u64,
    rng: Pcg32,
    sampler: Timer,
    interval: u32,
}

impl DemoController {
    pub fn new(seed: u64, sample_interval_ms: u32) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            sampler: Timer::new(sample_interval_ms),
            interval: sample_interval_ms,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A sample when one is due at `now`, mirroring a controller that
    /// transmits on a fixed cadence.
    pub fn poll(&mut self, now: u32) -> Option<ControllerInput> {
        let (sampler, due) = self.sampler.tick(now);
        if !due {
            self.sampler = sampler;
            return None;
        }
        self.sampler = Timer::started(self.interval, now);

        let x = if self.rng.random_bool(WANDER_CHANCE) {
            self.rng.random_range(0..=STICK_CENTER)
        } else {
            self.rng.random_range(3200..=STICK_MAX)
        };
        let y = STICK_CENTER;
        let attack = u8::from(self.rng.random_bool(ATTACK_CHANCE));

        Some(ControllerInput::new(x, y, attack))
    }
}
