//! Completion animation played once a level resolves
//!
//! A band of light grows outward from the middle of the strip. The total
//! timer alone decides when the animation is over, so its length does not
//! depend on how fast the band expands.

use serde::{Deserialize, Serialize};

use super::light::{Color, Light};
use super::timer::Timer;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animation {
    total: Timer,
    stepper: Timer,
    step: u32,
    origin: u32,
    boundary: u32,
    color: Color,
    success: bool,
    lights: Vec<Light>,
}

impl Animation {
    /// Middle-out expansion from `origin`, clipped to `[0, boundary)`
    pub fn middle_out(origin: u32, boundary: u32, color: Color, success: bool) -> Self {
        Self {
            total: Timer::new(ANIMATION_TOTAL_MS),
            stepper: Timer::new(ANIMATION_STEP_MS),
            step: 0,
            origin,
            boundary,
            color,
            success,
            lights: Vec::with_capacity(ANIMATION_LIGHT_CAPACITY),
        }
    }

    /// The level-complete animation for a strip of `boundary` lights
    pub fn success(boundary: u32) -> Self {
        Self::middle_out(boundary / 2, boundary, SUCCESS_COLOR, true)
    }

    /// The level-failed animation for a strip of `boundary` lights
    pub fn failure(boundary: u32) -> Self {
        Self::middle_out(boundary / 2, boundary, FAILURE_COLOR, false)
    }

    pub fn is_done(&self) -> bool {
        self.total.is_done()
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn tick(mut self, now: u32) -> Self {
        if self.is_done() {
            return self;
        }

        let (stepper, stepped) = self.stepper.tick(now);
        self.stepper = if stepped {
            Timer::started(ANIMATION_STEP_MS, now)
        } else {
            stepper
        };
        if stepped {
            self.step += 1;
            self.rebuild_lights();
        }

        let (total, _) = self.total.tick(now);
        self.total = total;
        self
    }

    fn rebuild_lights(&mut self) {
        self.lights.clear();
        let reach = self.step.min((ANIMATION_LIGHT_CAPACITY / 2) as u32);
        for i in 1..=reach {
            let right = self.origin + i;
            if right < self.boundary {
                self.lights.push(Light::new(right, self.color));
            }
            if let Some(left) = self.origin.checked_sub(i) {
                self.lights.push(Light::new(left, self.color));
            }
        }
    }
}
