//! Countdown timer sampled by absolute timestamps
//!
//! A timer never reads a clock on its own: every tick is handed the current
//! time in milliseconds and returns the updated timer plus whether it fired.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    interval: u32,
    remaining: u32,
    /// Time of the last sample; `None` until the first tick
    last_time: Option<u32>,
}

impl Timer {
    /// A timer whose first tick only records the baseline
    pub const fn new(interval: u32) -> Self {
        Self {
            interval,
            remaining: interval,
            last_time: None,
        }
    }

    /// A timer already anchored at `now`, used when re-arming inside a frame
    pub const fn started(interval: u32, now: u32) -> Self {
        Self {
            interval,
            remaining: interval,
            last_time: Some(now),
        }
    }

    /// Advance the timer to `now`.
    ///
    /// Once fired the timer stays fired; callers replace it to start over.
    pub fn tick(self, now: u32) -> (Self, bool) {
        let Some(last) = self.last_time else {
            return (
                Self {
                    last_time: Some(now),
                    ..self
                },
                false,
            );
        };

        if now < last {
            log::warn!("timer given a time in the past (given {now}, last {last})");
            return (self, false);
        }

        let remaining = self.remaining.saturating_sub(now - last);
        (
            Self {
                remaining,
                last_time: Some(now),
                ..self
            },
            remaining == 0,
        )
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.remaining == 0
    }

    #[inline]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub fn interval(&self) -> u32 {
        self.interval
    }

    #[inline]
    pub fn last_time(&self) -> Option<u32> {
        self.last_time
    }
}
