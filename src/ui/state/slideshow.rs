// SPDX-License-Identifier: MPL-2.0
//! Slideshow state machine.
//!
//! Two phases, `Stopped` and `Running`. Every start hands out a new
//! generation number; the timer armed for it echoes the number back on
//! each tick. A tick whose generation does not match the running one is
//! stale and must be ignored, which makes a stop effective even when a
//! tick is already queued.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Stopped,
    Running {
        generation: u64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slideshow {
    phase: Phase,
    last_generation: u64,
    interval: Duration,
}

impl Default for Slideshow {
    fn default() -> Self {
        Self::new(Duration::from_millis(
            crate::config::DEFAULT_SLIDESHOW_INTERVAL_MS,
        ))
    }
}

impl Slideshow {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            phase: Phase::Stopped,
            last_generation: 0,
            interval,
        }
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running { .. })
    }

    /// Starts the slideshow.
    ///
    /// Returns the generation to arm a timer for, or `None` when there is
    /// nothing to show or the slideshow is already running.
    pub fn start(&mut self, has_images: bool) -> Option<u64> {
        if !has_images || self.is_running() {
            return None;
        }
        self.last_generation += 1;
        self.phase = Phase::Running {
            generation: self.last_generation,
        };
        Some(self.last_generation)
    }

    /// Stops the slideshow. Returns false if it was not running.
    pub fn stop(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.phase = Phase::Stopped;
        true
    }

    /// Returns whether a tick armed for `generation` should advance.
    #[must_use]
    pub fn accepts_tick(&self, generation: u64) -> bool {
        self.phase == Phase::Running { generation }
    }

    /// Interval in seconds for the status line, without a trailing `.0`.
    #[must_use]
    pub fn interval_secs_display(&self) -> String {
        let secs = self.interval.as_secs_f32();
        if secs.fract().abs() < f32::EPSILON {
            format!("{secs:.0}")
        } else {
            format!("{secs:.1}")
        }
    }
}
