use std::time::Duration;

use crate::config::{require_nonzero, ConfigError};

/// The sequence of frame indices handed to the timer, `start..stop` in
/// increments of `step`, one per `interval_ms`.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FrameSchedule {
    pub start: usize,
    pub stop: usize,
    pub step: usize,
    pub interval_ms: u64,
    pub repeat: bool,
}

impl Default for FrameSchedule {
    fn default() -> Self {
        FrameSchedule {
            start: 0,
            stop: 360,
            step: 2,
            interval_ms: 50,
            repeat: true,
        }
    }
}

impl FrameSchedule {
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_nonzero("schedule.step", self.step)?;
        if self.interval_ms == 0 {
            return Err(ConfigError("schedule.interval_ms must be non-zero".to_string()));
        }
        if self.stop <= self.start {
            return Err(ConfigError(format!(
                "schedule.stop ({}) must exceed schedule.start ({})",
                self.stop, self.start
            )));
        }
        Ok(())
    }

    pub fn frames(&self) -> impl Iterator<Item = usize> {
        (self.start..self.stop).step_by(self.step.max(1))
    }

    pub fn len(&self) -> usize {
        if self.stop <= self.start {
            0
        } else {
            (self.stop - self.start).div_ceil(self.step.max(1))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Frame index shown at the given timer tick. `None` once a
    /// non-repeating schedule has run out.
    pub fn frame_at(&self, tick: usize) -> Option<usize> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        let i = if self.repeat {
            tick % n
        } else if tick < n {
            tick
        } else {
            return None;
        };
        Some(self.start + i * self.step)
    }
}

/// Walks a schedule one timer tick at a time.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameCursor {
    pub schedule: FrameSchedule,
    pub tick: usize,
}

impl FrameCursor {
    pub fn new(schedule: FrameSchedule) -> Self {
        FrameCursor { schedule, tick: 0 }
    }

    pub fn next_frame(&mut self) -> Option<usize> {
        let frame = self.schedule.frame_at(self.tick)?;
        self.tick += 1;
        Some(frame)
    }
}
