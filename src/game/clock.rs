//! file: clock.rs
//! author: Jacob Xie
//! date: 2025/12/20 11:40:52 Saturday
//! brief: millisecond clock sources and the pausable round countdown

use std::{cell::Cell, rc::Rc, time::Instant};

pub trait Clock {
    /// Monotonic milliseconds since some fixed origin.
    fn now_ms(&self) -> u64;
}

#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        u64::try_from(self.origin.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}

/// Hand-driven clock. Clones share the same time.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Rc::new(Cell::new(start_ms)),
        }
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Countdown bookkeeping. Time spent paused is folded into
/// `paused_total_ms` on resume and never counts as active time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoundClock {
    started_at: u64,
    paused_total_ms: u64,
    paused_at: Option<u64>,
}

impl RoundClock {
    pub fn start(&mut self, now: u64) {
        *self = Self {
            started_at: now,
            paused_total_ms: 0,
            paused_at: None,
        };
    }

    pub fn pause(&mut self, now: u64) {
        if self.paused_at.is_none() {
            self.paused_at = Some(now);
        }
    }

    pub fn resume(&mut self, now: u64) {
        if let Some(paused_at) = self.paused_at.take() {
            self.paused_total_ms = self
                .paused_total_ms
                .saturating_add(now.saturating_sub(paused_at));
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn elapsed_active_ms(&self, now: u64) -> u64 {
        // frozen while paused
        let now = self.paused_at.unwrap_or(now);
        now.saturating_sub(self.started_at)
            .saturating_sub(self.paused_total_ms)
    }

    pub fn elapsed_active_secs(&self, now: u64) -> u64 {
        self.elapsed_active_ms(now) / 1000
    }

    pub fn remaining_secs(&self, now: u64, total_secs: u64) -> u64 {
        total_secs.saturating_sub(self.elapsed_active_secs(now))
    }
}
