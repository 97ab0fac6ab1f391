//! Rotating index over the top-rated window.
//!
//! Time is passed in explicitly so the driver stays deterministic; the UI
//! feeds it from its tick events.

use std::time::{Duration, Instant};

pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselDriver {
    current_index: usize,
    count: usize,
    window_size: u16,
    interval: Duration,
    next_advance: Option<Instant>,
}

impl CarouselDriver {
    /// Fresh driver at index 0 with the timer armed (unless empty).
    pub fn start(count: usize, interval: Duration, window_size: u16, now: Instant) -> Self {
        Self {
            current_index: 0,
            count,
            window_size,
            interval,
            next_advance: (count > 0).then(|| now + interval),
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn window_size(&self) -> u16 {
        self.window_size
    }

    pub fn set_window_size(&mut self, window_size: u16) {
        self.window_size = window_size;
    }

    /// Horizontal scroll position of the track.
    pub fn scroll_offset(&self) -> u32 {
        self.current_index as u32 * u32::from(self.window_size)
    }

    /// Automatic advance. Returns true when the index moved.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_advance else {
            return false;
        };
        if now < deadline {
            return false;
        }
        self.current_index = (self.current_index + 1) % self.count;
        self.next_advance = Some(now + self.interval);
        true
    }

    /// Manual "next": step forward and restart the timer.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.count == 0 {
            return false;
        }
        self.current_index = (self.current_index + 1) % self.count;
        self.reset_timer(now);
        true
    }

    /// Manual "previous": step back and restart the timer.
    pub fn prev(&mut self, now: Instant) -> bool {
        if self.count == 0 {
            return false;
        }
        self.current_index = (self.current_index + self.count - 1) % self.count;
        self.reset_timer(now);
        true
    }

    fn reset_timer(&mut self, now: Instant) {
        self.next_advance = Some(now + self.interval);
    }
}
