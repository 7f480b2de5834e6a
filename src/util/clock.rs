use web_time::Instant;

/// Source of elapsed seconds for auto-rotation.
pub trait Clock {
    /// Seconds since the clock's epoch.
    fn seconds(&self) -> f32;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Start counting from now.
    #[must_use]
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn seconds(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// A clock stuck at one instant, for reproducible frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FixedClock(pub f32);

impl Clock for FixedClock {
    fn seconds(&self) -> f32 {
        self.0
    }
}
