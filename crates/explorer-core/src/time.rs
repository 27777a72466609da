/// Turns frame-callback timestamps into per-frame elapsed time.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_timestamp: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Milliseconds since the previous tick; 0 on the first tick.
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let elapsed = match self.last_timestamp {
            Some(prev) => (timestamp_ms - prev) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp_ms);
        elapsed
    }

    pub fn reset(&mut self) {
        self.last_timestamp = None;
    }
}
