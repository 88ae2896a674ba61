use std::time::{Duration, Instant};

const METER: [&str; 7] = ["▱▱▱", "▰▱▱", "▰▰▱", "▰▰▰", "▰▰▱", "▰▱▱", "▱▱▱"];
const METER_FRAME: Duration = Duration::from_millis(333);

/// Slow meter animation shown in front of every target
#[derive(Debug, Clone, Copy)]
pub struct Spinner {
    started: Instant,
}

impl Spinner {
    pub fn new() -> Self {
        Self { started: Instant::now() }
    }

    pub fn frame(&self) -> &'static str {
        self.frame_at(Instant::now())
    }

    pub fn frame_at(&self, now: Instant) -> &'static str {
        let ticks = now.saturating_duration_since(self.started).as_millis() / METER_FRAME.as_millis();
        METER[(ticks % METER.len() as u128) as usize]
    }
}
