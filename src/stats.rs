use chrono::{DateTime, Local};
use serde::Serialize;

use crate::game::TickOutcome;

/// Counters for one run of the game, reported in the log on quit.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStats {
    pub started_at: DateTime<Local>,
    pub ticks: u64,
    pub apples_eaten: u32,
    pub resets: u32,
    pub longest: usize,
}

impl SessionStats {
    pub fn new() -> Self {
        SessionStats {
            started_at: Local::now(),
            ticks: 0,
            apples_eaten: 0,
            resets: 0,
            longest: 1,
        }
    }

    pub fn record(&mut self, outcome: &TickOutcome) {
        self.ticks += 1;
        if outcome.ate_apple {
            self.apples_eaten += 1;
        }
        if outcome.collided {
            self.resets += 1;
        }
        self.longest = self.longest.max(outcome.segments);
    }

    pub fn summary(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}
