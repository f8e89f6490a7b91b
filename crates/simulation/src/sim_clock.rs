use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Minutes in a simulated day, used only for log formatting.
const MINUTES_PER_DAY: u64 = 24 * 60;

/// Monotonic facility clock. One `FixedUpdate` tick advances it by one
/// whole minute, and every entry/exit timestamp in the facility is read
/// from it, so elapsed times are exact minute differences and can never
/// go negative.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct SimClock {
    pub minutes: u64,
}

impl Default for SimClock {
    fn default() -> Self {
        // Open at 06:00 on day 1.
        Self { minutes: 6 * 60 }
    }
}

impl SimClock {
    /// Minutes advanced per sim tick.
    const MINUTES_PER_TICK: u64 = 1;

    pub fn tick(&mut self) {
        self.minutes += Self::MINUTES_PER_TICK;
    }

    /// Current timestamp in whole minutes since the epoch of the clock.
    pub fn now(&self) -> u64 {
        self.minutes
    }

    /// Whole minutes elapsed since `earlier`. Saturates rather than
    /// underflowing if handed a timestamp from the future.
    pub fn minutes_since(&self, earlier: u64) -> u64 {
        self.minutes.saturating_sub(earlier)
    }

    pub fn formatted(&self) -> String {
        let day = self.minutes / MINUTES_PER_DAY + 1;
        let minute_of_day = self.minutes % MINUTES_PER_DAY;
        format!(
            "Day {} {:02}:{:02}",
            day,
            minute_of_day / 60,
            minute_of_day % 60
        )
    }
}

pub fn tick_sim_clock(mut clock: ResMut<SimClock>) {
    clock.tick();
}
