pub const LANE_CAPACITY: usize = 6;
pub const LOT_CAPACITY: usize = 10;
pub const HOURLY_RATE: u64 = 40;
pub const MIN_CHARGE_MINUTES: u64 = 30;
pub const HISTORY_RECENT_LIMIT: usize = 20;

/// Per-tick probability that a new vehicle pulls up to the gate.
pub const ARRIVAL_CHANCE: f64 = 0.4;

/// Per-tick probability that some parked vehicle asks to leave.
pub const DEPARTURE_CHANCE: f64 = 0.25;

/// FixedUpdate ticks between slow-cadence passes (stats refresh, the
/// facility summary log). One tick is one simulated minute, so this is a
/// half-hour cadence.
pub const SLOW_TICK_INTERVAL: u32 = 30;
