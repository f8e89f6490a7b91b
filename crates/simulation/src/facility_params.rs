//! Data-driven facility parameters.
//!
//! Extracts the tunable constants into a single [`FacilityParams`] resource
//! so a deployment can reconfigure the facility (capacities, tariff,
//! traffic shape) from a JSON file without recompilation. The app shell
//! loads an override file when one is named and inserts the resource
//! before the simulation plugin; otherwise the defaults from `config.rs`
//! apply.
//!
//! Systems read from `Res<FacilityParams>` instead of the raw constants.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config;
use crate::fifo_lot::FifoLot;
use crate::history::HistoryLog;
use crate::single_lane::SingleLane;

// ---------------------------------------------------------------------------
// Parameter sections
// ---------------------------------------------------------------------------

/// Tunables for the single-lane layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaneParams {
    /// How many vehicles fit in the lane.
    pub capacity: usize,
}

impl Default for LaneParams {
    fn default() -> Self {
        Self {
            capacity: config::LANE_CAPACITY,
        }
    }
}

/// Tunables for the drive-through lot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LotParams {
    /// How many vehicles fit in the lot.
    pub capacity: usize,
}

impl Default for LotParams {
    fn default() -> Self {
        Self {
            capacity: config::LOT_CAPACITY,
        }
    }
}

/// Exit-gate tariff.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TariffParams {
    /// Charge per started hour.
    pub hourly_rate: u64,
    /// Stays shorter than this are billed as if they lasted this long.
    pub min_charge_minutes: u64,
}

impl Default for TariffParams {
    fn default() -> Self {
        Self {
            hourly_rate: config::HOURLY_RATE,
            min_charge_minutes: config::MIN_CHARGE_MINUTES,
        }
    }
}

/// Tunables for the history log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryParams {
    /// Default number of records a bounded read returns.
    pub recent_limit: usize,
}

impl Default for HistoryParams {
    fn default() -> Self {
        Self {
            recent_limit: config::HISTORY_RECENT_LIMIT,
        }
    }
}

/// Tunables for the traffic generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficParams {
    /// Per-tick probability of a new arrival at the gate (0.0..1.0).
    pub arrival_chance: f64,
    /// Per-tick probability of a departure request (0.0..1.0).
    pub departure_chance: f64,
}

impl Default for TrafficParams {
    fn default() -> Self {
        Self {
            arrival_chance: config::ARRIVAL_CHANCE,
            departure_chance: config::DEPARTURE_CHANCE,
        }
    }
}

// ---------------------------------------------------------------------------
// Top-level FacilityParams resource
// ---------------------------------------------------------------------------

/// Central resource holding all data-driven facility parameters.
///
/// Every section falls back to its default when missing from an override
/// file, so a deployment can override just the tariff (say) with a
/// two-line JSON file.
#[derive(Resource, Debug, Clone, Serialize, Deserialize, Default)]
pub struct FacilityParams {
    #[serde(default)]
    pub lane: LaneParams,
    #[serde(default)]
    pub lot: LotParams,
    #[serde(default)]
    pub tariff: TariffParams,
    #[serde(default)]
    pub history: HistoryParams,
    #[serde(default)]
    pub traffic: TrafficParams,
}

impl FacilityParams {
    /// Parse a params override file.
    pub fn from_json_file(path: &str) -> Result<Self, String> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("failed to read params file {}: {}", path, e))?;
        serde_json::from_str(&text)
            .map_err(|e| format!("failed to parse params file {}: {}", path, e))
    }

    /// `from_json_file`, falling back to defaults with a warning when the
    /// file is missing or malformed.
    pub fn load_or_default(path: &str) -> Self {
        match Self::from_json_file(path) {
            Ok(params) => params,
            Err(e) => {
                warn!("{}; using default facility params", e);
                Self::default()
            }
        }
    }

    /// Replace unusable values (zero capacities, zero read limit,
    /// out-of-range probabilities) with their defaults, warning for each.
    pub fn sanitize(&mut self) {
        if self.lane.capacity == 0 {
            warn!("lane capacity 0 is unusable; using default");
            self.lane = LaneParams::default();
        }
        if self.lot.capacity == 0 {
            warn!("lot capacity 0 is unusable; using default");
            self.lot = LotParams::default();
        }
        if self.history.recent_limit == 0 {
            warn!("history recent limit 0 is unusable; using default");
            self.history = HistoryParams::default();
        }
        if !(0.0..=1.0).contains(&self.traffic.arrival_chance)
            || !(0.0..=1.0).contains(&self.traffic.departure_chance)
        {
            warn!("traffic chances must be within 0.0..=1.0; using defaults");
            self.traffic = TrafficParams::default();
        }
    }
}

// ---------------------------------------------------------------------------
// Startup: size the layouts from the params
// ---------------------------------------------------------------------------

/// Builds the layout resources at the capacities the params ask for.
/// Runs once at startup, before any traffic exists, so replacing the
/// resources wholesale is safe.
pub fn apply_facility_params(mut params: ResMut<FacilityParams>, mut commands: Commands) {
    params.sanitize();
    commands.insert_resource(SingleLane::with_capacity(params.lane.capacity));
    commands.insert_resource(FifoLot::with_capacity(params.lot.capacity));
    commands.insert_resource(HistoryLog::with_recent_limit(params.history.recent_limit));
    info!(
        "facility opens: lane capacity {}, lot capacity {}, tariff {}/h (min {} min)",
        params.lane.capacity,
        params.lot.capacity,
        params.tariff.hourly_rate,
        params.tariff.min_charge_minutes
    );
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

pub struct FacilityParamsPlugin;

impl Plugin for FacilityParamsPlugin {
    fn build(&self, app: &mut App) {
        // init_resource keeps a params override inserted by the app shell.
        app.init_resource::<FacilityParams>();
        app.add_systems(Startup, apply_facility_params);
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
