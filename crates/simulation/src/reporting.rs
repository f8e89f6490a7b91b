//! Periodic one-line facility summary.

use bevy::prelude::*;

use crate::history::HistoryLog;
use crate::sim_clock::SimClock;
use crate::stats::FacilityStats;

pub fn report_facility_summary(
    slow_tick: Res<crate::SlowTickTimer>,
    clock: Res<SimClock>,
    stats: Res<FacilityStats>,
    history: Res<HistoryLog>,
) {
    if !slow_tick.should_run() {
        return;
    }

    info!(
        "[{}] lane {} / lot {} / waiting {} / free {} | served {} for {} revenue, {} moves",
        clock.formatted(),
        stats.lane_occupied,
        stats.lot_occupied,
        stats.waiting,
        stats.free_spots,
        stats.departed,
        stats.revenue,
        stats.vehicle_moves
    );

    for record in history.recent_default() {
        debug!(
            "  {} {} {} min fee {} moves {}",
            record.plate.as_str(),
            record.layout.label(),
            record.minutes,
            record.fee,
            record.moves
        );
    }
}

pub struct ReportingPlugin;

impl Plugin for ReportingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            report_facility_summary
                .in_set(crate::SimulationSet::PostSim)
                .after(crate::stats::update_stats),
        );
    }
}
