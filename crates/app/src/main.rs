use std::time::Duration;

use bevy::app::ScheduleRunnerPlugin;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use simulation::facility_params::FacilityParams;
use simulation::sim_rng::SimRng;
use simulation::TickCounter;

/// Stop after this many simulated minutes (one FixedUpdate tick each).
#[derive(Resource)]
struct RunLimit(u64);

fn main() {
    let mut app = App::new();

    app.add_plugins(
        MinimalPlugins.set(ScheduleRunnerPlugin::run_loop(Duration::from_millis(100))),
    )
    .add_plugins(LogPlugin::default())
    // 10 ticks per wall-clock second, one simulated minute each.
    .insert_resource(Time::<Fixed>::from_hz(10.0));

    // Facility overrides from a JSON file. Inserted before SimulationPlugin
    // so init_resource keeps them.
    if let Ok(path) = std::env::var("PARKADE_PARAMS") {
        app.insert_resource(FacilityParams::load_or_default(&path));
    }

    // Deterministic replays.
    if let Ok(seed) = std::env::var("PARKADE_SEED") {
        match seed.parse::<u64>() {
            Ok(seed) => {
                app.insert_resource(SimRng::from_seed_u64(seed));
            }
            Err(e) => warn!(
                "PARKADE_SEED {:?} is not a u64 ({}), keeping the default seed",
                seed, e
            ),
        }
    }

    // Bounded runs for demos and smoke tests: exit after N simulated minutes.
    if let Ok(minutes) = std::env::var("PARKADE_MINUTES") {
        match minutes.parse::<u64>() {
            Ok(minutes) => {
                app.insert_resource(RunLimit(minutes));
                app.add_systems(Update, stop_after_run_limit);
            }
            Err(e) => warn!(
                "PARKADE_MINUTES {:?} is not a u64 ({}), running unbounded",
                minutes, e
            ),
        }
    }

    app.add_plugins(simulation::SimulationPlugin);

    app.run();
}

fn stop_after_run_limit(
    limit: Res<RunLimit>,
    tick: Res<TickCounter>,
    mut exit: EventWriter<AppExit>,
) {
    if tick.0 >= limit.0 {
        info!("run limit of {} simulated minutes reached", limit.0);
        exit.send(AppExit::Success);
    }
}
