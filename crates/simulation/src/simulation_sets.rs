//! Deterministic simulation ordering via `SystemSet` phases.
//!
//! These sets establish a **contract** for system execution order within the
//! `FixedUpdate` schedule.  Plugins place their systems into the appropriate
//! set so that inter-plugin ordering is explicit and testable rather than
//! relying on implicit timing assumptions.
//!
//! # FixedUpdate phases (`SimulationSet`)
//!
//! ```text
//! PreSim  →  Simulation  →  PostSim
//! ```
//!
//! * **PreSim** – Tick counters, the facility clock, traffic generation.
//!   These set up per-tick state (timestamps, arrival/departure events) that
//!   the core simulation reads.
//! * **Simulation** – The parking logic proper: admission from the gate and
//!   the waiting line, lane/lot mutation, departures and billing.
//! * **PostSim** – Aggregation and reporting: stats refresh, the periodic
//!   facility summary.  These only *read* simulation state and never mutate
//!   it, so anything consuming their output sees a settled world.

use bevy::prelude::*;

/// Ordered phases for systems running in the `FixedUpdate` schedule.
///
/// Configured as a chain: `PreSim` → `Simulation` → `PostSim`.
/// Individual plugins use `.in_set(SimulationSet::X)` when registering their
/// systems, which gives them automatic ordering relative to other phases
/// while retaining the ability to add fine-grained `.after()` / `.before()`
/// constraints within the same phase.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Pre-simulation setup: tick counters, clock advance, traffic
    /// generation.
    PreSim,
    /// Core simulation: admissions, waiting-line promotion, departures,
    /// billing.
    Simulation,
    /// Post-simulation aggregation: stats and reporting.
    PostSim,
}
