//! Tariff math for exit billing.
//!
//! Pure functions only; the departure system feeds them timestamps from
//! the clock and the tariff from `FacilityParams`.

// =============================================================================
// Pure computation functions
// =============================================================================

/// Fee for a stay of `minutes`, billed in whole started hours.
///
/// The billed duration is `max(minutes, min_charge_minutes)`, so a short
/// stop (including a zero-minute one) still pays for the minimum, and any
/// started hour is charged in full:
///
/// - 29 min at 40/h with a 30 min floor → 40 (floored to 30, one hour)
/// - 60 min at 40/h → 40 (exactly one hour)
/// - 61 min at 40/h → 80 (second hour started)
pub fn parking_fee(minutes: u64, hourly_rate: u64, min_charge_minutes: u64) -> u64 {
    let billed_minutes = minutes.max(min_charge_minutes);
    let hours = billed_minutes.div_ceil(60);
    hours * hourly_rate
}

// =============================================================================
// Unit tests
// =============================================================================
