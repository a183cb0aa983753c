//! How often impacts of a given yield happen, and an energy comparison.

/// (upper yield bound in Mt, typical interval in years), ascending.
pub static FREQUENCY_STEPS: &[(f64, f64)] = &[
    (0.01, 1.0),
    (1.0, 50.0),
    (10.0, 1_000.0),
    (100.0, 10_000.0),
    (1_000.0, 100_000.0),
    (10_000.0, 1_000_000.0),
    (100_000.0, 10_000_000.0),
];

/// Interval for anything above the last step (years).
pub const LARGEST_IMPACT_INTERVAL_YEARS: f64 = 100_000_000.0;

/// Energy a mature hurricane releases per day (J).
pub const HURRICANE_DAILY_ENERGY_J: f64 = 1.5e16;

/// Typical years between impacts of at least this yield.
pub fn impact_frequency_years(megatons: f64) -> f64 {
    FREQUENCY_STEPS
        .iter()
        .find(|(upper, _)| megatons <= *upper)
        .map_or(LARGEST_IMPACT_INTERVAL_YEARS, |(_, years)| *years)
}

/// Impact energy in hurricane-days.
pub fn hurricane_ratio(energy_j: f64) -> f64 {
    energy_j / HURRICANE_DAILY_ENERGY_J
}
