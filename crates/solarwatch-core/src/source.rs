//! Attribution of elevated solar wind to its likely solar source.
//!
//! Wind speed is judged on its smoothed trailing average while protons are
//! judged on the latest reading alone; proton events are spiky and would
//! be washed out by averaging.

use solarwatch_types::SourceAttribution;

/// Whether the trailing average wind speed counts as high (exclusive).
pub fn is_high_wind(avg_wind_speed: f64, threshold: f64) -> bool {
    avg_wind_speed > threshold
}

/// Whether the current proton flux is a radiation storm (inclusive).
pub fn is_proton_storm(proton_flux: f64, threshold: f64) -> bool {
    proton_flux >= threshold
}

/// Attribute the wind regime from the two flags, CME first.
pub const fn attribute(high_wind: bool, proton_storm: bool) -> SourceAttribution {
    match (high_wind, proton_storm) {
        (true, true) => SourceAttribution::CoronalMassEjection,
        (true, false) => SourceAttribution::CoronalHoleStream,
        (false, _) => SourceAttribution::Nominal,
    }
}
