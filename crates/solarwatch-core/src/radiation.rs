//! Radiation environment classification and NOAA scale levels.
//!
//! NOAA thresholds:
//! - G-scale from Kp: 5, 6, 7, 8, 9 map to G1-G5
//! - S-scale from >=10 `MeV` proton flux: 10, 100, 1e3, 1e4, 1e5 pfu map to S1-S5
//! - R-scale from X-ray class: M1, M5, X1, X10, X20 map to R1-R5

use solarwatch_types::{FlareClass, FlareLetter, NoaaScales, RadiationLevel};

use crate::tiers::{Tier, TierTable};

/// Dominant radiation environment: X-class flaring outranks a proton
/// storm, which outranks background.
pub fn classify(
    flare_class: FlareClass,
    proton_flux: f64,
    proton_storm_flux: f64,
) -> RadiationLevel {
    if flare_class.letter() == FlareLetter::X {
        RadiationLevel::XRayFlare
    } else if proton_flux >= proton_storm_flux {
        RadiationLevel::ProtonStorm
    } else {
        RadiationLevel::Background
    }
}

/// NOAA G, S and R levels for the current conditions.
pub fn noaa_scales(last_kp: f64, proton_flux: f64, flare_class: FlareClass) -> NoaaScales {
    let geomagnetic = TierTable::new(vec![
        Tier::new(9.0, 5),
        Tier::new(8.0, 4),
        Tier::new(7.0, 3),
        Tier::new(6.0, 2),
        Tier::new(5.0, 1),
    ]);
    let radiation = TierTable::new(vec![
        Tier::new(1e5, 5),
        Tier::new(1e4, 4),
        Tier::new(1e3, 3),
        Tier::new(100.0, 2),
        Tier::new(10.0, 1),
    ]);
    let radio_blackout = TierTable::new(vec![
        Tier::new(FlareClass::new(FlareLetter::X, 20.0), 5),
        Tier::new(FlareClass::new(FlareLetter::X, 10.0), 4),
        Tier::new(FlareClass::new(FlareLetter::X, 1.0), 3),
        Tier::new(FlareClass::new(FlareLetter::M, 5.0), 2),
        Tier::new(FlareClass::new(FlareLetter::M, 1.0), 1),
    ]);

    NoaaScales {
        geomagnetic: geomagnetic.points(&last_kp),
        radiation: radiation.points(&proton_flux),
        radio_blackout: radio_blackout.points(&flare_class),
    }
}
