//! Result of pricing one transport mode for one trip.

use eco_core::TransportMode;

/// Cost, emissions, and duration of one way of making a trip.
///
/// Created fresh by every calculator call and never mutated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TransportOption {
    pub mode:     TransportMode,
    /// Cost to the traveller, CLP.
    pub cost:     f64,
    /// Emissions attributed to the traveller, kg CO₂.
    pub co2_kg:   f64,
    /// Estimated travel time, minutes.
    pub time_min: f64,
}

impl TransportOption {
    /// Rounded copy for display: cost and time to whole units, CO₂ to 0.01 kg.
    pub fn row(&self) -> OptionRow {
        OptionRow {
            mode:     self.mode.label(),
            cost:     self.cost.round(),
            co2_kg:   round_to(self.co2_kg, 2),
            time_min: self.time_min.round(),
        }
    }
}

/// A table-ready, rounded view of a [`TransportOption`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OptionRow {
    pub mode:     &'static str,
    pub cost:     f64,
    pub co2_kg:   f64,
    pub time_min: f64,
}

/// Look up the option for `mode` in a calculator result.
#[inline]
pub fn find_option(options: &[TransportOption], mode: TransportMode) -> Option<&TransportOption> {
    options.iter().find(|o| o.mode == mode)
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
