//! Benefit of a chosen option relative to driving alone.

/// What the traveller gains by not taking the car.
///
/// `savings` and `co2_avoided` are negative when the chosen option is worse
/// than the car; `points` is clamped at zero in that case.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Benefit {
    /// CLP saved versus the car.
    pub savings:     f64,
    /// kg CO₂ avoided versus the car.
    pub co2_avoided: f64,
    /// Ecopoints earned.
    pub points:      u64,
}
