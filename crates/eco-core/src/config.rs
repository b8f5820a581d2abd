//! Tariff, emission, and points-conversion constants.
//!
//! Every number the calculator uses lives in [`CalcConfig`].  The defaults
//! are reference averages for a private car in Antofagasta (CLP, km, kg CO₂).
//! Applications may load an override from JSON (with the `serde` feature);
//! fields absent from the file keep their default value.

use crate::{EcoError, EcoResult};

/// Carpool passenger count used when the caller does not choose one.
pub const DEFAULT_PASSENGERS: u32 = 3;

/// Smallest carpool the demo offers (a carpool of one is just a car).
pub const MIN_CARPOOL_PASSENGERS: u32 = 2;

/// Largest carpool the demo offers.
pub const MAX_CARPOOL_PASSENGERS: u32 = 5;

// ── CalcConfig ────────────────────────────────────────────────────────────────

/// Constants for the option calculator and the benefit comparator.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CalcConfig {
    /// Fuel price in CLP per litre.  Callers may override it per call.
    pub fuel_price: f64,

    /// Private car fuel efficiency, km per litre.
    pub fuel_efficiency_km_per_l: f64,

    /// Private car emissions, kg CO₂ per km.
    pub car_co2_kg_per_km: f64,

    /// Bus emissions, kg CO₂ per passenger-km.
    pub bus_co2_kg_per_km: f64,

    /// Bus fare prorated per km, CLP.
    pub bus_cost_per_km: f64,

    /// Average urban speed used for the base travel time, km/h.
    pub avg_speed_kmh: f64,

    /// Bus travel time as a multiple of car travel time.
    pub bus_time_factor: f64,

    /// Bicycle travel time as a multiple of car travel time.
    pub bicycle_time_factor: f64,

    /// Points awarded per CLP saved (0.1 = one point per 10 CLP).
    pub points_per_currency: f64,

    /// Points awarded per kg of CO₂ avoided.
    pub points_per_kg_co2: f64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            fuel_price:               1300.0,
            fuel_efficiency_km_per_l: 12.0,
            car_co2_kg_per_km:        0.192,
            bus_co2_kg_per_km:        0.089,
            bus_cost_per_km:          80.0,
            avg_speed_kmh:            35.0,
            bus_time_factor:          1.2,
            bicycle_time_factor:      2.0,
            points_per_currency:      0.1,
            points_per_kg_co2:        5.0,
        }
    }
}

impl CalcConfig {
    /// Check that every constant is usable.
    ///
    /// Efficiency and speed are divisors and must be strictly positive; the
    /// remaining values must be finite and non-negative.
    pub fn validate(&self) -> EcoResult<()> {
        let divisors = [
            ("fuel_efficiency_km_per_l", self.fuel_efficiency_km_per_l),
            ("avg_speed_kmh",            self.avg_speed_kmh),
        ];
        for (name, value) in divisors {
            if !value.is_finite() || value <= 0.0 {
                return Err(EcoError::Config(format!("{name} must be positive, got {value}")));
            }
        }

        let non_negative = [
            ("fuel_price",          self.fuel_price),
            ("car_co2_kg_per_km",   self.car_co2_kg_per_km),
            ("bus_co2_kg_per_km",   self.bus_co2_kg_per_km),
            ("bus_cost_per_km",     self.bus_cost_per_km),
            ("bus_time_factor",     self.bus_time_factor),
            ("bicycle_time_factor", self.bicycle_time_factor),
            ("points_per_currency", self.points_per_currency),
            ("points_per_kg_co2",   self.points_per_kg_co2),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(EcoError::Config(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Human-readable summary of how savings and points are derived.
    pub fn methodology(&self) -> String {
        format!(
            "Fuel cost and emission figures are reference averages.\n\
             Savings and CO2 avoided compare the chosen option with a private car \
             doing {} km/L and emitting {} kg CO2/km.\n\
             Ecopoints = {} per CLP saved + {} per kg of CO2 avoided, rounded down, never negative.",
            self.fuel_efficiency_km_per_l,
            self.car_co2_kg_per_km,
            self.points_per_currency,
            self.points_per_kg_co2,
        )
    }
}
