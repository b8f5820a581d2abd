//! The option calculator.

use eco_core::{CalcConfig, EcoError, EcoResult, TransportMode};

use crate::{Benefit, TransportOption};

/// Prices trips for every [`TransportMode`] from a fixed [`CalcConfig`].
///
/// All methods are pure; a `Calculator` can be shared freely.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    config: CalcConfig,
}

impl Calculator {
    /// Wrap `config` after checking it with [`CalcConfig::validate`].
    pub fn new(config: CalcConfig) -> EcoResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// A copy of this calculator priced at `fuel_price`, validated like any
    /// other configuration value.
    ///
    /// # Errors
    ///
    /// [`EcoError::Config`] if `fuel_price` is negative, NaN, or infinite.
    pub fn with_fuel_price(&self, fuel_price: f64) -> EcoResult<Self> {
        Self::new(CalcConfig { fuel_price, ..self.config.clone() })
    }

    #[inline]
    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// Fuel price from the configuration, used when the caller has no
    /// override.
    #[inline]
    pub fn default_fuel_price(&self) -> f64 {
        self.config.fuel_price
    }

    /// Base travel time in minutes at the configured average speed.
    #[inline]
    pub fn base_time_min(&self, distance_km: f64) -> f64 {
        distance_km / self.config.avg_speed_kmh * 60.0
    }

    /// The single-occupant car option.  Needs no passenger count, so it
    /// cannot fail.
    pub fn car_option(&self, distance_km: f64, fuel_price: f64) -> TransportOption {
        let litres = distance_km / self.config.fuel_efficiency_km_per_l;
        TransportOption {
            mode:     TransportMode::Car,
            cost:     litres * fuel_price,
            co2_kg:   distance_km * self.config.car_co2_kg_per_km,
            time_min: self.base_time_min(distance_km),
        }
    }

    /// Price all four modes, in [`TransportMode::ALL`] order.
    ///
    /// # Errors
    ///
    /// [`EcoError::InvalidArgument`] if `passengers` is zero.
    pub fn compute_options(
        &self,
        distance_km: f64,
        passengers:  u32,
        fuel_price:  f64,
    ) -> EcoResult<[TransportOption; 4]> {
        if passengers == 0 {
            return Err(EcoError::InvalidArgument(format!(
                "carpool passenger count must be at least 1, got {passengers}"
            )));
        }

        let car = self.car_option(distance_km, fuel_price);
        let shared = passengers as f64;

        let options = [
            car,
            TransportOption {
                mode:     TransportMode::Bus,
                cost:     distance_km * self.config.bus_cost_per_km,
                co2_kg:   distance_km * self.config.bus_co2_kg_per_km,
                time_min: car.time_min * self.config.bus_time_factor,
            },
            TransportOption {
                mode:     TransportMode::Carpool,
                cost:     car.cost / shared,
                co2_kg:   car.co2_kg / shared,
                time_min: car.time_min,
            },
            TransportOption {
                mode:     TransportMode::Bicycle,
                cost:     0.0,
                co2_kg:   0.0,
                time_min: car.time_min * self.config.bicycle_time_factor,
            },
        ];

        tracing::debug!(distance_km, passengers, fuel_price, car_cost = car.cost, "computed transport options");
        Ok(options)
    }

    /// Compare `chosen` against a freshly computed car option for the same
    /// trip.
    ///
    /// # Errors
    ///
    /// [`EcoError::InvalidArgument`] if `passengers` is zero.
    pub fn compare_to_car(
        &self,
        distance_km: f64,
        chosen:      &TransportOption,
        passengers:  u32,
        fuel_price:  f64,
    ) -> EcoResult<Benefit> {
        let [car, ..] = self.compute_options(distance_km, passengers, fuel_price)?;

        let savings     = car.cost - chosen.cost;
        let co2_avoided = car.co2_kg - chosen.co2_kg;
        let points      = self.points_for(savings, co2_avoided);

        tracing::debug!(mode = %chosen.mode, savings, co2_avoided, points, "compared option to car");
        Ok(Benefit { savings, co2_avoided, points })
    }

    /// Convert savings (CLP) and CO₂ avoided (kg) into points.
    ///
    /// Rounds down and never returns less than zero.  A non-finite total
    /// earns nothing.
    pub fn points_for(&self, savings: f64, co2_avoided: f64) -> u64 {
        let raw = savings * self.config.points_per_currency
            + co2_avoided * self.config.points_per_kg_co2;
        if !raw.is_finite() || raw <= 0.0 {
            return 0;
        }
        raw.floor() as u64
    }
}

// ── Default-config shorthands ─────────────────────────────────────────────────

/// [`Calculator::compute_options`] with the default [`CalcConfig`].
pub fn compute_options(
    distance_km: f64,
    passengers:  u32,
    fuel_price:  f64,
) -> EcoResult<[TransportOption; 4]> {
    Calculator::default().compute_options(distance_km, passengers, fuel_price)
}

/// [`Calculator::compare_to_car`] with the default [`CalcConfig`].
pub fn compare_to_car(
    distance_km: f64,
    chosen:      &TransportOption,
    passengers:  u32,
    fuel_price:  f64,
) -> EcoResult<Benefit> {
    Calculator::default().compare_to_car(distance_km, chosen, passengers, fuel_price)
}
