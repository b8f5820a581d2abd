//! Transport modes compared by the calculator.

use std::str::FromStr;

use crate::EcoError;

/// The four ways a trip can be made.
///
/// Declaration order is the order options are listed in: `Car` first, since
/// every benefit is measured against it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransportMode {
    /// Private car with a single occupant.
    #[default]
    Car,
    /// Public bus, billed per passenger-km.
    Bus,
    /// Shared car; cost and emissions split between passengers.
    Carpool,
    /// Bicycle.
    Bicycle,
}

impl TransportMode {
    /// All modes in listing order.
    pub const ALL: [TransportMode; 4] = [
        TransportMode::Car,
        TransportMode::Bus,
        TransportMode::Carpool,
        TransportMode::Bicycle,
    ];

    /// Lower-case identifier, used for CLI values and CSV columns.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Car     => "car",
            TransportMode::Bus     => "bus",
            TransportMode::Carpool => "carpool",
            TransportMode::Bicycle => "bicycle",
        }
    }

    /// Capitalised label for tables.
    pub fn label(self) -> &'static str {
        match self {
            TransportMode::Car     => "Car",
            TransportMode::Bus     => "Bus",
            TransportMode::Carpool => "Carpool",
            TransportMode::Bicycle => "Bicycle",
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransportMode {
    type Err = EcoError;

    /// Case-insensitive; also accepts the Spanish labels `auto` and
    /// `bicicleta` and the short form `bike`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" | "auto"                   => Ok(TransportMode::Car),
            "bus"                            => Ok(TransportMode::Bus),
            "carpool"                        => Ok(TransportMode::Carpool),
            "bicycle" | "bike" | "bicicleta" => Ok(TransportMode::Bicycle),
            other => Err(EcoError::Parse(format!(
                "unknown transport mode {other:?}: expected car, bus, carpool, or bicycle"
            ))),
        }
    }
}
