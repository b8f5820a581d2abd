//! `eco-calc` — the transport option calculator and benefit comparator.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                   |
//! |-----------------|------------------------------------------------------------|
//! | [`option`]      | `TransportOption`, rounded `OptionRow`, `find_option`      |
//! | [`calculator`]  | `Calculator` — the four linear per-mode formulas           |
//! | [`benefit`]     | `Benefit` — savings, CO₂ avoided, and points versus car    |
//!
//! # Formulas
//!
//! With `t = distance / avg_speed × 60` minutes:
//!
//! | Mode      | Cost                               | CO₂                 | Time        |
//! |-----------|------------------------------------|---------------------|-------------|
//! | Car       | `distance / efficiency × fuel`     | `distance × car_f`  | `t`         |
//! | Bus       | `distance × bus_tariff`            | `distance × bus_f`  | `t × 1.2`   |
//! | Carpool   | `car.cost / passengers`            | `car.co2 / passengers` | `t`      |
//! | Bicycle   | `0`                                | `0`                 | `t × 2`     |
//!
//! Points = `floor(savings × 0.1 + co2_avoided × 5)`, clamped at zero.
//!
//! Distance is not validated: zero or negative distances produce the
//! corresponding zero or negative figures and are the caller's concern.  The
//! passenger count must be at least 1, otherwise the call fails with
//! [`EcoError::InvalidArgument`](eco_core::EcoError::InvalidArgument).
//!
//! # Usage
//!
//! ```rust,ignore
//! let options = eco_calc::compute_options(10.0, 3, 1300.0)?;
//! let bus = eco_calc::find_option(&options, TransportMode::Bus).unwrap();
//! let benefit = eco_calc::compare_to_car(10.0, bus, 3, 1300.0)?;
//! assert_eq!(benefit.points, 33);
//! ```

pub mod benefit;
pub mod calculator;
pub mod option;


pub use benefit::Benefit;
pub use calculator::{compare_to_car, compute_options, Calculator};
pub use option::{find_option, OptionRow, TransportOption};
