//! `eco-output` — export writers for the ecoride demo.
//!
//! The CSV backend creates three files in the output directory:
//!
//! | File                  | Columns                              |
//! |-----------------------|--------------------------------------|
//! | `options.csv`         | `mode,cost,co2_kg,time_min`          |
//! | `report.csv`          | `indicator,value`                    |
//! | `points_history.csv`  | `trip,points`                        |
//!
//! Backends implement [`ReportWriter`]; [`export_session`] drives one.
//!
//! # Usage
//!
//! ```rust,ignore
//! use eco_output::{export_session, CsvExporter};
//!
//! let mut writer = CsvExporter::new(Path::new("./output"))?;
//! export_session(&mut writer, &options, &state)?;
//! ```

pub mod csv;
pub mod error;
pub mod export;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvExporter;
pub use error::{OutputError, OutputResult};
pub use export::export_session;
pub use row::HistoryRow;
pub use writer::ReportWriter;
