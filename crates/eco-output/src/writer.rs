//! The `ReportWriter` trait implemented by export backends.

use eco_calc::OptionRow;
use eco_session::Report;

use crate::{HistoryRow, OutputResult};

/// Trait implemented by export backends.
pub trait ReportWriter {
    /// Write the rounded option table for one trip.
    fn write_options(&mut self, rows: &[OptionRow]) -> OutputResult<()>;

    /// Write the accumulated session summary.
    fn write_report(&mut self, report: &Report) -> OutputResult<()>;

    /// Write the per-trip points history.
    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
