//! CSV export backend.
//!
//! Creates `options.csv`, `report.csv`, and `points_history.csv` in the
//! configured directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use eco_calc::OptionRow;
use eco_session::Report;

use crate::writer::ReportWriter;
use crate::{HistoryRow, OutputResult};

/// Writes a session export to three CSV files.
pub struct CsvExporter {
    options:  Writer<File>,
    report:   Writer<File>,
    history:  Writer<File>,
    finished: bool,
}

impl CsvExporter {
    /// Create `dir` if needed, then the three CSV files with their header
    /// rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut options = Writer::from_path(dir.join("options.csv"))?;
        options.write_record(["mode", "cost", "co2_kg", "time_min"])?;

        let mut report = Writer::from_path(dir.join("report.csv"))?;
        report.write_record(["indicator", "value"])?;

        let mut history = Writer::from_path(dir.join("points_history.csv"))?;
        history.write_record(["trip", "points"])?;

        Ok(Self {
            options,
            report,
            history,
            finished: false,
        })
    }
}

impl ReportWriter for CsvExporter {
    fn write_options(&mut self, rows: &[OptionRow]) -> OutputResult<()> {
        for row in rows {
            self.options.write_record(&[
                row.mode.to_owned(),
                row.cost.to_string(),
                row.co2_kg.to_string(),
                row.time_min.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_report(&mut self, report: &Report) -> OutputResult<()> {
        for row in &report.rows {
            self.report.write_record(&[row.indicator.to_owned(), row.value.to_string()])?;
        }
        Ok(())
    }

    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()> {
        for row in rows {
            self.history.write_record(&[row.trip.to_string(), row.points.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.options.flush()?;
        self.report.flush()?;
        self.history.flush()?;
        Ok(())
    }
}
