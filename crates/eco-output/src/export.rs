//! Write a whole session through any [`ReportWriter`].

use eco_calc::TransportOption;
use eco_session::SessionState;

use crate::{HistoryRow, OutputResult, ReportWriter};

/// Write the option table, the session report, and the points history, then
/// finish the writer.
pub fn export_session<W: ReportWriter>(
    writer:  &mut W,
    options: &[TransportOption],
    state:   &SessionState,
) -> OutputResult<()> {
    let option_rows: Vec<_> = options.iter().map(TransportOption::row).collect();
    writer.write_options(&option_rows)?;

    writer.write_report(&state.report())?;

    let history: Vec<HistoryRow> = state
        .history_points()
        .into_iter()
        .map(|(trip, points)| HistoryRow { trip, points })
        .collect();
    writer.write_history(&history)?;

    writer.finish()?;

    tracing::debug!(options = option_rows.len(), trips = history.len(), "session exported");
    Ok(())
}
