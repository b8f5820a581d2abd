//! Summary report and user-facing messages.

use std::fmt;

use crate::SessionState;

/// One line of the summary table.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ReportRow {
    pub indicator: &'static str,
    pub value:     f64,
}

/// Accumulated results: savings (whole CLP), CO₂ avoided (0.1 kg), and the
/// current Ecopoints balance.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub rows: [ReportRow; 3],
}

impl Report {
    pub fn from_state(state: &SessionState) -> Self {
        Self {
            rows: [
                ReportRow { indicator: "Savings CLP",      value: state.total_savings.round() },
                ReportRow { indicator: "CO2 avoided (kg)", value: (state.total_co2_avoided * 10.0).round() / 10.0 },
                ReportRow { indicator: "Ecopoints",        value: state.points as f64 },
            ],
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<18} {:>12}", "Indicator", "Value")?;
        writeln!(f, "{}", "-".repeat(31))?;
        for row in &self.rows {
            writeln!(f, "{:<18} {:>12}", row.indicator, row.value)?;
        }
        Ok(())
    }
}

/// Confirmation produced when a trip is recorded.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TripOutcome {
    pub savings:      f64,
    pub co2_avoided:  f64,
    pub points:       u64,
    /// Balance after this trip.
    pub total_points: u64,
}

impl fmt::Display for TripOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "You earned {} points! Savings: {}, CO2 avoided: {:.1} kg",
            self.points,
            format_clp(self.savings),
            self.co2_avoided,
        )
    }
}

/// Format a CLP amount with no decimals and comma thousands separators,
/// e.g. `-1234.6` → `"-$1,235"`.
pub fn format_clp(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 { format!("-${grouped}") } else { format!("${grouped}") }
}
