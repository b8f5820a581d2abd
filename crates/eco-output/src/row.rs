//! Plain data rows written by export backends.

/// The Ecopoints balance after one trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryRow {
    /// Trip number, starting at 1.
    pub trip:   usize,
    pub points: u64,
}
