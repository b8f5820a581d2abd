//! The `SessionState` — everything a session has accumulated so far.

use eco_calc::Benefit;
use eco_mock::{find_merchant, Merchant};

use crate::{Report, SessionError, SessionResult, TripOutcome};

/// Running totals for one session.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    /// CLP saved over all trips.  May decrease if a trip was costlier than
    /// the car.
    pub total_savings: f64,

    /// kg CO₂ avoided over all trips.
    pub total_co2_avoided: f64,

    /// Current Ecopoints balance.
    pub points: u64,

    /// Balance after each trip, oldest first.
    pub points_history: Vec<u64>,

    /// Names of redeemed merchants, in redemption order.
    pub redeemed: Vec<String>,
}

impl SessionState {
    /// An empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one trip's figures to the totals and return the updated state.
    pub fn apply_trip(mut self, savings: f64, co2_avoided: f64, points: u64) -> Self {
        self.record(savings, co2_avoided, points);
        self
    }

    /// In-place form of [`apply_trip`](Self::apply_trip) for a computed
    /// [`Benefit`], returning the confirmation shown to the user.
    pub fn record_trip(&mut self, benefit: &Benefit) -> TripOutcome {
        self.record(benefit.savings, benefit.co2_avoided, benefit.points);
        TripOutcome {
            savings:      benefit.savings,
            co2_avoided:  benefit.co2_avoided,
            points:       benefit.points,
            total_points: self.points,
        }
    }

    fn record(&mut self, savings: f64, co2_avoided: f64, points: u64) {
        self.total_savings     += savings;
        self.total_co2_avoided += co2_avoided;
        self.points             = self.points.saturating_add(points);
        self.points_history.push(self.points);

        tracing::info!(
            trip = self.points_history.len(),
            savings,
            co2_avoided,
            points,
            balance = self.points,
            "trip applied"
        );
    }

    /// `true` if the balance covers `merchant`'s price.
    #[inline]
    pub fn can_redeem(&self, merchant: &Merchant) -> bool {
        self.points >= merchant.points_required
    }

    /// Spend points on `merchant`.  Returns the remaining balance.
    ///
    /// # Errors
    ///
    /// [`SessionError::InsufficientPoints`] if the balance is too low; the
    /// state is left untouched.
    pub fn redeem(&mut self, merchant: &Merchant) -> SessionResult<u64> {
        if !self.can_redeem(merchant) {
            return Err(SessionError::InsufficientPoints {
                merchant:  merchant.name.to_owned(),
                required:  merchant.points_required,
                available: self.points,
            });
        }

        self.points -= merchant.points_required;
        self.redeemed.push(merchant.name.to_owned());

        tracing::info!(
            merchant = merchant.name,
            cost = merchant.points_required,
            balance = self.points,
            "merchant redeemed"
        );
        Ok(self.points)
    }

    /// Look `name` up in the catalog and [`redeem`](Self::redeem) it.
    /// Returns the catalog entry that was redeemed.
    pub fn redeem_by_name(&mut self, name: &str) -> SessionResult<&'static Merchant> {
        let merchant =
            find_merchant(name).ok_or_else(|| SessionError::UnknownMerchant(name.to_owned()))?;
        self.redeem(merchant)?;
        Ok(merchant)
    }

    /// `(trip number, balance)` pairs for the points chart, numbered from 1.
    pub fn history_points(&self) -> Vec<(usize, u64)> {
        self.points_history
            .iter()
            .enumerate()
            .map(|(i, &p)| (i + 1, p))
            .collect()
    }

    /// Summary table of the accumulated totals.
    pub fn report(&self) -> Report {
        Report::from_state(self)
    }
}

/// Free-function form of [`SessionState::apply_trip`].
pub fn apply_trip(state: SessionState, savings: f64, co2_avoided: f64, points: u64) -> SessionState {
    state.apply_trip(savings, co2_avoided, points)
}
