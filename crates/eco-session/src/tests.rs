//! Unit tests for eco-session.

#[cfg(test)]
mod trips {
    use eco_calc::{compare_to_car, compute_options};

    use crate::{apply_trip, SessionState};

    #[test]
    fn apply_trip_accumulates() {
        let s = SessionState::new()
            .apply_trip(283.33, 1.03, 33)
            .apply_trip(100.0, 0.5, 12);
        assert!((s.total_savings - 383.33).abs() < 1e-9);
        assert!((s.total_co2_avoided - 1.53).abs() < 1e-9);
        assert_eq!(s.points, 45);
        assert_eq!(s.points_history, vec![33, 45]);
    }

    #[test]
    fn free_function_matches_method() {
        let a = apply_trip(SessionState::new(), 10.0, 1.0, 6);
        let b = SessionState::new().apply_trip(10.0, 1.0, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn record_trip_from_benefit() {
        let opts = compute_options(10.0, 3, 1300.0).unwrap();
        let benefit = compare_to_car(10.0, &opts[1], 3, 1300.0).unwrap();

        let mut s = SessionState::new();
        let outcome = s.record_trip(&benefit);
        assert_eq!(outcome.points, 33);
        assert_eq!(outcome.total_points, 33);
        assert_eq!(outcome.to_string(), "You earned 33 points! Savings: $283, CO2 avoided: 1.0 kg");
    }

    #[test]
    fn car_trip_adds_history_but_no_points() {
        let s = SessionState::new().apply_trip(0.0, 0.0, 0);
        assert_eq!(s.points, 0);
        assert_eq!(s.points_history, vec![0]);
    }

    #[test]
    fn history_is_numbered_from_one() {
        let s = SessionState::new().apply_trip(0.0, 0.0, 5).apply_trip(0.0, 0.0, 7);
        assert_eq!(s.history_points(), vec![(1, 5), (2, 12)]);
    }
}

#[cfg(test)]
mod redemption {
    use eco_mock::{find_merchant, CATALOG};

    use crate::{SessionError, SessionState};

    #[test]
    fn redeem_deducts_and_records() {
        let mut s = SessionState::new().apply_trip(0.0, 0.0, 350);
        let servipag = find_merchant("Servipag").unwrap();
        assert!(s.can_redeem(servipag));
        assert_eq!(s.redeem(servipag).unwrap(), 50);
        assert_eq!(s.points, 50);
        assert_eq!(s.redeemed, vec!["Servipag".to_owned()]);
    }

    #[test]
    fn exact_balance_is_enough() {
        let mut s = SessionState::new().apply_trip(0.0, 0.0, 200);
        let merchant = s.redeem_by_name("juan valdez").unwrap();
        assert_eq!(merchant.name, "Juan Valdez");
        assert_eq!(s.points, 0);
        assert_eq!(s.redeemed, vec!["Juan Valdez".to_owned()]);
    }

    #[test]
    fn insufficient_points_leaves_state_untouched() {
        let mut s = SessionState::new().apply_trip(0.0, 0.0, 699);
        let before = s.clone();
        let err = s.redeem(&CATALOG[2]).unwrap_err();
        assert_eq!(
            err,
            SessionError::InsufficientPoints {
                merchant:  "Cinemark".into(),
                required:  700,
                available: 699,
            }
        );
        assert_eq!(s, before);
    }

    #[test]
    fn redemption_does_not_touch_history() {
        let mut s = SessionState::new().apply_trip(0.0, 0.0, 600);
        s.redeem_by_name("Líder").unwrap();
        assert_eq!(s.points_history, vec![600]);
        assert_eq!(s.points, 100);
    }

    #[test]
    fn unknown_merchant() {
        let mut s = SessionState::new().apply_trip(0.0, 0.0, 1_000);
        assert_eq!(
            s.redeem_by_name("Starbucks"),
            Err(SessionError::UnknownMerchant("Starbucks".into()))
        );
    }

    #[test]
    fn empty_session_cannot_redeem_anything() {
        let s = SessionState::new();
        assert!(CATALOG.iter().all(|m| !s.can_redeem(m)));
    }
}

#[cfg(test)]
mod report {
    use crate::{format_clp, SessionState};

    #[test]
    fn rows_are_rounded() {
        let s = SessionState::new().apply_trip(1283.6, 2.26, 40);
        let r = s.report();
        assert_eq!(r.rows[0].indicator, "Savings CLP");
        assert_eq!(r.rows[0].value, 1284.0);
        assert_eq!(r.rows[1].value, 2.3);
        assert_eq!(r.rows[2].value, 40.0);
    }

    #[test]
    fn display_lists_indicators() {
        let text = SessionState::new().report().to_string();
        assert!(text.contains("Savings CLP"));
        assert!(text.contains("CO2 avoided (kg)"));
        assert!(text.contains("Ecopoints"));
    }

    #[test]
    fn clp_formatting() {
        assert_eq!(format_clp(0.0), "$0");
        assert_eq!(format_clp(999.4), "$999");
        assert_eq!(format_clp(1000.0), "$1,000");
        assert_eq!(format_clp(1234567.0), "$1,234,567");
        assert_eq!(format_clp(-1234.6), "-$1,235");
    }
}
