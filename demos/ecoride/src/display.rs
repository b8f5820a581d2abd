//! Terminal rendering for the demo.

use eco_calc::TransportOption;
use eco_mock::{Route, CATALOG};
use eco_session::{format_clp, SessionState};

pub fn dashboard(state: &SessionState) {
    println!("── Dashboard ──────────────────────────────────────────────");
    println!(
        "Savings: {}  |  CO2 avoided: {:.1} kg  |  Ecopoints: {}",
        format_clp(state.total_savings),
        state.total_co2_avoided,
        state.points
    );
    println!();
}

pub fn routes(routes: &[Route], selected: usize) {
    println!("── Routes ─────────────────────────────────────────────────");
    for (i, route) in routes.iter().enumerate() {
        let marker = if i == selected { '>' } else { ' ' };
        println!("{marker} {i:>2}  {}", route.label());
    }
    println!();
}

pub fn options(options: &[TransportOption]) {
    println!("{:<10} {:>10} {:>10} {:>10}", "Mode", "Cost (CLP)", "CO2 (kg)", "Time (min)");
    println!("{}", "-".repeat(43));
    for row in options.iter().map(TransportOption::row) {
        println!("{:<10} {:>10} {:>10.2} {:>10}", row.mode, row.cost, row.co2_kg, row.time_min);
    }
    println!();
}

pub fn catalog(state: &SessionState) {
    println!("── Ecopoints catalog ──────────────────────────────────────");
    for merchant in &CATALOG {
        let status = if state.can_redeem(merchant) { "available" } else { "locked" };
        println!("  {:<30} {status}", merchant.to_string());
    }
    println!();
}

pub fn history(state: &SessionState) {
    println!("Ecopoints over time:");
    if state.points_history.is_empty() {
        println!("  Simulate a trip to see how your points evolve.");
        return;
    }
    let max = state.points_history.iter().copied().max().unwrap_or(0).max(1);
    for (trip, points) in state.history_points() {
        let bar = "#".repeat((points * 40 / max) as usize);
        println!("  trip {trip:>3} {points:>6} {bar}");
    }
}

pub fn redeemed(state: &SessionState) {
    if state.redeemed.is_empty() {
        return;
    }
    println!("Your redemptions:");
    for name in &state.redeemed {
        println!("  - {name}");
    }
}
