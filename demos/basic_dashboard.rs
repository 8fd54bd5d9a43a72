//! Basic dashboard walkthrough.
//!
//! Demonstrates the generate → filter → report pipeline with the
//! default selection, and the session-level dataset caching across
//! filter changes.

use fx_dashboard::analytics::filter::{FilterSelection, Period};
use fx_dashboard::dashboard::session::DashboardSession;
use fx_dashboard::simulation::generator::GeneratorConfig;

fn main() {
    println!("╔═══════════════════════════════════════════╗");
    println!("║  fx-dashboard: Basic Dashboard Example    ║");
    println!("╚═══════════════════════════════════════════╝\n");

    let mut session = DashboardSession::with_seed(GeneratorConfig::default(), 42);
    let dataset_id = session.dataset().id();
    let point_count = session.dataset().len();

    println!(
        "Dataset {}: {} rate points over {} days\n",
        dataset_id,
        point_count,
        session.config().day_count()
    );

    // --- Scenario 1: the default selection ---
    println!("━━━ Scenario 1: Default Selection (Last 30 Days) ━━━\n");

    let selection = FilterSelection::default();
    match session.analyze(&selection) {
        Ok(report) => println!("{}", report),
        Err(e) => println!("warning: {}", e),
    }

    // --- Scenario 2: widen the window ---
    println!("━━━ Scenario 2: Same Pairs, Last 90 Days ━━━\n");

    let mut selection = FilterSelection::default();
    selection.period = Period::Last90Days;
    match session.analyze(&selection) {
        Ok(report) => {
            println!("Average Rate: {:.3}", report.summary.average_rate);
            println!("Total Volume: {:.1}M", report.summary.total_volume_millions);
            println!("Risk Level:   {}", report.summary.risk_level);
            println!("Basket:       {} points", report.basket.len());
        }
        Err(e) => println!("warning: {}", e),
    }

    // The widened window reused the cached dataset.
    println!("\nDataset after both scenarios: {}", session.dataset().id());
    assert_eq!(session.dataset().id(), dataset_id);
}
