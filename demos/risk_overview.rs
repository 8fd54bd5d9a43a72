//! Risk classification walkthrough.
//!
//! Runs all six pairs over the full year and shows how per-pair
//! volatility drives the tier buckets — and how the pooled summary
//! tier can disagree with every per-pair tier for a mixed selection.

use fx_dashboard::analytics::filter::{FilterSelection, Period};
use fx_dashboard::dashboard::session::DashboardSession;
use fx_dashboard::simulation::generator::GeneratorConfig;

fn main() {
    println!("╔═══════════════════════════════════════════╗");
    println!("║  fx-dashboard: Risk Classification        ║");
    println!("╚═══════════════════════════════════════════╝\n");

    let config = GeneratorConfig::default();
    let all_pairs: Vec<_> = config.pairs.iter().map(|pc| pc.pair.clone()).collect();

    let mut session = DashboardSession::with_seed(config, 7);
    let selection = FilterSelection::new(all_pairs, Period::LastYear);

    let report = match session.analyze(&selection) {
        Ok(report) => report,
        Err(e) => {
            println!("warning: {}", e);
            return;
        }
    };

    println!("━━━ Per-Pair Volatility ━━━\n");
    for row in report.table_rows() {
        println!(
            "  {:<10} vol {:>8}  [{}]",
            row.pair, row.volatility, row.risk_level
        );
    }

    println!("\n━━━ Risk Buckets ━━━\n");
    let buckets = &report.risk_buckets;
    for (label, entries) in [
        ("Low", &buckets.low),
        ("Medium", &buckets.medium),
        ("High", &buckets.high),
    ] {
        print!("  {:<7}", format!("{}:", label));
        if entries.is_empty() {
            println!("(no pairs in this tier)");
        } else {
            let names: Vec<String> = entries
                .iter()
                .map(|e| format!("{} (σ {:.3})", e.pair, e.volatility))
                .collect();
            println!("{}", names.join(", "));
        }
    }

    println!("\n━━━ Pooled vs Per-Pair ━━━\n");
    println!("  Pooled summary tier: {}", report.summary.risk_level);
    println!(
        "  The pooled standard deviation mixes JPY-scale and EUR-scale"
    );
    println!(
        "  rates, so it can land in a different tier than any single pair."
    );
}
