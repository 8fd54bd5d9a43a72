//! fx-dashboard CLI
//!
//! Generate synthetic rate datasets and run dashboard analytics from
//! the command line.
//!
//! # Usage
//!
//! ```bash
//! # Generate a reproducible one-year dataset
//! fx-dashboard generate --seed 42 --output rates.json
//!
//! # Analyze it with the default selection
//! fx-dashboard analyze --input rates.json
//!
//! # Custom selection, JSON output
//! fx-dashboard analyze --seed 42 --pairs USD/EUR,USD/JPY --period last90 --format json
//! ```

use fx_dashboard::analytics::filter::{filter_dataset, FilterSelection, Period};
use fx_dashboard::core::currency::CurrencyPair;
use fx_dashboard::core::rates::RateDataset;
use fx_dashboard::dashboard::report::DashboardReport;
use fx_dashboard::simulation::generator::{generate_default, generate_seeded, GeneratorConfig};
use std::fs;
use std::process;

fn print_usage() {
    eprintln!(
        r#"fx-dashboard — synthetic currency exchange rate simulation and analytics

USAGE:
    fx-dashboard <COMMAND> [OPTIONS]

COMMANDS:
    generate    Generate a synthetic rate dataset
    analyze     Run the dashboard analytics over a dataset
    help        Show this message

OPTIONS (generate):
    --seed <N>          Seed the generator (reproducible output)
    --output <FILE>     Write to file instead of stdout

OPTIONS (analyze):
    --input <FILE>      Path to a JSON dataset (from `generate`)
    --seed <N>          Generate a fresh seeded dataset instead of reading one
    --pairs <LIST>      Comma-separated pairs (default: USD/EUR,USD/GBP,USD/INR)
    --period <NAME>     last30 (default), last90, last180 or year
    --format <FORMAT>   Output format: text (default) or json

EXAMPLES:
    fx-dashboard generate --seed 42 --output rates.json
    fx-dashboard analyze --input rates.json --period last90
    fx-dashboard analyze --seed 7 --pairs USD/JPY,GBP/INR --format json"#
    );
}

fn cmd_generate(args: &[String]) {
    let mut seed: Option<u64> = None;
    let mut output_path: Option<String> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                seed = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--seed requires a number");
                    process::exit(1);
                }));
            }
            "--output" => {
                i += 1;
                output_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--output requires a file path");
                    process::exit(1);
                }));
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let dataset = match seed {
        Some(seed) => generate_seeded(&GeneratorConfig::default(), seed),
        None => generate_default(),
    };

    let json = serde_json::to_string_pretty(&dataset).unwrap_or_else(|e| {
        eprintln!("Error serializing dataset: {}", e);
        process::exit(1);
    });

    if let Some(path) = output_path {
        fs::write(&path, &json).unwrap_or_else(|e| {
            eprintln!("Error writing to '{}': {}", path, e);
            process::exit(1);
        });
        eprintln!("Generated {} rate points → {}", dataset.len(), path);
    } else {
        println!("{}", json);
    }
}

fn load_dataset(path: &str) -> RateDataset {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{}': {}", path, e);
        process::exit(1);
    });

    serde_json::from_str(&content).unwrap_or_else(|e| {
        eprintln!("Error parsing dataset JSON: {}", e);
        eprintln!("Expected the output of `fx-dashboard generate`");
        process::exit(1);
    })
}

fn parse_pairs(list: &str) -> Vec<CurrencyPair> {
    list.split(',')
        .map(|s| {
            s.trim().parse().unwrap_or_else(|e| {
                eprintln!("{}", e);
                process::exit(1);
            })
        })
        .collect()
}

fn cmd_analyze(args: &[String]) {
    let mut input_path: Option<String> = None;
    let mut seed: Option<u64> = None;
    let mut pairs: Option<Vec<CurrencyPair>> = None;
    let mut period = Period::Last30Days;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--seed" => {
                i += 1;
                seed = Some(args.get(i).and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                    eprintln!("--seed requires a number");
                    process::exit(1);
                }));
            }
            "--pairs" => {
                i += 1;
                let list = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--pairs requires a comma-separated list");
                    process::exit(1);
                });
                pairs = Some(parse_pairs(&list));
            }
            "--period" => {
                i += 1;
                let name = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--period requires a name");
                    process::exit(1);
                });
                period = name.parse().unwrap_or_else(|e| {
                    eprintln!("{}", e);
                    process::exit(1);
                });
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let dataset = match (input_path, seed) {
        (Some(path), _) => load_dataset(&path),
        (None, Some(seed)) => generate_seeded(&GeneratorConfig::default(), seed),
        (None, None) => generate_default(),
    };

    let mut selection = FilterSelection::default();
    if let Some(pairs) = pairs {
        selection.pairs = pairs;
    }
    selection.period = period;

    let view = filter_dataset(&dataset, &selection);
    let report = match DashboardReport::build(&view) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("warning: {}", e);
            process::exit(1);
        }
    };

    if format == "json" {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
                eprintln!("Error serializing report: {}", e);
                process::exit(1);
            })
        );
    } else {
        println!("{}", report);
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "generate" => cmd_generate(rest),
        "analyze" => cmd_analyze(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
