//! Lease Engine CLI
//!
//! Runs lease scenarios from a saved-scenario store (or a built-in sample)
//! and prints the summary plus the annual cash-flow table.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lease_engine::scenario::{Abatement, JsonFileStore, ParkingConfig, ScenarioStore};
use lease_engine::{AnalysisResult, EngineConfig, ScenarioParams, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "lease_engine", about = "Lease scenario cash-flow analysis")]
struct Cli {
    /// JSON scenario store to load scenarios from
    #[arg(long)]
    store: Option<PathBuf>,

    /// Run only the named saved scenario (default: all in the store)
    #[arg(long)]
    name: Option<String>,

    /// Override the discount rate (%) for every scenario
    #[arg(long)]
    discount: Option<f64>,

    /// Exclude parking costs from the NPV cash-flow series
    #[arg(long)]
    exclude_parking_from_npv: bool,

    /// Write the first scenario's period table to this CSV path
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut scenarios = load_scenarios(&cli)?;
    if let Some(rate) = cli.discount {
        for params in &mut scenarios {
            params.discount_rate_pct = rate;
        }
    }

    let config = EngineConfig {
        include_parking_in_npv: !cli.exclude_parking_from_npv,
        ..Default::default()
    };
    let runner = ScenarioRunner::new(config);
    let results = runner.run_batch(&scenarios);

    for result in &results {
        print_result(result);
    }

    if let Some(path) = &cli.out {
        let result = results.first().context("no scenarios to export")?;
        write_period_csv(path, result)?;
        println!("Period table written to: {}", path.display());
    }

    Ok(())
}

fn load_scenarios(cli: &Cli) -> anyhow::Result<Vec<ScenarioParams>> {
    let Some(path) = &cli.store else {
        return Ok(vec![sample_scenario()]);
    };

    let store = JsonFileStore::open(path)
        .with_context(|| format!("failed to open scenario store {}", path.display()))?;

    match &cli.name {
        Some(name) => {
            let params = store
                .get(name)
                .with_context(|| format!("no saved scenario named '{}'", name))?;
            Ok(vec![params])
        }
        None => {
            let names = store.list();
            anyhow::ensure!(!names.is_empty(), "scenario store is empty");
            Ok(names.iter().filter_map(|n| store.get(n)).collect())
        }
    }
}

/// Representative scenario used when no store is supplied
fn sample_scenario() -> ScenarioParams {
    ScenarioParams {
        name: "Sample Office Lease".to_string(),
        term_months: 66,
        area_sf: 12_000.0,
        base_rate: 46.0,
        rent_escalation_pct: 3.0,
        opex_rate: 12.0,
        opex_escalation_pct: 3.0,
        parking: ParkingConfig::Flat {
            monthly_cost: 150.0,
            spaces: 30,
        },
        abatement: Abatement::Uniform { free_months: 3.0 },
        ti_allowance_sf: 50.0,
        moving_cost_sf: 10.0,
        construction_cost_sf: 65.0,
        discount_rate_pct: 7.0,
        ..Default::default()
    }
}

fn print_result(result: &AnalysisResult) {
    println!("Scenario: {}", result.summary.name);
    println!("{}", "=".repeat(78));

    for (key, value) in result.summary.display_map() {
        println!("  {:<20} {}", key, value);
    }

    println!();
    println!(
        "{:>4} {:>12} {:>12} {:>6} {:>10} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "Yr", "Start", "End", "Wt", "SF", "Base", "Opex", "Parking", "Abatement", "Net CF"
    );
    println!("{}", "-".repeat(114));
    for row in &result.periods {
        println!(
            "{:>4} {:>12} {:>12} {:>6.2} {:>10.0} {:>12.0} {:>12.0} {:>12.0} {:>12.0} {:>14.0}",
            row.index + 1,
            row.start.format("%m/%d/%Y"),
            row.end.format("%m/%d/%Y"),
            row.weight,
            row.area_sf,
            row.base_cost,
            row.opex_cost,
            row.parking_cost,
            row.abatement_credit,
            row.net_cash_flow,
        );
    }
    println!();
}

fn write_period_csv(path: &PathBuf, result: &AnalysisResult) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    for row in &result.periods {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
