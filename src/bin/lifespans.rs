//! Command-line caller for the survival table: loads a snapshot and prints
//! the lifespan distribution for one `(license category, neighborhood)`
//! selection, applying the minimum-sample-size presentation policy.

use std::path::PathBuf;

use anyhow::{Context, bail};

use survival_table::config::TableConfig;
use survival_table::loader::load_records;
use survival_table::survival::SurvivalTable;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let as_json = if let Some(position) = args.iter().position(|arg| arg == "--json") {
        args.remove(position);
        true
    } else {
        false
    };
    if args.len() != 3 {
        bail!("usage: lifespans [--json] <snapshot> <license-category> <neighborhood>");
    }

    let path = PathBuf::from(&args[0]);
    let config = TableConfig::default();
    let rows = load_records(&path, &config)
        .with_context(|| format!("failed to load snapshot {}", path.display()))?;

    let table = SurvivalTable::from_raw(&rows);
    let report = table.report_for(&args[1], &args[2]);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if report.has_sufficient_sample() {
        print!("{}", report.summary());
    } else {
        println!("Not enough data for this combination. Try a different filter.");
    }

    Ok(())
}
