use clap::Parser;
use flowloc::prelude::*;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::fs;

/// A CLI tool to generate a random flow table for the flowloc resolver
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_flows.json")]
    output: String,

    /// Number of standalone records to generate
    #[arg(long, default_value_t = 12)]
    records: usize,

    /// Length of the attachment chain threaded through the table
    #[arg(long, default_value_t = 3)]
    chain: usize,

    /// Close the attachment chain into a cycle
    #[arg(long, default_value_t = false)]
    cycle: bool,
}

const LOCATIONS: &[&str] = &[
    "DockA", "DockB", "Bay 12", "Bay 7", "North shed", "Cold store", "Ramp 3", "Yard East",
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating flow table ({} records, chain of {}{})...",
        cli.records,
        cli.chain,
        if cli.cycle { ", cyclic" } else { "" }
    );

    let mut rows = Vec::new();

    for i in 0..cli.records {
        rows.push(random_row(&mut rng, i));
    }

    // Thread an attachment chain through dedicated records so alias
    // resolution has something to walk.
    for i in 0..cli.chain {
        let terminal = i + 1 == cli.chain;
        let attached_flow = if !terminal {
            Some(format!("MC{}", i + 1))
        } else if cli.cycle {
            Some("MC0".to_string())
        } else {
            None
        };
        rows.push(RawFlowRow {
            code: format!("C{}W", i),
            mapping: format!("MC{}", i),
            flow_name: format!("Chain flow {}", i),
            physical_location_1: terminal.then(|| pick_location(&mut rng)),
            time_rule_1: terminal.then(|| "all".to_string()),
            physical_location_2: None,
            time_rule_2: None,
            attached_flow,
        });
    }

    let json_output = serde_json::to_string_pretty(&rows)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved {} rows to '{}'",
        rows.len(),
        cli.output
    );

    Ok(())
}

fn random_row(rng: &mut ThreadRng, index: usize) -> RawFlowRow {
    let with_second_slot = rng.random_bool(0.4);
    RawFlowRow {
        code: format!("F{:03}W", index),
        mapping: format!("M{}", index),
        flow_name: format!("Generated flow {}", index),
        physical_location_1: Some(pick_location(rng)),
        time_rule_1: Some(random_rule(rng)),
        physical_location_2: with_second_slot.then(|| pick_location(rng)),
        time_rule_2: with_second_slot.then(|| random_rule(rng)),
        attached_flow: None,
    }
}

fn pick_location(rng: &mut ThreadRng) -> String {
    LOCATIONS[rng.random_range(0..LOCATIONS.len())].to_string()
}

fn random_rule(rng: &mut ThreadRng) -> String {
    match rng.random_range(0..4) {
        0 => "all".to_string(),
        1 => format!("{}:{}", rng.random_range(1..=7), random_hhmm(rng)),
        2 => {
            let start = rng.random_range(1..=5);
            let end = rng.random_range(start..=7);
            format!("{}-{}:{}", start, end, random_hhmm(rng))
        }
        _ => {
            let day = rng.random_range(1..=7);
            format!(
                "{}:{}or1-7:{}",
                day,
                random_hhmm(rng),
                random_hhmm(rng)
            )
        }
    }
}

fn random_hhmm(rng: &mut ThreadRng) -> String {
    format!(
        "{:02}{:02}",
        rng.random_range(0..24),
        rng.random_range(0..60)
    )
}
