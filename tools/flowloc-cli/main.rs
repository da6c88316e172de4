use chrono::{Local, NaiveDateTime};
use clap::{Parser, ValueEnum};
use flowloc::prelude::*;
use std::io::{self, Write};

/// Define a CLI-specific enum for clap to parse.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeCli {
    Snapshot,
    PerRecord,
}

impl ModeCli {
    fn into_mode(self) -> AccessMode {
        match self {
            ModeCli::Snapshot => AccessMode::Snapshot,
            ModeCli::PerRecord => AccessMode::PerRecord,
        }
    }
}

/// A flow-code location resolution CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the flow table JSON file (an array of raw storage rows)
    table_path: Option<String>,
    /// Flow code to resolve
    code: Option<String>,

    /// Timestamp to evaluate against, "YYYY-MM-DD HH:MM" (default: now)
    #[arg(short, long)]
    at: Option<String>,

    /// The repository access mode to use
    #[arg(short, long, value_enum)]
    mode: Option<ModeCli>,

    /// Search codes, names and mappings instead of resolving
    #[arg(short, long)]
    search: Option<String>,

    /// Print resolution events after the result
    #[arg(short, long)]
    verbose: bool,

    /// Run in interactive mode to be prompted for inputs
    #[arg(short = 'i', long, help = "Run in interactive 'human' mode")]
    human: bool,
}

fn main() {
    let cli = Cli::parse();

    if cli.human {
        run_interactive();
    } else {
        run_non_interactive(cli);
    }
}

fn run_non_interactive(cli: Cli) {
    let table_path = cli.table_path.unwrap_or_else(|| {
        exit_with_error("Table path is required in non-interactive mode.");
    });

    if let Some(query) = cli.search {
        run_search(&table_path, &query);
        return;
    }

    let code = cli.code.unwrap_or_else(|| {
        exit_with_error("Flow code is required in non-interactive mode.");
    });
    let at = cli
        .at
        .map(|raw| parse_timestamp(&raw))
        .unwrap_or_else(|| Local::now().naive_local());
    let mode = cli.mode.unwrap_or(ModeCli::Snapshot).into_mode();

    run_resolution(&table_path, &code, at, mode, cli.verbose);
}

fn run_resolution(table_path: &str, code: &str, at: NaiveDateTime, mode: AccessMode, verbose: bool) {
    let repository = MemoryRepository::from_json_file(table_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow table: {}", e)));

    let mut locator = Locator::builder(repository)
        .mode(mode)
        .observer(EventLog::new())
        .build();

    println!("Query time: {}", at.format("%Y-%m-%d %H:%M:%S (%A)"));

    let results = locator
        .find_current_locations(code, at)
        .unwrap_or_else(|e| exit_with_error(&format!("Resolution failed: {}", e)));

    match results {
        Some(matches) => {
            println!("\nFlow code: {}", code);

            let first = &matches[0];
            if first.aliased {
                println!(
                    "Original flow: {} (code: {})",
                    first.original_flow_name, first.requested_code
                );
                println!(
                    "Final flow:    {} (code: {})",
                    first.flow_name, first.resolved_code
                );
            } else {
                println!("Flow: {}", first.flow_name);
            }
            println!("Mapping: {}", first.mapping);

            println!("Currently applicable physical locations:");
            for (i, result) in matches.iter().enumerate() {
                let suffix = if result.aliased { " (attached)" } else { "" };
                println!("{}. {}{}", i + 1, result.location, suffix);
            }
        }
        None => {
            exit_with_error(&format!("No rule record found for flow code '{}'.", code));
        }
    }

    if verbose {
        let events = &locator.observer().events;
        if !events.is_empty() {
            println!("\n--- Resolution Events ---");
            for event in events {
                println!("{}", event);
            }
        }
    }
}

fn run_search(table_path: &str, query: &str) {
    let repository = MemoryRepository::from_json_file(table_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load flow table: {}", e)));

    let mut locator = Locator::new(repository);
    let hits = locator
        .search(query)
        .unwrap_or_else(|e| exit_with_error(&format!("Search failed: {}", e)));

    if hits.is_empty() {
        println!("No flows match '{}'.", query);
        return;
    }

    println!("{} match(es) for '{}':", hits.len(), query);
    for hit in hits {
        let field = match hit.field {
            MatchField::Code => "code",
            MatchField::Name => "name",
            MatchField::Mapping => "mapping",
        };
        println!(
            "  {} - {} (mapping: {}) [matched on {}]",
            hit.code, hit.name, hit.mapping, field
        );
    }
}

/// Runs the CLI in an interactive, human-friendly mode with prompts.
fn run_interactive() {
    println!("--- flowloc Interactive Mode ---");

    let table_path = prompt_for_input("Enter flow table path", Some("data/flows.json"));
    let code = prompt_for_input("Enter flow code (e.g. 574W)", None);
    if code.is_empty() {
        exit_with_error("A flow code is required.");
    }

    let at_str = prompt_for_input("Enter timestamp YYYY-MM-DD HH:MM (empty for now)", None);
    let at = if at_str.is_empty() {
        Local::now().naive_local()
    } else {
        parse_timestamp(&at_str)
    };

    run_resolution(&table_path, &code, at, AccessMode::Snapshot, true);
}

fn parse_timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Could not parse timestamp '{}' (expected YYYY-MM-DD HH:MM): {}",
                raw, e
            ))
        })
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or("".to_string(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    io::stdout().flush().unwrap();

    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
