use clap::Parser;
use form_logic::conditions::get_operator_names;
use form_logic::definition::condition_fields;
use form_logic::prelude::*;
use std::fs;
use std::time::Instant;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Inspect the conditions and page graph of a form definition
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the form definition JSON file
    definition_path: String,

    /// Print the route of pages leading to this path
    #[arg(short, long)]
    paths_to: Option<String>,

    /// Also print the fields conditions can be written against
    #[arg(short, long)]
    fields: bool,

    /// Raise log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli);
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn run(cli: Cli) {
    let total_start = Instant::now();

    // --- 1. Loading ---
    let json = fs::read_to_string(&cli.definition_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read definition file '{}': {}",
            &cli.definition_path, e
        ))
    });
    let definition: FormDefinition = serde_json::from_str(&json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse definition JSON: {}", e)));
    info!(
        pages = definition.pages.len(),
        conditions = definition.conditions.len(),
        "loaded definition"
    );

    // --- 2. Integrity ---
    if let Err(e) = check_condition_refs(&definition) {
        exit_with_error(&format!("Definition failed integrity check: {}", e));
    }

    // --- 3. Conditions ---
    let conditions = load_conditions(&definition)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load conditions: {}", e)));

    println!("\n--- Conditions ({}) ---", conditions.len());
    for (wrapper, model) in &conditions {
        println!("{} ({})", wrapper.display_name, wrapper.name);
        println!("  -> Reads:      {}", model.to_presentation_string());
        println!("  -> Expression: {}", model.to_expression());
    }
    let v2_count = definition.v2_conditions().count();
    if v2_count > 0 {
        println!("({} id-addressed conditions not rendered)", v2_count);
    }

    // --- 4. Fields ---
    if cli.fields {
        println!("\n--- Condition Fields ---");
        for field in condition_fields(&definition) {
            let operators: Vec<&str> = get_operator_names(field.field_type)
                .iter()
                .map(OperatorName::as_str)
                .collect();
            println!(
                "{} [{}] ({}): {}",
                field.display,
                field.name,
                field.field_type,
                operators.join(", ")
            );
        }
    }

    // --- 5. Page graph ---
    if let Some(target) = cli.paths_to.as_deref() {
        debug!(page = target, "walking page graph");
        if find_page(&definition, target).is_none() {
            exit_with_error(&format!("Page not found for path '{}'", target));
        }
        let route = find_paths_to(&definition, target);
        println!("\n--- Route to {} ---", target);
        println!("{}", route.join(" -> "));
    }

    println!("\nFinished in {:?}", total_start.elapsed());
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
