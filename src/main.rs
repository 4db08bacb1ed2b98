use asset_event_ingestor::cli::{args::Args, commands};
use clap::Parser;
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and exit cleanly
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result = runtime.block_on(commands::run(args));

    match result {
        Ok(_accepted) => {
            // Success - the command has already reported the accepted count
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information when no subcommand is provided
fn show_help_and_commands() {
    println!("Asset Event Ingestor - CSV to Event Sink Pipeline");
    println!("=================================================");
    println!();
    println!("Validate CSV files of financial asset events and publish them to an");
    println!("event sink in deterministic order. A single invalid row rejects the file.");
    println!();
    println!("USAGE:");
    println!("    asset-event-ingestor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    ingest      Ingest a CSV file and publish its events");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Validate and publish to stdout as JSON lines:");
    println!("    asset-event-ingestor ingest events.csv");
    println!();
    println!("    # Publish to a file with a custom topic, awaiting each ack:");
    println!("    asset-event-ingestor ingest events.csv --topic corporate-actions \\");
    println!("                                --output events.jsonl --ordered");
    println!();
    println!("    # Validate only:");
    println!("    asset-event-ingestor ingest events.csv --dry-run");
    println!();
    println!("For detailed help on any command, use:");
    println!("    asset-event-ingestor <COMMAND> --help");
}
