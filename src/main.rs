use clap::Parser;
use std::process;
use waste_records::ReaderError;
use waste_records::cli::{args::Args, commands};
use waste_records::constants::exit_codes;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Report has already been written by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);

            // Precondition failures keep their dedicated exit codes
            let code = error
                .downcast_ref::<ReaderError>()
                .map(ReaderError::exit_code)
                .unwrap_or(exit_codes::GENERAL_FAILURE);
            process::exit(code);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Waste Records - Waste Collection CSV Reader");
    println!("===========================================");
    println!();
    println!("Validate and parse waste tonnage and container inventory files.");
    println!();
    println!("USAGE:");
    println!("    waste-records <COMMAND> <PATH> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    waste         Read a waste tonnage file (header is verified)");
    println!("    containers    Read a container inventory file");
    println!("    help          Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Summarize a waste tonnage file:");
    println!("    waste-records waste data/residuos.csv");
    println!();
    println!("    # Dump container records as JSON:");
    println!("    waste-records containers data/contenedores.csv --output-format json");
    println!();
    println!("EXIT CODES:");
    println!("    1704  file name does not end in .csv");
    println!("    1705  file cannot be read");
    println!("    1706  file does not exist");
    println!("    1707  file is empty");
    println!("    1708  header does not match");
    println!("    1709  file has no rows");
}
