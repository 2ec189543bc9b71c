pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use commands::recommend::RecommendArgs;

#[derive(Debug, Parser)]
#[command(
    name = "atelier",
    about = "Atelier interior design CLI",
    long_about = "Generate design recommendations and operate the Atelier database: migrations, designer seeding, config inspection, and readiness checks.",
    after_help = "Examples:\n  atelier recommend --room-type \"Bedroom\" --room-size \"Small (< 100 sq ft)\" --budget \"Under ₹50,000 / $600\" --color-theme \"Soft Pastels\" --furniture-style \"Scandinavian\" --lifestyle \"Couple\"\n  atelier options\n  atelier doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Generate a design recommendation bundle and print it as JSON")]
    Recommend(RecommendArgs),
    #[command(about = "List the curated choices, services, and time slots")]
    Options,
    #[command(about = "Apply pending database migrations and return structured status output")]
    Migrate,
    #[command(about = "Load the designer roster (idempotent) and verify it")]
    Seed,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
    #[command(about = "Validate config, knowledge base integrity, and DB connectivity")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Recommend(args) => commands::recommend::run(&args),
        Command::Options => commands::options::run(),
        Command::Migrate => commands::migrate::run(),
        Command::Seed => commands::seed::run(),
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
