//! Check-in smoke test CLI
//!
//! Runs the database and/or email suites against their collaborators and
//! prints an aggregate pass/fail report. A failing step never aborts the
//! run; the process always reaches the report.

use clap::Parser;
use colored::Colorize;

use smoketest::common::{logging, Settings};
use smoketest::store::Backend;
use smoketest::suites::{self, RunConfig, Suite};
use smoketest::Runner;

#[derive(Parser)]
#[command(name = "smoketest", about = "Check-in reservation store and email smoke test")]
#[command(version, long_about = None)]
struct Cli {
    /// Suites to run; values can be repeated or space-separated
    #[arg(long = "test", value_enum, num_args = 1.., default_values_t = [Suite::All])]
    test: Vec<Suite>,

    /// Store backend for the database suite
    #[arg(long = "database", value_enum)]
    database: Option<Backend>,
}

fn main() {
    logging::init_cli();

    let cli = Cli::parse();
    let config = RunConfig::new(&cli.test, cli.database);

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    println!("Testing:");
    for name in config.suites.names() {
        println!("    {}", name.blue());
    }
    if config.backend_explicit {
        println!("Database: {}", config.backend);
    }

    let mut runner = Runner::new();
    if config.suites.database {
        suites::database::run(&mut runner, config.backend, &settings.store);
    }
    if config.suites.email {
        suites::email::run(&mut runner, &settings.email);
    }

    let report = runner.into_report();
    println!();
    report.print();

    if !report.is_success() {
        std::process::exit(1);
    }
}
