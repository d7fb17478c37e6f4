use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

mod config;
mod writer;

use config::GeneratorConfig;
use writer::{run_generation, RunReport};

#[derive(Parser)]
#[command(
    name = "emmygen",
    version,
    about = "Generate EmmyLua annotation stubs from reflection dumps"
)]
struct Cli {
    /// Path to the generator config (JSON)
    config: PathBuf,
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let config = GeneratorConfig::load(&cli.config)?;
    let report = run_generation(&config)?;
    let exit = if report.failed_types > 0 { 1 } else { 0 };
    print_output(&report, cli.json)?;
    Ok(exit)
}

fn print_output(report: &RunReport, json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(report)?;
        println!("{out}");
    } else {
        for file in &report.files {
            println!("generated: {}", file.display());
        }
        println!(
            "summary: {} types, {} failed",
            report.generated_types, report.failed_types
        );
    }
    Ok(())
}
