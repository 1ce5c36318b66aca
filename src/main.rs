use std::path::PathBuf;

use almanac::{io_utils::almanac_cli_error, resolve_path, ResolverConfig};
use clap::Parser;

/// Print the lowest location reachable from an almanac's seeds.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Almanac text file
    input: PathBuf,
    /// Emit a JSON object instead of the bare number
    #[arg(long)]
    json: bool,
    /// Include resolution statistics in the output
    #[arg(long)]
    stats: bool,
    /// Parse every rule even after a stage is fully mapped
    #[arg(long)]
    no_short_circuit: bool,
    /// Cross-check the result against the materialized almanac
    #[arg(long)]
    verify: bool,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let config = ResolverConfig {
        short_circuit: !args.no_short_circuit,
        verify: args.verify,
    };
    let resolution =
        resolve_path(&args.input, &config).map_err(|e| almanac_cli_error(&args.input, e))?;
    let min = resolution
        .min_location()
        .map_err(|e| almanac_cli_error(&args.input, e))?;

    if args.json {
        let mut out = serde_json::json!({ "min_location": min });
        if args.stats {
            out["stats"] = serde_json::to_value(&resolution.stats)?;
        }
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!("{min}");
        if args.stats {
            let s = &resolution.stats;
            eprintln!(
                "Lines: {} | Stages: {} | Rules applied: {} | Rules skipped: {} | Slots mapped: {}",
                s.lines_read, s.stages, s.rules_applied, s.rules_skipped, s.slots_mapped
            );
        }
    }
    Ok(())
}
