//! Junos lowering CLI
//!
//! # Usage
//!
//! ```bash
//! # Lower two device snapshots with the default preset
//! cargo run --bin junos-lower -- r1.json r2.json
//!
//! # Strict preset, pretty output
//! cargo run --bin junos-lower -- --preset strict --pretty r1.json
//!
//! # Versioned YAML configuration
//! cargo run --bin junos-lower -- --config lowering.yaml r1.json
//! ```

use clap::Parser;
use junos_ir::config::{LoweringConfig, Preset};
use junos_ir::pipeline::{DeviceConfiguration, LoweredDevice, LoweringPipeline};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "junos-lower")]
#[command(about = "Lower Junos device snapshots to vendor-independent IR", long_about = None)]
struct Cli {
    /// Device snapshot files (JSON)
    #[arg(required = true)]
    devices: Vec<PathBuf>,

    /// Lowering configuration (YAML, schema v1)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Preset used when no configuration file is given
    #[arg(short, long, default_value = "default")]
    preset: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
#[serde(untagged)]
enum DeviceReport {
    Lowered(Box<LoweredDevice>),
    Failed { hostname: String, error: String },
}

fn load_config(cli: &Cli) -> Result<LoweringConfig, Box<dyn std::error::Error>> {
    match &cli.config {
        Some(path) => Ok(LoweringConfig::from_yaml(path)?),
        None => {
            let preset = Preset::from_str(&cli.preset)?;
            Ok(LoweringConfig::preset(preset))
        }
    }
}

fn load_device(path: &PathBuf) -> Result<DeviceConfiguration, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(DeviceConfiguration::from_json(&text)?)
}

fn run(cli: &Cli) -> Result<bool, Box<dyn std::error::Error>> {
    let pipeline = LoweringPipeline::new(load_config(cli)?)?;

    let mut devices = Vec::with_capacity(cli.devices.len());
    for path in &cli.devices {
        devices.push(load_device(path).map_err(|e| format!("{}: {}", path.display(), e))?);
    }

    let outcomes = pipeline.lower_batch(&devices);
    let all_ok = outcomes.iter().all(|o| o.is_ok());
    let reports: Vec<DeviceReport> = outcomes
        .into_iter()
        .map(|outcome| match outcome.result {
            Ok(lowered) => DeviceReport::Lowered(Box::new(lowered)),
            Err(err) => DeviceReport::Failed {
                hostname: outcome.hostname,
                error: err.to_string(),
            },
        })
        .collect();

    let output = if cli.pretty {
        serde_json::to_string_pretty(&reports)?
    } else {
        serde_json::to_string(&reports)?
    };
    println!("{}", output);
    Ok(all_ok)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("junos-lower: {}", err);
            ExitCode::from(1)
        }
    }
}
