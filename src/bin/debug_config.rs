// Copyright (c) 2025 Ronan LE MEILLAT, SCTG Development
// This file is part of the rust-heartrate project and is licensed under the
// SCTG Development Non-Commercial License v1.0 (see LICENSE.md for details).

// Load a configuration file and print the values the analyzer would use
use anyhow::Result;
use clap::Parser;
use rust_heartrate::config::Config;
use std::path::PathBuf;

/// Configuration checker
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file (YAML)
    #[arg(default_value = "config.yaml")]
    config: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Testing file: {:?}", args.config);
    println!("File exists: {}", args.config.exists());

    match Config::from_file(&args.config) {
        Ok(config) => {
            println!("Validation succeeded");
            print!("{}", serde_yml::to_string(&config)?);
        }
        Err(e) => println!("Validation failed: {:#}", e),
    }

    Ok(())
}
