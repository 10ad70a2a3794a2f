// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use anyhow::{bail, Context, Result};
use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::sync::Arc;

use jobscribe::config::{load_config, RuntimeBuilder};
use jobscribe::observability;
use jobscribe::sink::WriterSink;
use jobscribe::subscriber::JobSubscriber;

fn main() -> Result<()> {
    observability::init_tracing();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <config.yaml|config.toml> <events.jsonl|->", args[0]);
        eprintln!("Example: {} jobscribe.yaml events.jsonl", args[0]);
        eprintln!("Example: tail -f events.jsonl | {} jobscribe.toml -", args[0]);
        std::process::exit(1);
    }

    let config = load_config(&args[1])
        .with_context(|| format!("Failed to load config '{}'", args[1]))?;
    let runtime = RuntimeBuilder::from_config(&config)?;
    let subscriber = JobSubscriber::new(runtime, Arc::new(WriterSink::new(io::stdout())));

    let input: Box<dyn BufRead> = match args[2].as_str() {
        "-" => Box::new(BufReader::new(io::stdin())),
        path => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("Failed to open events '{}'", path))?,
        )),
    };

    let mut failures = 0usize;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        // Rejections are already logged by the subscriber; keep going.
        if subscriber.handle_json(&line).is_err() {
            failures += 1;
        }
    }

    if failures > 0 {
        bail!("{} event(s) could not be logged", failures);
    }
    Ok(())
}
