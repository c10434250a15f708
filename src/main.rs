// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};
use report_forge::config::consts::LEGACY_REPORTS;
use report_forge::config::{load_and_validate_config, Config};
use report_forge::demo::{collect_legacy, collect_refactored, render_json, render_sections};
use tracing_subscriber::EnvFilter;

/// Log level used when RUST_LOG is not set
const DEFAULT_LOG_FILTER: &str = "warn";

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Options {
    legacy: bool,
    json: bool,
    config: Option<PathBuf>,
}

fn usage(program: &str) -> String {
    format!(
        "Usage: {} [--legacy] [--json] [config.yaml|config.toml]\n\
         Example: {} configs/quarterly-summary.yaml\n\
         Example: {} --legacy",
        program, program, program
    )
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "--legacy" => options.legacy = true,
            "--json" => options.json = true,
            flag if flag.starts_with('-') => return Err(format!("Unknown option: {}", flag)),
            path => {
                if options.config.is_some() {
                    return Err(format!("Unexpected extra argument: {}", path));
                }
                options.config = Some(PathBuf::from(path));
            }
        }
    }

    Ok(options)
}

/// Logs go to stderr so stdout carries only report output
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(options: &Options) -> Result<String> {
    let config = match &options.config {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => Config::default(),
    };
    let processor = config.data_processor();

    let reports = if options.legacy {
        match &options.config {
            Some(_) => collect_legacy(&processor, config.reports.as_slice()),
            None => collect_legacy(&processor, &LEGACY_REPORTS),
        }
    } else {
        collect_refactored(&processor, &config.report_types())
    };

    if options.json {
        let mut json = render_json(&reports).context("Failed to serialize reports")?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(render_sections(&reports))
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("report-forge");

    if args.iter().skip(1).any(|a| a == "--help" || a == "-h") {
        println!("{}", usage(program));
        return Ok(());
    }

    let options = match parse_args(args.get(1..).unwrap_or(&[])) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{}", message);
            eprintln!("{}", usage(program));
            std::process::exit(1);
        }
    };

    init_tracing();

    let output = run(&options)?;
    print!("{}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_args_defaults() {
        assert_eq!(parse_args(&[]).unwrap(), Options::default());
    }

    #[test]
    fn test_parse_args_flags_and_config() {
        let options = parse_args(&args(&["--json", "run.yaml", "--legacy"])).unwrap();
        assert!(options.legacy);
        assert!(options.json);
        assert_eq!(options.config, Some(PathBuf::from("run.yaml")));
    }

    #[test]
    fn test_parse_args_rejects_unknown_flag() {
        let err = parse_args(&args(&["--pdf"])).unwrap_err();
        assert!(err.contains("--pdf"));
    }

    #[test]
    fn test_parse_args_rejects_second_config() {
        let err = parse_args(&args(&["a.yaml", "b.yaml"])).unwrap_err();
        assert!(err.contains("b.yaml"));
    }

    #[test]
    fn test_run_default_prints_three_sections() {
        let output = run(&Options::default()).unwrap();
        assert!(output.starts_with("PDF Report:\n"));
        assert!(output.contains("\n---\n\nCSV Report:\n"));
        assert!(output.ends_with("TEXT Report:\nSALES DATA: Q1\nREVENUE: $50000\nEXPENSES: $30000\n\n"));
    }

    #[test]
    fn test_run_legacy_prints_pdf_and_csv_only() {
        let options = Options {
            legacy: true,
            ..Options::default()
        };
        let output = run(&options).unwrap();
        assert!(output.contains("PDF Report:\n"));
        assert!(output.ends_with("CSV Report:\nSALES DATA: Q1,REVENUE: $50000,EXPENSES: $30000\n"));
        assert!(!output.contains("TEXT Report:"));
    }

    #[test]
    fn test_run_json_is_valid() {
        let options = Options {
            json: true,
            ..Options::default()
        };
        let output = run(&options).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value.as_array().map(|a| a.len()), Some(3));
    }

    #[test]
    fn test_run_missing_config_fails() {
        let options = Options {
            config: Some(PathBuf::from("configs/does-not-exist.yaml")),
            ..Options::default()
        };
        let err = run(&options).unwrap_err();
        assert!(format!("{:#}", err).contains("does-not-exist.yaml"));
    }
}
