//! Graph Lab CLI
//!
//! Lists the curve catalogue, shows curve details and templates, and prints
//! sampled points as JSON for an external renderer.
//!
//! # Usage
//!
//! ```bash
//! # Catalogue listing
//! glab list
//!
//! # Sample the first Rose curve template
//! glab sample "Rose curve" --template 1
//!
//! # Sample with explicit parameters over a custom range
//! glab sample Linear --param a=2 --param b=1 --range -5 5
//! ```

mod args;

use std::path::Path;
use std::process::ExitCode;

use args::{Command, SampleArgs};
use glab_core::GlabError;
use glab_sample::{GraphLab, SampleRequest, SamplerConfig};

fn print_usage() {
    eprintln!(
        r#"Graph Lab CLI

USAGE:
    glab [--config <config.json>] <COMMAND>

COMMANDS:
    list                        List every curve with its formula and parameters
    info <curve>                Show a curve's formula, family, parameters and domain (JSON)
    templates <curve>           Show a curve's preset parameter sets (JSON)
    sample <curve> [OPTIONS]    Sample a curve and print the result (JSON)
    help                        Show this help message

SAMPLE OPTIONS:
    --template <n>              Start from template n (1-based)
    --param <name=value>        Set a parameter; repeatable, overrides the template
    --range <start> <stop>      Sample over [start, stop] instead of the default interval
    --count <n>                 Number of grid points

EXAMPLES:
    glab sample "Rose curve" --template 1
    glab sample Cardioid --param a=1.5 --count 400
"#
    );
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let text = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{text}");
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<SamplerConfig, String> {
    match path {
        Some(path) => SamplerConfig::from_json_file(path)
            .map_err(|e| format!("failed to load {}: {e}", path.display())),
        None => Ok(SamplerConfig::default()),
    }
}

fn build_request(lab: &GraphLab<'_>, sample: SampleArgs) -> Result<SampleRequest, String> {
    let mut params = match sample.template {
        Some(n) => lab
            .templates(&sample.curve)
            .into_iter()
            .nth(n - 1)
            .map(|t| t.parameters)
            .ok_or_else(|| format!("curve {:?} has no template {n}", sample.curve))?,
        None => Default::default(),
    };
    for (name, value) in sample.params.iter() {
        params.insert(name, value);
    }

    let mut request = SampleRequest::new(sample.curve, params);
    request.range = sample.range;
    request.sample_count = sample.count;
    Ok(request)
}

fn run(command: Command, lab: &GraphLab<'_>) -> Result<(), String> {
    match command {
        Command::Help => {
            print_usage();
            Ok(())
        }
        Command::List => {
            println!("{}", lab.listing());
            Ok(())
        }
        Command::Info { curve } => {
            let info = lab.curve_info(&curve).map_err(|e| e.to_string())?;
            print_json(&info)
        }
        Command::Templates { curve } => {
            if lab.curve_info(&curve).is_err() {
                return Err(GlabError::CurveNotFound(curve).to_string());
            }
            print_json(&lab.templates(&curve))
        }
        Command::Sample(sample) => {
            let request = build_request(lab, sample)?;
            let result = lab.sample_request(&request);
            print_json(&result)?;
            match result.error() {
                Some(error) => Err(error.to_owned()),
                None => Ok(()),
            }
        }
    }
}

fn main() -> ExitCode {
    let argv: Vec<String> = std::env::args().skip(1).collect();

    let invocation = match args::parse(&argv) {
        Ok(invocation) => invocation,
        Err(msg) => {
            eprintln!("Error: {msg}\n");
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    let config = match load_config(invocation.config.as_deref()) {
        Ok(config) => config,
        Err(msg) => {
            eprintln!("Error: {msg}");
            return ExitCode::FAILURE;
        }
    };

    let lab = match GraphLab::new(config) {
        Ok(lab) => lab,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(invocation.command, &lab) {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("Error: {msg}");
            ExitCode::FAILURE
        }
    }
}
