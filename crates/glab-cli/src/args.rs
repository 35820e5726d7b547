//! Command-line argument parsing.

use std::path::PathBuf;

use glab_curves::ParameterSet;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    List,
    Info { curve: String },
    Templates { curve: String },
    Sample(SampleArgs),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleArgs {
    pub curve: String,
    /// 1-based template number used as the base parameter set.
    pub template: Option<usize>,
    pub params: ParameterSet,
    pub range: Option<(f64, f64)>,
    pub count: Option<usize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub config: Option<PathBuf>,
    pub command: Command,
}

fn next_value<'a>(
    it: &mut impl Iterator<Item = &'a String>,
    flag: &str,
) -> Result<&'a String, String> {
    it.next().ok_or_else(|| format!("{flag} requires a value"))
}

fn parse_number<T: std::str::FromStr>(text: &str, what: &str) -> Result<T, String> {
    text.parse().map_err(|_| format!("invalid {what}: {text:?}"))
}

fn parse_param(text: &str) -> Result<(&str, f64), String> {
    let (name, value) = text
        .split_once('=')
        .ok_or_else(|| format!("--param expects name=value, got {text:?}"))?;
    Ok((name, parse_number(value, "parameter value")?))
}

/// Parse arguments, excluding the program name.
pub fn parse(args: &[String]) -> Result<Invocation, String> {
    let mut config = None;
    let mut it = args.iter();
    let command_name = loop {
        match it.next() {
            Some(arg) if arg == "--config" => {
                config = Some(PathBuf::from(next_value(&mut it, "--config")?));
            }
            other => break other,
        }
    };

    let command = match command_name.map(String::as_str) {
        None | Some("--help") | Some("-h") | Some("help") => Command::Help,
        Some("list") => Command::List,
        Some("info") => Command::Info {
            curve: next_value(&mut it, "info")?.clone(),
        },
        Some("templates") => Command::Templates {
            curve: next_value(&mut it, "templates")?.clone(),
        },
        Some("sample") => {
            let mut sample = SampleArgs {
                curve: next_value(&mut it, "sample")?.clone(),
                template: None,
                params: ParameterSet::new(),
                range: None,
                count: None,
            };
            while let Some(arg) = it.next() {
                match arg.as_str() {
                    "--template" => {
                        let n: usize =
                            parse_number(next_value(&mut it, "--template")?, "template")?;
                        if n == 0 {
                            return Err("--template is 1-based".into());
                        }
                        sample.template = Some(n);
                    }
                    "--param" => {
                        let (name, value) = parse_param(next_value(&mut it, "--param")?)?;
                        sample.params.insert(name, value);
                    }
                    "--range" => {
                        let start = parse_number(next_value(&mut it, "--range")?, "range start")?;
                        let stop = parse_number(next_value(&mut it, "--range")?, "range stop")?;
                        sample.range = Some((start, stop));
                    }
                    "--count" => {
                        let count = parse_number(next_value(&mut it, "--count")?, "count")?;
                        sample.count = Some(count);
                    }
                    other => return Err(format!("unknown option {other:?}")),
                }
            }
            Command::Sample(sample)
        }
        Some(other) => return Err(format!("unknown command {other:?}")),
    };

    Ok(Invocation { config, command })
}
