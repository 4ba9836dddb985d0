use std::env;
use std::path::PathBuf;

use crate::finder::{FinderResult, SearchParams};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Search(Args),
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Args {
    pub template: PathBuf,
    pub config: Option<PathBuf>,
    pub confidence: Option<f64>,
    /// Seconds; 0 or negative means no deadline
    pub timeout_secs: Option<f64>,
    pub poll_secs: Option<f64>,
    pub max_attempts: Option<usize>,
    pub dump_screens: bool,
}

impl Args {
    pub fn parse() -> Result<Command, String> {
        Self::parse_from(env::args().skip(1))
    }

    /// Parse flags (program name already stripped).
    /// Accepts both `--flag value` and `--flag=value`.
    pub fn parse_from<I>(args: I) -> Result<Command, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut template: Option<PathBuf> = None;
        let mut config: Option<PathBuf> = None;
        let mut confidence: Option<f64> = None;
        let mut timeout_secs: Option<f64> = None;
        let mut poll_secs: Option<f64> = None;
        let mut max_attempts: Option<usize> = None;
        let mut dump_screens = true;

        let mut iter = args.into_iter();
        while let Some(arg) = iter.next() {
            let (flag, inline) = match arg.split_once('=') {
                Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
                _ => (arg.clone(), None),
            };
            let mut value = |name: &str| -> Result<String, String> {
                inline
                    .clone()
                    .or_else(|| iter.next())
                    .ok_or_else(|| format!("Missing value for {name}"))
            };

            match flag.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-v" => return Ok(Command::Version),
                "--no-dump" => dump_screens = false,
                "--conf" => confidence = Some(parse_number(&value("--conf")?, "--conf")?),
                "--timeout" => timeout_secs = Some(parse_number(&value("--timeout")?, "--timeout")?),
                "--poll" => poll_secs = Some(parse_number(&value("--poll")?, "--poll")?),
                "--max-attempts" => {
                    max_attempts = Some(parse_number(&value("--max-attempts")?, "--max-attempts")?)
                }
                "--config" => config = Some(PathBuf::from(value("--config")?)),
                other if other.starts_with('-') && other.len() > 1 => {
                    return Err(format!("Unknown argument: {other}"));
                }
                _ if template.is_none() => template = Some(PathBuf::from(arg)),
                _ => return Err(format!("Unexpected extra argument: {arg}")),
            }
        }

        let template = template.ok_or_else(|| "Missing template path".to_string())?;
        Ok(Command::Search(Args {
            template,
            config,
            confidence,
            timeout_secs,
            poll_secs,
            max_attempts,
            dump_screens,
        }))
    }

    /// Config file values (or defaults), overridden by explicit flags
    pub fn search_params(&self) -> FinderResult<SearchParams> {
        let mut params = match &self.config {
            Some(path) => SearchParams::from_toml_file(path)?,
            None => SearchParams::default(),
        };
        if let Some(confidence) = self.confidence {
            params.base_confidence = confidence;
        }
        if let Some(secs) = self.timeout_secs {
            params.timeout_secs = (secs > 0.0).then_some(secs);
        }
        if let Some(secs) = self.poll_secs {
            params.poll_interval_secs = secs;
        }
        if let Some(attempts) = self.max_attempts {
            params.max_attempts_per_monitor = attempts;
        }
        params.validate()?;
        Ok(params)
    }
}

fn parse_number<T: std::str::FromStr>(raw: &str, flag: &str) -> Result<T, String> {
    raw.trim()
        .parse::<T>()
        .map_err(|_| format!("Invalid value for {flag}: {raw}"))
}

pub fn print_help() {
    println!("🔎 Screen Locate - find a template image on any monitor");
    println!();
    println!("USAGE:");
    println!("    screen-locate <TEMPLATE> [FLAGS]");
    println!();
    println!("FLAGS:");
    println!("    --conf <X>          Base confidence 0.0-1.0 (default: 0.80)");
    println!("    --timeout <S>       Overall deadline in seconds, 0 = infinite (default: 10)");
    println!("    --poll <S>          Pause between monitors in seconds (default: 0.50)");
    println!("    --max-attempts <N>  Attempt budget per monitor (default: 20)");
    println!("    --config <FILE>     TOML file with search parameters; flags override it");
    println!("    --no-dump           Skip writing screen{{N}}.png debug screenshots");
    println!("    --help, -h          Show this help message");
    println!("    --version, -v       Show version information");
    println!();
    println!("EXIT CODES:");
    println!("    0 found, 1 not found, 2 bad arguments");
    println!();
    println!("EXAMPLES:");
    println!("    screen-locate button.png");
    println!("    screen-locate button.png --conf 0.9 --timeout 0");
    println!("    screen-locate button.png --config=search.toml --no-dump");
}
