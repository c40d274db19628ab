//! Command-line front end: log one message through a daylog logger

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use daylog_core::{
    ConfigFile, Level, Log, LogError, LogResult, Logger, LoggerConfig, PartialConfig,
};

#[derive(Parser, Debug)]
#[command(name = "daylog", version, about = "Write a leveled line to the console and the daily log file")]
struct Cli {
    /// YAML config file, which must exist (defaults to the user config, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Source name embedded in the line and the file path
    #[arg(short, long)]
    name: Option<String>,

    /// Root directory for log files
    #[arg(short, long)]
    base_path: Option<PathBuf>,

    /// Timestamp pattern, e.g. "dd/MM/yyyy HH:mm:ss.SSS"
    #[arg(short, long)]
    date_format: Option<String>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Level: info, warn, error or verbose
    #[arg(value_parser = parse_level, required_unless_present = "print_config")]
    level: Option<Level>,

    /// Message words, joined with spaces
    #[arg(trailing_var_arg = true)]
    message: Vec<String>,
}

fn parse_level(s: &str) -> Result<Level, String> {
    s.parse().map_err(|e: daylog_core::LogError| e.to_string())
}

impl Cli {
    fn resolve_config(&self) -> LogResult<LoggerConfig> {
        let file = match &self.config {
            Some(path) => {
                let file = ConfigFile::new(path);
                if !file.exists() {
                    return Err(LogError::ConfigRead {
                        path: path.clone(),
                        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
                    });
                }
                file
            }
            None => ConfigFile::user(),
        };

        let mut overrides = PartialConfig::new();
        overrides.name = self.name.clone();
        overrides.base_path = self.base_path.clone();
        overrides.date_format = self.date_format.clone();

        Ok(file.load()?.merge(overrides).resolve())
    }
}

fn run(cli: Cli) -> LogResult<()> {
    let config = cli.resolve_config()?;

    if cli.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }

    let logger = Logger::with_config(config);
    let message = cli.message.join(" ");
    match cli.level {
        Some(level) => logger.log(level, &message),
        None => Ok(()),
    }
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("daylog: {}", e);
            ExitCode::FAILURE
        }
    }
}
