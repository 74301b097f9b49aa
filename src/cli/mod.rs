//! CLI definitions.

pub mod commands;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "propdesk")]
#[command(author, version, about = "Position-size and risk/reward calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Log level (defaults to the configured level)
    #[arg(short, long)]
    pub log_level: Option<LogLevel>,

    /// Enable JSON log format
    #[arg(long)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate position size and risk/reward for a trade plan
    Calculate(CalculateArgs),
    /// Run the calculator HTTP service
    Serve(ServeArgs),
    /// Validate configuration
    ValidateConfig,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(clap::Args)]
pub struct CalculateArgs {
    /// Account size (defaults to the configured value)
    #[arg(short, long, value_parser = parse_number)]
    pub account_size: Option<Decimal>,

    /// Percentage of the account to risk (defaults to the configured value)
    #[arg(short, long, value_parser = parse_number)]
    pub risk_percent: Option<Decimal>,

    /// Entry price
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_number)]
    pub entry: Option<Decimal>,

    /// Stop-loss price
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_number)]
    pub stop_loss: Option<Decimal>,

    /// Take-profit price
    #[arg(short, long, allow_hyphen_values = true, value_parser = parse_number)]
    pub take_profit: Option<Decimal>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Numeric flags follow the same rules as the HTTP text fields.
fn parse_number(raw: &str) -> Result<Decimal, String> {
    match propdesk_core::parse_price("value", raw) {
        Ok(Some(value)) => Ok(value),
        Ok(None) => Err("value is empty".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Override the configured listen host
    #[arg(long)]
    pub host: Option<String>,

    /// Override the configured listen port
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rust_decimal_macros::dec;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_calculate() {
        let cli = Cli::try_parse_from([
            "propdesk",
            "calculate",
            "--account-size",
            "10000",
            "--risk-percent",
            "2",
            "--entry",
            "1.1",
            "--stop-loss",
            "1.095",
            "--output",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Calculate(args) => {
                assert_eq!(args.account_size, Some(dec!(10000)));
                assert_eq!(args.risk_percent, Some(dec!(2)));
                assert_eq!(args.entry, Some(dec!(1.1)));
                assert_eq!(args.stop_loss, Some(dec!(1.095)));
                assert_eq!(args.take_profit, None);
                assert!(matches!(args.output, OutputFormat::Json));
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_parse_calculate_scientific_and_out_of_range() {
        let cli = Cli::try_parse_from([
            "propdesk",
            "calculate",
            "--entry",
            "1.5e2",
            "--stop-loss",
            "-1e30",
            "--account-size",
            "1e30",
        ])
        .unwrap();

        match cli.command {
            Commands::Calculate(args) => {
                assert_eq!(args.entry, Some(dec!(150)));
                assert_eq!(args.stop_loss, Some(Decimal::MIN));
                assert_eq!(args.account_size, Some(Decimal::MAX));
            }
            _ => panic!("expected calculate"),
        }
    }

    #[test]
    fn test_parse_calculate_rejects_bad_number() {
        assert!(Cli::try_parse_from(["propdesk", "calculate", "--entry", "abc"]).is_err());
        assert!(Cli::try_parse_from(["propdesk", "calculate", "--entry", ""]).is_err());
    }

    #[test]
    fn test_parse_serve_overrides() {
        let cli = Cli::try_parse_from(["propdesk", "--log-level", "debug", "serve", "--port", "9000"])
            .unwrap();

        assert!(matches!(cli.log_level, Some(LogLevel::Debug)));
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert_eq!(args.host, None);
            }
            _ => panic!("expected serve"),
        }
    }
}
