use crate::config::parse_log_level;
use crate::logging::LogLevel;
use anyhow::{Context, Result};
use clap::Parser;

/// Greeter check - formats a fixed name and compares it with the expected greeting
///
/// The salutation is fixed by the `with-feature` build flag and cannot be chosen here.
#[derive(Parser, Debug, Default)]
#[command(name = "greeter-check")]
#[command(version)]
#[command(about = "Checks the greeter output; exits 0 on pass, 1 on fail", long_about = None)]
pub struct Cli {
    /// Name to greet (requires --expect)
    #[arg(short, long, value_name = "NAME", requires = "expect")]
    pub name: Option<String>,

    /// Expected greeting
    #[arg(short, long, value_name = "GREETING")]
    pub expect: Option<String>,

    /// Also run the C harness through the exported ABI
    #[arg(long)]
    pub native: bool,

    /// Log level (off, error, warn, info, debug, trace or 0-5)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Shorthand for --log-level debug
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> Result<LogLevel> {
        if let Some(ref level) = self.log_level {
            return parse_log_level(level).context("Invalid --log-level");
        }
        if self.verbose {
            return Ok(LogLevel::Debug);
        }
        Ok(LogLevel::Warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(Cli::default().log_level().unwrap(), LogLevel::Warning);
        let verbose = Cli {
            verbose: true,
            ..Default::default()
        };
        assert_eq!(verbose.log_level().unwrap(), LogLevel::Debug);
        let explicit = Cli {
            log_level: Some("error".to_string()),
            verbose: true,
            ..Default::default()
        };
        assert_eq!(explicit.log_level().unwrap(), LogLevel::Error);
    }

    #[test]
    fn test_invalid_log_level() {
        let cli = Cli {
            log_level: Some("loud".to_string()),
            ..Default::default()
        };
        assert!(cli.log_level().is_err());
    }

    #[test]
    fn test_parse_args() {
        let cli = Cli::try_parse_from(["greeter-check", "-n", "Bob", "-e", "Bonjour, Bob!"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("Bob"));
        assert_eq!(cli.expect.as_deref(), Some("Bonjour, Bob!"));
    }

    #[test]
    fn test_name_requires_expect() {
        assert!(Cli::try_parse_from(["greeter-check", "--name", "Bob"]).is_err());
    }

    #[test]
    fn test_salutation_not_selectable() {
        assert!(Cli::try_parse_from(["greeter-check", "--salutation", "hello"]).is_err());
    }
}
