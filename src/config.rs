use anyhow::Result;

use crate::boundary::NullNamePolicy;
use crate::greeting::{Greeter, Salutation};
use crate::logging::LogLevel;

/// Greeter configuration, resolved from build features and optionally
/// overridden once at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreeterConfig {
    pub salutation: Salutation,
    pub null_policy: NullNamePolicy,
}

impl GreeterConfig {
    /// Configuration selected by Cargo features
    pub const fn from_build() -> Self {
        Self {
            salutation: Salutation::from_build(),
            null_policy: NullNamePolicy::from_build(),
        }
    }

    pub const fn greeter(&self) -> Greeter {
        Greeter::new(self.salutation)
    }
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self::from_build()
    }
}

/// Parse a log level by name or by its numeric C value
pub fn parse_log_level(s: &str) -> Result<LogLevel> {
    if let Ok(level) = s.parse::<i32>() {
        if !(0..=5).contains(&level) {
            anyhow::bail!("Log level out of range (0 to 5): {}", level);
        }
        return Ok(LogLevel::from_i32(level));
    }
    match s.to_lowercase().as_str() {
        "nothing" | "off" => Ok(LogLevel::Nothing),
        "error" => Ok(LogLevel::Error),
        "warning" | "warn" => Ok(LogLevel::Warning),
        "info" => Ok(LogLevel::Info),
        "debug" => Ok(LogLevel::Debug),
        "all" | "trace" => Ok(LogLevel::All),
        _ => anyhow::bail!(
            "Invalid log level: {}. Valid options: off, error, warn, info, debug, trace",
            s
        ),
    }
}
