//! Command line and environment configuration

use anyhow::{Context, Result};
use clap::Parser;
use light_state::logging::{LoggingMode, LOG_LEVELS};
use std::time::Duration;
use tracing::info;

/// Home Lights Monitor
///
/// Polls a lights REST API, prints the full state once, then prints every
/// change it detects until stopped with Ctrl+C.
#[derive(Parser, Debug)]
#[command(name = "lights-monitor")]
#[command(about = "Watch a home lights API and print every change")]
#[command(version)]
pub struct Args {
    /// Host name or IP address of the lights API
    #[arg(long, default_value = "localhost")]
    pub host: String,

    /// TCP port of the lights API
    #[arg(short, long, default_value = "8080")]
    pub port: u16,

    /// Pause between poll cycles in milliseconds
    #[arg(short, long, default_value = "100")]
    pub interval_ms: u64,

    /// HTTP read timeout in seconds
    #[arg(short, long, default_value = "10")]
    pub timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace)
    ///
    /// `LIGHTS_LOG_LEVEL` or `RUST_LOG`, when set, replace this with a full
    /// filter directive such as `light_state=trace`.
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Verbose log output with thread ids and source locations
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Disable log output entirely
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Validate command line arguments
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(anyhow::anyhow!("Host must not be empty"));
        }

        if self.port == 0 {
            return Err(anyhow::anyhow!("Port must not be 0"));
        }

        if self.interval_ms == 0 {
            return Err(anyhow::anyhow!("Poll interval must be positive"));
        }

        if self.timeout_secs == 0 {
            return Err(anyhow::anyhow!("Request timeout must be positive"));
        }

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            return Err(anyhow::anyhow!(
                "Invalid log level '{}'. Valid levels: {}",
                self.log_level,
                LOG_LEVELS.join(", ")
            ));
        }

        Ok(())
    }

    /// Apply `LIGHTS_*` overrides found through `lookup`
    ///
    /// `LIGHTS_LOG_LEVEL` is left to the logging filter, which accepts full
    /// directives rather than bare level names.
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("LIGHTS_HOST") {
            self.host = host;
        }

        if let Some(port) = lookup("LIGHTS_PORT") {
            self.port = port.parse().context("Invalid LIGHTS_PORT environment variable")?;
        }

        if let Some(interval) = lookup("LIGHTS_INTERVAL_MS") {
            self.interval_ms = interval
                .parse()
                .context("Invalid LIGHTS_INTERVAL_MS environment variable")?;
        }

        if let Some(timeout) = lookup("LIGHTS_TIMEOUT_SECS") {
            self.timeout_secs = timeout
                .parse()
                .context("Invalid LIGHTS_TIMEOUT_SECS environment variable")?;
        }

        Ok(())
    }

    fn logging_mode(&self) -> LoggingMode {
        if self.quiet {
            LoggingMode::Silent
        } else if self.verbose {
            LoggingMode::Debug
        } else {
            LoggingMode::Development
        }
    }
}

/// Configuration derived from command line arguments and environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub poll_interval: Duration,
    pub request_timeout: Duration,
    pub log_level: String,
    pub logging_mode: LoggingMode,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Self {
            logging_mode: args.logging_mode(),
            host: args.host,
            port: args.port,
            poll_interval: Duration::from_millis(args.interval_ms),
            request_timeout: Duration::from_secs(args.timeout_secs),
            log_level: args.log_level.to_lowercase(),
        }
    }
}

impl Config {
    /// Create configuration from command line arguments and environment variables
    pub fn from_env() -> Result<Self> {
        let mut args = Args::parse();
        args.apply_overrides(|key| std::env::var(key).ok())?;
        args.validate()?;
        Ok(Config::from(args))
    }

    /// Log the effective configuration
    pub fn print_summary(&self) {
        info!("Configuration:");
        info!("  Lights API: {}:{}", self.host, self.port);
        info!("  Poll interval: {}ms", self.poll_interval.as_millis());
        info!("  Request timeout: {}s", self.request_timeout.as_secs());
        info!("  Log level: {} ({:?})", self.log_level, self.logging_mode);
    }
}
