//! Common processing logic shared between the games and commits commands.

use super::Host;
use super::config::Config;
use crate::Result;
use crate::metrics::MetricRow;
use crate::publish::{DataboxSink, DryRunSink, PublishReport, publish_rows};
use camino::Utf8PathBuf;
use clap::{Args, ValueEnum};
use std::io::Write;

const LOG_TARGET: &str = "    common";

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

/// Common arguments shared between the games and commits commands
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Databox push token
    #[arg(long, value_name = "TOKEN", env = "DATABOX_API", hide_env_values = true)]
    pub databox_token: Option<String>,

    /// GitHub personal access token
    #[arg(long, value_name = "TOKEN", env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// Path to configuration file (default is `dashfeed.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Print each row's data points as a JSON line instead of pushing them
    #[arg(long)]
    pub dry_run: bool,
}

/// Where the data points of a run end up
#[derive(Debug)]
pub enum Destination {
    Databox(DataboxSink),
    DryRun,
}

pub struct Common<'a, H: Host> {
    pub config: Config,
    host: &'a mut H,
    github_token: Option<String>,
}

impl<H: Host> core::fmt::Debug for Common<'_, H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Common")
            .field("config", &self.config)
            .field("github_token", &self.github_token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

impl<'a, H: Host> Common<'a, H> {
    /// Initialize logging and load the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded
    pub fn new(host: &'a mut H, args: &CommonArgs) -> Result<Self> {
        Self::init_logging(args.log_level);

        let config = Config::load(args.config.as_deref())?;

        Ok(Self {
            config,
            host,
            github_token: args.github_token.clone(),
        })
    }

    /// Set up the destination before anything is fetched, so a missing dashboard token fails
    /// the run without touching the network.
    ///
    /// # Errors
    ///
    /// Returns an error if pushing for real and no Databox token is configured
    pub fn destination(&self, args: &CommonArgs) -> Result<Destination> {
        if args.dry_run {
            return Ok(Destination::DryRun);
        }

        let sink = DataboxSink::new(args.databox_token.as_deref(), &self.config.databox_base_url, self.config.request_timeout)?;
        log::debug!(target: LOG_TARGET, "Publishing to {}", sink.data_url());
        Ok(Destination::Databox(sink))
    }

    pub fn github_token(&self) -> Option<&str> {
        self.github_token.as_deref()
    }

    /// Push every row to the destination and report rows that could not be published.
    pub async fn publish<R: MetricRow>(&mut self, destination: Destination, rows: &[R]) -> PublishReport {
        let report = match destination {
            Destination::Databox(mut sink) => publish_rows(&mut sink, rows).await,
            Destination::DryRun => publish_rows(&mut DryRunSink::new(self.host.output()), rows).await,
        };

        if report.failed() > 0 {
            let _ = writeln!(
                self.host.error(),
                "{} of {} row(s) could not be published",
                report.failed(),
                report.outcomes.len()
            );
        }

        report
    }

    /// Initialize logger based on log level
    fn init_logging(log_level: LogLevel) {
        let level = match log_level {
            LogLevel::None => return,
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        };

        let env = env_logger::Env::default().filter_or("RUST_LOG", level);

        // A logger may already be installed when several commands run in one process.
        let _ = env_logger::Builder::from_env(env)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(matches!(log_level, LogLevel::Debug | LogLevel::Trace))
            .try_init();
    }
}
