use clap::{Args, ValueEnum};
use derive_more::Display;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    #[display("full")]
    Full,
    #[display("compact")]
    Compact,
    #[display("json")]
    Json,
}

/// Logging options shared by every command.
///
/// Logs go to stderr so that command output on stdout can be piped. The level is taken from
/// `RUST_LOG` and defaults to `info`.
#[derive(Clone, Debug, Default, Args)]
pub struct Config {
    /// Format of the log output.
    #[clap(long, env = "VAULT_ABI_LOG_FORMAT", value_enum, default_value_t)]
    pub log_format: LogFormat,
}

impl Config {
    pub fn init(&self) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr);
        let res = match self.log_format {
            LogFormat::Full => builder.try_init(),
            LogFormat::Compact => builder.compact().try_init(),
            LogFormat::Json => builder.json().try_init(),
        };
        // Only fails if a global subscriber is already set, e.g. by a test harness.
        if let Err(err) = res {
            tracing::debug!("logging already initialized: {err}");
        }
    }
}
