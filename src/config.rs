use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Log filter used when neither RUST_LOG nor --log-level is given
pub const DEFAULT_LOG_FILTER: &str = "tf_idf_uniqueness=info";

/// Command line configuration
///
/// Logging: RUST_LOG wins when set, otherwise `--log-level`.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "tf-idf-uniqueness", version, about)]
pub struct Config {
    /// Request JSON file, `{"titles": [...], "abstracts": [...]}` (reads stdin when omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Indent the response JSON
    #[arg(long)]
    pub pretty: bool,

    /// Log filter directive, e.g. "tf_idf_uniqueness=debug"
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,
}

impl Config {
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level))
    }

    /// Install the global subscriber; logs go to stderr so stdout stays JSON
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_env_filter(self.env_filter())
            .with_writer(std::io::stderr)
            .init();
    }
}
