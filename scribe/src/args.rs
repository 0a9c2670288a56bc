use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// Scribe content formatting proxy
#[derive(Debug, Parser)]
#[command(name = "scribe", about = "Formats editor content into structured HTML via a hosted LLM")]
pub struct Args {
    /// Path to configuration file; defaults and environment only when omitted
    #[arg(short, long, env = "SCRIBE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the listen address
    #[arg(long, env = "SCRIBE_LISTEN")]
    pub listen: Option<SocketAddr>,
}
