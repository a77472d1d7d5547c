//! Process configuration: CLI flags with environment fallbacks.

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;

pub const DEFAULT_URL_PREFIX: &str = "http://localhost:8080/todos/";

/// In-memory todo list served over HTTP
#[derive(Parser, Debug, Clone)]
#[command(name = "todos")]
#[command(about = "Serve an in-memory todo list over HTTP", long_about = None)]
pub struct Args {
    /// Interface to bind
    #[arg(long, env = "TODOS_HOSTNAME", default_value = "127.0.0.1")]
    pub hostname: String,

    /// Port to listen on
    #[arg(short, long, env = "TODOS_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Log filter, overrides RUST_LOG (e.g. "debug" or "info,todos=trace")
    #[arg(long, env = "TODOS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Prefix joined with a todo id to build its `url`
    #[arg(long, env = "TODOS_URL_PREFIX", default_value = DEFAULT_URL_PREFIX)]
    pub url_prefix: String,
}

impl Args {
    pub fn bind_addr(&self) -> anyhow::Result<SocketAddr> {
        let raw = format!("{}:{}", self.hostname, self.port);
        raw.parse().with_context(|| format!("invalid bind address {raw}"))
    }
}
