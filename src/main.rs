use anycors::{CorsProxy, ProxyOptions, server};
use clap::Parser;
use std::error::Error;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "anycors", version, about = "Stateless CORS proxy for arbitrary target URLs")]
struct Args {
    /// Address to listen on
    #[arg(short, long, default_value = "127.0.0.1:8080", env = "ANYCORS_LISTEN")]
    listen: SocketAddr,

    /// Reject target URLs matching this pattern (regex search, repeatable)
    #[arg(long = "blacklist", value_name = "PATTERN")]
    blacklist: Vec<String>,

    /// Admit only origins matching this pattern (regex search, repeatable).
    /// Without the flag every origin is admitted.
    #[arg(long = "whitelist", value_name = "PATTERN")]
    whitelist: Vec<String>,

    /// Abort upstream fetches after this many seconds. Without the flag an
    /// unresponsive upstream stalls the request indefinitely.
    #[arg(long, value_name = "SECS")]
    upstream_timeout: Option<u64>,

    /// Answer preflights without contacting the upstream
    #[arg(long)]
    short_circuit_preflight: bool,
}

impl Args {
    fn into_options(self) -> ProxyOptions {
        let defaults = ProxyOptions::default();
        ProxyOptions {
            blacklist: self.blacklist,
            whitelist: if self.whitelist.is_empty() {
                defaults.whitelist
            } else {
                self.whitelist
            },
            upstream_timeout: self.upstream_timeout.map(Duration::from_secs),
            short_circuit_preflight: self.short_circuit_preflight,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let listen = args.listen;
    let options = args.into_options();

    info!(
        %listen,
        blacklist = options.blacklist.len(),
        whitelist = options.whitelist.len(),
        "starting anycors"
    );

    let proxy = Arc::new(CorsProxy::new(options)?);
    let listener = TcpListener::bind(listen).await?;

    server::serve(listener, proxy).await?;
    Ok(())
}
