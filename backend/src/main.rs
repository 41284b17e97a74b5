use std::net::IpAddr;

use clap::Parser;
use tracing::info;
use users_backend::{BackendServer, DEFAULT_PORT};

#[derive(Debug, Parser)]
#[command(name = "users-backend")]
struct Cli {
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    #[arg(long, env = "HOST", default_value = "127.0.0.1")]
    host: IpAddr,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let server = BackendServer::new(cli.port).with_host(cli.host);

    tokio::select! {
        result = server.start() => result?,
        _ = tokio::signal::ctrl_c() => info!("shutting down"),
    }

    Ok(())
}
