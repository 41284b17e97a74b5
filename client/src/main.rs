use clap::Parser;
use users_client::{ClientApp, DEFAULT_API_URL};

#[derive(Debug, Parser)]
#[command(name = "users-client")]
struct Cli {
    #[arg(long, env = "API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    ClientApp::new(&cli.api_url).display_users();
}
