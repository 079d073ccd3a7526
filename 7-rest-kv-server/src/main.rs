use anyhow::Result;
use clap::Parser;
use tracing::{error, info};

use rest_kv_server::{cli::Cli, server::Server};

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let addr = cli.listen_addr()?;
    let server = Server::bind(addr).await?;
    info!("listening on {}", server.local_addr()?);
    server.run_until_ctrl_c().await
}
