use anyhow::Context;
use clap::Parser;
use greeter_server::{Cli, Server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let _log = cli.init_logging().context("Critical: Logger could not be initialized")?;

    let cfg = cli.resolve_config().context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
