//! Word2Vec gRPC Service - Entry Point

use clap::Parser;
use core_config::Environment;
use core_config::tracing::{init_tracing, install_color_eyre};
use eyre::Result;
use word2vec_server::{Cli, ServerSettings};

#[tokio::main]
async fn main() -> Result<()> {
    install_color_eyre();

    let cli = Cli::parse();
    let environment = Environment::from_env();
    init_tracing(&environment);

    let settings = ServerSettings::from_cli(cli)?;
    word2vec_server::run(settings).await
}
