//! Startup configuration: CLI flags layered over `GRPC_*` environment
//! variables.

use std::path::PathBuf;

use clap::Parser;
use core_config::FromEnv;
use domain_word2vec::{LookupStrategy, ModelFormat, ModelSource};
use eyre::{Result, WrapErr, bail};
use grpc_client::server::ServerConfig;

#[derive(Debug, Parser)]
#[command(name = "w2v-server")]
#[command(about = "Serve word2vec vector and nearest-word lookups over gRPC")]
pub struct Cli {
    /// Word2vec model file (text or binary format)
    #[arg(short = 'f', long = "file", env = "W2V_MODEL_FILE")]
    pub file: PathBuf,

    /// Build a vantage-point tree for nearest-word queries instead of scanning
    #[arg(short = 't', long = "indexed", env = "W2V_INDEXED")]
    pub indexed: bool,

    /// Model file format: auto, text or binary
    #[arg(long, env = "W2V_MODEL_FORMAT", default_value = "auto")]
    pub format: ModelFormat,

    /// Port to listen on (overrides GRPC_PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Host to bind to (overrides GRPC_HOST)
    #[arg(long)]
    pub host: Option<String>,
}

/// Validated settings for one server run.
#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub model: ModelSource,
    pub grpc: ServerConfig,
}

impl ServerSettings {
    /// Merge the CLI with the environment and check everything that would
    /// otherwise fail after the listener is up.
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let mut grpc = ServerConfig::from_env().wrap_err("Failed to load gRPC server configuration")?;
        if let Some(host) = cli.host {
            grpc = grpc.with_host(host);
        }
        if let Some(port) = cli.port {
            grpc = grpc.with_port(port);
        }
        grpc.socket_addr()
            .wrap_err_with(|| format!("Invalid listen address: {}", grpc.addr_string()))?;

        if cli.file.as_os_str().is_empty() {
            bail!("Model file path is empty");
        }
        if !cli.file.is_file() {
            bail!("Model file does not exist: {}", cli.file.display());
        }

        let model = ModelSource::new(cli.file, LookupStrategy::from_indexed_flag(cli.indexed))
            .with_format(cli.format);

        Ok(Self { model, grpc })
    }
}
