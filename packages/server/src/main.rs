#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Earthquake dashboard API server binary.
//!
//! ```text
//! quake_map_server [--config quake_map.toml] [--port 8080] [--data data/earthquakes_merged_f.csv]
//! ```

use std::path::PathBuf;

use clap::Parser;
use quake_map_server::{ServerConfig, run_server};

#[derive(Parser)]
#[command(name = "quake_map_server")]
#[command(about = "Serve the European earthquake dashboard API")]
struct Cli {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    bind_addr: Option<String>,

    /// Port to bind
    #[arg(long)]
    port: Option<u16>,

    /// Earthquake CSV to load
    #[arg(long)]
    data: Option<PathBuf>,

    /// Plate boundary GeoJSON URL
    #[arg(long)]
    tectonics_url: Option<String>,
}

impl Cli {
    fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(bind_addr) = self.bind_addr {
            config.bind_addr = bind_addr;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(data) = self.data {
            config.data_path = data;
        }
        if let Some(url) = self.tectonics_url {
            config.tectonics_url = url;
        }
        config
    }
}

#[actix_web::main]
async fn main() {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let cli = Cli::parse();
    let result = match ServerConfig::load(cli.config.as_deref()) {
        Ok(config) => run_server(cli.apply(config)).await,
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
