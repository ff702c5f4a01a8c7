// ABOUTME: Nutrition gateway server binary
// ABOUTME: Parses CLI overrides, loads configuration, initializes logging and serves HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Nutrition Gateway Binary
//!
//! Serves `POST /api/nutrition/search`, `POST /api/ai/guidance`,
//! `GET /health` and `GET /ready`.

use anyhow::Result;
use clap::Parser;
use nutrition_gateway::{config::ServerConfig, logging, server};
use tracing::info;

#[derive(Parser)]
#[command(name = "nutrition-gateway")]
#[command(about = "Nutrition search and AI guidance gateway")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration from environment
    let mut config = ServerConfig::from_env()?;

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;

    info!("{}", config.summary());

    server::run(config).await
}
