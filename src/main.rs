#![allow(non_snake_case)]

use dioxus_logger::tracing;

use health_frontend::client::{self, config::ClientConfig};

fn main() {
    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    dioxus_logger::init(config.log_level).expect("failed to initialize logger");

    tracing::info!(api_url = %config.api_url, "Starting health frontend");

    dioxus::launch(client::App);
}
