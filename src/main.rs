use std::sync::Arc;

use qrl::config::{AppState, Config, DEFAULT_CONFIG_PATH};
use qrl::logger::Logger;
use qrl::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = Config::load_from(&config_path)?;

    // Build the Tokio runtime, honouring the configured worker count
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = cfg.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(cfg))
}

async fn async_main(cfg: Config) -> Result<(), Box<dyn std::error::Error>> {
    let addr = cfg.get_socket_addr()?;
    let logger = Arc::new(Logger::from_config(&cfg.logging)?);

    // Failing to bind is the only fatal runtime error
    let listener = server::create_listener(addr).map_err(|e| {
        logger.error(&format!("Failed to bind {addr}: {e}"));
        logger.flush();
        e
    })?;

    logger.log_server_start(&listener.local_addr()?, &cfg);
    let state = Arc::new(AppState::new(cfg, Arc::clone(&logger)));

    server::start_server_loop(listener, state, server::shutdown_signal(&logger)).await;

    logger.flush();
    Ok(())
}
