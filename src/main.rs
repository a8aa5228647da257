use std::net::TcpListener;

use actix_web::web::Data;
use anyhow::Context;
use hrm_dashboard::{config::Config, server, store::Store};
use tracing::info;
use tracing_appender::rolling;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    let listener = TcpListener::bind(&config.server_addr)
        .with_context(|| format!("failed to bind {}", config.server_addr))?;

    info!(
        addr = %config.server_addr,
        prefix = %config.api_prefix,
        require_auth = config.require_auth,
        "Development backend starting..."
    );

    let store = Data::new(Store::seeded());
    server::run(listener, store, config)?.await?;

    Ok(())
}
