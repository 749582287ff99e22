//! Backend entry-point: wires configuration, the chosen store variant, and
//! the HTTP server.

use std::env;
use std::net::SocketAddr;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig};
use backend::server::{ServerConfig, build_server};

/// Default listen address when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

fn bind_addr_from_env() -> std::io::Result<SocketAddr> {
    let raw = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
    raw.parse()
        .map_err(|err| std::io::Error::other(format!("invalid BIND_ADDR {raw}: {err}")))
}

/// Build a connection pool when `DATABASE_URL` is configured.
async fn pool_from_env() -> std::io::Result<Option<DbPool>> {
    let Ok(database_url) = env::var("DATABASE_URL") else {
        return Ok(None);
    };

    let mut pool_config = PoolConfig::new(database_url);
    if let Ok(raw) = env::var("DATABASE_MAX_CONNECTIONS") {
        match raw.parse() {
            Ok(max_size) => pool_config = pool_config.with_max_size(max_size),
            Err(err) => warn!(value = %raw, error = %err, "ignoring invalid DATABASE_MAX_CONNECTIONS"),
        }
    }

    let pool = DbPool::new(pool_config)
        .await
        .map_err(|err| std::io::Error::other(err.to_string()))?;
    Ok(Some(pool))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let mut config = ServerConfig::new(bind_addr_from_env()?);
    if let Some(pool) = pool_from_env().await? {
        config = config.with_db_pool(pool);
    }

    let health_state = web::Data::new(HealthState::new());
    let server = build_server(config, health_state.clone())?;

    health_state.mark_ready();
    server.await
}
