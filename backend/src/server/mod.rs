//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use tracing::info;

use crate::domain::ports::UserStore;
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users::{create_user, delete_user, get_user, list_users, update_user};
use crate::middleware::Trace;
use crate::outbound::persistence::{DieselUserStore, InMemoryUserStore};

/// Pick the user store variant based on configuration.
fn build_user_store(config: &ServerConfig) -> Arc<dyn UserStore> {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL user store");
            Arc::new(DieselUserStore::new(pool.clone()))
        }
        None => {
            info!("using in-memory user store");
            Arc::new(InMemoryUserStore::new())
        }
    }
}

/// Build the HTTP server with all routes and middleware wired.
///
/// The returned [`Server`] has not started handling requests yet; callers
/// mark the health state ready once they await it.
///
/// # Errors
///
/// Returns [`std::io::Error`] when binding the listen address fails.
pub fn build_server(
    config: ServerConfig,
    health_state: web::Data<HealthState>,
) -> std::io::Result<Server> {
    let http_state = web::Data::new(HttpState::new(build_user_store(&config)));

    let server = HttpServer::new(move || {
        App::new()
            .app_data(health_state.clone())
            .app_data(http_state.clone())
            .wrap(Trace)
            .service(list_users)
            .service(create_user)
            .service(get_user)
            .service(update_user)
            .service(delete_user)
            .service(ready)
            .service(live)
    })
    .bind(config.bind_addr)?
    .run();

    Ok(server)
}
