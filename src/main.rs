use crate::config::AppConfig;
use crate::db::{init_db, Database};
use crate::router::{handle, AppState};
use astra::Server;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod auth;
mod catalog;
mod config;
mod db;
mod domain;
mod errors;
mod notices;
mod requests;
mod responses;
mod router;
mod templates;
mod wishlist;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,estatemate=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    // 1️⃣ Configuration from the environment (.env honored)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("invalid configuration: {e:#}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Create the database handle and apply the schema
    let db = Database::new(config.db_path.clone());
    if let Err(e) = init_db(&db, &config.schema_path) {
        tracing::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let app = AppState::new(db, &config);

    // 3️⃣ Start the server
    tracing::info!(
        addr = %config.addr,
        workers = config.max_workers,
        wishlist_backend = ?config.wishlist_backend,
        "starting server"
    );

    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
    }

    tracing::info!("server shut down");
}
