use crate::config::AppConfig;
use crate::db::{init_db, Database, SqliteParkingRecordRepository};
use crate::domain::PricingStrategyFactory;
use crate::router::{error_page, handle, AppState};
use crate::service::ParkingService;
use astra::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;
mod db;
mod domain;
mod errors;
mod flash;
mod responses;
mod router;
mod service;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let db = Database::new(cfg.db_path.clone());

    if let Err(e) = init_db(&db, &cfg.schema_path) {
        error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    let state = AppState {
        service: ParkingService::new(
            SqliteParkingRecordRepository::new(db),
            PricingStrategyFactory::new(),
        ),
        purge_on_exit: cfg.purge_on_exit,
    };

    info!(addr = %cfg.bind_addr, workers = cfg.max_workers, purge_on_exit = cfg.purge_on_exit, "starting server");

    let server = Server::bind(&cfg.bind_addr).max_workers(cfg.max_workers);

    let result = server.serve(move |req, _info| match handle(req, &state) {
        Ok(resp) => resp,
        Err(err) => error_page(err),
    });

    if let Err(e) = result {
        error!("server ended with error: {e}");
    }

    info!("server shut down cleanly");
}
