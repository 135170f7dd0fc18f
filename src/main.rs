mod books;
mod catalog;
mod core;
mod gateway;
mod utils;

use std::error::Error;
use tracing::info;
use crate::catalog::controller::catalog_routes;
use crate::catalog::factory;
use crate::core::controller::AppState;
use crate::core::domain::Configuration;
use crate::utils::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    setup_tracing();

    let config = Configuration::from_env();
    let service = factory::create_catalog_service(&config);
    let addr = config.socket_addr();
    let app = catalog_routes(AppState::new(config, service));

    info!("Book catalog server running on http://{}", addr);
    info!("API available at http://{}/api/books", addr);
    axum::Server::try_bind(&addr)?
        .serve(app.into_make_service())
        .await?;
    Ok(())
}
