use actix_web::{App, HttpServer, middleware, web};
use anyhow::Result;

use api::AppState;
use config::Config;
use rate_table::RateTable;

mod api;
mod config;
mod currency;
mod rate_table;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = Config::from_env()?;
    let state = web::Data::new(AppState {
        table: RateTable::pln_snapshot(),
        fake_delay: config.fake_delay,
    });

    log::info!(
        "Starting historical rates API on {}:{}",
        config.host,
        config.port
    );
    if let Some(delay) = config.fake_delay {
        log::info!("Fake response delay enabled: {:?}", delay);
    }

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .configure(api::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    Ok(())
}
