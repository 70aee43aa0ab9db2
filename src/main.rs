mod web;

use actix_files::Files;
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};

use eksdocs::common::StartupError;
use eksdocs::config::SiteConfig;
use eksdocs::content::{FEATURE_LIST, validate_feature_list};

#[actix_web::main]
async fn main() -> Result<(), StartupError> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    validate_feature_list(&FEATURE_LIST)?;

    let bind_addr = config.bind_addr;
    let static_dir = config.static_dir.clone();
    log::info!(
        "Serving {:?} on http://{} (static files from {})",
        config.title,
        bind_addr,
        static_dir.display()
    );

    let state = Data::new(web::AppState::new(config));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(web::middleware::SecurityHeaders)
            .wrap(Logger::default())
            .configure(web::routes::configure)
            .service(Files::new("/static", static_dir.clone()).prefer_utf8(true))
            .default_service(actix_web::web::route().to(web::handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
