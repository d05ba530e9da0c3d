use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use course_market::{
    app_state::AppState,
    config::Config,
    db::Database,
    handlers::{configure, json_config},
    middleware::RequestIdMiddleware,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    if config.is_production() {
        config.validate_for_production().map_err(std::io::Error::other)?;
    }

    let db = Database::connect(&config)
        .await
        .map_err(std::io::Error::other)?;
    let state = AppState::new(&db, config.clone())
        .await
        .map_err(std::io::Error::other)?;

    log::info!(
        "App listening on http://{}:{} (database '{}')",
        config.web_server_host,
        config.web_server_port,
        db.db_name()
    );

    let result = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .wrap(Cors::permissive())
            .wrap(RequestIdMiddleware)
            .wrap(Logger::new("%a \"%r\" %s %b %{x-request-id}o %Ts"))
            .configure(configure)
    })
    .bind((config.web_server_host.as_str(), config.web_server_port))?
    .run()
    .await;

    db.shutdown().await;
    result
}
