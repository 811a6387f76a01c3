use lost_pets_service::{
    api::state::AppState,
    infrastructure::{database::mongo_context::MongoContext, MongoLostPetRepository},
    routes::{api_routes, page_routes},
    utils::{config::AppConfig, logging::init_logging},
};
use actix_web::{middleware, web, App, HttpServer};

#[tokio::main]
async fn main() -> std::io::Result<()> {

    let config = match AppConfig::global() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&config.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let mongo_context = match MongoContext::init(&config.database_url, &config.database_name).await {
        Ok(context) => context,
        Err(e) => {
            log::error!("Failed to connect to MongoDB: {}", e);
            std::process::exit(1);
        }
    };

    let repository = MongoLostPetRepository::new(&mongo_context, &config.lost_pets_collection);
    let app_state = AppState::new(repository);

    log::info!("Server running at http://{}", config.bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(middleware::Logger::default())
            .configure(page_routes)
            .configure(api_routes)
    })
    .bind(&config.bind_address)?
    .run()
    .await
}
