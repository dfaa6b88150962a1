use petclinic_owners::{
    api::state::AppState,
    domain::owner::repository::OwnerRepository,
    infrastructure::{
        database::mongo_context::MongoContext,
        memory::owner_repository::InMemoryOwnerRepository,
        mongodb::owner_repository::MongoOwnerRepository,
    },
    routes::{owner_routes, public_routes},
    utils::config::AppConfig,
};
use actix_web::{middleware::Logger, web, App, HttpServer};

async fn serve<R: OwnerRepository + 'static>(repo: R, bind_address: &str) -> std::io::Result<()> {
    let app_state = AppState::new(repo);

    log::info!("Server running at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(app_state.clone()))
            .configure(public_routes)
            .configure(owner_routes::<R>)
    })
    .bind(bind_address)?
    .run()
    .await
}

#[tokio::main]
async fn main() -> std::io::Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AppConfig::global();

    match &config.database_url {
        Some(url) => {
            let mongo_context = match MongoContext::init(url, &config.database_name).await {
                Ok(context) => context,
                Err(e) => {
                    log::error!("Failed to connect to MongoDB: {}", e);
                    std::process::exit(1);
                }
            };
            serve(MongoOwnerRepository::new(&mongo_context), &config.bind_address).await
        }
        None => {
            log::warn!("DATABASE_URL is not set, owners are kept in memory");
            serve(InMemoryOwnerRepository::new(), &config.bind_address).await
        }
    }
}
