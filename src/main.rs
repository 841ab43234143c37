use actix_cors::Cors;
use actix_web::{web, App, HttpServer};

mod config;
mod databases;
mod routes;
mod services;
mod templates;

use config::AppConfig;
use services::webhook::WebhookNotifier;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env();

    let pool = databases::setup_database(&config.database_url).await?;
    let template_env = templates::build_templates()?;
    let notifier = WebhookNotifier::new(config.webhook_url.clone());

    println!("Listening on http://{}", config.bind_addr);

    let bind_addr = config.bind_addr.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(web::Data::new(pool.clone()))
            .app_data(web::Data::new(template_env.clone()))
            .app_data(web::Data::new(notifier.clone()))
            .configure(routes::home::init)
            .configure(routes::messages::init)
    })
    .bind(bind_addr)?
    .run()
    .await?;

    Ok(())
}
