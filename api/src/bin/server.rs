use dotenv::dotenv;
use log::info;
use log::Level::Info;
use logging::jlog;
use mela_api::config::{Config, Environment};
use mela_api::server::Server;
use serde_json::json;

#[actix_rt::main]
async fn main() {
    logging::setup_logger().expect("Failed to set up logger");
    info!("Loading environment");
    dotenv().ok();
    jlog!(Info, "Environment loaded");

    let config = Config::new(Environment::Development);
    jlog!(Info, "Starting server", {"app_name": config.app_name});
    Server::start(config).await;
}
