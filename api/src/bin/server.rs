extern crate api;
extern crate dotenv;
#[macro_use]
extern crate log;
#[macro_use]
extern crate logging;
#[macro_use]
extern crate serde_json;

use api::config::Config;
use api::server::Server;
use dotenv::dotenv;
use log::Level::*;

#[actix_rt::main]
async fn main() {
    logging::setup_logger().unwrap();
    info!("Loading environment");
    dotenv().ok();
    jlog!(Info, "Environment loaded");
    let environment = Config::parse_environment().expect("Environment could not be parsed");
    let config = Config::new(environment);
    jlog!(Info, "Starting server", {"app_name": config.app_name});
    Server::start(config).await;
    info!("Server stopped");
}
