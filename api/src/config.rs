use dotenv::dotenv;
use std::env;

#[derive(Clone, Debug, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Clone)]
pub struct Config {
    pub allowed_origins: String,
    pub api_host: String,
    pub api_port: String,
    pub app_name: String,
    pub database_url: String,
    pub connection_pool: ConnectionPoolConfig,
    pub environment: Environment,
}

#[derive(Clone)]
pub struct ConnectionPoolConfig {
    pub min: u32,
    pub max: u32,
}

const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
const API_HOST: &str = "API_HOST";
const API_PORT: &str = "API_PORT";
const APP_NAME: &str = "APP_NAME";
const CONNECTION_POOL_MIN: &str = "CONNECTION_POOL_MIN";
const CONNECTION_POOL_MAX: &str = "CONNECTION_POOL_MAX";
const DATABASE_URL: &str = "DATABASE_URL";
const ENVIRONMENT: &str = "ENVIRONMENT";
const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";

impl Config {
    pub fn new(environment: Environment) -> Self {
        dotenv().ok();

        let app_name = env::var(&APP_NAME).unwrap_or_else(|_| "Fyyur".to_string());

        let database_url = match environment {
            Environment::Test => {
                env::var(&TEST_DATABASE_URL).unwrap_or_else(|_| panic!("{} must be defined.", TEST_DATABASE_URL))
            }
            _ => env::var(&DATABASE_URL).unwrap_or_else(|_| panic!("{} must be defined.", DATABASE_URL)),
        };

        let allowed_origins = env::var(&ALLOWED_ORIGINS).unwrap_or_else(|_| "*".to_string());
        let api_host = env::var(&API_HOST).unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = env::var(&API_PORT).unwrap_or_else(|_| "8088".to_string());

        let connection_pool = ConnectionPoolConfig {
            min: env::var(&CONNECTION_POOL_MIN)
                .map(|s| s.parse().expect("Not a valid number for connection pool min"))
                .unwrap_or(1),
            max: env::var(&CONNECTION_POOL_MAX)
                .map(|s| s.parse().expect("Not a valid number for connection pool max"))
                .unwrap_or(20),
        };

        Config {
            allowed_origins,
            api_host,
            api_port,
            app_name,
            database_url,
            connection_pool,
            environment,
        }
    }

    pub fn parse_environment() -> Result<Environment, String> {
        dotenv().ok();
        match env::var(&ENVIRONMENT) {
            Ok(value) => match value.to_lowercase().as_str() {
                "development" => Ok(Environment::Development),
                "test" => Ok(Environment::Test),
                "production" => Ok(Environment::Production),
                _ => Err(format!("Unknown environment: {}", value)),
            },
            Err(_) => Ok(Environment::Development),
        }
    }
}
