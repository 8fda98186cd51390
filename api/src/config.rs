use dotenv::dotenv;
use std::env;

#[derive(Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

#[derive(Clone)]
pub struct Config {
    pub allowed_origins: String,
    pub app_name: String,
    pub api_host: String,
    pub api_port: String,
    pub code_pixel_size: u32,
    pub code_renderer_base_url: String,
    pub database_url: String,
    pub database_pool_size: u32,
    pub environment: Environment,
    pub front_end_url: String,
}

const ALLOWED_ORIGINS: &str = "ALLOWED_ORIGINS";
const APP_NAME: &str = "APP_NAME";
const API_HOST: &str = "API_HOST";
const API_PORT: &str = "API_PORT";
const DATABASE_URL: &str = "DATABASE_URL";
const TEST_DATABASE_URL: &str = "TEST_DATABASE_URL";
const DATABASE_POOL_SIZE: &str = "DATABASE_POOL_SIZE";
const FRONT_END_URL: &str = "FRONT_END_URL";

// External scannable-image collaborator
const CODE_RENDERER_BASE_URL: &str = "CODE_RENDERER_BASE_URL";
const CODE_PIXEL_SIZE: &str = "CODE_PIXEL_SIZE";

impl Config {
    pub fn new(environment: Environment) -> Self {
        dotenv().ok();

        let app_name = env::var(&APP_NAME).unwrap_or_else(|_| "Mela".to_string());

        let database_url = match environment {
            Environment::Test => {
                env::var(&TEST_DATABASE_URL).unwrap_or_else(|_| panic!("{} must be defined.", TEST_DATABASE_URL))
            }
            _ => env::var(&DATABASE_URL).unwrap_or_else(|_| panic!("{} must be defined.", DATABASE_URL)),
        };

        let database_pool_size = env::var(&DATABASE_POOL_SIZE)
            .map(|s| s.parse().expect("Not a valid integer for database pool size"))
            .unwrap_or(20);

        let allowed_origins = env::var(&ALLOWED_ORIGINS).unwrap_or_else(|_| "*".to_string());
        let api_host = env::var(&API_HOST).unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = env::var(&API_PORT).unwrap_or_else(|_| "8088".to_string());

        let front_end_url = env::var(&FRONT_END_URL).unwrap_or_else(|_| "http://localhost:3000".to_string());

        let code_renderer_base_url = env::var(&CODE_RENDERER_BASE_URL)
            .unwrap_or_else(|_| "https://api.qrserver.com/v1/create-qr-code/".to_string());
        let code_pixel_size = env::var(&CODE_PIXEL_SIZE)
            .map(|s| s.parse().expect("Not a valid integer for code pixel size"))
            .unwrap_or(300);

        Config {
            allowed_origins,
            app_name,
            api_host,
            api_port,
            code_pixel_size,
            code_renderer_base_url,
            database_url,
            database_pool_size,
            environment,
            front_end_url,
        }
    }
}
