use crate::error::{BotError, Result};
use crate::responses::ReplyContext;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/tourbot.db?mode=rwc";
pub const DEFAULT_REGION_CODE: &str = "gyeongsan";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: Option<u32>,
    pub host: String,
    pub port: u16,
    pub public_base_url: String,
    pub images_dir: String,
    pub default_region_code: String,
    pub map_app_name: String,
    pub run_migrations: bool,
    pub seed_sample_data: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url =
            dotenvy::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let db_max_connections = match non_empty_var("DB_MAX_CONNECTIONS") {
            Some(raw) => Some(
                raw.parse::<u32>()
                    .ok()
                    .filter(|n| *n > 0)
                    .ok_or_else(|| BotError::Config("Invalid DB_MAX_CONNECTIONS".to_string()))?,
            ),
            None => None,
        };

        let host = non_empty_var("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = non_empty_var("PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .map_err(|_| BotError::Config("Invalid PORT".to_string()))?;

        let public_base_url = non_empty_var("PUBLIC_BASE_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_string();

        let images_dir = non_empty_var("IMAGES_DIR").unwrap_or_else(|| "images".to_string());

        let default_region_code = non_empty_var("DEFAULT_REGION_CODE")
            .unwrap_or_else(|| DEFAULT_REGION_CODE.to_string());

        let map_app_name = non_empty_var("MAP_APP_NAME").unwrap_or_else(|| "tourbot".to_string());

        Ok(Config {
            database_url,
            db_max_connections,
            host,
            port,
            public_base_url,
            images_dir,
            default_region_code,
            map_app_name,
            run_migrations: parse_env_bool("RUN_MIGRATIONS", true)?,
            seed_sample_data: parse_env_bool("SEED_SAMPLE_DATA", false)?,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn reply_context(&self) -> ReplyContext {
        ReplyContext::new(&self.public_base_url, &self.default_region_code)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    dotenvy::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_env_bool(key: &str, default: bool) -> Result<bool> {
    match non_empty_var(key) {
        None => Ok(default),
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(BotError::Config(format!("Invalid {key}"))),
        },
    }
}
