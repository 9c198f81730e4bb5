use anyhow::{Context, Result, anyhow};

/// Request header carrying the shared secret.
pub const MASTER_KEY_HEADER: &str = "X-MASTER-KEY";

/// Secret used when MASTER_KEY is absent from the environment.
pub const DEFAULT_MASTER_KEY: &str = "TOKEN_FAKE";

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_conn: u32,
    pub run_migrations: bool,
    pub port: u16,
    pub master_key: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let database_url =
            std::env::var("DATABASE_URL").context("Missing environment variable: DATABASE_URL")?;
        let run_migrations_str = std::env::var("RUN_MIGRATIONS")
            .context("Missing environment variable: RUN_MIGRATIONS")?;
        let port_str = std::env::var("PORT").context("Missing environment variable: PORT")?;

        let run_migrations = match run_migrations_str.as_str() {
            "true" => true,
            "false" => false,
            other => {
                return Err(anyhow!(
                    "RUN_MIGRATIONS must be 'true' or 'false', got '{}'",
                    other
                ));
            }
        };

        let port = port_str
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let db_max_conn = match std::env::var("DB_MAX_CONN") {
            Ok(value) => value
                .parse::<u32>()
                .context("DB_MAX_CONN must be a valid u32 integer")?,
            Err(_) => 5,
        };

        let master_key =
            std::env::var("MASTER_KEY").unwrap_or_else(|_| DEFAULT_MASTER_KEY.to_string());

        Ok(Self {
            database_url,
            db_max_conn,
            run_migrations,
            port,
            master_key,
        })
    }
}
