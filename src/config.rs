use std::env;

pub const MAX_JWT_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_ttl_hours: i64,
    pub seed_on_startup: bool,
    /// Allowed browser origin; any origin is allowed when unset.
    pub cors_origin: Option<String>,
    pub migrations_dir: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL")?;
        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET is not set"))?;
        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let jwt_ttl_hours = env::var("JWT_TTL_HOURS")
            .ok()
            .and_then(|h| h.parse::<i64>().ok())
            .filter(|h| *h > 0)
            .map(|h| h.min(MAX_JWT_TTL_HOURS))
            .unwrap_or(24);
        let seed_on_startup = env::var("SEED_ON_STARTUP")
            .ok()
            .map(|v| parse_flag(&v))
            .unwrap_or(true);
        let cors_origin = env::var("CORS_ORIGIN").ok().filter(|o| !o.trim().is_empty());
        let migrations_dir =
            env::var("MIGRATIONS_DIR").unwrap_or_else(|_| "migrations".to_string());
        Ok(Self {
            database_url,
            host,
            port,
            jwt_secret,
            jwt_ttl_hours,
            seed_on_startup,
            cors_origin,
            migrations_dir,
        })
    }
}

pub fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
