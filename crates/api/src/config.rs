use pokedex_core::pagination::DEFAULT_PAGE_SIZE;

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for the docker-compose setup. Override
/// via environment variables (or a `.env` file picked up by `dotenvy`).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: String,
    /// Upper bound on pooled database connections (default: `20`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Page size used when a list request omits `size` (default: `20`).
    pub default_page_size: i64,
}

const DEFAULT_DATABASE_URL: &str = "postgres://postgres:postgres@db:5432/pokemon";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                                        |
    /// |------------------------|------------------------------------------------|
    /// | `HOST`                 | `0.0.0.0`                                      |
    /// | `PORT`                 | `3000`                                         |
    /// | `DATABASE_URL`         | `postgres://postgres:postgres@db:5432/pokemon` |
    /// | `DB_MAX_CONNECTIONS`   | `20`                                           |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`                        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                                           |
    /// | `DEFAULT_PAGE_SIZE`    | `20`                                           |
    ///
    /// Panics on unparseable values so misconfiguration fails at startup.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let host = var("HOST", "0.0.0.0");

        let port: u16 = var("PORT", "3000")
            .parse()
            .expect("PORT must be a valid u16");

        let database_url = var("DATABASE_URL", DEFAULT_DATABASE_URL);

        let db_max_connections: u32 = var("DB_MAX_CONNECTIONS", "20")
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let cors_origins: Vec<String> = var("CORS_ORIGINS", "http://localhost:5173")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = var("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let default_page_size: i64 = var("DEFAULT_PAGE_SIZE", &DEFAULT_PAGE_SIZE.to_string())
            .parse()
            .expect("DEFAULT_PAGE_SIZE must be a valid i64");
        assert!(default_page_size >= 1, "DEFAULT_PAGE_SIZE must be at least 1");

        Self {
            host,
            port,
            database_url,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            default_page_size,
        }
    }
}
