use crate::auth::jwt::AuthConfig;

/// Default public origin used for absolute sitemap URLs.
pub const DEFAULT_PUBLIC_BASE_URL: &str = "https://lentera-baca.vercel.app";

/// Server configuration loaded from environment variables.
///
/// All fields except the admin email and token secret have defaults
/// suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// How long in-flight requests may drain after a shutdown signal.
    pub shutdown_timeout_secs: u64,
    /// Public origin of the reading site, without a trailing slash.
    pub public_base_url: String,
    /// Email of the single account allowed into the admin area.
    pub admin_email: String,
    /// Bearer token verification settings.
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                           |
    /// |------------------------|-----------------------------------|
    /// | `HOST`                 | `0.0.0.0`                         |
    /// | `PORT`                 | `3000`                            |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`           |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                              |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                              |
    /// | `PUBLIC_BASE_URL`      | `https://lentera-baca.vercel.app` |
    /// | `ADMIN_EMAIL`          | -- (required)                     |
    ///
    /// # Panics
    ///
    /// Panics on unparseable numbers or a missing `ADMIN_EMAIL`, so
    /// misconfiguration fails at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let public_base_url = std::env::var("PUBLIC_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_PUBLIC_BASE_URL.into())
            .trim_end_matches('/')
            .to_string();

        let admin_email =
            std::env::var("ADMIN_EMAIL").expect("ADMIN_EMAIL must be set in the environment");
        assert!(!admin_email.trim().is_empty(), "ADMIN_EMAIL must not be empty");

        let auth = AuthConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            public_base_url,
            admin_email,
            auth,
        }
    }
}
