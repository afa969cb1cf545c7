//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    pub database: DatabaseConfig,
    /// JWT configuration.
    #[serde(default)]
    pub jwt: JwtSettings,
    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Image storage configuration.
    #[serde(default)]
    pub storage: StorageSettings,
    /// Email (SMTP) configuration.
    #[serde(default)]
    pub email: crate::email::EmailConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Environment name reported by the health endpoint.
    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            environment: default_environment(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_environment() -> String {
    std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string())
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// JWT configuration section.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtSettings {
    /// Secret key for signing tokens.
    ///
    /// Falls back to a well-known insecure default when unset so a fresh
    /// checkout still boots. Must be overridden in production.
    #[serde(default = "default_jwt_secret")]
    pub secret: String,
    /// Token expiration in days.
    #[serde(default = "default_token_expiry_days")]
    pub token_expiry_days: i64,
}

impl Default for JwtSettings {
    fn default() -> Self {
        Self {
            secret: default_jwt_secret(),
            token_expiry_days: default_token_expiry_days(),
        }
    }
}

fn default_jwt_secret() -> String {
    "your-secret-key-change-this".to_string()
}

fn default_token_expiry_days() -> i64 {
    7
}

/// CORS configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorsConfig {
    /// Additional allowed origin (the deployed frontend URL).
    #[serde(default)]
    pub frontend_url: Option<String>,
}

impl CorsConfig {
    /// Origins the admin UI is served from during development.
    pub const DEV_ORIGINS: [&'static str; 2] =
        ["http://localhost:8080", "http://localhost:5173"];

    /// Returns the full origin allow-list.
    #[must_use]
    pub fn allowed_origins(&self) -> Vec<String> {
        let mut origins: Vec<String> =
            Self::DEV_ORIGINS.iter().map(ToString::to_string).collect();
        if let Some(url) = &self.frontend_url {
            if !url.is_empty() {
                origins.push(url.clone());
            }
        }
        origins
    }
}

/// Image storage configuration section.
///
/// Deserialized into the core crate's `StorageConfig` at startup; kept as
/// plain data here so `stoneline-core` stays free of the `config` crate.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    /// Provider kind: `"s3"` or `"local"`.
    #[serde(default = "default_storage_provider")]
    pub provider: String,
    /// S3 endpoint URL.
    #[serde(default)]
    pub endpoint: String,
    /// S3 bucket name.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// S3 access key ID.
    #[serde(default)]
    pub access_key_id: String,
    /// S3 secret access key.
    #[serde(default)]
    pub secret_access_key: String,
    /// S3 region.
    #[serde(default = "default_region")]
    pub region: String,
    /// Root directory for the local filesystem provider.
    #[serde(default = "default_local_root")]
    pub local_root: String,
    /// Public base URL that uploaded keys resolve under.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Maximum file size in bytes (default 10MB).
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            provider: default_storage_provider(),
            endpoint: String::new(),
            bucket: default_bucket(),
            access_key_id: String::new(),
            secret_access_key: String::new(),
            region: default_region(),
            local_root: default_local_root(),
            public_base_url: default_public_base_url(),
            max_file_size: default_max_file_size(),
        }
    }
}

fn default_storage_provider() -> String {
    "local".to_string()
}

fn default_bucket() -> String {
    "stoneline".to_string()
}

fn default_region() -> String {
    "auto".to_string()
}

fn default_local_root() -> String {
    "./uploads".to_string()
}

fn default_public_base_url() -> String {
    "/uploads".to_string()
}

fn default_max_file_size() -> u64 {
    10 * 1024 * 1024
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("STONELINE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_settings_default_fallback() {
        let jwt = JwtSettings::default();
        assert_eq!(jwt.secret, "your-secret-key-change-this");
        assert_eq!(jwt.token_expiry_days, 7);
    }

    #[test]
    fn test_storage_defaults() {
        let storage = StorageSettings::default();
        assert_eq!(storage.provider, "local");
        assert_eq!(storage.max_file_size, 10 * 1024 * 1024);
    }

    #[test]
    fn test_cors_allowed_origins_without_frontend() {
        let cors = CorsConfig::default();
        let origins = cors.allowed_origins();
        assert_eq!(origins.len(), 2);
        assert!(origins.contains(&"http://localhost:5173".to_string()));
    }

    #[test]
    fn test_cors_allowed_origins_with_frontend() {
        let cors = CorsConfig {
            frontend_url: Some("https://stoneline.example.com".to_string()),
        };
        let origins = cors.allowed_origins();
        assert_eq!(origins.len(), 3);
        assert_eq!(origins[2], "https://stoneline.example.com");
    }

    #[test]
    fn test_cors_empty_frontend_url_ignored() {
        let cors = CorsConfig {
            frontend_url: Some(String::new()),
        };
        assert_eq!(cors.allowed_origins().len(), 2);
    }
}
