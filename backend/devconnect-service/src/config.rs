/// Configuration management for DevConnect Service
///
/// Loads configuration from environment variables.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Redis configuration
    pub redis: RedisConfig,
    /// Stripe configuration
    pub stripe: StripeConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Notification list configuration
    pub notifications: NotificationConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (dev, staging, prod)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// HTTP port
    pub http_port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Min connections in pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL (redis://host:port)
    pub url: String,
}

/// Stripe configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StripeConfig {
    /// Stripe secret API key
    pub secret_key: String,
    /// Origin used to build checkout success/cancel URLs
    pub checkout_origin: String,
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins, or "*"
    pub allowed_origins: String,
}

/// Notification list configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Cap on each per-user notification list
    #[serde(default = "default_max_per_user")]
    pub max_per_user: usize,
}

// Default values
fn default_max_connections() -> u32 {
    20
}

fn default_min_connections() -> u32 {
    5
}

fn default_max_per_user() -> usize {
    100
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let app = AppConfig {
            env: std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
            host: std::env::var("APP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            http_port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
        };

        let database = DatabaseConfig {
            url: std::env::var("DATABASE_URL")
                .context("DATABASE_URL environment variable not set")?,
            max_connections: std::env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_max_connections),
            min_connections: std::env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_min_connections),
        };

        let redis = RedisConfig {
            url: std::env::var("REDIS_URL")
                .context("REDIS_URL environment variable not set")?,
        };

        let stripe = StripeConfig {
            secret_key: std::env::var("STRIPE_SECRET_KEY")
                .context("STRIPE_SECRET_KEY environment variable not set")?,
            checkout_origin: std::env::var("CHECKOUT_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
        };

        let cors = CorsConfig {
            allowed_origins: std::env::var("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|_| "*".to_string()),
        };

        let notifications = NotificationConfig {
            max_per_user: std::env::var("NOTIFICATIONS_MAX_PER_USER")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or_else(default_max_per_user),
        };

        Ok(Config {
            app,
            database,
            redis,
            stripe,
            cors,
            notifications,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        std::env::set_var("DATABASE_URL", "postgres://test");
        std::env::set_var("REDIS_URL", "redis://localhost");
        std::env::set_var("STRIPE_SECRET_KEY", "sk_test_123");

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.http_port, 8080);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.database.min_connections, 5);
        assert_eq!(config.cors.allowed_origins, "*");
        assert_eq!(config.notifications.max_per_user, 100);
    }
}
