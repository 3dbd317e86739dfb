//! Configuration management for the server.

use std::env;

/// Default listen port.
const DEFAULT_PORT: &str = "4444";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory holding the flat store files
    pub data_dir: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_PORT.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidPort)?;

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string());

        Ok(Self {
            host,
            port,
            data_dir,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid PORT value")]
    InvalidPort,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Environment variables are process-wide; serialize the tests touching
    // them.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("HOST");
        env::remove_var("PORT");
        env::remove_var("DATA_DIR");
    }

    #[test]
    fn defaults_apply_when_env_is_unset() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 4444);
        assert_eq!(config.data_dir, ".");
    }

    #[test]
    fn env_overrides_apply() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("HOST", "127.0.0.1");
        env::set_var("PORT", "8080");
        env::set_var("DATA_DIR", "/var/lib/dealer");

        let config = Config::from_env().unwrap();
        clear_env();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.data_dir, "/var/lib/dealer");
    }

    #[test]
    fn invalid_port_is_rejected() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        env::set_var("PORT", "not-a-port");

        let result = Config::from_env();
        clear_env();

        assert!(matches!(result, Err(ConfigError::InvalidPort)));
    }
}
