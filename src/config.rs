//! Server configuration from environment variables.

use std::env;

/// Bind configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host to bind (default: 0.0.0.0)
    pub host: String,
    /// Port to bind (default: 8080)
    pub port: u16,
}

impl ServerConfig {
    /// Create a server configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): bind address
    /// - `PORT` (optional, default: 8080): bind port
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;

        Ok(Self { host, port })
    }

    /// The `host:port` string this configuration binds to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
