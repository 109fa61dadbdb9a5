use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
    pub address: AddressConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub max_connections: u32,
    pub connection_timeout_secs: u64,
    /// Overrides the database name in DATABASE_URL when set. Lets tests
    /// point at a scratch database without rewriting the whole URL.
    pub database_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub jwt_secret: String,
    pub jwt_expiry_minutes: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddressConfig {
    /// Base URL of the ViaCEP-compatible postal code lookup service.
    pub cep_lookup_base_url: String,
    pub cep_lookup_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        // Set defaults based on environment, then override with specific env vars
        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Ok(v) = env::var("SERVER_HOST") {
            self.server.host = v;
        }
        if let Ok(v) = env::var("SERVER_PORT").or_else(|_| env::var("PORT")) {
            self.server.port = v.parse().unwrap_or(self.server.port);
        }
        if let Ok(v) = env::var("SERVER_ENABLE_CORS") {
            self.server.enable_cors = v.parse().unwrap_or(self.server.enable_cors);
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout_secs =
                v.parse().unwrap_or(self.database.connection_timeout_secs);
        }
        if let Ok(v) = env::var("DATABASE_NAME") {
            self.database.database_name = Some(v);
        }

        // Security overrides
        if let Ok(v) = env::var("JWT_SECRET") {
            self.security.jwt_secret = v;
        }
        if let Ok(v) = env::var("JWT_EXPIRY_MINUTES") {
            self.security.jwt_expiry_minutes =
                v.parse().unwrap_or(self.security.jwt_expiry_minutes);
        }

        // Address lookup overrides
        if let Ok(v) = env::var("CEP_LOOKUP_BASE_URL") {
            self.address.cep_lookup_base_url = v;
        }
        if let Ok(v) = env::var("CEP_LOOKUP_TIMEOUT") {
            self.address.cep_lookup_timeout_secs =
                v.parse().unwrap_or(self.address.cep_lookup_timeout_secs);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                enable_cors: true,
            },
            database: DatabaseConfig {
                max_connections: 10,
                connection_timeout_secs: 30,
                database_name: None,
            },
            security: SecurityConfig {
                // Development-only fallback; real deployments set JWT_SECRET.
                jwt_secret: "my_secret_key".to_string(),
                jwt_expiry_minutes: 60,
            },
            address: AddressConfig {
                cep_lookup_base_url: "https://viacep.com.br".to_string(),
                cep_lookup_timeout_secs: 10,
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                enable_cors: true,
            },
            database: DatabaseConfig {
                max_connections: 20,
                connection_timeout_secs: 10,
                database_name: None,
            },
            security: SecurityConfig {
                jwt_secret: String::new(),
                jwt_expiry_minutes: 60,
            },
            address: AddressConfig {
                cep_lookup_base_url: "https://viacep.com.br".to_string(),
                cep_lookup_timeout_secs: 10,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
                enable_cors: false,
            },
            database: DatabaseConfig {
                max_connections: 50,
                connection_timeout_secs: 5,
                database_name: None,
            },
            security: SecurityConfig {
                // Must come from JWT_SECRET; token issuance fails on empty.
                jwt_secret: String::new(),
                jwt_expiry_minutes: 60,
            },
            address: AddressConfig {
                cep_lookup_base_url: "https://viacep.com.br".to_string(),
                cep_lookup_timeout_secs: 5,
            },
        }
    }
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
