// src/config.rs
use std::fmt;
use std::net::IpAddr;

/// Startup configuration read once from the environment. `DATABASE_URL` and
/// `JWT_SECRET` are required; the process must not serve without them.
pub struct Config {
    pub database_url: String,
    pub jwt_secret: String,
    pub host: IpAddr,
    pub port: u16,
}

#[derive(Debug)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(var) => write!(f, "{var} environment variable is not set"),
            ConfigError::Invalid(var, value) => write!(f, "invalid {var} value: {value}"),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = required("DATABASE_URL")?;
        let jwt_secret = required("JWT_SECRET")?;

        let host = match std::env::var("HOST") {
            Ok(raw) => raw
                .parse::<IpAddr>()
                .map_err(|_| ConfigError::Invalid("HOST", raw))?,
            Err(_) => IpAddr::from([127, 0, 0, 1]),
        };

        let port = match std::env::var("PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid("PORT", raw))?,
            Err(_) => 8080,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            host,
            port,
        })
    }
}

fn required(var: &'static str) -> Result<String, ConfigError> {
    match std::env::var(var) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(var)),
    }
}
