use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use dotenvy::dotenv;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_base_url: String,
    pub api_prefix: String,
    pub jwt_secret: String,
    pub session_ttl: usize,
    pub require_auth: bool,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080/api".to_string()),
            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
            jwt_secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "hrm-dashboard-dev-secret".to_string()),
            session_ttl: parse_var("SESSION_TTL", 28_800)?, // 8 hours
            require_auth: parse_var("REQUIRE_AUTH", false)?,
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string()),
        })
    }
}

fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        Err(_) => Ok(default),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            api_base_url: "http://localhost:8080/api".to_string(),
            api_prefix: "/api".to_string(),
            jwt_secret: "hrm-dashboard-dev-secret".to_string(),
            session_ttl: 28_800,
            require_auth: false,
            log_dir: "logs".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variable_falls_back_to_default() {
        let ttl: usize = parse_var("HRM_TEST_SURELY_UNSET_TTL", 42).unwrap();
        assert_eq!(ttl, 42);
    }

    #[test]
    fn malformed_variable_is_an_error() {
        // SAFETY: the key is unique to this test.
        unsafe { env::set_var("HRM_TEST_BAD_BOOL", "maybe") };
        let parsed: Result<bool> = parse_var("HRM_TEST_BAD_BOOL", false);
        assert!(parsed.is_err());
    }
}
