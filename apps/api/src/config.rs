use anyhow::{Context, Result};

const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;
const DEFAULT_MAX_SESSIONS: usize = 1024;
const DEFAULT_SESSION_IDLE_SECS: u64 = 60 * 60;

/// Service configuration loaded from environment variables.
/// Every key has a default; malformed numbers fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on any request body, persisted documents included.
    pub max_body_bytes: usize,
    /// Cap on concurrently open editing sessions.
    pub max_sessions: usize,
    /// Seconds without an edit after which a session is dropped.
    pub session_idle_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_env("PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_body_bytes: parse_env("MAX_BODY_BYTES", DEFAULT_MAX_BODY_BYTES)
                .context("MAX_BODY_BYTES must be a byte count")?,
            max_sessions: parse_env("MAX_SESSIONS", DEFAULT_MAX_SESSIONS)
                .context("MAX_SESSIONS must be a whole number")?,
            session_idle_secs: parse_env("SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)
                .context("SESSION_IDLE_SECS must be a number of seconds")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 8080,
            rust_log: "info".to_string(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            max_sessions: DEFAULT_MAX_SESSIONS,
            session_idle_secs: DEFAULT_SESSION_IDLE_SECS,
        }
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Invalid value for '{key}': {raw:?}")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_missing_uses_default() {
        let value: u16 = parse_env("RESUME_BUILDER_TEST_UNSET_KEY", 8080).unwrap();
        assert_eq!(value, 8080);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("RESUME_BUILDER_TEST_BAD_PORT", "eighty");
        let result: Result<u16> = parse_env("RESUME_BUILDER_TEST_BAD_PORT", 8080);
        assert!(result.is_err(), "non-numeric port should fail");
    }

    #[test]
    fn test_parse_env_trims() {
        std::env::set_var("RESUME_BUILDER_TEST_SESSIONS", " 12 ");
        let value: usize = parse_env("RESUME_BUILDER_TEST_SESSIONS", 1).unwrap();
        assert_eq!(value, 12);
    }
}
