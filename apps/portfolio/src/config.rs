use anyhow::{bail, Context, Result};

const DEFAULT_MESSAGES_TABLE: &str = "messages";

/// Application configuration loaded from environment variables.
/// Fails at startup if the store connection settings are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub store: StoreBackend,
    pub messages_table: String,
    pub probe_store_on_start: bool,
    pub port: u16,
    pub rust_log: String,
}

/// Which backend the contact form writes into.
#[derive(Clone)]
pub enum StoreBackend {
    /// PostgREST-compatible HTTP endpoint (e.g. a hosted Supabase project).
    Rest { url: String, api_key: String },
    /// Direct connection to the Postgres database behind the table.
    Postgres { database_url: String },
}

// Credentials stay out of logs.
impl std::fmt::Debug for StoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreBackend::Rest { url, .. } => f
                .debug_struct("Rest")
                .field("url", url)
                .field("api_key", &"<redacted>")
                .finish(),
            StoreBackend::Postgres { .. } => f
                .debug_struct("Postgres")
                .field("database_url", &"<redacted>")
                .finish(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match non_empty(&lookup, "DATABASE_URL") {
            Some(database_url) => StoreBackend::Postgres { database_url },
            None => StoreBackend::Rest {
                url: require(&lookup, "STORE_URL")?
                    .trim_end_matches('/')
                    .to_string(),
                api_key: require(&lookup, "STORE_API_KEY")?,
            },
        };

        let messages_table = non_empty(&lookup, "MESSAGES_TABLE")
            .unwrap_or_else(|| DEFAULT_MESSAGES_TABLE.to_string());
        if !is_plain_identifier(&messages_table) {
            bail!("MESSAGES_TABLE must contain only ASCII letters, digits and '_', got '{messages_table}'");
        }

        Ok(Config {
            store,
            messages_table,
            probe_store_on_start: match non_empty(&lookup, "STORE_PROBE_ON_START") {
                Some(raw) => parse_bool(&raw)
                    .with_context(|| format!("STORE_PROBE_ON_START must be a boolean, got '{raw}'"))?,
                None => true,
            },
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).filter(|v| !v.trim().is_empty())
}

fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    non_empty(lookup, key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// The table name is interpolated into SQL by the Postgres backend.
fn is_plain_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_rest_backend_with_defaults() {
        let config = config_from(&[
            ("STORE_URL", "https://project.example.co/"),
            ("STORE_API_KEY", "anon-key"),
        ])
        .unwrap();

        match config.store {
            StoreBackend::Rest { url, api_key } => {
                assert_eq!(url, "https://project.example.co");
                assert_eq!(api_key, "anon-key");
            }
            other => panic!("unexpected backend: {other:?}"),
        }
        assert_eq!(config.messages_table, "messages");
        assert!(config.probe_store_on_start);
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_database_url_selects_postgres() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("STORE_URL", "https://ignored.example.co"),
        ])
        .unwrap();
        assert!(matches!(config.store, StoreBackend::Postgres { .. }));
    }

    #[test]
    fn test_missing_store_key_fails() {
        let err = config_from(&[("STORE_URL", "https://project.example.co")]).unwrap_err();
        assert!(err.to_string().contains("STORE_API_KEY"));
    }

    #[test]
    fn test_blank_database_url_is_ignored() {
        let err = config_from(&[("DATABASE_URL", "  ")]).unwrap_err();
        assert!(err.to_string().contains("STORE_URL"));
    }

    #[test]
    fn test_rejects_unsafe_table_name() {
        let err = config_from(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("MESSAGES_TABLE", "messages; drop table x"),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("MESSAGES_TABLE"));
    }

    #[test]
    fn test_probe_flag_and_port() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("STORE_PROBE_ON_START", "off"),
            ("PORT", "3000"),
        ])
        .unwrap();
        assert!(!config.probe_store_on_start);
        assert_eq!(config.port, 3000);

        assert!(config_from(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("STORE_PROBE_ON_START", "maybe"),
        ])
        .is_err());
        assert!(config_from(&[
            ("DATABASE_URL", "postgres://localhost/site"),
            ("PORT", "not-a-port"),
        ])
        .is_err());
    }

    #[test]
    fn test_debug_redacts_credentials() {
        let backend = StoreBackend::Rest {
            url: "https://project.example.co".to_string(),
            api_key: "secret-key".to_string(),
        };
        let rendered = format!("{backend:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("project.example.co"));
    }
}
