use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::TodoError;

/// Prefix for environment overrides, e.g. `TODO_DATABASE_PATH`.
pub const ENV_PREFIX: &str = "TODO_";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// SQLite file holding the `todo` table.
    pub database_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Expose internal error detail in 500 responses.
    pub debug: bool,
    /// Default tracing filter, used when `RUST_LOG` is unset.
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("todo.sqlite"),
            host: "127.0.0.1".to_string(),
            port: 8000,
            debug: false,
            loglevel: "info".to_string(),
        }
    }
}

impl Config {
    /// Defaults, then `TODO_*` environment variables.
    pub fn load() -> Result<Self, TodoError> {
        Ok(Self::figment().extract()?)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Connection string understood by `SqliteConnectOptions`.
    pub fn database_url(&self) -> String {
        format!("sqlite:{}", self.database_path.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("TODO_DATABASE_PATH", "/tmp/items.sqlite");
            jail.set_env("TODO_PORT", "9090");
            jail.set_env("TODO_DEBUG", "true");

            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg.database_path, PathBuf::from("/tmp/items.sqlite"));
            assert_eq!(cfg.port, 9090);
            assert!(cfg.debug);
            assert_eq!(cfg.host, "127.0.0.1");
            assert_eq!(cfg.database_url(), "sqlite:/tmp/items.sqlite");
            Ok(())
        });
    }

    #[test]
    fn defaults_without_env() {
        figment::Jail::expect_with(|_jail| {
            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg, Config::default());
            assert_eq!(cfg.bind_addr(), "127.0.0.1:8000");
            Ok(())
        });
    }
}
