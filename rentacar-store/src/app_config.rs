use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub name: Option<String>,
}

impl DatabaseConfig {
    pub fn url_is_set(&self) -> bool {
        non_blank(&self.url).is_some()
    }

    pub fn name_is_set(&self) -> bool {
        non_blank(&self.name).is_some()
    }

    /// Connection string and database name, only when both are configured.
    pub fn connection(&self) -> Option<(&str, &str)> {
        Some((non_blank(&self.url)?, non_blank(&self.name)?))
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// The unprefixed variables the service has always been deployed with.
#[derive(Debug, Default, Clone)]
pub struct PlainEnv {
    pub port: Option<String>,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
}

impl PlainEnv {
    pub fn from_env() -> Self {
        let read = |key: &str| env::var(key).ok().filter(|v| !v.trim().is_empty());
        Self {
            port: read("PORT"),
            database_url: read("DATABASE_URL"),
            database_name: read("DATABASE_NAME"),
        }
    }
}

/// e.g. RENTACAR_SERVER__PORT=9000
fn prefixed_env() -> config::Environment {
    config::Environment::with_prefix("RENTACAR")
        .prefix_separator("_")
        .separator("__")
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::build(&run_mode, PlainEnv::from_env())
    }

    pub fn build(run_mode: &str, plain: PlainEnv) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .set_default("server.port", 8000)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(prefixed_env())
            .set_override_option("server.port", plain.port)?
            .set_override_option("database.url", plain.database_url)?
            .set_override_option("database.name", plain.database_name)?
            .build()?;

        s.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_database() {
        let config = Config::build("unit-test", PlainEnv::default()).unwrap();

        assert_eq!(config.server.port, 8000);
        assert!(config.database.connection().is_none());
        assert!(!config.database.url_is_set());
    }

    #[test]
    fn test_plain_env_overrides() {
        let plain = PlainEnv {
            port: Some("9100".to_string()),
            database_url: Some("postgres://rentacar@localhost:5432".to_string()),
            database_name: Some("rentacar".to_string()),
        };
        let config = Config::build("unit-test", plain).unwrap();

        assert_eq!(config.server.port, 9100);
        assert_eq!(
            config.database.connection(),
            Some(("postgres://rentacar@localhost:5432", "rentacar"))
        );
    }

    #[test]
    fn test_prefixed_env_keys() {
        let mut vars = config::Map::new();
        vars.insert("RENTACAR_SERVER__PORT".to_string(), "9300".to_string());
        vars.insert("RENTACAR_DATABASE__NAME".to_string(), "rentals".to_string());

        let s = config::Config::builder()
            .add_source(prefixed_env().source(Some(vars)))
            .build()
            .unwrap();

        assert_eq!(s.get_int("server.port").unwrap(), 9300);
        assert_eq!(s.get_string("database.name").unwrap(), "rentals");
    }

    #[test]
    fn test_url_without_name_is_not_a_connection() {
        let database = DatabaseConfig {
            url: Some("postgres://localhost".to_string()),
            name: Some("  ".to_string()),
        };

        assert!(database.url_is_set());
        assert!(!database.name_is_set());
        assert!(database.connection().is_none());
    }
}
