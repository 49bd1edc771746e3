use crate::infrastructure::fishbase_client::DEFAULT_BASE_URL;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Load(#[from] config::ConfigError),

    #[error("{0}")]
    Validation(&'static str),
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub fishbase: FishbaseSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub port: u16,
    #[serde(default)]
    pub static_dir: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub name: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FishbaseSettings {
    pub enabled: bool,
    pub base_url: String,
}

impl DatabaseSettings {
    /// Checks every connection parameter is present.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::Validation("host not defined"));
        }
        if self.port == 0 {
            return Err(ConfigError::Validation("port not defined"));
        }
        if self.username.is_empty() {
            return Err(ConfigError::Validation("user not defined"));
        }
        if self.password.is_empty() {
            return Err(ConfigError::Validation("password not defined"));
        }
        if self.name.is_empty() {
            return Err(ConfigError::Validation("database not defined"));
        }
        Ok(())
    }

    pub fn connection_url(&self) -> Result<String, ConfigError> {
        self.validate()?;
        Ok(format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(&self.username),
            urlencoding::encode(&self.password),
            self.host,
            self.port,
            self.name
        ))
    }
}

fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    Ok(config::Config::builder()
        .set_default("server.port", 8080)?
        .set_default("database.host", "localhost")?
        .set_default("database.port", 5432)?
        .set_default("database.username", "trackmyfish")?
        .set_default("database.password", "")?
        .set_default("database.name", "trackmyfish")?
        .set_default("database.max_connections", 5)?
        .set_default("database.run_migrations", true)?
        .set_default("fishbase.enabled", true)?
        .set_default("fishbase.base_url", DEFAULT_BASE_URL)?)
}

/// Defaults, then `config/trackmyfish.*`, then `/config/trackmyfish.*`, then
/// `TMF_`-prefixed environment variables such as `TMF_DATABASE__PASSWORD`.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    let settings = builder()?
        .add_source(config::File::with_name("config/trackmyfish").required(false))
        .add_source(config::File::with_name("/config/trackmyfish").required(false))
        .add_source(
            config::Environment::with_prefix("TMF")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = settings.try_deserialize()?;
    app_config.database.validate()?;
    Ok(app_config)
}
