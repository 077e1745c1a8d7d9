use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub session: SessionConfig,
    pub password: PasswordConfig,
    pub assets: AssetConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,  // form bodies only, in bytes
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub create_schema: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secure: bool,
    pub inactivity_minutes: i64,  // 0 keeps the cookie for the browser session
    pub secret: Option<String>,   // hex, 64 bytes
}

#[derive(Debug, Deserialize, Clone)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AssetConfig {
    pub templates_dir: String,
    pub static_dir: String,
    pub download_file: String,
    pub download_name: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn from_toml_str(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
pub(crate) fn test_config() -> Config {
    let mut config = Config::from_toml_str(include_str!("../config/default.toml"))
        .expect("default config parses");
    config.database.url = "sqlite::memory:".into();
    config.database.max_connections = 1;
    config.password.bcrypt_cost = 4;
    config
}
