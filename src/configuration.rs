#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub app_port: u16,
    pub app_host: String,
    pub ai: AiSettings,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub filename: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AiSettings {
    pub base_url: String,
    pub model: String,
    pub api_token: Option<String>,
}

impl DatabaseSettings {
    // Connection string: sqlite://<filename>
    pub fn connection_string(&self) -> String {
        format!("sqlite://{}", self.filename)
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let mut settings = config::Config::default();

    // Add configuration values from a file named `configuration`
    // with the .yaml extension
    settings.merge(config::File::with_name("configuration"))?; // .json, .toml, .yaml, .yml

    let mut config: Settings = settings.try_deserialize()?;

    // The inference API token never lives in the config file
    if let Ok(token) = std::env::var("AI_API_TOKEN") {
        config.ai.api_token = Some(token);
    }

    Ok(config)
}
