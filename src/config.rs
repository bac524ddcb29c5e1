use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendType {
    File,
    Http,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendType,
    pub data_dir: PathBuf,
    pub api_base_url: String,
}

impl Config {
    pub fn parse_backend_from_args() -> BackendType {
        let args: Vec<String> = env::args().collect();

        if args.contains(&"--backend".to_string()) {
            if let Some(idx) = args.iter().position(|x| x == "--backend") {
                match args.get(idx + 1).map(|s| s.as_str()) {
                    Some("http") => return BackendType::Http,
                    Some("file") => return BackendType::File,
                    _ => {}
                }
            }
        }

        BackendType::File // Default to local JSON files
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = Self::parse_backend_from_args();

        let data_dir = env::var("BLOGRANK_DATA_DIR")
            .unwrap_or_else(|_| "data".to_string())
            .into();

        let api_base_url = env::var("BLOGRANK_API_URL")
            .unwrap_or_else(|_| "https://jsonplaceholder.typicode.com".to_string());
        validate_base_url(&api_base_url)?;

        Ok(Self {
            backend,
            data_dir,
            api_base_url,
        })
    }
}

fn validate_base_url(url: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue(
            "BLOGRANK_API_URL must start with http:// or https://".to_string(),
        ));
    }
    Ok(())
}
