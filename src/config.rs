use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;

pub const CONFIG_PATH_ENV: &str = "TODOBOARD_CONFIG";
pub const BASE_URL_ENV: &str = "TODOBOARD_BASE_URL";

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub base_url: String,
    pub todos_path: String,
    pub posts_path: String,
    pub log_filter: String,
    pub color: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            todos_path: "todos".to_string(),
            posts_path: "posts".to_string(),
            log_filter: "warn".to_string(),
            color: true,
        }
    }
}

impl BoardConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BoardConfig = toml::from_str(content)?;
        config.normalized()
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Explicit path first, then `TODOBOARD_CONFIG`, then defaults.
    /// `TODOBOARD_BASE_URL` overrides whatever base URL was found.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = env::var_os(CONFIG_PATH_ENV);
        let mut config = match path.or(env_path.as_deref().map(Path::new)) {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            config.base_url = base_url;
            config = config.normalized()?;
        }

        Ok(config)
    }

    /// The base URL with a trailing slash, so relative paths join beneath it.
    pub fn base_url(&self) -> Result<Url, ConfigError> {
        parse_base_url(&self.base_url)
    }

    fn normalized(mut self) -> Result<Self, ConfigError> {
        self.base_url = parse_base_url(&self.base_url)?.to_string();
        self.todos_path = self.todos_path.trim_matches('/').to_string();
        self.posts_path = self.posts_path.trim_matches('/').to_string();
        Ok(self)
    }
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason,
    };

    let mut url = Url::parse(value).map_err(|err| invalid(err.to_string()))?;
    if url.cannot_be_a_base() {
        return Err(invalid("cannot be used as a base".to_string()));
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
