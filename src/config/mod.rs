use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod directories;
pub use directories::Directories;

pub const ENDPOINT_ENV_VAR: &str = "USERSEARCH_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where the user list is fetched from
    pub endpoint: String,
    pub title: String,
    pub placeholder: String,
    /// Shown when no user matches the query
    pub empty_message: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "https://jsonplaceholder.typicode.com/users".into(),
            title: "Search".into(),
            placeholder: "Search User".into(),
            empty_message: "There is no user!".into(),
        }
    }
}

impl Config {
    pub fn write_default(path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, toml::to_string_pretty(&Self::default())?)?;
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)?;
        let this = toml::from_str(&s)?;
        Ok(this)
    }

    /// Load the file if it exists, otherwise use the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            log::warn!(
                "no configuration at {}, using the defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path).with_context(|| format!("cannot parse `{}`", path.display()))
    }

    /// Apply overrides from the environment
    pub fn with_env(mut self) -> Self {
        if let Ok(endpoint) = std::env::var(ENDPOINT_ENV_VAR) {
            log::debug!("using endpoint from `{}`: {}", ENDPOINT_ENV_VAR, endpoint);
            self.endpoint = endpoint;
        }
        self
    }
}

/// Load `.env` files, later paths override earlier ones
pub fn load_env_from(paths: &[PathBuf]) {
    simple_env_load::load_env_from(paths);
}
