use crate::error::{BookshelfError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BookshelfConfig {
    #[serde(default)]
    pub server: ServerSettings,

    /// Optional path to a YAML seed file; the embedded fixture catalog is
    /// used when absent.
    #[serde(default)]
    pub seed: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl BookshelfConfig {
    /// Load configuration by searching upward for a `.bookshelf.yml`.
    ///
    /// Returns the config together with the directory it was found in, so
    /// relative paths inside the file resolve against the file, not the
    /// process working directory. A config file is optional; when none is
    /// found the defaults apply and `start_path` doubles as the root.
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(config_path) => {
                let config = Self::load_file(&config_path)?;
                let root = config_path
                    .parent()
                    .ok_or_else(|| {
                        BookshelfError::Config("Config file has no parent directory".to_string())
                    })?
                    .to_path_buf();
                Ok((config, root))
            }
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    /// Load configuration from an explicit file path.
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: BookshelfConfig = serde_yaml::from_str(&content).map_err(|e| {
            BookshelfError::Config(format!("Invalid config file {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(".bookshelf.yml");
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Seed file location, with relative paths anchored at `root`.
    pub fn seed_path(&self, root: &Path) -> Option<PathBuf> {
        self.seed.as_ref().map(|seed| root.join(seed))
    }
}
