use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub advice: AdviceSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    /// Random line from a fixed pool.
    #[default]
    Pool,
    /// Line chosen from protein progress after the new record.
    Progress,
}

impl std::fmt::Display for AdviceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pool => write!(f, "pool"),
            Self::Progress => write!(f, "progress"),
        }
    }
}

impl std::str::FromStr for AdviceKind {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s {
            "pool" => Ok(Self::Pool),
            "progress" => Ok(Self::Progress),
            _ => anyhow::bail!("advice.source must be 'pool' or 'progress'"),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AdviceSettings {
    #[serde(default)]
    pub source: AdviceKind,
    /// Replaces the built-in pool when non-empty.
    #[serde(default)]
    pub messages: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LogSettings {
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl Config {
    /// Load config from the standard path, or return defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            Ok(toml::from_str(&contents)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to the standard path.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(parent, std::fs::Permissions::from_mode(0o700))?;
            }
        }
        let contents = toml::to_string_pretty(self)?;

        #[cfg(unix)]
        {
            use std::fs::{self, OpenOptions};
            use std::io::Write;
            use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

            let mut options = OpenOptions::new();
            options.write(true).create(true).truncate(true).mode(0o600);
            let mut file = options.open(&path)?;
            file.write_all(contents.as_bytes())?;

            // mode() only applies on create
            let mut perms = file.metadata()?.permissions();
            if perms.mode() & 0o777 != 0o600 {
                perms.set_mode(0o600);
                fs::set_permissions(&path, perms)?;
            }
        }
        #[cfg(not(unix))]
        {
            std::fs::write(&path, contents)?;
        }

        Ok(())
    }

    /// Apply a `config set` edit.
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "advice.source" => self.advice.source = value.parse()?,
            "advice.messages" => {
                self.advice.messages = value
                    .split('|')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
            }
            "log.level" => self.log.level = value.to_string(),
            _ => anyhow::bail!("unknown config key: {}", key),
        }
        Ok(())
    }

    pub fn data_dir() -> anyhow::Result<PathBuf> {
        if let Ok(home) = std::env::var("FITFOCUS_HOME") {
            return Ok(PathBuf::from(home));
        }
        dirs::home_dir()
            .map(|h| h.join(".fitfocus"))
            .ok_or_else(|| anyhow::anyhow!("cannot resolve home directory; set FITFOCUS_HOME"))
    }

    pub fn path() -> anyhow::Result<PathBuf> {
        Ok(Self::data_dir()?.join("config.toml"))
    }

    pub fn db_path() -> anyhow::Result<PathBuf> {
        Ok(Self::data_dir()?.join("data.db"))
    }
}
