use super::Config;
use anyhow::{Context, Result};
use directories::UserDirs;
use std::fs;
use std::path::Path;

impl Config {
    pub fn load_or_init() -> Result<Self> {
        let home = UserDirs::new()
            .map(|u| u.home_dir().to_path_buf())
            .context("Could not find home directory")?;
        Self::load_or_init_in(&home)
    }

    /// Reads `<home>/.wbg/config.toml`, writing defaults on first run.
    pub fn load_or_init_in(home: &Path) -> Result<Self> {
        let data_dir = home.join(".wbg");
        let config_path = data_dir.join("config.toml");

        if !data_dir.exists() {
            fs::create_dir_all(&data_dir).context("Failed to create .wbg directory")?;
        }

        let mut config = if config_path.exists() {
            Self::load_from(&config_path)?
        } else {
            let config = Self {
                config_path: config_path.clone(),
                ..Self::default()
            };
            config.save()?;
            config
        };
        config.data_dir = data_dir;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses an explicit config file. Its directory becomes the data dir.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let mut config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.config_path = path.to_path_buf();
        config.data_dir = path
            .parent()
            .map_or_else(|| Path::new(".").to_path_buf(), Path::to_path_buf);
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let toml_str = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(&self.config_path, toml_str).context("Failed to write config file")?;
        Ok(())
    }
}
