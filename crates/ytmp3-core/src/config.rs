//! Configuration management for ytmp3

use crate::error::ConfigError;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Path to yt-dlp binary (auto-detected if not set)
    pub yt_dlp: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file and environment
    ///
    /// Later sources win: defaults, `<config dir>/ytmp3/config.toml`, then
    /// `YTMP3_*` variables (`__` separates sections, e.g.
    /// `YTMP3_PATHS__YT_DLP`).
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Config::default()));

        if let Some(default_config) = Self::default_path() {
            if default_config.exists() {
                figment = figment.merge(Toml::file(&default_config));
            }
        }

        figment = figment.merge(Env::prefixed("YTMP3_").split("__"));

        figment.extract().map_err(|e| ConfigError::LoadError(e.to_string()))
    }

    /// Location of the per-user config file
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ytmp3/config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn isolate_home(jail: &mut Jail) {
        let dir = jail.directory().to_path_buf();
        jail.set_env("HOME", dir.display());
        jail.set_env("XDG_CONFIG_HOME", dir.join("xdg").display());
    }

    fn write_user_config(contents: &str) -> figment::Result<()> {
        let path = Config::default_path().ok_or("no config dir")?;
        let parent = path.parent().ok_or("config path has no parent")?;
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        std::fs::write(&path, contents).map_err(|e| e.to_string())?;
        Ok(())
    }

    #[test]
    fn test_defaults_leave_tool_unset() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            let config = Config::load().map_err(|e| e.to_string())?;
            assert!(config.paths.yt_dlp.is_none());
            Ok(())
        });
    }

    #[test]
    fn test_user_config_file_is_read() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            write_user_config(
                r#"
                [paths]
                yt_dlp = "/usr/local/bin/yt-dlp"
                "#,
            )?;
            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(
                config.paths.yt_dlp,
                Some(PathBuf::from("/usr/local/bin/yt-dlp"))
            );
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            write_user_config("[paths]\nyt_dlp = \"/from/file\"\n")?;
            jail.set_env("YTMP3_PATHS__YT_DLP", "/from/env");
            let config = Config::load().map_err(|e| e.to_string())?;
            assert_eq!(config.paths.yt_dlp, Some(PathBuf::from("/from/env")));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            write_user_config("[paths\nyt_dlp = ")?;
            assert!(Config::load().is_err());
            Ok(())
        });
    }
}
