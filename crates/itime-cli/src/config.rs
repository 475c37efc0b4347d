//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Application configuration.
///
/// The pause threshold is intentionally absent: it is a fixed heuristic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Default report format.
    pub format: OutputFormat,

    /// Hide files with zero interaction time from reports.
    pub hide_zero: bool,
}

impl Config {
    /// Loads configuration from default locations, then an optional specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (ITIME_*)
        figment = figment.merge(Env::prefixed("ITIME_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for itime.
///
/// On Linux: `~/.config/itime`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("itime"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    /// Points the platform config dir inside the jail.
    fn isolate_home(jail: &mut Jail) {
        let home = jail.directory().to_path_buf();
        jail.set_env("HOME", home.display());
        jail.set_env("XDG_CONFIG_HOME", home.join(".config").display());
    }

    #[test]
    fn test_dirs_config_path_ends_with_itime() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "itime");
    }

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            let config = Config::load_from(None)?;
            assert_eq!(config, Config::default());
            assert_eq!(config.format, OutputFormat::Text);
            assert!(!config.hide_zero);
            Ok(())
        });
    }

    #[test]
    fn test_default_location_is_read() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            let config_dir = dirs_config_path().unwrap();
            std::fs::create_dir_all(&config_dir).unwrap();
            std::fs::write(config_dir.join("config.toml"), "hide_zero = true\n").unwrap();

            let config = Config::load_from(None)?;

            assert!(config.hide_zero);
            assert_eq!(config.format, OutputFormat::Text);
            Ok(())
        });
    }

    #[test]
    fn test_explicit_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            jail.create_file("itime.toml", "format = \"json\"\nhide_zero = true\n")?;

            let config = Config::load_from(Some(Path::new("itime.toml")))?;

            assert_eq!(config.format, OutputFormat::Json);
            assert!(config.hide_zero);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            jail.create_file("itime.toml", "format = \"json\"\n")?;
            jail.set_env("ITIME_FORMAT", "text");

            let config = Config::load_from(Some(Path::new("itime.toml")))?;

            assert_eq!(config.format, OutputFormat::Text);
            Ok(())
        });
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        Jail::expect_with(|jail| {
            isolate_home(jail);
            jail.set_env("ITIME_FORMAT", "yaml");

            assert!(Config::load_from(None).is_err());
            Ok(())
        });
    }
}
