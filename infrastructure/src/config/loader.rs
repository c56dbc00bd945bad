//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Application directory under the platform config dir
const APP_DIR: &str = "study-aid";

/// Project-level config file name
const PROJECT_FILE: &str = "study-aid.toml";

/// Prefix of environment overrides; nested keys use `__`
const ENV_PREFIX: &str = "STUDY_AID_";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] Box<figment::Error>),
}

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `STUDY_AID_SECTION__KEY=value`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./study-aid.toml`
    /// 4. Global: `~/.config/study-aid/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Self::project_config_path().as_deref(),
            config_path.map(PathBuf::as_path),
        )
    }

    /// Load only default configuration plus environment (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, ConfigError> {
        Self::load_from(None, None, None)
    }

    fn load_from(
        global: Option<&Path>,
        project: Option<&Path>,
        explicit: Option<&Path>,
    ) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        for path in [global, project].into_iter().flatten() {
            if path.exists() {
                figment = figment.merge(Toml::file(path));
            }
        }

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            figment = figment.merge(Toml::file(path));
        }

        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        figment.extract().map_err(|e| ConfigError::Invalid(Box::new(e)))
    }

    /// Load `.env` from the working directory or a parent into the process
    /// environment. Variables that are already set keep their value.
    ///
    /// Call before the runtime starts worker threads.
    pub fn load_dotenv() -> Option<PathBuf> {
        dotenvy::dotenv().ok()
    }

    /// Get the global config file path
    ///
    /// Returns `$XDG_CONFIG_HOME/study-aid/config.toml` (or the platform
    /// equivalent).
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(APP_DIR).join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        let path = PathBuf::from(PROJECT_FILE);
        path.exists().then_some(path)
    }

    /// Describe the config file locations being used (for `--show-config`)
    pub fn describe_sources(explicit: Option<&PathBuf>) -> Vec<String> {
        let mut lines = vec!["Configuration sources (in priority order):".to_string()];

        lines.push(format!("  [ENV  ] {}<SECTION>__<KEY>", ENV_PREFIX));

        if let Some(path) = explicit {
            let mark = if path.exists() { "FOUND" } else { "MISS " };
            lines.push(format!("  [{}] Explicit: {}", mark, path.display()));
        }

        match Self::project_config_path() {
            Some(path) => lines.push(format!("  [FOUND] Project: {}", path.display())),
            None => lines.push(format!("  [     ] Project: ./{}", PROJECT_FILE)),
        }

        if let Some(path) = Self::global_config_path() {
            let mark = if path.exists() { "FOUND" } else { "     " };
            lines.push(format!("  [{}] Global:  {}", mark, path.display()));
        }

        lines.push("  [     ] Default: built-in defaults".to_string());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(body.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_global_config_path_returns_some() {
        let path = ConfigLoader::global_config_path().unwrap();
        assert!(path.to_string_lossy().contains("study-aid"));
    }

    #[test]
    fn test_later_files_override_earlier_ones() {
        // Jail serializes tests that touch the environment
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "global.toml",
                "[server]\nbind = \"0.0.0.0:1111\"\n[invocation]\nmax_attempts = 7\n",
            )?;
            jail.create_file("project.toml", "[server]\nbind = \"0.0.0.0:2222\"\n")?;
            jail.create_file("explicit.toml", "[models]\nfamily = \"gemma\"\n")?;

            let config = ConfigLoader::load_from(
                Some(Path::new("global.toml")),
                Some(Path::new("project.toml")),
                Some(Path::new("explicit.toml")),
            )
            .unwrap();

            assert_eq!(config.server.bind, "0.0.0.0:2222");
            assert_eq!(config.invocation.max_attempts, 7);
            assert_eq!(config.models.family, "gemma");
            // Untouched sections keep their defaults
            assert_eq!(config.provider.api_key_env, "GEMINI_API_KEY");
            Ok(())
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = ConfigLoader::load_from(None, None, Some(&missing)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn test_invalid_value_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let bad = write_toml(&dir, "bad.toml", "[invocation]\nmax_attempts = \"many\"\n");
        let err = ConfigLoader::load_from(None, None, Some(&bad)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_environment_overrides_files() {
        figment::Jail::expect_with(|jail| {
            jail.create_file("explicit.toml", "[server]\nbind = \"0.0.0.0:2222\"\n")?;
            jail.set_env("STUDY_AID_SERVER__BIND", "0.0.0.0:3333");
            jail.set_env("STUDY_AID_INVOCATION__CONTENT_WINDOW_CHARS", "500");

            let config =
                ConfigLoader::load_from(None, None, Some(Path::new("explicit.toml"))).unwrap();
            assert_eq!(config.server.bind, "0.0.0.0:3333");
            assert_eq!(config.invocation.content_window_chars, 500);
            Ok(())
        });
    }

    #[test]
    fn test_dotenv_fills_missing_variables_only() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                ".env",
                "STUDY_AID_DOTENV_FRESH=from-file\nSTUDY_AID_SERVER__BIND=0.0.0.0:4444\n",
            )?;
            jail.set_env("STUDY_AID_SERVER__BIND", "0.0.0.0:5555");

            let path = ConfigLoader::load_dotenv().unwrap();
            assert!(path.ends_with(".env"));
            assert_eq!(
                std::env::var("STUDY_AID_DOTENV_FRESH").as_deref(),
                Ok("from-file")
            );

            let config = ConfigLoader::load_defaults().unwrap();
            assert_eq!(config.server.bind, "0.0.0.0:5555");

            // Jail only restores variables it set itself
            unsafe { std::env::remove_var("STUDY_AID_DOTENV_FRESH") };
            Ok(())
        });
    }
}
