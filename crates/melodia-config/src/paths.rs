use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable / tests).
pub const BASE_DIR_ENV: &str = "MELODIA_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Rutas que usa Melodia. El catálogo vive en memoria, así que sólo hace
/// falta el directorio de configuración.
#[derive(Debug, Clone)]
pub struct MelodiaPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl MelodiaPaths {
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      return Self::from_base_dir(env_base);
    }

    let proj_dirs = ProjectDirs::from("com", "melodia", "melodia").ok_or(ConfigError::Directories)?;
    let config_dir = proj_dirs.config_dir().to_path_buf();
    let paths = Self { base_dir: config_dir.clone(), config_dir };
    paths.create_dirs()?;

    Ok(paths)
  }

  /// Layout portable: `config/` bajo el directorio dado.
  pub fn from_base_dir(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let base_dir = base.into();
    let paths = Self { config_dir: base_dir.join("config"), base_dir };
    paths.create_dirs()?;

    Ok(paths)
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("melodia.toml")
  }

  fn create_dirs(&self) -> Result<(), ConfigError> {
    std::fs::create_dir_all(&self.config_dir)?;
    Ok(())
  }
}
