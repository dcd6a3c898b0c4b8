mod backend;
mod io;
mod model;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use model::LoggingConfig;
pub use paths::{ConfigError, MelodiaPaths};

use once_cell::sync::Lazy;

// Singleton de paths (MELODIA_BASE_DIR / system)
pub static PATHS: Lazy<MelodiaPaths> = Lazy::new(|| MelodiaPaths::detect().expect("failed to init MelodiaPaths"));

// Singleton del backend de config
pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> = Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
