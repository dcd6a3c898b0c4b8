use serde::{Deserialize, Serialize};

use crate::CONFIG_BACKEND;
use crate::backend::ConfigBackend;
use crate::paths::ConfigError;

const SECTION: &str = "logging";

/// Sección `[logging]` de `melodia.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
  /// Directiva de filtro al estilo `RUST_LOG` (`"info,melodia_core=debug"`).
  ///
  /// Si la variable de entorno `RUST_LOG` está definida, tiene prioridad.
  #[serde(default = "default_filter")]
  pub filter: String,

  /// Colores ANSI en la salida.
  #[serde(default = "default_ansi")]
  pub ansi: bool,
}

fn default_filter() -> String {
  "info,melodia_core=debug".into()
}

fn default_ansi() -> bool {
  true
}

impl Default for LoggingConfig {
  fn default() -> Self {
    LoggingConfig { filter: default_filter(), ansi: default_ansi() }
  }
}

impl LoggingConfig {
  /// Carga la sección (o los valores por defecto) y la vuelve a escribir,
  /// para que el usuario encuentre todas las claves en su `melodia.toml`.
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(&*CONFIG_BACKEND)
  }

  /// Variante para tests: inyectar un backend distinto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg: Self = backend.load_section_with_default(SECTION)?;
    backend.save_section(SECTION, &cfg)?;
    Ok(cfg)
  }

  pub fn save(&self) -> Result<(), ConfigError> {
    self.save_to(&*CONFIG_BACKEND)
  }

  pub fn save_to<B: ConfigBackend>(&self, backend: &B) -> Result<(), ConfigError> {
    backend.save_section(SECTION, self)
  }
}
