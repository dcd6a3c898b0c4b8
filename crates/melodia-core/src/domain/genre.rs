use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ids::GenreId;

/// Género musical del catálogo.
///
/// Es un *value object*: se crea una vez y no cambia. Dos géneros son iguales
/// cuando coinciden tanto el `id` como el nombre.
///
/// A diferencia de una taxonomía cerrada, el catálogo no impone una lista
/// fija de géneros; cada llamador define los suyos (`Rock`, `Jazz`, `City Pop`…).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
  id: GenreId,
  name: String,
}

impl Genre {
  pub fn new(id: impl Into<GenreId>, name: impl Into<String>) -> Self {
    Genre { id: id.into(), name: name.into() }
  }

  pub fn id(&self) -> &GenreId {
    &self.id
  }

  /// Nombre legible del género.
  pub fn name(&self) -> &str {
    &self.name
  }
}

impl fmt::Display for Genre {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.name)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::{assert_eq, assert_ne};

  #[test]
  fn genre_equality_uses_id_and_name() {
    let rock = Genre::new("1", "Rock");

    assert_eq!(rock, Genre::new("1", "Rock"));
    assert_ne!(rock, Genre::new("2", "Rock"));
    assert_ne!(rock, Genre::new("1", "Hard Rock"));
  }

  #[test]
  fn genre_displays_its_name() {
    assert_eq!(Genre::new("3", "Jazz").to_string(), "Jazz");
  }
}
