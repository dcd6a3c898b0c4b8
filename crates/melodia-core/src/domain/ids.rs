use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Declara un identificador de texto opaco.
///
/// Los identificadores del catálogo son cadenas: pueden venir del llamador
/// (`"1"`, `"rock"`, un slug…) o generarse con [`new`](GenreId::new), que usa
/// un UUID v4 en su forma textual.
macro_rules! string_id {
  ($(#[$meta:meta])* $name:ident) => {
    $(#[$meta])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $name(String);

    impl $name {
      /// Genera un nuevo identificador único (UUID v4).
      pub fn new() -> Self {
        $name(Uuid::new_v4().to_string())
      }

      /// Devuelve el identificador como `&str`.
      pub fn as_str(&self) -> &str {
        &self.0
      }
    }

    impl Default for $name {
      fn default() -> Self {
        Self::new()
      }
    }

    impl From<&str> for $name {
      fn from(s: &str) -> Self {
        $name(s.to_owned())
      }
    }

    impl From<String> for $name {
      fn from(s: String) -> Self {
        $name(s)
      }
    }

    impl From<$name> for String {
      fn from(id: $name) -> Self {
        id.0
      }
    }

    impl AsRef<str> for $name {
      fn as_ref(&self) -> &str {
        &self.0
      }
    }

    impl fmt::Display for $name {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }
  };
}

string_id! {
  /// Identificador de un [`Genre`](crate::domain::genre::Genre).
  GenreId
}

string_id! {
  /// Identificador de un artista, ya sea solista o grupo.
  ArtistId
}

string_id! {
  /// Identificador de una canción.
  ///
  /// Es la clave con la que [`Playlist::remove_by_id`](crate::domain::playlist::Playlist::remove_by_id)
  /// localiza las pistas a eliminar.
  SongId
}

string_id! {
  AlbumId
}

string_id! {
  /// Identificador de un usuario de la aplicación.
  UserId
}

string_id! {
  /// Identificador de una playlist.
  PlaylistId
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::{assert_eq, assert_ne};

  #[test]
  fn generated_ids_are_unique() {
    assert_ne!(SongId::new(), SongId::new());
  }

  #[test]
  fn ids_compare_by_text() {
    let id = UserId::from("42");
    assert_eq!(id, UserId::from(String::from("42")));
    assert_eq!(id.as_str(), "42");
    assert_eq!(id.to_string(), "42");
  }

  #[test]
  fn ids_serialize_as_plain_strings() {
    let json = serde_json::to_string(&PlaylistId::from("p-1")).unwrap();
    assert_eq!(json, "\"p-1\"");
  }
}
