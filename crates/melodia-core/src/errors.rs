// crates/melodia-core/src/errors.rs
use thiserror::Error;

use crate::domain::UserId;

/// Error del núcleo de Melodia.
///
/// Las operaciones sobre entidades sueltas (`Playlist`, `User`, `Song`…) no
/// fallan nunca; sólo el agregado [`StreamingApp`](crate::app::StreamingApp)
/// puede rechazar una operación.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
  #[error("user not found: {0}")]
  UserNotFound(UserId),

  #[error("user already registered: {0}")]
  DuplicateUser(UserId),
}
