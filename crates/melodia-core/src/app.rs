use tracing::{debug, info};

use crate::domain::{LikeState, Playlist, User, UserId};
use crate::errors::CoreError;

/// Raíz del catálogo: los usuarios registrados en la aplicación.
///
/// Se construye una vez con la lista inicial de usuarios. No hay
/// persistencia: todo vive en memoria mientras viva la instancia.
#[derive(Debug, Clone, Default)]
pub struct StreamingApp {
  users: Vec<User>,
}

impl StreamingApp {
  pub fn new(users: Vec<User>) -> Self {
    info!(users = users.len(), "streaming app initialised");
    Self { users }
  }

  pub fn users(&self) -> &[User] {
    &self.users
  }

  pub fn user(&self, id: &UserId) -> Option<&User> {
    self.users.iter().find(|u| u.id() == id)
  }

  /// Registra un usuario nuevo. Los ids son únicos dentro de la aplicación.
  pub fn register_user(&mut self, user: User) -> Result<(), CoreError> {
    if self.user(user.id()).is_some() {
      return Err(CoreError::DuplicateUser(user.id().clone()));
    }

    debug!(user = %user.id(), username = user.username(), "registered user");
    self.users.push(user);
    Ok(())
  }

  /// Alterna el "me gusta" de un usuario registrado sobre `playlist`.
  ///
  /// Equivale a [`User::like`] resolviendo antes el usuario por id.
  pub fn like(&mut self, user_id: &UserId, playlist: &mut Playlist) -> Result<LikeState, CoreError> {
    let user =
      self.users.iter_mut().find(|u| u.id() == user_id).ok_or_else(|| CoreError::UserNotFound(user_id.clone()))?;

    Ok(user.like(playlist))
  }
}
