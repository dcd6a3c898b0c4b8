use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::ids::{PlaylistId, UserId};
use crate::domain::playlist::Playlist;

/// Estado de un par (usuario, playlist) respecto al "me gusta".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LikeState {
  Liked,
  NotLiked,
}

/// Identidad de un usuario tal como la guarda una playlist en `liked_by`.
///
/// Recoge los mismos campos que la igualdad de [`User`] (`id` y `username`),
/// de modo que dos usuarios distintos con el mismo id no se confunden.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRef {
  pub id: UserId,
  pub username: String,
}

impl From<&User> for UserRef {
  fn from(user: &User) -> Self {
    UserRef { id: user.id.clone(), username: user.username.clone() }
  }
}

/// Usuario de la aplicación.
///
/// Dos usuarios son iguales si coinciden `id` y `username`; la lista de
/// playlists que le gustan no interviene en la comparación.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  id: UserId,
  username: String,
  liked_playlists: Vec<PlaylistId>,
}

impl User {
  pub fn new(id: impl Into<UserId>, username: impl Into<String>, liked_playlists: Vec<PlaylistId>) -> Self {
    User { id: id.into(), username: username.into(), liked_playlists }
  }

  pub fn id(&self) -> &UserId {
    &self.id
  }

  pub fn username(&self) -> &str {
    &self.username
  }

  /// Playlists que le gustan al usuario, según las ha ido marcando con [`User::like`].
  pub fn liked_playlists(&self) -> &[PlaylistId] {
    &self.liked_playlists
  }

  /// Alterna el "me gusta" del usuario sobre la playlist.
  ///
  /// Si el usuario no estaba en `liked_by` se añade y el resultado es
  /// [`LikeState::Liked`]; si ya estaba se quita y el resultado es
  /// [`LikeState::NotLiked`]. Llamarlo dos veces seguidas deja la playlist
  /// como estaba.
  pub fn like(&mut self, playlist: &mut Playlist) -> LikeState {
    let state = playlist.toggle_like(&UserRef::from(&*self));

    match state {
      LikeState::Liked => {
        if !self.liked_playlists.contains(playlist.id()) {
          self.liked_playlists.push(playlist.id().clone());
        }
      }
      LikeState::NotLiked => self.liked_playlists.retain(|p| p != playlist.id()),
    }

    debug!(user = %self.id, playlist = %playlist.id(), ?state, likes = playlist.total_likes(), "toggled like");
    state
  }

  /// Quita el "me gusta" sin alternar: si no lo tenía, no hace nada.
  ///
  /// Devuelve `true` si el usuario estaba entre los que les gustaba la playlist.
  pub fn unlike(&mut self, playlist: &mut Playlist) -> bool {
    let was_liked = playlist.remove_like(&UserRef::from(&*self));
    self.liked_playlists.retain(|p| p != playlist.id());

    debug!(user = %self.id, playlist = %playlist.id(), was_liked, "removed like");
    was_liked
  }
}

impl PartialEq for User {
  fn eq(&self, other: &Self) -> bool {
    self.id == other.id && self.username == other.username
  }
}

impl Eq for User {}

impl Hash for User {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.id.hash(state);
    self.username.hash(state);
  }
}
