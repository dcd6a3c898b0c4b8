use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::ids::ArtistId;

/// Datos comunes a cualquier artista, solista o grupo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistProfile {
  /// Identificador único del artista.
  pub id: ArtistId,

  /// Año de debut.
  pub debut_year: i32,

  /// Nombre artístico (el que se muestra al usuario).
  pub name: String,

  /// País de origen, tal como lo informa el llamador (`"USA"`, `"UK"`…).
  pub country: String,
}

impl ArtistProfile {
  pub fn new(id: impl Into<ArtistId>, debut_year: i32, name: impl Into<String>, country: impl Into<String>) -> Self {
    ArtistProfile { id: id.into(), debut_year, name: name.into(), country: country.into() }
  }
}

/// Artista individual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoloArtist {
  profile: ArtistProfile,
  first_name: String,
  last_name: String,
  birth_date: NaiveDate,
}

impl SoloArtist {
  pub fn new(
    profile: ArtistProfile,
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    birth_date: NaiveDate,
  ) -> Self {
    SoloArtist { profile, first_name: first_name.into(), last_name: last_name.into(), birth_date }
  }

  pub fn profile(&self) -> &ArtistProfile {
    &self.profile
  }

  pub fn first_name(&self) -> &str {
    &self.first_name
  }

  pub fn last_name(&self) -> &str {
    &self.last_name
  }

  pub fn birth_date(&self) -> NaiveDate {
    self.birth_date
  }

  /// Nombre civil completo (`"Nombre Apellido"`), independiente del nombre artístico.
  pub fn full_name(&self) -> String {
    format!("{} {}", self.first_name, self.last_name)
  }
}

/// Grupo o banda formado por varios solistas.
///
/// La lista de miembros puede estar vacía (p. ej. proyectos anónimos).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupArtist {
  profile: ArtistProfile,
  members: Vec<SoloArtist>,
}

impl GroupArtist {
  pub fn new(profile: ArtistProfile, members: Vec<SoloArtist>) -> Self {
    GroupArtist { profile, members }
  }

  pub fn profile(&self) -> &ArtistProfile {
    &self.profile
  }

  pub fn members(&self) -> &[SoloArtist] {
    &self.members
  }
}

/// Artista del catálogo.
///
/// Es un tipo cerrado: un artista es solista o grupo, y el resto del dominio
/// hace `match` exhaustivo sobre él. Al serializar, la variante queda
/// explícita en el campo `kind` (`"solo"` / `"group"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Artist {
  Solo(SoloArtist),
  Group(GroupArtist),
}

impl Artist {
  pub fn profile(&self) -> &ArtistProfile {
    match self {
      Artist::Solo(solo) => solo.profile(),
      Artist::Group(group) => group.profile(),
    }
  }

  pub fn id(&self) -> &ArtistId {
    &self.profile().id
  }

  pub fn name(&self) -> &str {
    &self.profile().name
  }

  pub fn country(&self) -> &str {
    &self.profile().country
  }

  pub fn debut_year(&self) -> i32 {
    self.profile().debut_year
  }

  /// Miembros del artista. Un solista no tiene miembros.
  pub fn members(&self) -> &[SoloArtist] {
    match self {
      Artist::Solo(_) => &[],
      Artist::Group(group) => group.members(),
    }
  }
}

impl From<SoloArtist> for Artist {
  fn from(solo: SoloArtist) -> Self {
    Artist::Solo(solo)
  }
}

impl From<GroupArtist> for Artist {
  fn from(group: GroupArtist) -> Self {
    Artist::Group(group)
  }
}
