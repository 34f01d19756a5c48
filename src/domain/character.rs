//! Character - Catalogue Record

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Life status of a character
///
/// The catalogue only knows "Alive" and "Dead"; everything else it reports,
/// including its own literal "unknown", collapses into `Unknown`. Matching is
/// exact, so a stray spelling such as "alive" is filtered as `Unknown` too.
/// The status filter offers exactly these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Alive,
    Dead,
    Unknown,
}

impl Status {
    /// Wire value as the endpoint spells it
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Alive => "Alive",
            Status::Dead => "Dead",
            Status::Unknown => "unknown",
        }
    }

    /// Translation key for the status label
    pub fn label_key(&self) -> &'static str {
        match self {
            Status::Alive => "status.alive",
            Status::Dead => "status.dead",
            Status::Unknown => "status.unknown",
        }
    }
}

impl From<&str> for Status {
    fn from(value: &str) -> Self {
        match value {
            "Alive" => Status::Alive,
            "Dead" => Status::Dead,
            _ => Status::Unknown,
        }
    }
}

impl From<String> for Status {
    fn from(value: String) -> Self {
        Status::from(value.as_str())
    }
}

impl From<Status> for String {
    fn from(value: Status) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single character as fetched from the catalogue
///
/// Records are immutable once fetched and shared between the store and every
/// derived view, so string fields are reference counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    /// Catalogue identifier (unique within one page, not across pages)
    pub id: Arc<str>,
    pub name: Arc<str>,
    pub status: Status,
    pub species: Arc<str>,
    pub gender: Arc<str>,
    /// Name of the origin location
    pub origin: Arc<str>,
    /// Avatar image URL
    pub image: Arc<str>,
}

impl Character {
    /// Create a character with the given id and name; other fields are blank
    pub fn new(id: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status: Status::Unknown,
            species: Arc::from(""),
            gender: Arc::from(""),
            origin: Arc::from(""),
            image: Arc::from(""),
        }
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_species(mut self, species: impl Into<Arc<str>>) -> Self {
        self.species = species.into();
        self
    }

    pub fn with_gender(mut self, gender: impl Into<Arc<str>>) -> Self {
        self.gender = gender.into();
        self
    }

    pub fn with_origin(mut self, origin: impl Into<Arc<str>>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<Arc<str>>) -> Self {
        self.image = image.into();
        self
    }
}
