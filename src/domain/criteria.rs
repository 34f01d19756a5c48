//! Criteria - Filter and Sort Settings for the View

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;

use crate::error::Error;

use super::character::{Character, Status};

/// Exact-match constraints on the accumulated records
///
/// An unset field places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub status: Option<Status>,
    pub species: Option<Arc<str>>,
}

impl FilterCriteria {
    /// No constraints at all
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }

    pub fn with_species(mut self, species: Option<impl Into<Arc<str>>>) -> Self {
        self.species = species.map(Into::into);
        self
    }

    /// Whether every set criterion equals the corresponding field
    pub fn matches(&self, character: &Character) -> bool {
        self.status.is_none_or(|status| character.status == status)
            && self
                .species
                .as_deref()
                .is_none_or(|species| &*character.species == species)
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.species.is_none()
    }
}

/// Field and direction the view is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    NameAsc,
    NameDesc,
    OriginAsc,
    OriginDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::OriginAsc => "origin-asc",
            SortKey::OriginDesc => "origin-desc",
        }
    }

    /// Translation key for the option label
    pub fn label_key(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "sort.name_asc",
            SortKey::NameDesc => "sort.name_desc",
            SortKey::OriginAsc => "sort.origin_asc",
            SortKey::OriginDesc => "sort.origin_desc",
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortKey::NameDesc | SortKey::OriginDesc)
    }

    /// The field this key orders by
    pub fn field<'a>(&self, character: &'a Character) -> &'a str {
        match self {
            SortKey::NameAsc | SortKey::NameDesc => &character.name,
            SortKey::OriginAsc | SortKey::OriginDesc => &character.origin,
        }
    }
}

impl FromStr for SortKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name-asc" => Ok(SortKey::NameAsc),
            "name-desc" => Ok(SortKey::NameDesc),
            "origin-asc" => Ok(SortKey::OriginAsc),
            "origin-desc" => Ok(SortKey::OriginDesc),
            other => Err(Error::Invalid {
                message: format!("Unknown sort key: {other}"),
            }),
        }
    }
}

/// Ordering applied after filtering
///
/// Holds a single key: setting a new one replaces the previous one rather
/// than adding a secondary ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortCriteria {
    key: Option<SortKey>,
}

impl SortCriteria {
    /// Keep accumulation order
    pub fn none() -> Self {
        Self { key: None }
    }

    pub fn by(key: SortKey) -> Self {
        Self { key: Some(key) }
    }

    pub fn key(&self) -> Option<SortKey> {
        self.key
    }
}

impl From<Option<SortKey>> for SortCriteria {
    fn from(key: Option<SortKey>) -> Self {
        Self { key }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rick() -> Character {
        Character::new("1", "Rick Sanchez")
            .with_status(Status::Alive)
            .with_species("Human")
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(FilterCriteria::any().matches(&rick()));
        assert!(FilterCriteria::any().is_empty());
    }

    #[test]
    fn filter_is_a_conjunction() {
        let both = FilterCriteria::any()
            .with_status(Some(Status::Alive))
            .with_species(Some("Human"));
        assert!(both.matches(&rick()));

        let wrong_species = FilterCriteria::any()
            .with_status(Some(Status::Alive))
            .with_species(Some("Alien"));
        assert!(!wrong_species.matches(&rick()));
    }

    #[test]
    fn species_match_is_exact() {
        let filter = FilterCriteria::any().with_species(Some("human"));
        assert!(!filter.matches(&rick()));
    }

    #[test]
    fn sort_key_round_trips_through_its_name() {
        for key in [
            SortKey::NameAsc,
            SortKey::NameDesc,
            SortKey::OriginAsc,
            SortKey::OriginDesc,
        ] {
            assert_eq!(key.as_str().parse::<SortKey>().expect("parse"), key);
        }
        assert!("age-asc".parse::<SortKey>().is_err());
    }

    #[test]
    fn sort_criteria_from_optional_key() {
        assert_eq!(SortCriteria::from(None).key(), None);
        assert_eq!(
            SortCriteria::from(Some(SortKey::OriginDesc)),
            SortCriteria::by(SortKey::OriginDesc)
        );
    }
}
