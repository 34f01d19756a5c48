//! Filter/Sort Pipeline
//!
//! Derives the visible list from the accumulated records. Pure: the same
//! records and criteria always produce the same sequence.

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};
use std::cmp::Ordering;
use std::sync::OnceLock;

use crate::domain::{Character, FilterCriteria, SortCriteria};

/// Shared CLDR root collator; `None` if its data could not be loaded
static COLLATOR: OnceLock<Option<CollatorBorrowed<'static>>> = OnceLock::new();

fn collator() -> Option<&'static CollatorBorrowed<'static>> {
    COLLATOR
        .get_or_init(|| {
            Collator::try_new(Default::default(), CollatorOptions::default())
                .inspect_err(|e| {
                    tracing::warn!(error = %e, "Collation data unavailable, sorting by code points")
                })
                .ok()
        })
        .as_ref()
}

/// Collate two strings with the Unicode collation algorithm (accented letters
/// sort next to their base letters), then by code points so that the order
/// stays total.
pub fn collate(a: &str, b: &str) -> Ordering {
    collator()
        .map_or(Ordering::Equal, |collator| collator.compare(a, b))
        .then_with(|| a.cmp(b))
}

/// Apply `filter`, then `sort`, to `records`
///
/// Sorting is stable, so records comparing equal keep their accumulation
/// order. Without a sort key the filtered sequence is returned as is.
pub fn derive_view<'a>(
    records: &'a [Character],
    filter: &FilterCriteria,
    sort: &SortCriteria,
) -> Vec<&'a Character> {
    let mut view: Vec<&Character> = records.iter().filter(|c| filter.matches(c)).collect();

    if let Some(key) = sort.key() {
        view.sort_by(|a, b| {
            let ordering = collate(key.field(a), key.field(b));
            if key.is_descending() {
                ordering.reverse()
            } else {
                ordering
            }
        });
    }

    view
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SortKey, Status};

    fn names<'a>(view: &[&'a Character]) -> Vec<&'a str> {
        view.iter().map(|c| &*c.name).collect()
    }

    fn family() -> Vec<Character> {
        vec![
            Character::new("1", "Rick").with_origin("Earth (C-137)"),
            Character::new("2", "Morty").with_origin("unknown"),
            Character::new("3", "Beth").with_origin("Earth (Replacement Dimension)"),
        ]
    }

    #[test]
    fn status_filter_keeps_matching_records() {
        let records = vec![
            Character::new("1", "Rick").with_status(Status::Alive),
            Character::new("2", "Birdperson").with_status(Status::Dead),
        ];
        let filter = FilterCriteria::any().with_status(Some(Status::Alive));

        let view = derive_view(&records, &filter, &SortCriteria::none());
        let ids: Vec<&str> = view.iter().map(|c| &*c.id).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn sorts_by_name_both_directions() {
        let records = family();

        let asc = derive_view(&records, &FilterCriteria::any(), &SortCriteria::by(SortKey::NameAsc));
        assert_eq!(names(&asc), vec!["Beth", "Morty", "Rick"]);

        let desc =
            derive_view(&records, &FilterCriteria::any(), &SortCriteria::by(SortKey::NameDesc));
        assert_eq!(names(&desc), vec!["Rick", "Morty", "Beth"]);
    }

    #[test]
    fn sorts_by_origin() {
        let records = family();
        let view =
            derive_view(&records, &FilterCriteria::any(), &SortCriteria::by(SortKey::OriginAsc));
        assert_eq!(names(&view), vec!["Rick", "Beth", "Morty"]);
    }

    #[test]
    fn no_sort_key_keeps_accumulation_order() {
        let records = family();
        let view = derive_view(&records, &FilterCriteria::any(), &SortCriteria::none());
        assert_eq!(names(&view), vec!["Rick", "Morty", "Beth"]);
    }

    #[test]
    fn derivation_is_deterministic() {
        let mut records = family();
        records.push(Character::new("4", "rick"));
        records.push(Character::new("5", "Rick"));
        let sort = SortCriteria::by(SortKey::NameAsc);

        let first = derive_view(&records, &FilterCriteria::any(), &sort);
        let second = derive_view(&records, &FilterCriteria::any(), &sort);
        assert_eq!(first, second);
    }

    #[test]
    fn collation_orders_letters_before_case() {
        assert_eq!(collate("beth", "Morty"), Ordering::Less);
        assert_eq!(collate("rick", "Rick"), Ordering::Less);
        assert_eq!(collate("Rick", "Rick"), Ordering::Equal);
    }

    #[test]
    fn accented_names_sort_with_their_base_letter() {
        let records = vec![
            Character::new("1", "Zed"),
            Character::new("2", "Émile"),
            Character::new("3", "Adam"),
            Character::new("4", "Eve"),
        ];

        let asc = derive_view(&records, &FilterCriteria::any(), &SortCriteria::by(SortKey::NameAsc));
        assert_eq!(names(&asc), vec!["Adam", "Émile", "Eve", "Zed"]);

        let desc =
            derive_view(&records, &FilterCriteria::any(), &SortCriteria::by(SortKey::NameDesc));
        assert_eq!(names(&desc), vec!["Zed", "Eve", "Émile", "Adam"]);
    }

    #[test]
    fn accents_only_break_ties() {
        assert_eq!(collate("Emile", "Émile"), Ordering::Less);
        assert_eq!(collate("Émile", "Emile"), Ordering::Greater);
        assert_eq!(collate("Émile", "Eve"), Ordering::Less);
    }

    #[test]
    fn equal_keys_keep_accumulation_order() {
        let records = vec![
            Character::new("1", "Morty").with_origin("Earth"),
            Character::new("2", "Jerry").with_origin("Earth"),
        ];
        let view =
            derive_view(&records, &FilterCriteria::any(), &SortCriteria::by(SortKey::OriginDesc));
        assert_eq!(names(&view), vec!["Morty", "Jerry"]);
    }
}
