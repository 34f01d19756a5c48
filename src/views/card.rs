//! Character Card
//!
//! Two-line text rendering of one character.

use crate::domain::Character;
use crate::i18n::{Locale, tr};

/// Render `character` as a numbered card
pub fn render_card(index: usize, character: &Character, locale: Locale) -> String {
    format!(
        "{:>4}. {}\n      {}: {} | {}: {} | {}: {} | {}: {}\n      {}: {}",
        index + 1,
        character.name,
        tr(locale, "card.status"),
        tr(locale, character.status.label_key()),
        tr(locale, "card.species"),
        character.species,
        tr(locale, "card.gender"),
        character.gender,
        tr(locale, "card.origin"),
        character.origin,
        tr(locale, "card.image"),
        character.image,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;

    fn rick() -> Character {
        Character::new("1", "Rick Sanchez")
            .with_status(Status::Alive)
            .with_species("Human")
            .with_gender("Male")
            .with_origin("Earth (C-137)")
            .with_image("https://rickandmortyapi.com/api/character/avatar/1.jpeg")
    }

    #[test]
    fn card_shows_every_field() {
        let card = render_card(0, &rick(), Locale::En);
        assert!(card.starts_with("   1. Rick Sanchez"));
        assert!(card.contains("Status: Alive"));
        assert!(card.contains("Species: Human"));
        assert!(card.contains("Gender: Male"));
        assert!(card.contains("Origin: Earth (C-137)"));
        assert!(card.contains("avatar/1.jpeg"));
    }

    #[test]
    fn card_labels_follow_the_locale() {
        let card = render_card(4, &rick(), Locale::De);
        assert!(card.starts_with("   5. Rick Sanchez"));
        assert!(card.contains("Status: Lebendig"));
        assert!(card.contains("Herkunft: Earth (C-137)"));
    }
}
