//! Character List Screen
//!
//! Renders the header, the controls line, the visible part of the view, and a
//! footer that depends on the load mode.

use crate::domain::LoadMode;
use crate::i18n::{Locale, tr, tr_format};
use crate::states::{FetchCoordinator, LoadStatus};

use super::card::render_card;
use super::viewport::Viewport;

fn controls_line(coordinator: &FetchCoordinator, locale: Locale) -> String {
    let filter = coordinator.filter();
    let status = filter
        .status
        .map(|s| tr(locale, s.label_key()))
        .unwrap_or_else(|| tr(locale, "controls.all"));
    let species = filter
        .species
        .as_deref()
        .map(str::to_string)
        .unwrap_or_else(|| tr(locale, "controls.all"));
    let sort = coordinator
        .sort()
        .key()
        .map(|k| tr(locale, k.label_key()))
        .unwrap_or_else(|| tr(locale, "controls.none"));

    format!(
        "{}: {} | {}: {} | {}: {} | {}: {} | {}: {}",
        tr(locale, "controls.mode"),
        tr(locale, coordinator.mode().label_key()),
        tr(locale, "controls.filter_status"),
        status,
        tr(locale, "controls.filter_species"),
        species,
        tr(locale, "controls.sort_by"),
        sort,
        tr(locale, "controls.change_language"),
        locale.display_name(),
    )
}

fn pagination_footer(coordinator: &FetchCoordinator, locale: Locale) -> String {
    let control = |enabled: bool, label: String| {
        if enabled {
            format!("[{label}]")
        } else {
            format!(" {label} ")
        }
    };

    let previous = control(
        coordinator.can_request_previous(),
        format!("< {}", tr(locale, "pager.previous")),
    );
    let next = control(
        coordinator.can_request_next(),
        format!("{} >", tr(locale, "pager.next")),
    );
    let page = tr_format(
        locale,
        "pager.page",
        &[("page", coordinator.cursor().to_string().as_str())],
    );

    format!("{previous}  {page}  {next}")
}

fn infinite_footer(coordinator: &FetchCoordinator, locale: Locale) -> String {
    match coordinator.status() {
        LoadStatus::Fetching { .. } => tr(locale, "app.loading_more"),
        LoadStatus::Idle if !coordinator.has_next() => tr(locale, "pager.end"),
        _ => "  . . .".to_string(),
    }
}

/// Render the whole screen
pub fn render_screen(coordinator: &FetchCoordinator, viewport: &Viewport, locale: Locale) -> String {
    let mut lines = Vec::new();

    lines.push(format!("== {} ==", tr(locale, "app.title")));
    lines.push(controls_line(coordinator, locale));
    lines.push("-".repeat(72));

    let view = coordinator.view();
    let status = coordinator.status();

    if view.is_empty() {
        if coordinator.store().is_empty() && status.is_fetching() {
            lines.push(tr(locale, "app.loading"));
        } else {
            lines.push(tr(locale, "app.empty"));
        }
    } else {
        for index in viewport.visible_range(view.len()) {
            lines.push(render_card(index, view[index], locale));
        }
    }

    lines.push("-".repeat(72));

    if let Some(message) = status.error_message() {
        lines.push(tr_format(locale, "app.error", &[("message", message)]));
    }

    match coordinator.mode() {
        LoadMode::Pagination => lines.push(pagination_footer(coordinator, locale)),
        LoadMode::InfiniteScroll => lines.push(infinite_footer(coordinator, locale)),
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Character, FilterCriteria, PageResult, Status};
    use crate::states::FetchFailure;

    fn loaded(mode: LoadMode, names: &[&str], has_next: bool) -> FetchCoordinator {
        let mut coordinator = FetchCoordinator::new(mode);
        let ticket = coordinator.load_initial().expect("ticket");
        let records = names
            .iter()
            .enumerate()
            .map(|(i, n)| Character::new(i.to_string(), *n).with_status(Status::Alive))
            .collect();
        coordinator.complete(ticket, Ok(PageResult::new(records, has_next)));
        coordinator
    }

    #[test]
    fn initial_load_shows_loading() {
        let mut coordinator = FetchCoordinator::new(LoadMode::Pagination);
        coordinator.load_initial();
        let screen = render_screen(&coordinator, &Viewport::new(8), Locale::En);
        assert!(screen.contains("Loading..."));
    }

    #[test]
    fn pagination_footer_marks_enabled_controls() {
        let coordinator = loaded(LoadMode::Pagination, &["Rick", "Morty"], true);
        let screen = render_screen(&coordinator, &Viewport::new(8), Locale::En);
        assert!(screen.contains("Rick"));
        assert!(screen.contains(" < Previous "));
        assert!(screen.contains("[Next >]"));
        assert!(screen.contains("Page 1"));
    }

    #[test]
    fn only_visible_rows_are_rendered() {
        let coordinator = loaded(LoadMode::InfiniteScroll, &["Rick", "Morty", "Summer"], true);
        let screen = render_screen(&coordinator, &Viewport::new(2), Locale::En);
        assert!(screen.contains("Morty"));
        assert!(!screen.contains("Summer"));
    }

    #[test]
    fn exhausted_infinite_scroll_shows_end_marker() {
        let coordinator = loaded(LoadMode::InfiniteScroll, &["Rick"], false);
        let screen = render_screen(&coordinator, &Viewport::new(8), Locale::De);
        assert!(screen.contains("Ende der Liste"));
        assert!(screen.contains("Rick und Morty Charaktere"));
    }

    #[test]
    fn failed_mode_switch_renders_empty_error_view() {
        let mut coordinator = loaded(LoadMode::Pagination, &["Rick"], true);
        let ticket = coordinator
            .set_mode(LoadMode::InfiniteScroll)
            .expect("ticket");
        coordinator.complete(ticket, Err(FetchFailure::new("offline")));

        let screen = render_screen(&coordinator, &Viewport::new(8), Locale::En);
        assert!(screen.contains("No characters to show"));
        assert!(screen.contains("Error! offline"));
    }

    #[test]
    fn filtered_out_page_renders_empty_view() {
        let mut coordinator = loaded(LoadMode::Pagination, &["Rick"], true);
        coordinator.set_filter(FilterCriteria::any().with_status(Some(Status::Dead)));
        let screen = render_screen(&coordinator, &Viewport::new(8), Locale::En);
        assert!(screen.contains("No characters to show"));
        assert!(screen.contains("Filter by Status: Dead"));
    }
}
