//! Gallery screen: search bar and character roster.

use crate::state::{App, InputMode};
use crate::widgets::{Roster, RosterEntry, RosterStyle, SearchBar};
use holocron_client::PageLoad;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    Frame,
};

pub fn render(f: &mut Frame<'_>, app: &App, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    render_search_bar(f, app, layout[0]);
    render_roster(f, app, layout[1]);
}

fn render_search_bar(f: &mut Frame<'_>, app: &App, area: Rect) {
    let focused = app.input_mode == InputMode::Search;
    let bar = SearchBar {
        text: &app.gallery.filters().search_text,
        focused,
        active_mode: app.gallery.filters().filter_mode,
        border_style: Style::default().fg(if focused {
            app.theme.border_focus
        } else {
            app.theme.border
        }),
        text_style: Style::default().fg(app.theme.text),
        dim_style: Style::default().fg(app.theme.text_dim),
        active_style: Style::default()
            .fg(app.theme.secondary)
            .add_modifier(Modifier::BOLD),
    };
    bar.render(f, area);
}

fn render_roster(f: &mut Frame<'_>, app: &App, area: Rect) {
    let visible = app.gallery.visible();
    let entries: Vec<RosterEntry> = visible
        .iter()
        .map(|character| RosterEntry {
            label: character.name.clone(),
            meta: format!(
                "films {} · species {}",
                character.film_count,
                character.species.len()
            ),
        })
        .collect();

    let placeholder = match app.gallery.load() {
        PageLoad::Idle | PageLoad::Loading => Some("Loading characters…".to_string()),
        PageLoad::Failed(error) => Some(format!("Could not load this page: {}", error)),
        PageLoad::Ready(_) if entries.is_empty() => {
            Some("No characters match the current search and filter".to_string())
        }
        PageLoad::Ready(_) => None,
    };

    let roster = Roster {
        title: format!("Characters ({})", entries.len()),
        entries: &entries,
        selected: (!entries.is_empty()).then_some(app.cursor),
        placeholder,
        style: RosterStyle {
            normal: Style::default().fg(app.theme.text),
            meta: Style::default().fg(app.theme.text_dim),
            selected: Style::default()
                .fg(app.theme.primary)
                .add_modifier(Modifier::BOLD),
            placeholder: Style::default().fg(app.theme.text_dim),
        },
    };
    roster.render(f, area);
}
