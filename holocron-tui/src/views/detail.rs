//! Character detail overlay with the resolved homeworld.

use crate::state::App;
use crate::theme::homeworld_state_color;
use crate::widgets::{FieldList, FieldRow};
use holocron_client::HomeworldState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::Clear,
    Frame,
};

pub fn render_overlay(f: &mut Frame<'_>, app: &App) {
    let Some(character) = app.gallery.session().selected() else {
        return;
    };

    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area);

    let mut rows = vec![
        FieldRow::Pair("Height", format!("{} meters", character.height)),
        FieldRow::Pair("Mass", format!("{} kg", character.mass)),
        FieldRow::Pair(
            "Added to catalog",
            character.created.format("%d/%m/%Y").to_string(),
        ),
        FieldRow::Pair("Films", character.film_count.to_string()),
        FieldRow::Pair("Birth year", character.birth_year.clone()),
        FieldRow::Section("Homeworld"),
    ];

    let state = app.gallery.homeworld();
    let note_style = Style::default().fg(homeworld_state_color(state, &app.theme));
    match state {
        HomeworldState::Resolved(planet) => {
            rows.push(FieldRow::Pair("Name", planet.name.clone()));
            rows.push(FieldRow::Pair("Terrain", planet.terrain.clone()));
            rows.push(FieldRow::Pair("Climate", planet.climate.clone()));
            rows.push(FieldRow::Pair("Residents", planet.resident_count.to_string()));
        }
        HomeworldState::Resolving => {
            rows.push(FieldRow::Note(
                "Loading homeworld information…".to_string(),
                note_style,
            ));
        }
        HomeworldState::Missing => {
            rows.push(FieldRow::Note(
                "No homeworld on record".to_string(),
                note_style,
            ));
        }
        HomeworldState::Failed => {
            rows.push(FieldRow::Note(
                "Homeworld information unavailable".to_string(),
                note_style,
            ));
        }
        HomeworldState::Idle => {}
    }

    let panel = FieldList {
        title: &character.name,
        rows,
        label_style: Style::default()
            .fg(app.theme.secondary)
            .add_modifier(Modifier::BOLD),
        value_style: Style::default().fg(app.theme.text),
        section_style: Style::default()
            .fg(app.theme.primary)
            .add_modifier(Modifier::BOLD),
        border_style: Style::default().fg(app.theme.border_focus),
    };
    panel.render(f, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
