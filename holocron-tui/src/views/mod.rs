//! View rendering dispatch.

pub mod detail;
pub mod gallery;

use crate::state::App;
use crate::theme::{notification_color, page_load_color};
use holocron_client::PageLoad;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_view(f: &mut Frame<'_>, app: &App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.size());

    render_header(f, app, layout[0]);
    gallery::render(f, app, layout[1]);
    render_footer(f, app, layout[2]);

    // The detail overlay draws last so it sits on top of the list.
    if app.gallery.session().selected().is_some() {
        detail::render_overlay(f, app);
    }
}

fn render_header(f: &mut Frame<'_>, app: &App, area: Rect) {
    let pages = match app.gallery.total_pages() {
        Some(total) => format!("Page {}/{}", app.gallery.current_page(), total),
        None => format!("Page {}", app.gallery.current_page()),
    };
    let load = app.gallery.load();
    let status = match load {
        PageLoad::Idle | PageLoad::Ready(_) => "",
        PageLoad::Loading => " | loading…",
        PageLoad::Failed(_) => " | page failed",
    };
    let title = Line::from(vec![
        Span::styled(
            format!("HOLOCRON | {} | {}", app.config.catalog_base_url, pages),
            Style::default().fg(app.theme.primary),
        ),
        Span::styled(status, Style::default().fg(page_load_color(load, &app.theme))),
    ]);
    let block = Block::default().borders(Borders::ALL).title(title);
    f.render_widget(block, area);
}

fn render_footer(f: &mut Frame<'_>, app: &App, area: Rect) {
    let help = "j/k move • n/p page • Enter details • Esc close • / search • f filter • q quit";
    let (text, style) = if let Some(note) = app.notifications.latest() {
        (
            format!("{}: {}", note.level.label(), note.message),
            Style::default().fg(notification_color(note.level, &app.theme)),
        )
    } else {
        (help.to_string(), Style::default().fg(app.theme.text_dim))
    };
    let footer = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL))
        .style(style);
    f.render_widget(footer, area);
}
