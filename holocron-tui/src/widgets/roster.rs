//! Character roster list widget.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone)]
pub struct RosterEntry {
    pub label: String,
    pub meta: String,
}

#[derive(Debug, Clone)]
pub struct RosterStyle {
    pub normal: Style,
    pub meta: Style,
    pub selected: Style,
    pub placeholder: Style,
}

pub struct Roster<'a> {
    pub title: String,
    pub entries: &'a [RosterEntry],
    pub selected: Option<usize>,
    /// Shown instead of the list while there is nothing to list (loading,
    /// failed, or filtered down to nothing).
    pub placeholder: Option<String>,
    pub style: RosterStyle,
}

impl Roster<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let block = Block::default()
            .title(self.title.as_str())
            .borders(Borders::ALL);

        if let Some(message) = &self.placeholder {
            let paragraph = Paragraph::new(message.as_str())
                .style(self.style.placeholder)
                .block(block);
            f.render_widget(paragraph, area);
            return;
        }

        let rows: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(entry.label.clone(), self.style.normal),
                    Span::raw("  "),
                    Span::styled(entry.meta.clone(), self.style.meta),
                ]))
            })
            .collect();

        let list = List::new(rows)
            .block(block)
            .highlight_style(self.style.selected)
            .highlight_symbol("> ");

        let mut state = ListState::default();
        state.select(self.selected);
        f.render_stateful_widget(list, area, &mut state);
    }
}
