//! Search input and filter mode bar.

use holocron_client::FilterMode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct SearchBar<'a> {
    pub text: &'a str,
    pub focused: bool,
    pub active_mode: FilterMode,
    pub border_style: Style,
    pub text_style: Style,
    pub dim_style: Style,
    pub active_style: Style,
}

impl SearchBar<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans = vec![
            Span::styled("/ ", self.dim_style),
            Span::styled(self.text.to_string(), self.text_style),
        ];
        if self.focused {
            spans.push(Span::styled("█", self.text_style.add_modifier(Modifier::SLOW_BLINK)));
        }
        spans.push(Span::raw("    "));
        for mode in FilterMode::all() {
            let style = if *mode == self.active_mode {
                self.active_style
            } else {
                self.dim_style
            };
            spans.push(Span::styled(format!(" {} ", mode.label()), style));
        }

        let title = if self.focused {
            "Search (Esc to leave)"
        } else {
            "Search [/]  Filter [f]"
        };
        let paragraph = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(self.border_style),
        );
        f.render_widget(paragraph, area);
    }
}
