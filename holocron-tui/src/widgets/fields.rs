//! Field/value panel for the detail overlay.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// A labelled block of field/value lines. `Section` rows render as
/// subheadings, `Note` rows as a single styled line without a label.
pub enum FieldRow {
    Pair(&'static str, String),
    Section(&'static str),
    Note(String, Style),
}

pub struct FieldList<'a> {
    pub title: &'a str,
    pub rows: Vec<FieldRow>,
    pub label_style: Style,
    pub value_style: Style,
    pub section_style: Style,
    pub border_style: Style,
}

impl FieldList<'_> {
    pub fn render(&self, f: &mut Frame<'_>, area: Rect) {
        let lines: Vec<Line> = self
            .rows
            .iter()
            .map(|row| match row {
                FieldRow::Pair(label, value) => Line::from(vec![
                    Span::styled(format!("{}: ", label), self.label_style),
                    Span::styled(value.clone(), self.value_style),
                ]),
                FieldRow::Section(heading) => {
                    Line::from(Span::styled(heading.to_string(), self.section_style))
                }
                FieldRow::Note(message, style) => {
                    Line::from(Span::styled(message.clone(), *style))
                }
            })
            .collect();

        let widget = Paragraph::new(Text::from(lines))
            .block(
                Block::default()
                    .title(self.title)
                    .borders(Borders::ALL)
                    .border_style(self.border_style),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(widget, area);
    }
}
