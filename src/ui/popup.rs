use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{Palette, ACCENT};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

/// Bordered dialog centered over an area, sized to its content.
pub struct PopupDialog<'a> {
    title: String,
    lines: Vec<Line<'a>>,
    min_width: u16,
    palette: Palette,
}

impl<'a> PopupDialog<'a> {
    pub fn new(title: impl Into<String>, lines: Vec<Line<'a>>, palette: Palette) -> Self {
        Self {
            title: title.into(),
            lines,
            min_width: 0,
            palette,
        }
    }

    pub fn min_width(mut self, width: u16) -> Self {
        self.min_width = width;
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let content_width = self.lines.iter().map(Line::width).max().unwrap_or(0) as u16;
        let width = content_width
            .saturating_add(4)
            .max(self.min_width)
            .max(self.title.chars().count() as u16 + 4);
        let height = (self.lines.len() as u16).saturating_add(2);
        let rect = centered_rect_by_size(area, width, height);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .title(Span::styled(format!(" {} ", self.title), Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.palette.popup_border));
        let widget = Paragraph::new(self.lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(widget, rect);
    }
}
