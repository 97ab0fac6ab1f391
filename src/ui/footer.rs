use crate::catalog::PageKind;
use crate::ui::theme::{Palette, STATUS_OK};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    page: PageKind,
    notice: Option<&'a str>,
}

impl<'a> Footer<'a> {
    pub fn new(page: PageKind, notice: Option<&'a str>) -> Self {
        Self { page, notice }
    }

    pub fn hints(&self) -> &'static str {
        match self.page {
            PageKind::Home => " ←/→: Slides │ ↑/↓: Browse │ Tab: Dashboard │ t: Theme │ q: Quit",
            PageKind::Dashboard => {
                " ↑/↓: Select │ a: Add │ e: Edit │ d: Delete │ Tab: Home │ t: Theme │ q: Quit"
            }
        }
    }

    pub fn widget(&self, area: Rect, palette: Palette) -> Paragraph<'static> {
        let hints = self.hints();
        let notice = self.notice.map(|n| format!("{n}  ")).unwrap_or_default();
        let version = format!("v{} ", VERSION);

        // Char count, not byte count (box-drawing glyphs).
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints.chars().count())
            .saturating_sub(notice.chars().count())
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(palette.text).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(notice, Style::default().fg(STATUS_OK)),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(palette.border)),
            )
    }
}
