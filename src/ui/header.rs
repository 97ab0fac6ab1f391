use crate::catalog::PageKind;
use crate::ui::theme::{ThemeMode, ACCENT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Brand, page tabs and theme toggle.
pub struct Navbar {
    page: PageKind,
    theme: ThemeMode,
}

impl Navbar {
    pub fn new(page: PageKind, theme: ThemeMode) -> Self {
        Self { page, theme }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let palette = self.theme.palette();
        let brand_style = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
        let separator_style = Style::default().fg(palette.border);

        let mut spans = vec![
            Span::styled("  🎬 ", brand_style),
            Span::styled("FlickFlow", brand_style),
            Span::styled("  │  ", separator_style),
        ];
        for kind in [PageKind::Home, PageKind::Dashboard] {
            let style = if kind == self.page {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(palette.muted)
            };
            spans.push(Span::styled(kind.label(), style));
            spans.push(Span::raw("  "));
        }

        let used: usize = spans.iter().map(|s| s.width()).sum();
        let icon = self.theme.icon();
        let padding = (area.width as usize)
            .saturating_sub(used)
            .saturating_sub(icon.chars().count() + 3);
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(icon, Style::default().fg(palette.text)));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(palette.border)),
        )
    }
}
