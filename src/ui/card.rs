use crate::catalog::MovieCard;
use crate::ui::theme::{Palette, STAR, STATUS_ERROR};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Lines one card occupies in the grid.
pub const GRID_CARD_HEIGHT: u16 = 4;

/// Grid rendering: title + badge, stars, description, actions or image.
pub fn grid_card_lines(card: &MovieCard, selected: bool, width: u16, palette: Palette) -> Vec<Line<'static>> {
    let movie = card.movie();
    let base = if selected {
        Style::default().bg(palette.highlight)
    } else {
        Style::default()
    };
    let marker = if selected { "▌" } else { " " };

    let header = Line::from(vec![
        Span::styled(marker.to_string(), base.fg(palette.badge)),
        Span::styled(
            movie.title.clone(),
            base.fg(palette.text).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  ".to_string(), base),
        Span::styled(
            format!(" {} ", movie.category.label()),
            Style::default().fg(palette.text).bg(palette.badge),
        ),
    ]);

    let stars = Line::from(vec![
        Span::styled(marker.to_string(), base.fg(palette.badge)),
        Span::styled(card.stars(), base.fg(STAR)),
        Span::styled(format!(" {}", movie.rating), base.fg(palette.muted)),
    ]);

    let description = Line::from(vec![
        Span::styled(marker.to_string(), base.fg(palette.badge)),
        Span::styled(
            truncate(&movie.description, width.saturating_sub(2) as usize),
            base.fg(palette.muted),
        ),
    ]);

    let footer = if card.has_actions() {
        let action_style = if selected {
            base.fg(palette.text)
        } else {
            base.fg(palette.muted).add_modifier(Modifier::DIM)
        };
        Line::from(vec![
            Span::styled(marker.to_string(), base.fg(palette.badge)),
            Span::styled("[e] Edit".to_string(), action_style),
            Span::styled("  ".to_string(), base),
            Span::styled(
                "[d] Delete".to_string(),
                if selected { base.fg(STATUS_ERROR) } else { action_style },
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(marker.to_string(), base.fg(palette.badge)),
            Span::styled(
                truncate(&movie.image_url, width.saturating_sub(2) as usize),
                base.fg(palette.muted).add_modifier(Modifier::DIM),
            ),
        ])
    };

    vec![header, stars, description, footer]
}

/// Slideshow rendering: one wide card per track window.
pub fn slide_lines(card: &MovieCard, width: u16, palette: Palette) -> Vec<Line<'static>> {
    let movie = card.movie();
    let inner = width.saturating_sub(4) as usize;
    let badge = format!(" {} ", movie.category.label());
    let title_room = inner.saturating_sub(badge.chars().count() + 2);
    vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  {}", truncate(&movie.title, title_room)),
                Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(badge, Style::default().fg(palette.text).bg(palette.badge)),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(card.stars(), Style::default().fg(STAR)),
            Span::styled(format!(" {}", movie.rating), Style::default().fg(palette.muted)),
        ]),
        Line::from(Span::styled(
            format!("  {}", truncate(&movie.description, inner)),
            Style::default().fg(palette.muted),
        )),
        Line::from(Span::styled(
            format!("  {}", truncate(&movie.image_url, inner)),
            Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
        )),
    ]
}

/// Cut to `max` chars, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}
