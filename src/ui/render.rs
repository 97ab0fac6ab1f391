use crate::catalog::{PageKind, TopRatedView};
use crate::ui::app::App;
use crate::ui::card::{grid_card_lines, slide_lines, GRID_CARD_HEIGHT};
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::editor::render_editor_dialog;
use crate::ui::footer::Footer;
use crate::ui::header::Navbar;
use crate::ui::layout::{layout_regions, split_home};
use crate::ui::theme::{Palette, ACCENT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let palette = app.theme().palette();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Navbar::new(app.page(), app.theme()).widget(header), header);
    frame.render_widget(Clear, body);

    match app.page() {
        PageKind::Home => {
            let (slideshow, grid) = split_home(body);
            if let Some(view) = app.controller().top_rated() {
                draw_slideshow(frame, slideshow, view, palette);
            }
            draw_grid(frame, grid, app, " All Movies ", palette);
        }
        PageKind::Dashboard => {
            let title = format!(" Manage Movies ({}) ", app.controller().movies().len());
            draw_grid(frame, body, app, &title, palette);
        }
    }

    let footer_widget = Footer::new(app.page(), app.notice());
    frame.render_widget(footer_widget.widget(footer, palette), footer);

    render_editor_dialog(frame, area, app.editor(), palette);
    render_confirm_dialog(frame, area, app.confirm(), palette);
}

/// Slides sit side by side on one wide track which is scrolled
/// horizontally by the carousel offset.
fn draw_slideshow(frame: &mut Frame<'_>, area: Rect, view: &TopRatedView, palette: Palette) {
    let carousel = view.carousel();
    let title = if carousel.count() > 0 {
        format!(
            " Top Rated  {}/{} ",
            carousel.current_index() + 1,
            carousel.count()
        )
    } else {
        " Top Rated ".to_string()
    };
    let block = Block::default()
        .title(Span::styled(title, Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));

    if view.cards().is_empty() {
        frame.render_widget(empty_state("No top-rated movies available.", palette).block(block), area);
        return;
    }

    let window = carousel.window_size().max(1);
    let slides: Vec<Vec<Line<'static>>> = view
        .cards()
        .iter()
        .map(|card| slide_lines(card, window, palette))
        .collect();
    let rows = slides.iter().map(Vec::len).max().unwrap_or(0);

    let mut track = Vec::with_capacity(rows + 1);
    for row in 0..rows {
        let mut spans = Vec::new();
        for slide in &slides {
            let line = slide.get(row).cloned().unwrap_or_default();
            spans.extend(fit_line(line, window as usize));
        }
        track.push(Line::from(spans));
    }
    track.push(dots(carousel.current_index(), carousel.count(), window, palette));

    let offset = u16::try_from(carousel.scroll_offset()).unwrap_or(u16::MAX);
    let widget = Paragraph::new(track).block(block).scroll((0, offset));
    frame.render_widget(widget, area);
}

/// Position indicator, repeated per slide so it survives the scroll.
fn dots(current: usize, count: usize, window: u16, palette: Palette) -> Line<'static> {
    let window = window as usize;
    let pad = window.saturating_sub(count * 2) / 2;
    let mut segment = vec![Span::raw(" ".repeat(pad))];
    for index in 0..count {
        let (glyph, style) = if index == current {
            ("● ", Style::default().fg(ACCENT))
        } else {
            ("○ ", Style::default().fg(palette.muted))
        };
        segment.push(Span::styled(glyph, style));
    }

    let mut spans = Vec::new();
    for _ in 0..count {
        spans.extend(fit_line(Line::from(segment.clone()), window));
    }
    Line::from(spans)
}

/// Clip or pad `line` to exactly `width` columns, so every slide starts at
/// a multiple of the window on the track.
fn fit_line(line: Line<'static>, width: usize) -> Vec<Span<'static>> {
    let mut used = 0;
    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    for span in line.spans {
        let span_width = span.width();
        if used + span_width <= width {
            used += span_width;
            spans.push(span);
            continue;
        }
        let mut kept = String::new();
        for ch in span.content.chars() {
            let ch_width = Span::raw(ch.to_string()).width();
            if used + ch_width > width {
                break;
            }
            used += ch_width;
            kept.push(ch);
        }
        spans.push(Span::styled(kept, span.style));
        break;
    }
    spans.push(Span::raw(" ".repeat(width - used)));
    spans
}

fn draw_grid(frame: &mut Frame<'_>, area: Rect, app: &App, title: &str, palette: Palette) {
    let block = Block::default()
        .title(Span::styled(title.to_string(), Style::default().fg(palette.text)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let cards = app.controller().grid().cards();

    if cards.is_empty() {
        let message = match app.page() {
            PageKind::Home => "No movies yet.",
            PageKind::Dashboard => "No movies yet. Press a to add one.",
        };
        frame.render_widget(empty_state(message, palette).block(block), area);
        return;
    }

    let inner_height = area.height.saturating_sub(2);
    let visible = (inner_height / GRID_CARD_HEIGHT).max(1) as usize;
    let selection = app.selection().min(cards.len() - 1);
    let first = selection.saturating_sub(visible - 1);

    let mut lines = Vec::new();
    for (index, card) in cards.iter().enumerate().skip(first).take(visible) {
        lines.extend(grid_card_lines(
            card,
            index == selection,
            area.width.saturating_sub(2),
            palette,
        ));
    }
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn empty_state(message: &'static str, palette: Palette) -> Paragraph<'static> {
    Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            message,
            Style::default().fg(palette.muted).add_modifier(Modifier::ITALIC),
        )),
    ])
    .alignment(Alignment::Center)
}
