use crate::ui::confirm::state::ConfirmState;
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{Palette, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

pub fn render_confirm_dialog(frame: &mut Frame, area: Rect, state: &ConfirmState, palette: Palette) {
    let ConfirmState::Visible { title, .. } = state else {
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            format!(" Delete \"{title}\"?"),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            " Are you sure you want to delete this movie? This action cannot be undone.",
            Style::default().fg(palette.muted),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" y/Enter: ", Style::default().fg(palette.muted)),
            Span::styled("Delete", Style::default().fg(STATUS_ERROR)),
            Span::styled("   n/Esc: Keep", Style::default().fg(palette.muted)),
        ]),
    ];

    PopupDialog::new("Confirm Delete", lines, palette)
        .min_width(44)
        .render(frame, area);
}
