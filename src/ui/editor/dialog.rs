use crate::model::render_stars;
use crate::ui::editor::state::{EditorMode, EditorState, FormField, MovieForm};
use crate::ui::popup::PopupDialog;
use crate::ui::theme::{Palette, STAR, STATUS_ERROR};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 60;
const CURSOR: &str = "▏";

pub fn render_editor_dialog(frame: &mut Frame, area: Rect, state: &EditorState, palette: Palette) {
    let EditorState::Open {
        mode,
        form,
        focused,
        error,
    } = state
    else {
        return;
    };

    let (title, submit_label) = match mode {
        EditorMode::Create => ("Add New Movie", "Add Movie"),
        EditorMode::Edit { .. } => ("Edit Movie", "Save Changes"),
    };

    let mut lines = Vec::new();
    for field in FormField::all() {
        let is_focused = field == focused;
        let label_style = if is_focused {
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        let marker = if is_focused { "› " } else { "  " };
        let label = match field {
            FormField::Rating => format!("{}Rating ({})", marker, form.rating),
            _ => format!("{}{}", marker, field.label()),
        };
        lines.push(Line::from(Span::styled(label, label_style)));
        lines.push(field_value(form, *field, is_focused, palette));
    }

    lines.push(Line::from(""));
    if let Some(error) = error {
        lines.push(Line::from(Span::styled(
            format!("  {error}"),
            Style::default().fg(STATUS_ERROR),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("  Enter: {submit_label}  Esc: Cancel  Tab: Next field"),
        Style::default().fg(palette.muted).add_modifier(Modifier::DIM),
    )));

    PopupDialog::new(title, lines, palette)
        .min_width(DIALOG_WIDTH)
        .render(frame, area);
}

fn field_value(form: &MovieForm, field: FormField, focused: bool, palette: Palette) -> Line<'static> {
    let value_style = if focused {
        Style::default().fg(palette.text).bg(palette.highlight)
    } else {
        Style::default().fg(palette.text)
    };

    let spans = match field {
        FormField::Category => {
            let text = form
                .category
                .map(|c| c.label().to_string())
                .unwrap_or_else(|| "Select a category".to_string());
            if focused {
                vec![Span::styled(format!("    ‹ {text} ›"), value_style)]
            } else {
                vec![Span::styled(format!("    {text}"), value_style)]
            }
        }
        FormField::Rating => vec![
            Span::styled(
                if focused { "    ‹ " } else { "    " }.to_string(),
                value_style,
            ),
            Span::styled(render_stars(form.rating), Style::default().fg(STAR)),
            Span::styled(if focused { " ›" } else { "" }.to_string(), value_style),
        ],
        FormField::Title | FormField::ImageUrl | FormField::Description => {
            let text = match field {
                FormField::Title => &form.title,
                FormField::ImageUrl => &form.image_url,
                _ => &form.description,
            };
            vec![Span::styled(format!("    {text}"), value_style)]
        }
    };
    let mut line = Line::from(spans);
    if focused && field.is_text() {
        line.push_span(Span::styled(CURSOR, value_style));
    }
    line
}
