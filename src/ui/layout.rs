use ratatui::layout::Rect;

/// Rows reserved for the slideshow track on the home page.
pub const SLIDESHOW_HEIGHT: u16 = 9;

/// Navbar, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Home body: slideshow on top, grid below.
pub fn split_home(body: Rect) -> (Rect, Rect) {
    let slideshow_height = SLIDESHOW_HEIGHT.min(body.height);
    let slideshow = Rect {
        height: slideshow_height,
        ..body
    };
    let grid = Rect {
        y: body.y + slideshow_height,
        height: body.height - slideshow_height,
        ..body
    };
    (slideshow, grid)
}

/// Inner width of the slideshow track (inside borders) for a terminal size.
pub fn slideshow_window(cols: u16) -> u16 {
    cols.saturating_sub(2)
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
