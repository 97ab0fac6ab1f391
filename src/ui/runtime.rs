use crate::catalog::{MovieStore, PageController, PageKind, SlideshowSettings};
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::time::{Duration, Instant};
use tokio::runtime::Runtime;

/// Drive the terminal until the user quits. Each page switch starts a
/// fresh page session that reloads the catalog from storage.
pub fn run(config: &Config, store: MovieStore, runtime: &Runtime) -> io::Result<()> {
    let slideshow = SlideshowSettings {
        top_n: config.slideshow.top_n,
        interval: Duration::from_millis(config.slideshow.interval_ms),
    };
    let tick_rate = Duration::from_millis(config.ui.tick_ms);

    let controller = start_page(runtime, config.ui.start_page, &store, slideshow);
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(controller, config.ui.theme);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    let events = EventHandler::new(tick_rate);

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                if let InputAction::SwitchPage(kind) = handle_key(&mut app, key) {
                    tracing::info!(page = kind.label(), "switching page");
                    let controller = start_page(runtime, kind, &store, slideshow);
                    app.replace_controller(controller);
                }
            }
            Ok(AppEvent::Tick) => app.on_tick(Instant::now()),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(events);
    drop(guard);
    Ok(())
}

fn start_page(
    runtime: &Runtime,
    kind: PageKind,
    store: &MovieStore,
    slideshow: SlideshowSettings,
) -> PageController {
    runtime.block_on(PageController::start(kind, store.clone(), slideshow))
}
