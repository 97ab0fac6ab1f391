use crate::catalog::{Decision, IntentEvent, MovieCard, Outcome, PageController, PageKind};
use crate::ui::confirm::{ConfirmIntent, ConfirmReducer, ConfirmState};
use crate::ui::editor::{EditorIntent, EditorReducer, EditorState};
use crate::ui::layout::slideshow_window;
use crate::ui::mvi::Reducer;
use crate::ui::theme::ThemeMode;
use std::time::Instant;

/// What currently receives key presses. Dialogs stack above the page and
/// the confirmation stacks above everything.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Page,
    Editor,
    Confirm,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    controller: PageController,
    /// Index into the grid's cards.
    selection: usize,
    theme: ThemeMode,
    /// Movie editor modal (MVI pattern).
    editor: EditorState,
    /// Delete confirmation (MVI pattern).
    confirm: ConfirmState,
    notice: Option<String>,
}

impl App {
    pub fn new(controller: PageController, theme: ThemeMode) -> Self {
        Self {
            should_quit: false,
            size: None,
            controller,
            selection: 0,
            theme,
            editor: EditorState::default(),
            confirm: ConfirmState::default(),
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        if self.confirm.is_visible() {
            Focus::Confirm
        } else if self.editor.is_visible() {
            Focus::Editor
        } else {
            Focus::Page
        }
    }

    pub fn page(&self) -> PageKind {
        self.controller.kind()
    }

    pub fn controller(&self) -> &PageController {
        &self.controller
    }

    /// Start a new page session. Dialogs and selection belong to the old one.
    pub fn replace_controller(&mut self, controller: PageController) {
        self.controller = controller;
        self.selection = 0;
        self.editor = EditorState::default();
        self.confirm = ConfirmState::default();
        self.notice = None;
        if let Some((cols, rows)) = self.size {
            self.on_resize(cols, rows);
        }
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn confirm(&self) -> &ConfirmState {
        &self.confirm
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_card(&self) -> Option<&MovieCard> {
        self.controller.grid().cards().get(self.selection)
    }

    pub fn move_selection(&mut self, delta: isize) {
        let len = self.controller.grid().cards().len();
        if len == 0 {
            self.selection = 0;
            return;
        }
        let current = self.selection.min(len - 1) as isize;
        self.selection = (current + delta).clamp(0, len as isize - 1) as usize;
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.controller.on_tick(now);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
        if let Some(view) = self.controller.top_rated_mut() {
            view.carousel_mut().set_window_size(slideshow_window(cols));
        }
    }

    pub fn carousel_next(&mut self, now: Instant) {
        if let Some(view) = self.controller.top_rated_mut() {
            view.carousel_mut().next(now);
        }
    }

    pub fn carousel_prev(&mut self, now: Instant) {
        if let Some(view) = self.controller.top_rated_mut() {
            view.carousel_mut().prev(now);
        }
    }

    // ========================================================================
    // Card affordances
    // ========================================================================

    /// Open a blank editor. Only the dashboard manages entries.
    pub fn open_add(&mut self) {
        if self.page() != PageKind::Dashboard {
            return;
        }
        self.dispatch_editor(EditorIntent::Open(None));
    }

    pub fn edit_selected(&mut self) {
        if let Some(intent) = self.selected_card().and_then(MovieCard::edit_intent) {
            self.apply(intent);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(intent) = self.selected_card().and_then(MovieCard::delete_intent) {
            self.apply(intent);
        }
    }

    /// Route an intent through the controller and react to its outcome.
    pub fn apply(&mut self, intent: IntentEvent) {
        let label = match &intent {
            IntentEvent::Create(_) => "Movie added",
            IntentEvent::Update(_) => "Movie updated",
            IntentEvent::Delete { .. } | IntentEvent::Edit(_) => "",
        };
        match self.controller.dispatch(intent) {
            Outcome::Applied => {
                self.notice = Some(label.to_string());
                self.move_selection(0);
            }
            Outcome::ConfirmationRequired(pending) => {
                let title = self
                    .controller
                    .movies()
                    .iter()
                    .find(|m| m.id == pending.id())
                    .map(|m| m.title.clone())
                    .unwrap_or_default();
                self.dispatch_confirm(ConfirmIntent::Ask { pending, title });
            }
            Outcome::EditRequested(movie) => {
                self.dispatch_editor(EditorIntent::Open(Some(movie)));
            }
            Outcome::Ignored | Outcome::Cancelled | Outcome::Blocked => {}
        }
    }

    // ========================================================================
    // Editor dialog (MVI pattern)
    // ========================================================================

    pub fn dispatch_editor(&mut self, intent: EditorIntent) {
        dispatch_mvi!(self, editor, EditorReducer, intent);
    }

    /// Emit the form's intent if it validates, otherwise keep it open
    /// with the error.
    pub fn submit_editor(&mut self) {
        match self.editor.submission() {
            Some(Ok(intent)) => {
                self.dispatch_editor(EditorIntent::Close);
                self.apply(intent);
            }
            Some(Err(reason)) => self.dispatch_editor(EditorIntent::Reject(reason)),
            None => {}
        }
    }

    // ========================================================================
    // Delete confirmation (MVI pattern)
    // ========================================================================

    fn dispatch_confirm(&mut self, intent: ConfirmIntent) {
        dispatch_mvi!(self, confirm, ConfirmReducer, intent);
    }

    pub fn answer_confirm(&mut self, decision: Decision) {
        let ConfirmState::Visible { pending, .. } = std::mem::take(&mut self.confirm) else {
            return;
        };
        self.dispatch_confirm(ConfirmIntent::Dismiss);
        if self.controller.resolve_delete(pending, decision) == Outcome::Applied {
            self.notice = Some("Movie deleted".to_string());
            self.move_selection(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FallbackSource, MovieStore, SlideshowSettings};
    use crate::model::{Category, Movie, Rating};
    use crate::storage::MemoryKvStore;
    use std::sync::Arc;

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id,
            title: title.to_string(),
            image_url: format!("{id}.jpg"),
            description: String::new(),
            rating: Rating::new(3.0).unwrap(),
            category: Category::Drama,
        }
    }

    fn make_app(kind: PageKind) -> (App, MemoryKvStore) {
        let kv = MemoryKvStore::new();
        let store = MovieStore::new(
            Arc::new(kv.clone()),
            "movies",
            FallbackSource::File("unused.json".into()),
        );
        let controller = PageController::with_movies(
            kind,
            store,
            SlideshowSettings::default(),
            vec![movie(1, "A"), movie(2, "B")],
        );
        (App::new(controller, ThemeMode::Dark), kv)
    }

    #[test]
    fn selection_is_clamped() {
        let (mut app, _) = make_app(PageKind::Dashboard);
        app.move_selection(5);
        assert_eq!(app.selection(), 1);
        app.move_selection(-9);
        assert_eq!(app.selection(), 0);
    }

    #[test]
    fn add_is_dashboard_only() {
        let (mut app, _) = make_app(PageKind::Home);
        app.open_add();
        assert_eq!(app.focus(), Focus::Page);

        let (mut app, _) = make_app(PageKind::Dashboard);
        app.open_add();
        assert_eq!(app.focus(), Focus::Editor);
    }

    #[test]
    fn home_cards_have_no_delete() {
        let (mut app, kv) = make_app(PageKind::Home);
        app.delete_selected();
        assert_eq!(app.focus(), Focus::Page);
        assert_eq!(kv.write_count(), 0);
    }

    #[test]
    fn delete_goes_through_confirmation() {
        let (mut app, kv) = make_app(PageKind::Dashboard);
        app.move_selection(1);
        app.delete_selected();
        assert_eq!(app.focus(), Focus::Confirm);
        assert_eq!(kv.write_count(), 0);

        app.answer_confirm(Decision::Accept);
        assert_eq!(app.focus(), Focus::Page);
        assert_eq!(app.controller().movies(), &[movie(1, "A")]);
        assert_eq!(app.selection(), 0);
        assert_eq!(kv.write_count(), 1);
    }

    #[test]
    fn edit_opens_prefilled_editor_and_close_clears_it() {
        let (mut app, _) = make_app(PageKind::Dashboard);
        app.edit_selected();
        assert!(matches!(
            app.editor(),
            EditorState::Open { form, .. } if form.title == "A"
        ));
        app.dispatch_editor(EditorIntent::Close);
        assert_eq!(app.editor(), &EditorState::Hidden);
    }

    #[test]
    fn invalid_submit_keeps_editor_open() {
        let (mut app, kv) = make_app(PageKind::Dashboard);
        app.open_add();
        app.submit_editor();
        assert_eq!(app.focus(), Focus::Editor);
        assert!(matches!(app.editor(), EditorState::Open { error: Some(_), .. }));
        assert_eq!(kv.write_count(), 0);
    }
}
