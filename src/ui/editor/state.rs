use crate::catalog::IntentEvent;
use crate::model::{Category, Movie, MovieDraft, MovieId, Rating};
use crate::ui::mvi::UiState;
use thiserror::Error;

/// Form validation failures. Nothing is emitted while any of these hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Image URL is required")]
    MissingImageUrl,
    #[error("Select a category")]
    MissingCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    Create,
    /// Editing the movie with this id; the id is merged back on submit.
    Edit { id: MovieId },
}

/// Form fields in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    ImageUrl,
    Category,
    Description,
    Rating,
}

impl FormField {
    const ORDER: [FormField; 5] = [
        Self::Title,
        Self::ImageUrl,
        Self::Category,
        Self::Description,
        Self::Rating,
    ];

    pub fn all() -> &'static [FormField] {
        &Self::ORDER
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::ImageUrl => "Image URL",
            Self::Category => "Category",
            Self::Description => "Description",
            Self::Rating => "Rating",
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Title | Self::ImageUrl | Self::Description)
    }

    pub fn next(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(idx + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Raw form values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MovieForm {
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub rating: Rating,
    pub category: Option<Category>,
}

impl MovieForm {
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            image_url: movie.image_url.clone(),
            description: movie.description.clone(),
            rating: movie.rating,
            category: Some(movie.category),
        }
    }

    /// Mutable text buffer behind a text field.
    pub fn text_mut(&mut self, field: FormField) -> Option<&mut String> {
        match field {
            FormField::Title => Some(&mut self.title),
            FormField::ImageUrl => Some(&mut self.image_url),
            FormField::Description => Some(&mut self.description),
            FormField::Category | FormField::Rating => None,
        }
    }

    pub fn validate(&self) -> Result<MovieDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        let image_url = self.image_url.trim();
        if image_url.is_empty() {
            return Err(FormError::MissingImageUrl);
        }
        let category = self.category.ok_or(FormError::MissingCategory)?;
        Ok(MovieDraft {
            title: title.to_string(),
            image_url: image_url.to_string(),
            description: self.description.trim().to_string(),
            rating: self.rating,
            category,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Hidden,
    Open {
        mode: EditorMode,
        form: MovieForm,
        focused: FormField,
        error: Option<FormError>,
    },
}

impl UiState for EditorState {}

impl EditorState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Intent the form would emit right now, or the reason it can't.
    /// `None` while hidden.
    pub fn submission(&self) -> Option<Result<IntentEvent, FormError>> {
        let Self::Open { mode, form, .. } = self else {
            return None;
        };
        Some(form.validate().map(|draft| match mode {
            EditorMode::Create => IntentEvent::Create(draft),
            EditorMode::Edit { id } => IntentEvent::Update(Movie::from_draft(*id, draft)),
        }))
    }
}
