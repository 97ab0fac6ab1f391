use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed set of catalog genres.
///
/// Serialized by display name; once published, do not rename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Action,
    Comedy,
    Drama,
    Horror,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Thriller,
    Animation,
    Documentary,
}

impl Category {
    /// All variants in form order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Action,
            Self::Comedy,
            Self::Drama,
            Self::Horror,
            Self::SciFi,
            Self::Thriller,
            Self::Animation,
            Self::Documentary,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Action => "Action",
            Self::Comedy => "Comedy",
            Self::Drama => "Drama",
            Self::Horror => "Horror",
            Self::SciFi => "Sci-Fi",
            Self::Thriller => "Thriller",
            Self::Animation => "Animation",
            Self::Documentary => "Documentary",
        }
    }

    /// Next category in form order, wrapping around. `None` starts at the first.
    pub fn cycle_forward(current: Option<Self>) -> Self {
        let all = Self::all();
        match current.and_then(|c| all.iter().position(|x| *x == c)) {
            Some(idx) => all[(idx + 1) % all.len()],
            None => all[0],
        }
    }

    /// Previous category in form order, wrapping around. `None` starts at the last.
    pub fn cycle_backward(current: Option<Self>) -> Self {
        let all = Self::all();
        match current.and_then(|c| all.iter().position(|x| *x == c)) {
            Some(0) | None => all[all.len() - 1],
            Some(idx) => all[idx - 1],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
