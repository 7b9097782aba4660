use std::fmt;
use std::path::PathBuf;

/// How today's note came to exist for a given append
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteOrigin {
    /// Created by copying the template
    FromTemplate,
    /// Created with only a date heading because the template was missing
    Empty,
    /// Already there; only the entry was appended
    Existing,
}

impl NoteOrigin {
    pub fn status_message(self) -> &'static str {
        match self {
            NoteOrigin::FromTemplate => "Created daily note from template",
            NoteOrigin::Empty => "Created daily note",
            NoteOrigin::Existing => "Added memo",
        }
    }
}

/// Result of a successful append
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendOutcome {
    pub path: PathBuf,
    pub origin: NoteOrigin,
    pub content: String,
}

impl fmt::Display for AppendOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.origin.status_message(), self.content)
    }
}

/// What selecting a suggestion does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteAction {
    AppendToDailyNote(String),
    OpenDailyNote,
}

/// One row offered to the launcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub title: String,
    pub subtitle: String,
    /// `None` for placeholder rows that do nothing when selected
    pub action: Option<NoteAction>,
}

impl Suggestion {
    pub fn placeholder(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            action: None,
        }
    }

    pub fn actionable(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        action: NoteAction,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            action: Some(action),
        }
    }

    pub fn is_actionable(&self) -> bool {
        self.action.is_some()
    }
}
