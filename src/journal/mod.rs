// Daily note journal: path layout, note creation and entry appends

mod clock;
mod error;
mod launch;
mod manager;
mod paths;
mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::NoteError;
pub use launch::{Launcher, SystemLauncher};
pub use manager::DailyNoteManager;
pub use paths::{
    DATE_FORMAT, TIME_FORMAT, daily_note_path, empty_note_body, format_entry, note_filename,
    resolve_vault_path, template_path,
};
pub use types::{AppendOutcome, NoteAction, NoteOrigin, Suggestion};
