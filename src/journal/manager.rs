use chrono::NaiveDate;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::clock::{Clock, SystemClock};
use super::error::{NoteError, io_error};
use super::launch::{Launcher, SystemLauncher};
use super::paths::{
    daily_note_path, empty_note_body, format_entry, note_filename, resolve_vault_path,
    template_path,
};
use super::types::{AppendOutcome, NoteAction, NoteOrigin, Suggestion};
use crate::config::VaultSettings;

/// Turns memo text into timestamped lines in today's daily note
pub struct DailyNoteManager<C = SystemClock, L = SystemLauncher> {
    settings: VaultSettings,
    clock: C,
    launcher: L,
    home: Option<PathBuf>,
}

impl DailyNoteManager {
    /// Manager on the system clock and the platform's default-app launcher
    pub fn new(settings: VaultSettings) -> Self {
        Self::with_parts(settings, SystemClock, SystemLauncher)
    }
}

impl<C: Clock, L: Launcher> DailyNoteManager<C, L> {
    pub fn with_parts(settings: VaultSettings, clock: C, launcher: L) -> Self {
        Self {
            settings,
            clock,
            launcher,
            home: dirs::home_dir(),
        }
    }

    /// Override the home directory used to derive the vault from `vault_name`
    pub fn with_home(mut self, home: impl Into<PathBuf>) -> Self {
        self.home = Some(home.into());
        self
    }

    pub fn settings(&self) -> &VaultSettings {
        &self.settings
    }

    pub fn launcher(&self) -> &L {
        &self.launcher
    }

    pub fn resolve_vault_path(&self) -> PathBuf {
        resolve_vault_path(&self.settings, self.home.as_deref())
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().date()
    }

    /// Path of today's note (it may not exist yet)
    pub fn daily_note_path(&self) -> PathBuf {
        daily_note_path(&self.resolve_vault_path(), &self.settings, self.today())
    }

    pub fn template_path(&self) -> PathBuf {
        template_path(&self.resolve_vault_path(), &self.settings)
    }

    /// Suggestions for the launcher's free-text query.
    ///
    /// Blank input gets a single placeholder; anything else gets exactly one
    /// row that appends the text as typed.
    pub fn handle_query(&self, query: &str) -> Vec<Suggestion> {
        if query.trim().is_empty() {
            return vec![Suggestion::placeholder(
                "Enter your note",
                "Type something to add to today's daily note",
            )];
        }

        vec![Suggestion::actionable(
            format!("Add to daily note: {}", query),
            format!(
                "Will append to {} with timestamp",
                note_filename(self.today())
            ),
            NoteAction::AppendToDailyNote(query.to_string()),
        )]
    }

    pub fn build_context_menu(&self) -> Vec<Suggestion> {
        vec![Suggestion::actionable(
            "Open daily note",
            "Open today's daily note with the default application",
            NoteAction::OpenDailyNote,
        )]
    }

    /// Append `content` as a timestamped entry, creating today's note first
    /// if needed. Nothing is written when the vault is missing. A note
    /// created before a failed append is left in place.
    pub fn append_to_daily_note(&self, content: &str) -> Result<AppendOutcome, NoteError> {
        let vault = self.resolve_vault_path();
        if !vault.exists() {
            return Err(NoteError::VaultNotFound { path: vault });
        }

        // One reading so the file date and the entry time agree across midnight
        let now = self.clock.now();
        let today = now.date();
        let note_path = daily_note_path(&vault, &self.settings, today);

        let origin = if note_path.exists() {
            NoteOrigin::Existing
        } else {
            let template = template_path(&vault, &self.settings);
            create_note(&note_path, &template, today)?
        };

        let entry = format_entry(now.time(), content);
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&note_path)
            .map_err(io_error("open", &note_path))?;
        file.write_all(entry.as_bytes())
            .map_err(io_error("append to", &note_path))?;

        debug!("Appended {} bytes to {}", entry.len(), note_path.display());

        Ok(AppendOutcome {
            path: note_path,
            origin,
            content: content.to_string(),
        })
    }

    /// Open today's note with the default application; returns its path
    pub fn open_daily_note(&self) -> Result<PathBuf, NoteError> {
        let path = self.daily_note_path();
        if !path.exists() {
            return Err(NoteError::NoteNotCreated { path });
        }

        match self.launcher.launch(&path) {
            Ok(()) => Ok(path),
            Err(source) => Err(NoteError::Launch { path, source }),
        }
    }
}

fn create_note(
    note_path: &Path,
    template: &Path,
    today: NaiveDate,
) -> Result<NoteOrigin, NoteError> {
    if let Some(parent) = note_path.parent() {
        fs::create_dir_all(parent).map_err(io_error("create directory", parent))?;
    }

    if template.exists() {
        fs::copy(template, note_path).map_err(io_error("copy template to", note_path))?;
        if let Err(e) = copy_modified_time(template, note_path) {
            warn!(
                "Could not carry template timestamp over to {}: {}",
                note_path.display(),
                e
            );
        }
        info!(
            "Created {} from template {}",
            note_path.display(),
            template.display()
        );
        Ok(NoteOrigin::FromTemplate)
    } else {
        fs::write(note_path, empty_note_body(today)).map_err(io_error("create", note_path))?;
        info!(
            "Template {} not found, created empty {}",
            template.display(),
            note_path.display()
        );
        Ok(NoteOrigin::Empty)
    }
}

/// `fs::copy` keeps permissions but not timestamps
fn copy_modified_time(from: &Path, to: &Path) -> io::Result<()> {
    let modified = fs::metadata(from)?.modified()?;
    let file = OpenOptions::new().write(true).open(to)?;
    file.set_modified(modified)
}
