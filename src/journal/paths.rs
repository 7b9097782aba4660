use chrono::{NaiveDate, NaiveTime};
use std::path::{Path, PathBuf};

use crate::config::VaultSettings;

/// Daily note file stem, also used in the empty-note heading
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Entry timestamp, minute resolution
pub const TIME_FORMAT: &str = "%H:%M";

/// Resolve the vault directory.
///
/// A non-blank `vault_path` wins; otherwise the vault is `vault_name` under
/// `home`. Without a home directory `vault_name` is taken relative to the
/// working directory. No filesystem access.
pub fn resolve_vault_path(settings: &VaultSettings, home: Option<&Path>) -> PathBuf {
    let custom = settings.vault_path.trim();
    if !custom.is_empty() {
        return PathBuf::from(custom);
    }

    match home {
        Some(home) => home.join(&settings.vault_name),
        None => PathBuf::from(&settings.vault_name),
    }
}

/// `YYYY-MM-DD.md`
pub fn note_filename(date: NaiveDate) -> String {
    format!("{}.md", date.format(DATE_FORMAT))
}

pub fn daily_note_path(vault: &Path, settings: &VaultSettings, date: NaiveDate) -> PathBuf {
    vault.join(&settings.daily_note_dir).join(note_filename(date))
}

pub fn template_path(vault: &Path, settings: &VaultSettings) -> PathBuf {
    vault
        .join(&settings.template_dir)
        .join(&settings.template_filename)
}

/// Body written when a note is created without a template
pub fn empty_note_body(date: NaiveDate) -> String {
    format!("# {}\n\n", date.format(DATE_FORMAT))
}

/// A single journal line, leading newline included: `"\n- HH:MM content"`
pub fn format_entry(time: NaiveTime, content: &str) -> String {
    format!("\n- {} {}", time.format(TIME_FORMAT), content)
}
