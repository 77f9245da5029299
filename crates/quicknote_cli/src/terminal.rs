//! Terminal implementation of the editor host surface.
//!
//! # Responsibility
//! - Render capture prompts and errors on a terminal.
//! - Open created notes and the settings file in the user's editor.
//!
//! # Invariants
//! - Prompts block on one stdin line; anything but the offered action (or
//!   its first letter) is a decline, matching dismissed-prompt semantics.

use log::{info, warn};
use quicknote_core::{EditorHost, LanguagePick, OpenNoteError, PromptAnswer};
use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Editor host that prompts on stdin and reports on stderr.
pub struct TerminalHost {
    settings_path: PathBuf,
}

impl TerminalHost {
    pub fn new(settings_path: PathBuf) -> Self {
        Self { settings_path }
    }

    fn read_answer(&self, message: &str, action: &str) -> PromptAnswer {
        eprint!("{message} [{action} / Enter to dismiss]: ");
        let _ = io::stderr().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return PromptAnswer::Declined;
        }
        if answer_matches(line.trim(), action) {
            PromptAnswer::Accepted
        } else {
            PromptAnswer::Declined
        }
    }
}

impl EditorHost for TerminalHost {
    fn prompt_info(&mut self, message: &str, action: &str) -> PromptAnswer {
        self.read_answer(message, action)
    }

    fn prompt_error(&mut self, message: &str, action: &str) -> PromptAnswer {
        self.read_answer(&format!("error: {message}"), action)
    }

    fn show_error(&mut self, message: &str) {
        eprintln!("error: {message}");
    }

    fn open_settings(&mut self) {
        if let Err(err) = open_in_editor(&self.settings_path) {
            warn!("event=open_settings module=cli status=error error={err}");
            eprintln!("settings file: {}", self.settings_path.display());
        }
    }

    fn open_note(&mut self, path: &Path, language_id: &str) -> Result<(), OpenNoteError> {
        info!(
            "event=note_open module=cli language={} path={}",
            language_id,
            path.display()
        );
        if editor_command().is_none() {
            // No editor configured: hand the path to the user instead.
            println!("{}", path.display());
            return Ok(());
        }
        open_in_editor(path).map_err(|err| OpenNoteError::new(err.to_string()))
    }

    fn pick_language(&mut self, title: &str, picks: &[LanguagePick]) -> Option<String> {
        if picks.is_empty() {
            return None;
        }

        eprintln!("{title}");
        for (index, pick) in picks.iter().enumerate() {
            eprintln!("  {:>2}. {} {}", index + 1, pick.label, pick.description);
        }
        eprint!("Select a language (1-{}): ", picks.len());
        let _ = io::stderr().flush();

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line).ok()?;
        let choice: usize = line.trim().parse().ok()?;
        picks
            .get(choice.checked_sub(1)?)
            .map(|pick| pick.id.clone())
    }
}

fn answer_matches(input: &str, action: &str) -> bool {
    if input.is_empty() {
        return false;
    }
    if input.eq_ignore_ascii_case(action) {
        return true;
    }
    input.chars().count() == 1
        && match (input.chars().next(), action.chars().next()) {
            (Some(given), Some(first)) => given.eq_ignore_ascii_case(&first),
            _ => false,
        }
}

fn editor_command() -> Option<String> {
    for key in ["VISUAL", "EDITOR"] {
        if let Ok(value) = env::var(key) {
            if !value.is_empty() {
                return Some(value);
            }
        }
    }
    None
}

fn open_in_editor(path: &Path) -> io::Result<()> {
    let editor = editor_command().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no VISUAL or EDITOR configured")
    })?;
    let status = Command::new(editor).arg(path).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(io::Error::new(
            io::ErrorKind::Other,
            format!("editor exited with {status}"),
        ))
    }
}
