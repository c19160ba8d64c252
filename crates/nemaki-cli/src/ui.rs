use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{GlobalFlags, OutputFormat};

#[derive(Clone, Copy, Debug)]
pub struct UiPrefs {
    pub table_color: bool,
    pub progress: bool,
    pub term_width: Option<usize>,
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let stdout_tty = std::io::stdout().is_terminal();
    let table_color = stdout_tty
        && flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none();

    // Spinners draw on stderr so they never mix with piped output.
    let progress = std::io::stderr().is_terminal() && !flags.quiet;

    let term_width = std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.parse::<usize>().ok())
        .filter(|width| *width >= 40);

    let _ = UI_PREFS.set(UiPrefs {
        table_color,
        progress,
        term_width,
    });
}

#[must_use]
pub fn prefs() -> UiPrefs {
    *UI_PREFS.get().unwrap_or(&UiPrefs {
        table_color: false,
        progress: false,
        term_width: None,
    })
}
