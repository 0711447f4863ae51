use anyhow::Result;
use is_terminal::IsTerminal;
use lista_engine::{Counters, ListViewModel, Notice, NoticeKind};
use lista_types::Item;
use owo_colors::OwoColorize;
use std::io::Write;

use super::ItemView;
use super::views::{CountersView, ItemTableView};
use crate::types::OutputFormat;

/// Console binding of the view contract.
///
/// Text output goes to stdout; notices and prompts go to stderr so that
/// `--format json` keeps stdout machine-readable.
pub struct ConsoleView {
    format: OutputFormat,
    color: bool,
    assume_yes: bool,
    /// When set (interactive mode), `notify` stays silent and the caller
    /// prints the active notice stack itself.
    defer_notices: bool,
}

impl ConsoleView {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self {
            format,
            color,
            assume_yes: false,
            defer_notices: false,
        }
    }

    pub fn with_assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Toggle confirmation skipping after construction. The interactive loop
    /// owns the stdin lock, so it confirms itself and flips this around the
    /// delete call instead of letting `confirm_delete` read stdin again.
    pub fn set_assume_yes(&mut self, yes: bool) {
        self.assume_yes = yes;
    }

    pub fn with_deferred_notices(mut self) -> Self {
        self.defer_notices = true;
        self
    }

    pub fn print_notice(&self, notice: &Notice) {
        let line = match notice.kind {
            NoticeKind::Success if self.color => format!("✔ {}", notice.message.green()),
            NoticeKind::Success => format!("✔ {}", notice.message),
            NoticeKind::Error if self.color => format!("✖ {}", notice.message.red()),
            NoticeKind::Error => format!("✖ {}", notice.message),
        };
        eprintln!("{}", line);
    }
}

impl ItemView for ConsoleView {
    fn render(&mut self, view: &ListViewModel) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(view)?);
            }
            OutputFormat::Plain => {
                print!("{}", ItemTableView::new(view, self.color));
            }
        }
        Ok(())
    }

    fn update_counters(&mut self, counters: &Counters) -> Result<()> {
        // JSON render already carries the counters in the view model.
        if self.format == OutputFormat::Plain {
            println!("{}", CountersView::new(counters));
        }
        Ok(())
    }

    fn enter_edit_mode(&mut self, item: &Item) {
        if self.format == OutputFormat::Plain {
            eprintln!("Editing {}: {} [{}]", item.id, item.titulo, item.status);
        }
    }

    fn reset_form(&mut self) {
        // The console has no persistent form widget to clear.
    }

    fn notify(&mut self, notice: &Notice) {
        if !self.defer_notices {
            self.print_notice(notice);
        }
    }

    fn confirm_delete(&mut self, item: Option<&Item>, id: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        if !std::io::stdin().is_terminal() {
            eprintln!("Refusing to delete without a terminal; pass --yes to confirm.");
            return false;
        }

        let label = item.map(|item| item.titulo.as_str()).unwrap_or(id);
        eprint!("Delete '{}'? [y/N] ", label);
        let _ = std::io::stderr().flush();

        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_lowercase().as_str(), "y" | "yes" | "s" | "sim")
    }
}
