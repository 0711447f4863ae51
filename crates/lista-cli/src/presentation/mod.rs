//! View layer: the `ItemView` seam the controller drives, plus the console
//! binding. Text rendering goes through `fmt::Display` views over the
//! engine's view models; `--format json` serializes the view model as-is.

pub mod console;
pub mod views;

use anyhow::Result;
use lista_engine::{Counters, ListViewModel, Notice};
use lista_types::Item;

/// Display surface contract. The controller never touches the terminal
/// directly; tests substitute a recording implementation.
pub trait ItemView {
    /// Replace the displayed list contents entirely.
    fn render(&mut self, view: &ListViewModel) -> Result<()>;

    /// Show the summary counters (always tallied over the full collection).
    fn update_counters(&mut self, counters: &Counters) -> Result<()>;

    /// Reflect that the form now targets the given item.
    fn enter_edit_mode(&mut self, item: &Item);

    /// Reflect that the form is back in add mode.
    fn reset_form(&mut self);

    /// Show a transient feedback banner.
    fn notify(&mut self, notice: &Notice);

    /// Gate a destructive action behind explicit confirmation.
    fn confirm_delete(&mut self, item: Option<&Item>, id: &str) -> bool;
}

pub use console::ConsoleView;
