use anyhow::Result;
use lista_store::{ItemStore, KvBackend};
use lista_types::Status;

use crate::controller::{AppController, ListAction};
use crate::presentation::ConsoleView;

/// Edit flow: load the item into the form, overlay the fields given on the
/// command line, submit. A missing field keeps the stored value.
pub fn handle<B: KvBackend>(
    store: ItemStore<B>,
    view: ConsoleView,
    id: String,
    titulo: Option<String>,
    status: Option<Status>,
) -> Result<()> {
    let mut controller = AppController::new(store, view);
    controller.load()?;
    controller.list_click(ListAction::Edit, &id)?;

    // Unknown id: the edit click is silently ignored.
    let Some(base) = controller.editing_item().cloned() else {
        return Ok(());
    };

    let titulo = titulo.unwrap_or(base.titulo);
    let status = status.unwrap_or(base.status);
    controller.submit(&titulo, status)
}
