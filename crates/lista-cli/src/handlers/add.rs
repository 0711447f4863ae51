use anyhow::Result;
use lista_store::{ItemStore, KvBackend};
use lista_types::Status;

use crate::controller::AppController;
use crate::presentation::ConsoleView;

pub fn handle<B: KvBackend>(
    store: ItemStore<B>,
    view: ConsoleView,
    titulo: String,
    status: Status,
) -> Result<()> {
    let mut controller = AppController::new(store, view);
    controller.submit(&titulo, status)
}
