use anyhow::Result;
use lista_store::{ItemStore, KvBackend};

use crate::controller::{AppController, ListAction};
use crate::presentation::ConsoleView;

pub fn handle<B: KvBackend>(store: ItemStore<B>, view: ConsoleView, id: String) -> Result<()> {
    let mut controller = AppController::new(store, view);
    controller.load()?;
    controller.list_click(ListAction::Delete, &id)
}
