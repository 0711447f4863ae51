use anyhow::Result;
use lista_engine::SearchQuery;
use lista_store::{ItemStore, KvBackend};
use lista_types::StatusFilter;

use crate::controller::AppController;
use crate::presentation::ConsoleView;

pub fn handle<B: KvBackend>(
    store: ItemStore<B>,
    view: ConsoleView,
    search: Option<String>,
    filter: StatusFilter,
) -> Result<()> {
    let query = SearchQuery::new(search.unwrap_or_default(), filter);
    let mut controller = AppController::new(store, view).with_query(query);
    controller.refresh()
}
