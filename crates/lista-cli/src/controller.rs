use anyhow::Result;
use std::time::Instant;

use lista_engine::{
    Counters, FormState, Notice, NoticeStack, SearchQuery, apply_filter, present_list,
};
use lista_store::{ItemStore, KvBackend};
use lista_types::{Item, ItemDraft, Status, StatusFilter};

use crate::presentation::ItemView;

/// Which control was activated on a rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Edit,
    Delete,
}

/// Orchestrates user intent into store and view calls.
///
/// Owns the transient UI state: the last-loaded full collection (used for
/// edit lookups), the search/filter query, the form mode and the notice
/// stack. Mutations always go through the store and end with a full
/// reload-and-rerender cycle; there is no incremental diffing.
pub struct AppController<B: KvBackend, V: ItemView> {
    store: ItemStore<B>,
    view: V,
    items: Vec<Item>,
    query: SearchQuery,
    form: FormState,
    notices: NoticeStack,
}

impl<B: KvBackend, V: ItemView> AppController<B, V> {
    pub fn new(store: ItemStore<B>, view: V) -> Self {
        Self {
            store,
            view,
            items: Vec::new(),
            query: SearchQuery::default(),
            form: FormState::default(),
            notices: NoticeStack::new(),
        }
    }

    /// Start with a pre-set search/filter query (one-shot list invocations).
    pub fn with_query(mut self, query: SearchQuery) -> Self {
        self.query = query;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// The item currently loaded into the form, if any.
    pub fn editing_item(&self) -> Option<&Item> {
        let id = self.form.editing_id()?;
        self.items.iter().find(|item| item.id == id)
    }

    /// Notices still inside their display window, oldest first.
    pub fn active_notices(&mut self) -> Vec<Notice> {
        self.notices.active(Instant::now())
    }

    /// Load the full collection without rendering.
    pub fn load(&mut self) -> Result<()> {
        self.items = self.store.get_all()?;
        Ok(())
    }

    /// Full cycle: load, filter, render, counters. Also the initial load.
    pub fn refresh(&mut self) -> Result<()> {
        self.load()?;
        self.render_list()?;
        self.view.update_counters(&Counters::tally(&self.items))
    }

    /// Re-render the list from the already-loaded collection. Counters are
    /// not recomputed; they always reflect the full collection.
    fn render_list(&mut self) -> Result<()> {
        let filtered = apply_filter(&self.items, &self.query);
        let vm = present_list(&filtered, &self.items, &self.query, &self.form);
        self.view.render(&vm)
    }

    /// Form submit: add when no id is loaded, update otherwise.
    ///
    /// An empty trimmed title aborts before any store call. The form is
    /// always reset and the view reloaded afterwards, whichever branch ran.
    pub fn submit(&mut self, titulo_raw: &str, status: Status) -> Result<()> {
        let titulo = titulo_raw.trim();
        if titulo.is_empty() {
            self.notify(Notice::error("Title must not be empty."));
            return Ok(());
        }

        let draft = ItemDraft::new(titulo, status);
        match self.form.editing_id().map(str::to_string) {
            Some(id) => match self.store.update(&id, draft)? {
                Some(_) => self.notify(Notice::success("Item updated.")),
                None => self.notify(Notice::error(format!("No item with id '{}'.", id))),
            },
            None => {
                self.store.add(draft)?;
                self.notify(Notice::success("Item added."));
            }
        }

        self.form.reset();
        self.view.reset_form();
        self.refresh()
    }

    /// Edit/delete activation on a rendered row.
    pub fn list_click(&mut self, action: ListAction, id: &str) -> Result<()> {
        match action {
            ListAction::Edit => {
                // Stale or unknown ids are silently ignored.
                if let Some(item) = self.items.iter().find(|item| item.id == id).cloned() {
                    self.form.enter_edit(&item);
                    self.view.enter_edit_mode(&item);
                }
                Ok(())
            }
            ListAction::Delete => {
                let item = self.items.iter().find(|item| item.id == id).cloned();
                if !self.view.confirm_delete(item.as_ref(), id) {
                    return Ok(());
                }
                self.store.delete(id)?;
                self.notify(Notice::success("Item deleted."));
                self.refresh()
            }
        }
    }

    /// Search text changed: re-derive the filtered view, list only.
    pub fn search_input(&mut self, text: impl Into<String>) -> Result<()> {
        self.query.search = text.into();
        self.render_list()
    }

    /// Status filter changed: re-derive the filtered view, list only.
    pub fn filter_change(&mut self, filter: StatusFilter) -> Result<()> {
        self.query.filter = filter;
        self.render_list()
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice.clone(), Instant::now());
        self.view.notify(&notice);
    }
}
