use lista_types::{Item, Status, StatusFilter};
use serde::Serialize;

use crate::form::FormState;

/// One rendered row: raw data only, formatting belongs to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemRow {
    pub id: String,
    pub titulo: String,
    pub status: Status,
}

impl From<&Item> for ItemRow {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            titulo: item.titulo.clone(),
            status: item.status,
        }
    }
}

/// Summary counters, always computed over the unfiltered collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Counters {
    pub total: usize,
    pub pending: usize,
    pub done: usize,
}

impl Counters {
    pub fn tally(all_items: &[Item]) -> Self {
        Self {
            total: all_items.len(),
            pending: all_items
                .iter()
                .filter(|item| item.status == Status::Pendente)
                .count(),
            done: all_items
                .iter()
                .filter(|item| item.status == Status::Concluido)
                .count(),
        }
    }
}

/// Form projection: which mode the submit form is in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormViewModel {
    pub editing_id: Option<String>,
}

impl From<&FormState> for FormViewModel {
    fn from(form: &FormState) -> Self {
        Self {
            editing_id: form.editing_id().map(str::to_string),
        }
    }
}

/// Everything the view needs to draw the list screen.
///
/// `rows` is the filtered view; `counters` always reflect the full
/// collection, independent of any active search or filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListViewModel {
    pub rows: Vec<ItemRow>,
    pub empty: bool,
    pub counters: Counters,
    pub search: String,
    pub filter: StatusFilter,
    pub form: FormViewModel,
}
