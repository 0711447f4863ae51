use lista_types::{Item, ItemDraft};

use crate::backend::KvBackend;
use crate::error::Result;
use crate::id::generate_id;

/// The fixed key the collection is persisted under. Kept from the original
/// deployment so existing data files remain readable.
pub const STORAGE_KEY: &str = "crud_items_data";

/// CRUD façade over the single persisted item collection.
///
/// Every mutating operation performs exactly one full read and one full write
/// of the blob. Mutations return the updated collection so callers can
/// re-render without a second read.
pub struct ItemStore<B: KvBackend> {
    backend: B,
}

impl<B: KvBackend> ItemStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the full collection.
    ///
    /// An absent key is an empty collection. A malformed blob is logged and
    /// also treated as empty; the data loss on corruption is accepted rather
    /// than surfaced or retried.
    pub fn get_all(&self) -> Result<Vec<Item>> {
        let Some(blob) = self.backend.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&blob) {
            Ok(items) => Ok(items),
            Err(err) => {
                log::warn!("discarding malformed item blob: {}", err);
                Ok(Vec::new())
            }
        }
    }

    /// Append a new item with a freshly generated id and persist.
    pub fn add(&self, draft: ItemDraft) -> Result<Vec<Item>> {
        let mut items = self.get_all()?;
        items.push(Item {
            id: generate_id(),
            titulo: draft.titulo,
            status: draft.status,
        });
        self.save(&items)?;
        Ok(items)
    }

    /// Overwrite titulo and status of the item with the given id, preserving
    /// the id. Returns `None` without touching storage when the id is absent.
    pub fn update(&self, id: &str, draft: ItemDraft) -> Result<Option<Vec<Item>>> {
        let mut items = self.get_all()?;
        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        item.titulo = draft.titulo;
        item.status = draft.status;
        self.save(&items)?;
        Ok(Some(items))
    }

    /// Remove the item with the given id. An absent id is a no-op, not an
    /// error; the blob is rewritten either way, as the original did.
    pub fn delete(&self, id: &str) -> Result<Vec<Item>> {
        let mut items = self.get_all()?;
        items.retain(|item| item.id != id);
        self.save(&items)?;
        Ok(items)
    }

    fn save(&self, items: &[Item]) -> Result<()> {
        let blob = serde_json::to_string(items)?;
        self.backend.set(STORAGE_KEY, &blob)
    }
}
