//! Sample item construction and direct blob access for tests.

use anyhow::Result;
use std::path::Path;

use lista_types::{Item, Status};

/// Build an item with a deterministic id.
pub fn item(id: &str, titulo: &str, status: Status) -> Item {
    Item {
        id: id.to_string(),
        titulo: titulo.to_string(),
        status,
    }
}

/// A small mixed-status collection.
pub fn sample_collection() -> Vec<Item> {
    vec![
        item("m1a", "Buy milk", Status::Pendente),
        item("m2b", "Write report", Status::EmAndamento),
        item("m3c", "Ship release", Status::Concluido),
    ]
}

/// Serialize items into a blob file the store will read.
pub fn write_blob(path: &Path, items: &[Item]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, serde_json::to_string(items)?)?;
    Ok(())
}

/// Read a blob file back into items.
pub fn read_blob(path: &Path) -> Result<Vec<Item>> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
