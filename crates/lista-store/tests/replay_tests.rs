//! Replay equivalence: any sequence of add/update/delete applied through the
//! store matches the same sequence applied to a plain in-memory reference
//! model. Read-modify-write over a single blob must not lose updates in a
//! single-threaded trace.

use lista_store::{ItemStore, MemoryBackend};
use lista_types::{Item, ItemDraft, Status};

enum Op {
    Add(&'static str, Status),
    // Index into the ids captured so far; out-of-range exercises unknown ids.
    Update(usize, &'static str, Status),
    Delete(usize),
}

fn apply_reference(model: &mut Vec<Item>, op: &Op, ids: &[String]) {
    match op {
        Op::Add(..) => {}
        Op::Update(idx, titulo, status) => {
            if let Some(id) = ids.get(*idx)
                && let Some(item) = model.iter_mut().find(|item| &item.id == id)
            {
                item.titulo = titulo.to_string();
                item.status = *status;
            }
        }
        Op::Delete(idx) => {
            if let Some(id) = ids.get(*idx) {
                model.retain(|item| &item.id != id);
            }
        }
    }
}

#[test]
fn store_replay_matches_reference_model() {
    let ops = [
        Op::Add("alpha", Status::Pendente),
        Op::Add("beta", Status::EmAndamento),
        Op::Update(0, "alpha v2", Status::Concluido),
        Op::Add("gamma", Status::Pendente),
        Op::Delete(1),
        Op::Delete(1), // second delete of the same id
        Op::Update(9, "ghost", Status::Pendente),
        Op::Add("delta", Status::Concluido),
        Op::Update(2, "gamma v2", Status::EmAndamento),
        Op::Delete(9),
    ];

    let store = ItemStore::new(MemoryBackend::new());
    let mut model: Vec<Item> = Vec::new();
    let mut ids: Vec<String> = Vec::new();

    for op in &ops {
        match op {
            Op::Add(titulo, status) => {
                let items = store.add(ItemDraft::new(*titulo, *status)).unwrap();
                let added = items.last().expect("add returns a non-empty collection");
                ids.push(added.id.clone());
                model.push(added.clone());
            }
            Op::Update(idx, titulo, status) => {
                if let Some(id) = ids.get(*idx) {
                    store
                        .update(id, ItemDraft::new(*titulo, *status))
                        .unwrap();
                } else {
                    assert!(
                        store
                            .update("no-such-id", ItemDraft::new(*titulo, *status))
                            .unwrap()
                            .is_none()
                    );
                }
                apply_reference(&mut model, op, &ids);
            }
            Op::Delete(idx) => {
                let id = ids.get(*idx).map(String::as_str).unwrap_or("no-such-id");
                store.delete(id).unwrap();
                apply_reference(&mut model, op, &ids);
            }
        }

        assert_eq!(store.get_all().unwrap(), model);
    }
}
