use lista_types::Item;

use crate::filter::SearchQuery;
use crate::form::FormState;
use crate::view_models::{Counters, ItemRow, ListViewModel};

/// Project the filtered view plus the full collection into the list view
/// model. Pure function; the caller decides what to do with it (text table,
/// JSON dump, interactive screen).
pub fn present_list(
    filtered: &[Item],
    all_items: &[Item],
    query: &SearchQuery,
    form: &FormState,
) -> ListViewModel {
    ListViewModel {
        rows: filtered.iter().map(ItemRow::from).collect(),
        empty: filtered.is_empty(),
        counters: Counters::tally(all_items),
        search: query.search.clone(),
        filter: query.filter,
        form: form.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::apply_filter;
    use lista_types::{Status, StatusFilter};

    fn item(titulo: &str, status: Status) -> Item {
        Item {
            id: format!("id-{}", titulo),
            titulo: titulo.to_string(),
            status,
        }
    }

    #[test]
    fn empty_collection_presents_empty_state() {
        let vm = present_list(&[], &[], &SearchQuery::default(), &FormState::default());
        assert!(vm.empty);
        assert!(vm.rows.is_empty());
        assert_eq!(vm.counters.total, 0);
        assert_eq!(vm.counters.pending, 0);
        assert_eq!(vm.counters.done, 0);
    }

    #[test]
    fn counters_reflect_the_full_collection_not_the_filtered_view() {
        let all = vec![
            item("a", Status::Pendente),
            item("b", Status::Concluido),
            item("c", Status::EmAndamento),
        ];
        let query = SearchQuery::new("", StatusFilter::Only(Status::Concluido));
        let filtered = apply_filter(&all, &query);

        let vm = present_list(&filtered, &all, &query, &FormState::default());
        assert_eq!(vm.rows.len(), 1);
        assert_eq!(vm.rows[0].titulo, "b");
        assert!(!vm.empty);

        // Still tallied over all three items.
        assert_eq!(vm.counters.total, 3);
        assert_eq!(vm.counters.pending, 1);
        assert_eq!(vm.counters.done, 1);
    }

    #[test]
    fn in_progress_items_count_toward_total_only() {
        let all = vec![item("a", Status::EmAndamento)];
        let vm = present_list(&all, &all, &SearchQuery::default(), &FormState::default());
        assert_eq!(vm.counters.total, 1);
        assert_eq!(vm.counters.pending, 0);
        assert_eq!(vm.counters.done, 0);
    }

    #[test]
    fn form_mode_is_projected_into_the_view_model() {
        let all = vec![item("a", Status::Pendente)];
        let mut form = FormState::default();
        form.enter_edit(&all[0]);

        let vm = present_list(&all, &all, &SearchQuery::default(), &form);
        assert_eq!(vm.form.editing_id.as_deref(), Some("id-a"));
    }
}
