use lista_types::{Item, StatusFilter};

/// Search text plus status filter, as entered by the user.
///
/// The search text is trimmed and matched case-insensitively as a substring
/// of the title; an empty trimmed text matches everything. Both predicates
/// must hold for an item to pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub search: String,
    pub filter: StatusFilter,
}

impl SearchQuery {
    pub fn new(search: impl Into<String>, filter: StatusFilter) -> Self {
        Self {
            search: search.into(),
            filter,
        }
    }
}

/// The filter predicate: case-insensitive title substring AND status match.
pub fn matches(item: &Item, query: &SearchQuery) -> bool {
    let needle = query.search.trim().to_lowercase();
    let matches_search = item.titulo.to_lowercase().contains(&needle);
    matches_search && query.filter.accepts(item.status)
}

/// Derive the filtered view. Preserves insertion order.
pub fn apply_filter(items: &[Item], query: &SearchQuery) -> Vec<Item> {
    items
        .iter()
        .filter(|item| matches(item, query))
        .cloned()
        .collect()
}
