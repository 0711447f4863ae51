use lista_types::Item;

/// The two states of the submit form, keyed purely by whether an item id is
/// loaded. Entering edit while already editing just overwrites the target;
/// there are no nested edit sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormState {
    #[default]
    Add,
    Edit {
        id: String,
    },
}

impl FormState {
    /// Load an item into the form (Add -> Edit, or retarget an active Edit).
    pub fn enter_edit(&mut self, item: &Item) {
        *self = FormState::Edit {
            id: item.id.clone(),
        };
    }

    /// Clear the form back to add mode.
    pub fn reset(&mut self) {
        *self = FormState::Add;
    }

    pub fn editing_id(&self) -> Option<&str> {
        match self {
            FormState::Add => None,
            FormState::Edit { id } => Some(id),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, FormState::Edit { .. })
    }
}
