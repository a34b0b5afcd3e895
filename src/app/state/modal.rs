/// Overlay lifecycle of the content modal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Shown {
        id: String,
    },
}

impl ModalState {
    pub fn is_shown(&self) -> bool {
        matches!(self, ModalState::Shown { .. })
    }

    pub fn content_id(&self) -> Option<&str> {
        match self {
            ModalState::Shown { id } => Some(id),
            ModalState::Hidden => None,
        }
    }
}
