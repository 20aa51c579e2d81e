use crate::store::SubtitleStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditState {
    Viewing,
    Editing { buffer: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Opened,
    Committed,
    Closed,
}

#[derive(Debug, Clone)]
pub struct EntryEditor {
    id: String,
    state: EditState,
}

impl EntryEditor {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: id.into(),
            state: EditState::Viewing,
        }
    }

    pub fn state(&self) -> &EditState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.state, EditState::Editing { .. })
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) -> bool {
        match &mut self.state {
            EditState::Editing { buffer } => {
                *buffer = text.into();
                true
            }
            EditState::Viewing => false,
        }
    }

    /// Opens the editor pre-filled with the stored text, or closes it and
    /// commits the trimmed buffer when it differs from the stored text.
    pub fn toggle(&mut self, store: &mut SubtitleStore) -> Toggled {
        let current = store.get(&self.id);
        match std::mem::replace(&mut self.state, EditState::Viewing) {
            EditState::Viewing => {
                let buffer = current.and_then(|s| s.sub()).unwrap_or_default();
                self.state = EditState::Editing {
                    buffer: buffer.to_string(),
                };
                Toggled::Opened
            }
            EditState::Editing { buffer } => {
                let edited = buffer.trim();
                let changed = current.filter(|s| s.sub().unwrap_or_default() != edited);
                match changed.map(|s| s.with_sub(edited)) {
                    Some(sub) => {
                        store.update(sub);
                        Toggled::Committed
                    }
                    None => Toggled::Closed,
                }
            }
        }
    }
}
