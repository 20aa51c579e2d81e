use crate::editor::{EntryEditor, Toggled};
use crate::serialiser;
use crate::srt::SubtitleEntry;
use crate::store::SubtitleStore;

use std::collections::HashMap;
use std::path::Path;

const EDIT_SUFFIX: &str = "_edit";
const EXTENSION: &str = "srt";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub contents: String,
}

/// Owns the store for the currently loaded file together with the
/// per-subtitle editors and the name of the file to generate.
#[derive(Debug, Default)]
pub struct Session {
    store: SubtitleStore,
    editors: HashMap<String, EntryEditor>,
    output_name: String,
    pending_name: Option<String>,
    generation: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_load(&mut self, file_name: &str) -> LoadTicket {
        self.generation += 1;
        self.pending_name = Some(generated_name(file_name));
        LoadTicket {
            generation: self.generation,
        }
    }

    pub fn finish_load(&mut self, ticket: LoadTicket, text: &str) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale load {} (current is {})",
                ticket.generation,
                self.generation
            );
            return false;
        }
        if let Some(name) = self.pending_name.take() {
            self.output_name = name;
        }
        if text.is_empty() {
            self.store.clear();
        } else {
            self.store.load(text);
        }
        self.editors = self
            .store
            .iter()
            .map(|s| (s.id().to_string(), EntryEditor::new(s.id())))
            .collect();
        true
    }

    pub fn load(&mut self, file_name: &str, text: &str) {
        let ticket = self.begin_load(file_name);
        self.finish_load(ticket, text);
    }

    pub fn is_active(&self) -> bool {
        !self.store.is_empty()
    }

    pub fn entries(&self) -> Vec<SubtitleEntry> {
        self.store.entries()
    }

    pub fn store(&self) -> &SubtitleStore {
        &self.store
    }

    pub fn editor(&self, id: &str) -> Option<&EntryEditor> {
        self.editors.get(id)
    }

    pub fn toggle(&mut self, id: &str) -> Option<Toggled> {
        let editor = self.editors.get_mut(id)?;
        Some(editor.toggle(&mut self.store))
    }

    pub fn set_text(&mut self, id: &str, text: &str) -> bool {
        self.editors
            .get_mut(id)
            .map_or(false, |editor| editor.set_text(text))
    }

    pub fn edit(&mut self, id: &str, text: &str) -> Option<Toggled> {
        if !self.editor(id)?.is_editing() {
            self.toggle(id);
        }
        self.set_text(id, text);
        self.toggle(id)
    }

    pub fn output_name(&self) -> &str {
        &self.output_name
    }

    pub fn set_output_name<S: Into<String>>(&mut self, name: S) {
        self.output_name = name.into();
    }

    pub fn generate(&self) -> Option<Export> {
        if !self.is_active() {
            return None;
        }
        Some(Export {
            file_name: format!("{}.{}", self.output_name, EXTENSION),
            contents: serialiser::serialise(&self.store.entries()),
        })
    }
}

fn generated_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}{}", stem, EDIT_SUFFIX)
}
