use crate::parser;
use crate::srt::SubtitleEntry;

use std::collections::HashMap;

/// Entries keyed by id, enumerated in first-insertion order.
///
/// A repeated id keeps the slot of its first occurrence and takes the
/// value of the last one.
#[derive(Debug, Default)]
pub struct SubtitleStore {
    entries: Vec<SubtitleEntry>,
    slots: HashMap<String, usize>,
}

impl SubtitleStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn from_entries<I: IntoIterator<Item = SubtitleEntry>>(subs: I) -> Self {
        let mut store = Self::new();
        for sub in subs {
            store.insert(sub);
        }
        store
    }

    pub fn load(&mut self, text: &str) {
        *self = Self::from_entries(parser::parse(text));
        log::debug!("Loaded {} subtitle(s)", self.len());
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.slots.clear();
    }

    /// Replaces the stored value for `sub.id`. Unknown ids are ignored;
    /// the return value says whether anything was replaced.
    pub fn update(&mut self, sub: SubtitleEntry) -> bool {
        match self.slots.get(&sub.id) {
            Some(&slot) => {
                log::trace!("Updating subtitle {}", sub.id);
                self.entries[slot] = sub;
                true
            }
            None => {
                log::debug!("Ignoring update for unknown subtitle {}", sub.id);
                false
            }
        }
    }

    pub fn entries(&self) -> Vec<SubtitleEntry> {
        self.entries.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubtitleEntry> {
        self.entries.iter()
    }

    pub fn get(&self, id: &str) -> Option<&SubtitleEntry> {
        self.slots.get(id).map(|&slot| &self.entries[slot])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, sub: SubtitleEntry) {
        match self.slots.get(&sub.id) {
            Some(&slot) => self.entries[slot] = sub,
            None => {
                self.slots.insert(sub.id.clone(), self.entries.len());
                self.entries.push(sub);
            }
        }
    }
}
