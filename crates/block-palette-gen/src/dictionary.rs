//! Palette-ordered dictionary of block states.
//!
//! A state's network ID is its position in the palette. Alongside it every
//! entry carries a `meta` value: a counter that restarts at 0 for each block
//! type name, giving legacy `(name, meta)` lookups a stable mapping.

use std::collections::HashMap;

use crate::state::BlockState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockStateDictionaryEntry {
    pub state: BlockState,
    pub meta: u32,
}

#[derive(Debug, Clone, Default)]
pub struct BlockStateDictionary {
    entries: Vec<BlockStateDictionaryEntry>,
    state_ids: HashMap<BlockState, u32>,
    name_meta_ids: HashMap<(String, u32), u32>,
}

impl BlockStateDictionary {
    /// Build the dictionary from states in palette order.
    #[must_use]
    pub fn from_states(states: Vec<BlockState>) -> Self {
        let mut next_meta: HashMap<String, u32> = HashMap::new();
        let mut dictionary = Self::default();

        for (id, state) in states.into_iter().enumerate() {
            let id = id as u32;
            let meta = next_meta.entry(state.name().to_string()).or_insert(0);

            dictionary
                .name_meta_ids
                .insert((state.name().to_string(), *meta), id);
            // Duplicate states keep the ID of their first occurrence
            dictionary.state_ids.entry(state.clone()).or_insert(id);
            dictionary.entries.push(BlockStateDictionaryEntry {
                state,
                meta: *meta,
            });

            *meta += 1;
        }

        dictionary
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entry(&self, state_id: u32) -> Option<&BlockStateDictionaryEntry> {
        self.entries.get(state_id as usize)
    }

    pub fn entries(&self) -> impl Iterator<Item = &BlockStateDictionaryEntry> {
        self.entries.iter()
    }

    pub fn states(&self) -> impl Iterator<Item = &BlockState> {
        self.entries.iter().map(|entry| &entry.state)
    }

    #[must_use]
    pub fn lookup_state_id(&self, state: &BlockState) -> Option<u32> {
        self.state_ids.get(state).copied()
    }

    #[must_use]
    pub fn lookup_state_id_from_name_meta(&self, name: &str, meta: u32) -> Option<u32> {
        self.name_meta_ids.get(&(name.to_string(), meta)).copied()
    }
}
