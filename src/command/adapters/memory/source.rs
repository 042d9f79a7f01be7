//! Definition source backed by a fixed list.

use std::sync::{Arc, PoisonError, RwLock};

use crate::command::{domain::Definition, ports::DefinitionSource};

/// Definition source returning the definitions it was built with.
#[derive(Debug, Clone, Default)]
pub struct StaticDefinitionSource {
    definitions: Arc<RwLock<Vec<Definition>>>,
}

impl StaticDefinitionSource {
    /// Creates a source yielding `definitions` on every discovery.
    #[must_use]
    pub fn new(definitions: impl IntoIterator<Item = Definition>) -> Self {
        Self {
            definitions: Arc::new(RwLock::new(definitions.into_iter().collect())),
        }
    }

    /// Replaces the definitions returned by later discoveries.
    pub fn replace(&self, definitions: impl IntoIterator<Item = Definition>) {
        let mut guard = self
            .definitions
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = definitions.into_iter().collect();
    }
}

impl DefinitionSource for StaticDefinitionSource {
    fn discover(&self) -> Vec<Definition> {
        self.definitions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
