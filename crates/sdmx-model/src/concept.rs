//! Concepts and concept schemes.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::artefact::{MaintainableHeader, NameableHeader};
use crate::representation::Representation;

/// A single concept in a `ConceptScheme`: the semantic definition a
/// component points at via its `concept_identity`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Concept {
    pub nameable: NameableHeader,
    pub parent_id: Option<String>,
    /// The concept's own core representation, if it declares one (a
    /// component may still override this with its own `LocalRepresentation`).
    pub core_representation: Option<Representation>,
}

impl Deref for Concept {
    type Target = NameableHeader;
    fn deref(&self) -> &Self::Target {
        &self.nameable
    }
}

impl DerefMut for Concept {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.nameable
    }
}

impl Concept {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            nameable: NameableHeader::new(id),
            parent_id: None,
            core_representation: None,
        }
    }
}

/// A maintainable list of [`Concept`]s. Kept distinct from the generic
/// `ItemScheme` in `item.rs` because concepts carry a representation that
/// plain items don't.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConceptScheme {
    pub maintainable: MaintainableHeader,
    pub items: Vec<Concept>,
}

impl Deref for ConceptScheme {
    type Target = MaintainableHeader;
    fn deref(&self) -> &Self::Target {
        &self.maintainable
    }
}

impl DerefMut for ConceptScheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.maintainable
    }
}

impl ConceptScheme {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            maintainable: MaintainableHeader::new(id),
            items: Vec::new(),
        }
    }

    pub fn add_item(&mut self, item: Concept) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    pub fn find(&self, id: &str) -> Option<&Concept> {
        self.items.iter().find(|i| i.id == id)
    }
}
