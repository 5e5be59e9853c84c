//! Items, item schemes, and the family of schemes that are just a
//! maintainable list of items (`Codelist`, `AgencyScheme`, `CategoryScheme`,
//! `ConceptScheme`, `DataProviderScheme`).
//!
//! An item's parent is recorded as `parent_id: Option<String>` rather than a
//! shared/owned pointer to the parent `Item`: SDMX item hierarchies (codes
//! nested under codes, categories under categories) are trees that live
//! entirely inside one scheme, so an id-indexed lookup against the owning
//! scheme's `items` vector is enough, and avoids `Rc<RefCell<_>>` cycles.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::artefact::{MaintainableHeader, NameableHeader};

/// A member of an item scheme: a `Code`, `Category`, `Agency`, or
/// `DataProvider`, all of which share this same shape in the information
/// model.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Item {
    pub nameable: NameableHeader,
    /// Id of the enclosing item within the same scheme, for nested schemes
    /// (a `Category` under a parent `Category`, a `Code` under a parent
    /// `Code`). `None` for a top-level item.
    pub parent_id: Option<String>,
}

impl Deref for Item {
    type Target = NameableHeader;
    fn deref(&self) -> &Self::Target {
        &self.nameable
    }
}

impl DerefMut for Item {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.nameable
    }
}

impl Item {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            nameable: NameableHeader::new(id),
            parent_id: None,
        }
    }
}

/// An organisation that maintains artifacts. Agencies are items of an
/// `AgencyScheme`, but are also embedded directly in `MaintainableHeader` to
/// record an artifact's maintainer.
pub type Agency = Item;

/// A member of a `Codelist`.
pub type Code = Item;

/// A member of a `CategoryScheme`.
pub type Category = Item;

/// A member of a `DataProviderScheme`.
pub type DataProvider = Item;

/// A maintainable list of items, flattened and de-duplicated by id: an item
/// declared both nested (inside its parent's XML element) and later
/// referenced by a `<str:Parent>` element is the same logical item, kept
/// once.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ItemScheme {
    pub maintainable: MaintainableHeader,
    pub is_partial: bool,
    pub items: Vec<Item>,
}

impl Deref for ItemScheme {
    type Target = MaintainableHeader;
    fn deref(&self) -> &Self::Target {
        &self.maintainable
    }
}

impl DerefMut for ItemScheme {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.maintainable
    }
}

impl ItemScheme {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            maintainable: MaintainableHeader::new(id),
            is_partial: false,
            items: Vec::new(),
        }
    }

    /// Insert `item`, replacing any existing item with the same id.
    pub fn add_item(&mut self, item: Item) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == item.id) {
            *existing = item;
        } else {
            self.items.push(item);
        }
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.id == id)
    }
}

/// A list of codes. See [`ItemScheme`].
pub type Codelist = ItemScheme;

/// A list of agencies. See [`ItemScheme`].
pub type AgencyScheme = ItemScheme;

/// A list of categories. See [`ItemScheme`].
pub type CategoryScheme = ItemScheme;

/// A list of data providers. See [`ItemScheme`].
pub type DataProviderScheme = ItemScheme;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_item_replaces_by_id() {
        let mut scheme = Codelist::new("CL_SEX");
        let mut male = Item::new("M");
        male.name.add_localization("en", "Male");
        scheme.add_item(male);

        let mut male_again = Item::new("M");
        male_again.name.add_localization("en", "Male (revised)");
        scheme.add_item(male_again);

        assert_eq!(scheme.items.len(), 1);
        assert_eq!(
            scheme.find("M").unwrap().name.default_label(),
            Some("Male (revised)")
        );
    }
}
