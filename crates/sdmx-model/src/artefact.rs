//! The Annotable → Identifiable → Nameable → Versionable → Maintainable
//! header chain.
//!
//! Rust has no class inheritance, so each level is a struct embedded by the
//! level above it and reached through `Deref`/`DerefMut`, which chain
//! transitively: a `MaintainableHeader` field access like `.id` resolves
//! through `NameableHeader` down to `Identity` automatically.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::annotation::Annotation;
use crate::international_string::InternationalString;
use crate::item::Agency;

/// Annotable + Identifiable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub annotations: Vec<Annotation>,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            annotations: Vec::new(),
        }
    }
}

/// Adds Nameable's `name`/`description`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NameableHeader {
    pub identity: Identity,
    pub name: InternationalString,
    pub description: InternationalString,
}

impl Deref for NameableHeader {
    type Target = Identity;
    fn deref(&self) -> &Self::Target {
        &self.identity
    }
}

impl DerefMut for NameableHeader {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.identity
    }
}

impl NameableHeader {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(id),
            name: InternationalString::new(),
            description: InternationalString::new(),
        }
    }
}

/// Adds Versionable's `version` and Maintainable's remaining attributes in
/// one struct: no concrete artifact in this model stops at exactly
/// Versionable, so the two levels are folded together here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaintainableHeader {
    pub nameable: NameableHeader,
    pub version: Option<String>,
    pub maintainer: Option<Agency>,
    pub is_external_reference: bool,
    pub is_final: bool,
    pub uri: Option<String>,
    pub urn: Option<String>,
}

impl Deref for MaintainableHeader {
    type Target = NameableHeader;
    fn deref(&self) -> &Self::Target {
        &self.nameable
    }
}

impl DerefMut for MaintainableHeader {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.nameable
    }
}

impl MaintainableHeader {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            nameable: NameableHeader::new(id),
            version: None,
            maintainer: None,
            is_external_reference: false,
            is_final: false,
            uri: None,
            urn: None,
        }
    }

    /// Build the header for an external-reference stub: only identity is
    /// known, everything else is absent until dereferenced out-of-band.
    pub fn stub(id: impl Into<String>, maintainer: Option<Agency>) -> Self {
        let mut header = Self::new(id);
        header.maintainer = maintainer;
        header.is_external_reference = true;
        header
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deref_chain_reaches_identity() {
        let header = MaintainableHeader::new("CL_SEX");
        assert_eq!(header.id, "CL_SEX");
        assert!(header.annotations.is_empty());
    }
}
