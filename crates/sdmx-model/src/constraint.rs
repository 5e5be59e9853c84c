//! Content constraints: the allowed or actual value sets a data provider
//! declares for a dataflow or provision agreement.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::artefact::MaintainableHeader;

/// Whether a `ConstraintRole` names the values a provider *could* report
/// (`Allowable`) or *did* report (`Actual`). SDMX-ML spells these with
/// mixed case and sometimes a leading `urn:sdmx:...` role qualifier; the
/// reader normalizes both to this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConstraintRoleType {
    Allowable,
    Actual,
}

impl ConstraintRoleType {
    /// Normalize a raw `role` attribute value, case-insensitively and
    /// ignoring any `urn:sdmx:...` prefix, to a `ConstraintRoleType`.
    pub fn normalize(raw: &str) -> Option<Self> {
        let tail = raw.rsplit(':').next().unwrap_or(raw);
        if tail.eq_ignore_ascii_case("allowable") {
            Some(ConstraintRoleType::Allowable)
        } else if tail.eq_ignore_ascii_case("actual") {
            Some(ConstraintRoleType::Actual)
        } else {
            None
        }
    }
}

/// The role a `ContentConstraint` plays, wrapping a [`ConstraintRoleType`]
/// so future attribution metadata has somewhere to grow without another
/// signature change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstraintRole {
    pub role_type: ConstraintRoleType,
}

/// One permitted or reported value for a component within a
/// `MemberSelection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberValue {
    pub value: String,
    pub cascade_values: bool,
}

/// The set of permitted values for a single component (dimension or
/// attribute) within a `CubeRegion`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSelection {
    /// Id of the component this selection constrains. When a
    /// `ContentConstraint` is absent, member selections fall back to a
    /// standalone `Component` reference (the `_ms` branch in the original
    /// handler covers both).
    pub component_id: String,
    pub include: bool,
    pub values: Vec<MemberValue>,
}

/// A region of a data structure's key space: a conjunction of per-component
/// member selections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CubeRegion {
    pub include: bool,
    pub member_selections: Vec<MemberSelection>,
}

/// One value within a `DataKey`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentValue {
    pub component_id: String,
    pub value: String,
}

/// A single fully-specified key within a `DataKeySet`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataKey {
    pub include: bool,
    pub key_values: Vec<ComponentValue>,
}

/// An explicit enumeration of keys, as an alternative to a `CubeRegion`'s
/// per-component value lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataKeySet {
    pub include: bool,
    pub keys: Vec<DataKey>,
}

/// A content constraint: the allowed (or actual) value space for the
/// dataflows, provision agreements, or data providers it attaches to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentConstraint {
    pub maintainable: MaintainableHeader,
    pub role: Option<ConstraintRole>,
    pub cube_regions: Vec<CubeRegion>,
    pub data_key_sets: Vec<DataKeySet>,
    /// Ids of the dataflows, provision agreements, or other artifacts this
    /// constraint applies to.
    pub constraint_attachment: Vec<String>,
}

impl Deref for ContentConstraint {
    type Target = MaintainableHeader;
    fn deref(&self) -> &Self::Target {
        &self.maintainable
    }
}

impl DerefMut for ContentConstraint {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.maintainable
    }
}

impl ContentConstraint {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            maintainable: MaintainableHeader::new(id),
            role: None,
            cube_regions: Vec::new(),
            data_key_sets: Vec::new(),
            constraint_attachment: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_role_with_urn_prefix() {
        assert_eq!(
            ConstraintRoleType::normalize("urn:sdmx:org.sdmx.infomodel.registry.ConstraintRoleType=Allowable"),
            Some(ConstraintRoleType::Allowable)
        );
        assert_eq!(ConstraintRoleType::normalize("actual"), Some(ConstraintRoleType::Actual));
        assert_eq!(ConstraintRoleType::normalize("bogus"), None);
    }
}
