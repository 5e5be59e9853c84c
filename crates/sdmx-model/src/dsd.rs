//! Data structure definitions: the dimension/attribute/measure descriptors
//! that give a data set's keys and attribute values their shape.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::artefact::MaintainableHeader;
use crate::component::{AttributeRelationship, Component, ComponentCore};
use crate::component_list::{AttributeDescriptor, ComponentList, DimensionDescriptor, MeasureDescriptor, FORCED_CREATION_ORDER};
use crate::error::{ModelError, Result};

/// A named subset of dimensions that group attributes can attach to
/// (`<str:Group>`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDimensionDescriptor {
    pub id: String,
    pub dimension_ids: Vec<String>,
}

/// A data structure definition: the complete shape of a data set's key,
/// attributes, and measure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataStructureDefinition {
    pub maintainable: MaintainableHeader,
    pub dimensions: DimensionDescriptor,
    pub measures: MeasureDescriptor,
    pub attributes: AttributeDescriptor,
    pub groups: Vec<GroupDimensionDescriptor>,
}

impl Deref for DataStructureDefinition {
    type Target = MaintainableHeader;
    fn deref(&self) -> &Self::Target {
        &self.maintainable
    }
}

impl DerefMut for DataStructureDefinition {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.maintainable
    }
}

impl DataStructureDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            maintainable: MaintainableHeader::new(id),
            dimensions: ComponentList::new("DimensionDescriptor"),
            measures: ComponentList::new("MeasureDescriptor"),
            attributes: ComponentList::new("AttributeDescriptor"),
            groups: Vec::new(),
        }
    }

    /// Look up any component (dimension, time dimension, measure, or
    /// attribute) by id across all three descriptors.
    pub fn find_component(&self, id: &str) -> Option<&Component> {
        self.dimensions
            .find(id)
            .or_else(|| self.measures.find(id))
            .or_else(|| self.attributes.find(id))
    }

    pub fn find_group(&self, id: &str) -> Option<&GroupDimensionDescriptor> {
        self.groups.iter().find(|g| g.id == id)
    }

    /// Declare `id` as a dimension if it isn't already one, at the
    /// [`FORCED_CREATION_ORDER`] sentinel position. Used when a
    /// structure-specific message carries no caller-supplied DSD and the
    /// reader has to grow one to fit the observed attribute set.
    pub fn ensure_dimension(&mut self, id: &str) {
        if self.dimensions.find(id).is_none() {
            self.dimensions.push(Component::Dimension {
                core: ComponentCore::new(id),
                order: Some(FORCED_CREATION_ORDER),
            });
        }
    }

    /// Declare `id` as an unattached data attribute if it isn't already a
    /// known component, for the same reason as
    /// [`DataStructureDefinition::ensure_dimension`].
    pub fn ensure_attribute(&mut self, id: &str) {
        if self.find_component(id).is_none() {
            self.attributes.push(Component::DataAttribute {
                core: ComponentCore::new(id),
                relationship: AttributeRelationship::None,
                assignment_status: None,
            });
        }
    }

    /// Declare `id` as the primary measure if no measure is known yet,
    /// for the same reason as
    /// [`DataStructureDefinition::ensure_dimension`].
    pub fn ensure_measure(&mut self, id: &str) {
        if self.measures.find(id).is_none() {
            self.measures.push(Component::PrimaryMeasure { core: ComponentCore::new(id) });
        }
    }

    /// Build an ordered key from raw `(dimension_id, value)` pairs, sorted
    /// by each dimension's assigned order. Every id must already be
    /// declared on this DSD; the caller extends the DSD first (per
    /// `ss_missing_dsd`) if it might not be.
    pub fn make_key(&self, values: &[(String, String)]) -> Result<Vec<(String, String)>> {
        let mut ordered: Vec<(u32, String, String)> = Vec::with_capacity(values.len());
        for (id, value) in values {
            let component = self
                .dimensions
                .find(id)
                .ok_or_else(|| ModelError::UnknownComponent(id.clone()))?;
            let order = component.order().unwrap_or(u32::MAX);
            ordered.push((order, id.clone(), value.clone()));
        }
        ordered.sort_by_key(|(order, ..)| *order);
        Ok(ordered.into_iter().map(|(_, id, value)| (id, value)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentCore;

    fn sample_dsd() -> DataStructureDefinition {
        let mut dsd = DataStructureDefinition::new("DSD_TEST");
        dsd.dimensions.push(Component::Dimension {
            core: ComponentCore::new("FREQ"),
            order: Some(1),
        });
        dsd.dimensions.push(Component::Dimension {
            core: ComponentCore::new("REF_AREA"),
            order: Some(2),
        });
        dsd
    }

    #[test]
    fn make_key_orders_by_dimension_position() {
        let dsd = sample_dsd();
        let key = dsd
            .make_key(&[
                ("REF_AREA".to_string(), "UK".to_string()),
                ("FREQ".to_string(), "A".to_string()),
            ])
            .unwrap();
        assert_eq!(
            key,
            vec![
                ("FREQ".to_string(), "A".to_string()),
                ("REF_AREA".to_string(), "UK".to_string()),
            ]
        );
    }

    #[test]
    fn make_key_rejects_unknown_component() {
        let dsd = sample_dsd();
        let err = dsd.make_key(&[("BOGUS".to_string(), "X".to_string())]);
        assert!(matches!(err, Err(ModelError::UnknownComponent(_))));
    }
}
