//! Ordered lists of components: a DSD's dimension descriptor, measure
//! descriptor, and attribute descriptor.

use serde::{Deserialize, Serialize};

use crate::component::Component;
use crate::error::{ModelError, Result};

/// Sentinel order for a dimension that had to be created implicitly (a
/// `<gen:ObsDimension>` that names a dimension id absent from the supplied
/// DSD). It sorts last and is excluded from renumbering so it never
/// displaces a declared dimension's position.
pub const FORCED_CREATION_ORDER: u32 = u32::MAX;

/// An ordered, id-keyed list of components: `DimensionDescriptor`,
/// `AttributeDescriptor`, and `MeasureDescriptor` are all this same shape.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentList {
    pub id: String,
    pub components: Vec<Component>,
}

impl ComponentList {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            components: Vec::new(),
        }
    }

    pub fn push(&mut self, component: Component) {
        self.components.push(component);
    }

    pub fn find(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id() == id)
    }

    /// Assign `order` to every dimension-like component that doesn't already
    /// carry an explicit `position` attribute: explicit positions always
    /// win, remaining dimensions are numbered `1..N` in declaration order,
    /// and any component already pinned to [`FORCED_CREATION_ORDER`] is left
    /// untouched.
    pub fn assign_order(&mut self) -> Result<()> {
        if !self.components.iter().any(Component::is_dimension_like) {
            return Err(ModelError::NotADimensionList(self.id.clone()));
        }

        let mut next = 1u32;
        for component in &mut self.components {
            if !component.is_dimension_like() {
                continue;
            }
            match component.order() {
                Some(FORCED_CREATION_ORDER) => continue,
                Some(_) => continue,
                None => {
                    component.set_order(next);
                    next += 1;
                }
            }
        }
        Ok(())
    }
}

/// The ordered set of dimensions (and, at most, one time dimension) that
/// form a DSD's key.
pub type DimensionDescriptor = ComponentList;

/// The set of data attributes declared by a DSD.
pub type AttributeDescriptor = ComponentList;

/// The primary measure declared by a DSD, modeled as a one-component list
/// for symmetry with the other descriptors.
pub type MeasureDescriptor = ComponentList;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentCore;

    #[test]
    fn assigns_declaration_order_skipping_explicit_positions() {
        let mut list = DimensionDescriptor::new("DimensionDescriptor");
        list.push(Component::Dimension {
            core: ComponentCore::new("FREQ"),
            order: None,
        });
        list.push(Component::Dimension {
            core: ComponentCore::new("REF_AREA"),
            order: Some(1),
        });
        list.push(Component::TimeDimension {
            core: ComponentCore::new("TIME_PERIOD"),
            order: None,
        });

        list.assign_order().unwrap();

        assert_eq!(list.find("REF_AREA").unwrap().order(), Some(1));
        assert_eq!(list.find("FREQ").unwrap().order(), Some(2));
        assert_eq!(list.find("TIME_PERIOD").unwrap().order(), Some(3));
    }

    #[test]
    fn forced_creation_dimension_keeps_sentinel() {
        let mut list = DimensionDescriptor::new("DimensionDescriptor");
        list.push(Component::Dimension {
            core: ComponentCore::new("FREQ"),
            order: None,
        });
        list.push(Component::Dimension {
            core: ComponentCore::new("EXTRA"),
            order: Some(FORCED_CREATION_ORDER),
        });

        list.assign_order().unwrap();

        assert_eq!(list.find("FREQ").unwrap().order(), Some(1));
        assert_eq!(list.find("EXTRA").unwrap().order(), Some(FORCED_CREATION_ORDER));
    }
}
