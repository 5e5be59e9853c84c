//! Components of a data structure: dimensions, the measure, and attributes.
//!
//! The original reader stores these polymorphically and tells them apart
//! with `isinstance` checks against a class hierarchy (`Dimension`,
//! `TimeDimension`, `PrimaryMeasure`, `DataAttribute`, all under
//! `Component`). Rust has no open class hierarchy to mirror that with, so
//! `Component` is a closed enum instead: every place the original runtime-
//! dispatches on subclass, this model matches on variant, and the working
//! stack that holds components never needs a "is this a subclass of X"
//! lookup, only an exact enum-variant match.

use serde::{Deserialize, Serialize};

use crate::artefact::Identity;
use crate::representation::Representation;

/// Fields shared by every kind of component.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentCore {
    pub identity: Identity,
    /// Id of the `Concept` this component takes its identity from.
    pub concept_identity: Option<String>,
    /// Overrides the concept's core representation, when present.
    pub local_representation: Option<Representation>,
}

impl ComponentCore {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            identity: Identity::new(id),
            concept_identity: None,
            local_representation: None,
        }
    }
}

/// How a `DataAttribute` attaches to the rest of the data structure: to one
/// or more dimensions (a group key), to the full set of dimensions (an
/// observation-level attribute), to a named `AttachmentGroup`, or to
/// nothing in particular (dataset-level).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AttributeRelationship {
    /// Attached to the named dimensions (or the group they form).
    Dimensions(Vec<String>),
    /// Attached to a `<str:Group>`'s key by name.
    Group(String),
    /// Attached to the primary measure / every observation.
    Observation,
    /// Not attached to anything narrower than the dataset.
    None,
}

/// A single structural component: a dimension, the (at most one) time
/// dimension, the primary measure, or an attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Component {
    Dimension {
        core: ComponentCore,
        /// Position within the key, 1-based. `None` until
        /// `ComponentList::assign_order` runs.
        order: Option<u32>,
    },
    TimeDimension {
        core: ComponentCore,
        order: Option<u32>,
    },
    MeasureDimension {
        core: ComponentCore,
        order: Option<u32>,
    },
    PrimaryMeasure {
        core: ComponentCore,
    },
    DataAttribute {
        core: ComponentCore,
        relationship: AttributeRelationship,
        assignment_status: Option<String>,
    },
}

impl Component {
    pub fn core(&self) -> &ComponentCore {
        match self {
            Component::Dimension { core, .. }
            | Component::TimeDimension { core, .. }
            | Component::MeasureDimension { core, .. }
            | Component::PrimaryMeasure { core }
            | Component::DataAttribute { core, .. } => core,
        }
    }

    pub fn core_mut(&mut self) -> &mut ComponentCore {
        match self {
            Component::Dimension { core, .. }
            | Component::TimeDimension { core, .. }
            | Component::MeasureDimension { core, .. }
            | Component::PrimaryMeasure { core }
            | Component::DataAttribute { core, .. } => core,
        }
    }

    pub fn id(&self) -> &str {
        &self.core().identity.id
    }

    pub fn is_dimension_like(&self) -> bool {
        matches!(
            self,
            Component::Dimension { .. } | Component::TimeDimension { .. } | Component::MeasureDimension { .. }
        )
    }

    pub fn order(&self) -> Option<u32> {
        match self {
            Component::Dimension { order, .. }
            | Component::TimeDimension { order, .. }
            | Component::MeasureDimension { order, .. } => *order,
            _ => None,
        }
    }

    pub fn set_order(&mut self, value: u32) {
        match self {
            Component::Dimension { order, .. }
            | Component::TimeDimension { order, .. }
            | Component::MeasureDimension { order, .. } => *order = Some(value),
            _ => {}
        }
    }
}
