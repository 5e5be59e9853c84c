//! Dataflows and categorisations.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::artefact::MaintainableHeader;

/// A dataflow definition: a maintainable wrapper naming the DSD a data set
/// conforms to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataflowDefinition {
    pub maintainable: MaintainableHeader,
    /// Id of the structure (DSD) this dataflow uses.
    pub structure: Option<String>,
}

impl Deref for DataflowDefinition {
    type Target = MaintainableHeader;
    fn deref(&self) -> &Self::Target {
        &self.maintainable
    }
}

impl DerefMut for DataflowDefinition {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.maintainable
    }
}

impl DataflowDefinition {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            maintainable: MaintainableHeader::new(id),
            structure: None,
        }
    }
}

/// Links a dataflow (or other structure) to a node in a `CategoryScheme`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Categorisation {
    pub maintainable: MaintainableHeader,
    pub source: Option<String>,
    pub target: Option<String>,
}

impl Deref for Categorisation {
    type Target = MaintainableHeader;
    fn deref(&self) -> &Self::Target {
        &self.maintainable
    }
}

impl DerefMut for Categorisation {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.maintainable
    }
}

impl Categorisation {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            maintainable: MaintainableHeader::new(id),
            source: None,
            target: None,
        }
    }
}
