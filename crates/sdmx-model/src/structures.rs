//! The `Structures` container of a structure message, and the `Artefact`
//! enum used to hold its heterogeneous maintainable contents.

use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};

use crate::artefact::MaintainableHeader;
use crate::concept::ConceptScheme;
use crate::constraint::ContentConstraint;
use crate::dataflow::{Categorisation, DataflowDefinition};
use crate::dsd::DataStructureDefinition;
use crate::item::{AgencyScheme, CategoryScheme, Codelist, DataProviderScheme};

/// A scheme of reporting organisations other than agencies or data
/// providers (`OrganisationSchemes` covers several organisation kinds in
/// the full information model; this reader only needs the maintainable
/// shell to round-trip the id).
pub type OrganisationScheme = crate::item::ItemScheme;

/// An agreement between a data provider and a receiving agency to supply
/// data under a given dataflow and constraint. Modeled as a thin
/// maintainable stub: the reader resolves provision agreement references
/// but this reader never needs to act on their substructure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvisionAgreement {
    pub maintainable: MaintainableHeader,
    pub structure_usage: Option<String>,
    pub data_provider: Option<String>,
}

impl Deref for ProvisionAgreement {
    type Target = MaintainableHeader;
    fn deref(&self) -> &Self::Target {
        &self.maintainable
    }
}

impl DerefMut for ProvisionAgreement {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.maintainable
    }
}

impl ProvisionAgreement {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            maintainable: MaintainableHeader::new(id),
            structure_usage: None,
            data_provider: None,
        }
    }
}

/// Any maintainable artifact a structure message can carry. A closed enum
/// rather than a trait object: every artifact kind this reader builds is
/// known in advance, and the working stack only ever needs to match on
/// which kind it holds, never to downcast one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Artefact {
    Codelist(Codelist),
    AgencyScheme(AgencyScheme),
    CategoryScheme(CategoryScheme),
    DataProviderScheme(DataProviderScheme),
    OrganisationScheme(OrganisationScheme),
    ConceptScheme(ConceptScheme),
    DataStructureDefinition(DataStructureDefinition),
    DataflowDefinition(DataflowDefinition),
    Categorisation(Categorisation),
    ContentConstraint(ContentConstraint),
    ProvisionAgreement(ProvisionAgreement),
}

impl Artefact {
    pub fn maintainable(&self) -> &MaintainableHeader {
        match self {
            Artefact::Codelist(a)
            | Artefact::AgencyScheme(a)
            | Artefact::CategoryScheme(a)
            | Artefact::DataProviderScheme(a)
            | Artefact::OrganisationScheme(a) => a,
            Artefact::ConceptScheme(a) => a,
            Artefact::DataStructureDefinition(a) => a,
            Artefact::DataflowDefinition(a) => a,
            Artefact::Categorisation(a) => a,
            Artefact::ContentConstraint(a) => a,
            Artefact::ProvisionAgreement(a) => a,
        }
    }

    pub fn id(&self) -> &str {
        &self.maintainable().id
    }
}

/// Every maintainable artifact carried by a `<mes:Structure>` or
/// `<mes:StructureSpecificData>` structures section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Structures {
    pub artefacts: Vec<Artefact>,
}

impl Structures {
    pub fn push(&mut self, artefact: Artefact) {
        self.artefacts.push(artefact);
    }

    pub fn data_structures(&self) -> impl Iterator<Item = &DataStructureDefinition> {
        self.artefacts.iter().filter_map(|a| match a {
            Artefact::DataStructureDefinition(dsd) => Some(dsd),
            _ => None,
        })
    }

    pub fn dataflows(&self) -> impl Iterator<Item = &DataflowDefinition> {
        self.artefacts.iter().filter_map(|a| match a {
            Artefact::DataflowDefinition(df) => Some(df),
            _ => None,
        })
    }
}
