//! Typed SDMX-IM artifact hierarchy for SDMX-ML 2.1 messages.
//!
//! This crate only models the artifacts: building them from a document is
//! `sdmx-reader`'s job, and naming the wire representation of a class or
//! attribute is `sdmx-urn`'s.

pub mod annotation;
pub mod artefact;
pub mod component;
pub mod component_list;
pub mod concept;
pub mod constraint;
pub mod dataflow;
pub mod dataset;
pub mod dsd;
pub mod error;
pub mod international_string;
pub mod item;
pub mod message;
pub mod representation;
pub mod structures;

pub use annotation::Annotation;
pub use artefact::{Identity, MaintainableHeader, NameableHeader};
pub use component::{AttributeRelationship, Component, ComponentCore};
pub use component_list::{AttributeDescriptor, ComponentList, DimensionDescriptor, MeasureDescriptor, FORCED_CREATION_ORDER};
pub use concept::{Concept, ConceptScheme};
pub use constraint::{
    ComponentValue, ConstraintRole, ConstraintRoleType, ContentConstraint, CubeRegion, DataKey, DataKeySet,
    MemberSelection, MemberValue,
};
pub use dataflow::{Categorisation, DataflowDefinition};
pub use dataset::{AttributeValue, DataSet, GroupKey, Key, Observation, SeriesKey};
pub use dsd::{DataStructureDefinition, GroupDimensionDescriptor};
pub use error::{ModelError, Result};
pub use international_string::{InternationalString, DEFAULT_LOCALE};
pub use item::{Agency, AgencyScheme, Category, CategoryScheme, Code, Codelist, DataProvider, DataProviderScheme, Item, ItemScheme};
pub use message::{Footer, Header, HeaderParty, Message, MessageKind, ObservationDimension, Severity};
pub use representation::{Facet, FacetType, FacetValueType, Representation};
pub use structures::{Artefact, OrganisationScheme, ProvisionAgreement, Structures};
