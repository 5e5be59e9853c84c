//! SDMX class tokens used as the working stack's class-keyed side and as
//! URN/`Ref` class hints.

use serde::{Deserialize, Serialize};

/// An SDMX-IM class token. Closed for the same reason [`crate::qname::Tag`]
/// is: every class this reader ever builds or references is known ahead of
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    Agency,
    AgencyScheme,
    Category,
    CategoryScheme,
    Categorisation,
    Code,
    Codelist,
    Concept,
    ConceptScheme,
    ContentConstraint,
    CubeRegion,
    DataAttribute,
    DataflowDefinition,
    DataKey,
    DataKeySet,
    DataProvider,
    DataProviderScheme,
    DataSet,
    DataStructureDefinition,
    Dimension,
    TimeDimension,
    MeasureDimension,
    PrimaryMeasure,
    DimensionDescriptor,
    AttributeDescriptor,
    MeasureDescriptor,
    GroupDimensionDescriptor,
    Key,
    Message,
    MemberSelection,
    OrganisationScheme,
    ProvisionAgreement,
}

impl Class {
    /// Normalize a raw `class` attribute value from a `<Ref>` element, or
    /// a URN's `class` capture group, into a [`Class`]. Handles the
    /// renamings the SDMX-ML wire format uses relative to SDMX-IM class
    /// names (`Attribute` → `DataAttribute`, and so on).
    pub fn normalize_ref_class(raw: &str) -> Option<Class> {
        Some(match raw {
            "Agency" => Class::Agency,
            "AgencyScheme" => Class::AgencyScheme,
            "Category" => Class::Category,
            "CategoryScheme" => Class::CategoryScheme,
            "Categorisation" => Class::Categorisation,
            "Code" => Class::Code,
            "Codelist" => Class::Codelist,
            "Concept" => Class::Concept,
            "ConceptScheme" => Class::ConceptScheme,
            "ContentConstraint" => Class::ContentConstraint,
            "CubeRegion" => Class::CubeRegion,
            "Attribute" | "DataAttribute" => Class::DataAttribute,
            "Dataflow" | "DataflowDefinition" => Class::DataflowDefinition,
            "DataKey" => Class::DataKey,
            "DataKeySet" => Class::DataKeySet,
            "DataProvider" => Class::DataProvider,
            "DataProviderScheme" => Class::DataProviderScheme,
            "DataSet" => Class::DataSet,
            "DataStructure" | "DataStructureDefinition" => Class::DataStructureDefinition,
            "GroupDimension" | "Dimension" => Class::Dimension,
            "TimeDimension" => Class::TimeDimension,
            "MeasureDimension" => Class::MeasureDimension,
            "PrimaryMeasure" => Class::PrimaryMeasure,
            "DimensionDescriptor" => Class::DimensionDescriptor,
            "AttributeDescriptor" => Class::AttributeDescriptor,
            "MeasureDescriptor" => Class::MeasureDescriptor,
            "GroupDimensionDescriptor" => Class::GroupDimensionDescriptor,
            "ObsKey" | "Key" => Class::Key,
            "Message" => Class::Message,
            "MemberSelection" => Class::MemberSelection,
            "OrganisationScheme" => Class::OrganisationScheme,
            "ProvisionAgreement" => Class::ProvisionAgreement,
            "Receiver" | "Sender" | "Source" => Class::Agency,
            _ => return None,
        })
    }

    /// Whether this class is Maintainable (has its own maintainer, version,
    /// and URN) as opposed to a child item resolved relative to a
    /// Maintainable parent.
    pub fn is_maintainable(self) -> bool {
        matches!(
            self,
            Class::AgencyScheme
                | Class::CategoryScheme
                | Class::Categorisation
                | Class::Codelist
                | Class::ConceptScheme
                | Class::ContentConstraint
                | Class::DataflowDefinition
                | Class::DataProviderScheme
                | Class::DataStructureDefinition
                | Class::OrganisationScheme
                | Class::ProvisionAgreement
        )
    }

    /// The SDMX-IM package a class belongs to, as it appears in a URN
    /// (`urn:sdmx:org.sdmx.infomodel.{package}.{class}=...`).
    pub fn package(self) -> &'static str {
        match self {
            Class::Agency
            | Class::AgencyScheme
            | Class::DataProvider
            | Class::DataProviderScheme
            | Class::OrganisationScheme => "base",
            Class::Category | Class::CategoryScheme | Class::Categorisation => "categoryscheme",
            Class::Code | Class::Codelist => "codelist",
            Class::Concept | Class::ConceptScheme => "conceptscheme",
            Class::ContentConstraint | Class::CubeRegion | Class::DataKey | Class::DataKeySet | Class::MemberSelection => {
                "registry"
            }
            Class::DataAttribute
            | Class::DataflowDefinition
            | Class::DataStructureDefinition
            | Class::Dimension
            | Class::TimeDimension
            | Class::MeasureDimension
            | Class::PrimaryMeasure
            | Class::DimensionDescriptor
            | Class::AttributeDescriptor
            | Class::MeasureDescriptor
            | Class::GroupDimensionDescriptor
            | Class::ProvisionAgreement => "datastructure",
            Class::DataSet | Class::Key | Class::Message => "data",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_wire_renamed_classes() {
        assert_eq!(Class::normalize_ref_class("Attribute"), Some(Class::DataAttribute));
        assert_eq!(Class::normalize_ref_class("Dataflow"), Some(Class::DataflowDefinition));
        assert_eq!(Class::normalize_ref_class("GroupDimension"), Some(Class::Dimension));
        assert_eq!(Class::normalize_ref_class("ObsKey"), Some(Class::Key));
        assert_eq!(Class::normalize_ref_class("Receiver"), Some(Class::Agency));
    }

    #[test]
    fn unknown_class_is_none() {
        assert_eq!(Class::normalize_ref_class("Bogus"), None);
    }
}
