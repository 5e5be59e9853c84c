//! XML namespace prefixes and the closed set of element tags this reader
//! dispatches on.
//!
//! The original reader keys its dispatch table on a fully-qualified tag
//! string built at import time from an `nsmap`. This reader has a fixed,
//! known-in-advance set of elements (§4.1/§4.5 of the behavioral spec), so
//! `Tag` is a closed enum rather than a runtime string: the dispatch table
//! in `sdmx-reader` is an exhaustive match, not a hash lookup keyed by
//! arbitrary text, and an element this reader doesn't know about fails to
//! even parse into a `Tag`, which is itself the "unknown element" signal.

use serde::{Deserialize, Serialize};

/// One of the XML namespaces an SDMX-ML 2.1 document uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Namespace {
    Message,
    Structure,
    Common,
    Generic,
    StructureSpecificData,
    Footer,
    Xml,
    Xsi,
}

impl Namespace {
    /// The conventional prefix used throughout the behavioral spec and
    /// this codebase.
    pub fn prefix(self) -> &'static str {
        match self {
            Namespace::Message => "mes",
            Namespace::Structure => "str",
            Namespace::Common => "com",
            Namespace::Generic => "gen",
            Namespace::StructureSpecificData => "data",
            Namespace::Footer => "footer",
            Namespace::Xml => "xml",
            Namespace::Xsi => "xsi",
        }
    }

    /// The namespace URI as it appears in an SDMX-ML 2.1 document.
    pub fn uri(self) -> &'static str {
        match self {
            Namespace::Message => "http://www.sdmx.org/resources/sdmxml/schemas/v2_1/message",
            Namespace::Structure => "http://www.sdmx.org/resources/sdmxml/schemas/v2_1/structure",
            Namespace::Common => "http://www.sdmx.org/resources/sdmxml/schemas/v2_1/common",
            Namespace::Generic => "http://www.sdmx.org/resources/sdmxml/schemas/v2_1/data/generic",
            Namespace::StructureSpecificData => {
                "http://www.sdmx.org/resources/sdmxml/schemas/v2_1/data/structurespecific"
            }
            Namespace::Footer => "http://www.sdmx.org/resources/sdmxml/schemas/v2_1/message/footer",
            Namespace::Xml => "http://www.w3.org/XML/1998/namespace",
            Namespace::Xsi => "http://www.w3.org/2001/XMLSchema-instance",
        }
    }

    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Some(match prefix {
            "mes" | "message" => Namespace::Message,
            "str" | "structure" => Namespace::Structure,
            "com" | "common" => Namespace::Common,
            "gen" | "generic" => Namespace::Generic,
            "data" => Namespace::StructureSpecificData,
            "footer" => Namespace::Footer,
            "xml" => Namespace::Xml,
            "xsi" => Namespace::Xsi,
            _ => return None,
        })
    }
}

macro_rules! tags {
    ($( $variant:ident => ($ns:expr, $local:literal) ),+ $(,)?) => {
        /// A fully-qualified element tag this reader knows how to dispatch
        /// on.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum Tag {
            $( $variant, )+
        }

        impl Tag {
            /// The `(namespace, localname)` pair this tag corresponds to on
            /// the wire.
            pub fn qname(self) -> (Namespace, &'static str) {
                match self {
                    $( Tag::$variant => ($ns, $local), )+
                }
            }

            /// Resolve a `(namespace, localname)` pair into the `Tag` it
            /// names, or `None` if this reader has no handler for it.
            pub fn from_qname(ns: Namespace, local: &str) -> Option<Tag> {
                match (ns, local) {
                    $( ($ns, $local) => Some(Tag::$variant), )+
                    _ => None,
                }
            }

            /// The bare localname, ignoring namespace (used for the
            /// string-keyed side of the working stack).
            pub fn local(self) -> &'static str {
                self.qname().1
            }
        }
    };
}

use Namespace::*;

// `Tag::Structure` is genuinely overloaded on the wire: the same qname
// `mes:Structure` names both a structure message's document root and the
// per-dataset structure descriptor nested in `mes:Header`. The driver
// disambiguates the two by parent context, exactly as the element's
// position in the document determines its meaning here.
tags! {
    GenericData => (Message, "GenericData"),
    GenericTimeSeriesData => (Message, "GenericTimeSeriesData"),
    StructureSpecificData => (Message, "StructureSpecificData"),
    StructureSpecificTimeSeriesData => (Message, "StructureSpecificTimeSeriesData"),
    Structure => (Message, "Structure"),
    GenericMetadata => (Message, "GenericMetadata"),
    Error => (Message, "Error"),

    Header => (Message, "Header"),
    HeaderID => (Message, "ID"),
    HeaderTest => (Message, "Test"),
    Prepared => (Message, "Prepared"),
    Sender => (Message, "Sender"),
    Receiver => (Message, "Receiver"),
    HeaderSource => (Message, "Source"),
    StructureUsage => (Common, "StructureUsage"),
    StructureRef => (Common, "Structure"),
    DimensionAtObservation => (Message, "DimensionAtObservation"),
    MessageStructures => (Message, "Structures"),
    DataSetWrapper => (Message, "DataSet"),

    Annotations => (Common, "Annotations"),
    Annotation => (Common, "Annotation"),
    AnnotationTitle => (Common, "AnnotationTitle"),
    AnnotationType => (Common, "AnnotationType"),
    AnnotationURL => (Common, "AnnotationURL"),
    AnnotationText => (Common, "AnnotationText"),

    Name => (Common, "Name"),
    Description => (Common, "Description"),
    CommonText => (Common, "Text"),

    Ref => (Common, "Ref"),
    Urn => (Common, "URN"),

    DataSet => (Generic, "DataSet"),
    Series => (Generic, "Series"),
    SeriesKey => (Generic, "SeriesKey"),
    GenericGroup => (Generic, "Group"),
    GenericGroupKey => (Generic, "GroupKey"),
    Obs => (Generic, "Obs"),
    ObsDimension => (Generic, "ObsDimension"),
    ObsKey => (Generic, "ObsKey"),
    ObsValue => (Generic, "ObsValue"),
    GenericAttributes => (Generic, "Attributes"),
    Value => (Generic, "Value"),

    SsDataSet => (StructureSpecificData, "DataSet"),
    SsSeries => (StructureSpecificData, "Series"),
    SsGroup => (StructureSpecificData, "Group"),
    SsObs => (StructureSpecificData, "Obs"),

    Codelists => (Structure, "Codelists"),
    Codelist => (Structure, "Codelist"),
    Code => (Structure, "Code"),
    AgencySchemes => (Structure, "AgencySchemes"),
    AgencyScheme => (Structure, "AgencyScheme"),
    Agency => (Structure, "Agency"),
    DataProviderSchemes => (Structure, "DataProviderSchemes"),
    DataProviderScheme => (Structure, "DataProviderScheme"),
    DataProvider => (Structure, "DataProvider"),
    OrganisationSchemes => (Structure, "OrganisationSchemes"),
    OrganisationScheme => (Structure, "OrganisationScheme"),
    CategorySchemes => (Structure, "CategorySchemes"),
    CategoryScheme => (Structure, "CategoryScheme"),
    Category => (Structure, "Category"),
    Concepts => (Structure, "Concepts"),
    ConceptScheme => (Structure, "ConceptScheme"),
    Concept => (Structure, "Concept"),
    Parent => (Structure, "Parent"),

    CoreRepresentation => (Structure, "CoreRepresentation"),
    LocalRepresentation => (Structure, "LocalRepresentation"),
    Enumeration => (Structure, "Enumeration"),
    EnumerationFormat => (Structure, "EnumerationFormat"),
    TextFormat => (Structure, "TextFormat"),

    DataStructures => (Structure, "DataStructures"),
    DataStructure => (Structure, "DataStructure"),
    DataStructureComponents => (Structure, "DataStructureComponents"),
    DimensionList => (Structure, "DimensionList"),
    Dimension => (Structure, "Dimension"),
    TimeDimension => (Structure, "TimeDimension"),
    MeasureDimension => (Structure, "MeasureDimension"),
    AttributeList => (Structure, "AttributeList"),
    Attribute => (Structure, "Attribute"),
    MeasureList => (Structure, "MeasureList"),
    PrimaryMeasure => (Structure, "PrimaryMeasure"),
    Group => (Structure, "Group"),
    ConceptIdentity => (Structure, "ConceptIdentity"),
    DimensionReference => (Structure, "DimensionReference"),
    AttachmentGroup => (Structure, "AttachmentGroup"),
    AttributeRelationship => (Structure, "AttributeRelationship"),
    NoRelationship => (Structure, "None"),

    Dataflows => (Structure, "Dataflows"),
    Dataflow => (Structure, "Dataflow"),

    Categorisations => (Structure, "Categorisations"),
    Categorisation => (Structure, "Categorisation"),
    CategorisationSource => (Structure, "Source"),
    Target => (Structure, "Target"),

    ProvisionAgreements => (Structure, "ProvisionAgreements"),
    ProvisionAgreement => (Structure, "ProvisionAgreement"),

    Constraints => (Structure, "ContentConstraints"),
    ContentConstraint => (Structure, "ContentConstraint"),
    ConstraintAttachment => (Structure, "ConstraintAttachment"),
    CubeRegion => (Common, "CubeRegion"),
    KeyValue => (Common, "KeyValue"),
    CommonAttribute => (Common, "Attribute"),
    CommonValue => (Common, "Value"),
    DataKeySet => (Structure, "DataKeySet"),
    DataKey => (Structure, "Key"),

    FooterMessage => (Footer, "Message"),
    FooterElement => (Footer, "Footer"),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_qname() {
        let (ns, local) = Tag::Codelist.qname();
        assert_eq!(ns, Namespace::Structure);
        assert_eq!(local, "Codelist");
        assert_eq!(Tag::from_qname(ns, local), Some(Tag::Codelist));
    }

    #[test]
    fn unknown_qname_is_none() {
        assert_eq!(Tag::from_qname(Namespace::Structure, "Bogus"), None);
    }

    #[test]
    fn namespace_prefix_resolves_both_spellings() {
        assert_eq!(Namespace::from_prefix("str"), Some(Namespace::Structure));
        assert_eq!(Namespace::from_prefix("structure"), Some(Namespace::Structure));
        assert_eq!(Namespace::from_prefix("bogus"), None);
    }
}
