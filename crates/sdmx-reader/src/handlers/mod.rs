//! Wires every element handler into the dispatch table [`crate::driver::read_message`]
//! drives the parse loop with.
//!
//! Every tag this reader's closed [`sdmx_urn::Tag`] enum names must resolve
//! to either a real handler or an explicit [`crate::dispatch::HandlerTable::skip`]
//! for both its `start` and `end` event, or the element simply can't appear
//! on the wire (`GenericMetadata`, and the unused `Generic`/`StructureSpecificData`
//! namespace `DataSet` placeholders superseded by `mes:DataSet` — see
//! [`sdmx_urn::Tag::DataSetWrapper`]'s own doc comment).

pub mod annotation;
pub mod component;
pub mod component_list;
pub mod concept;
pub mod constraint;
pub mod dataflow;
pub mod dataset_generic;
pub mod dataset_structure_specific;
pub mod dataset_support;
pub mod dsd;
pub mod footer;
pub mod item;
pub mod itemscheme;
pub mod leaves;
pub mod message;
pub mod representation;
pub mod support;

use sdmx_urn::Tag;

use crate::dispatch::{EventKind, HandlerTable};
use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;

fn noop(_driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    Ok(())
}

pub fn build_table() -> HandlerTable {
    let mut t = HandlerTable::new();
    use EventKind::{End, Start};

    // Document roots. `Structure` is overloaded with its header-nested
    // namesake; `structure_tag_end` tells the two apart.
    t.register_many(
        &[
            Tag::GenericData,
            Tag::GenericTimeSeriesData,
            Tag::StructureSpecificData,
            Tag::StructureSpecificTimeSeriesData,
            Tag::Error,
            Tag::Structure,
        ],
        Start,
        noop,
    );
    t.register_many(
        &[
            Tag::GenericData,
            Tag::GenericTimeSeriesData,
            Tag::StructureSpecificData,
            Tag::StructureSpecificTimeSeriesData,
            Tag::Error,
        ],
        End,
        message::message_root_only_end,
    );
    t.register(Tag::Structure, End, message::structure_tag_end);

    // Header.
    t.skip(&[Tag::MessageStructures]);
    t.register(Tag::Header, Start, noop);
    t.register(Tag::Header, End, message::header_end);
    t.register_many(&[Tag::HeaderID, Tag::HeaderTest, Tag::Prepared, Tag::DimensionAtObservation], Start, noop);
    t.register_many(&[Tag::HeaderID, Tag::HeaderTest, Tag::Prepared, Tag::DimensionAtObservation], End, leaves::text_leaf);
    t.register_many(&[Tag::Sender, Tag::Receiver], Start, noop);
    t.register_many(&[Tag::Sender, Tag::Receiver], End, message::header_party_end);
    t.register(Tag::HeaderSource, Start, noop);
    t.register(Tag::HeaderSource, End, leaves::localization_leaf);
    t.register_many(&[Tag::StructureUsage, Tag::StructureRef], Start, noop);
    t.register_many(&[Tag::StructureUsage, Tag::StructureRef], End, leaves::reference_leaf);
    t.register(Tag::DataSetWrapper, Start, dataset_generic::data_set_start);
    t.register(Tag::DataSetWrapper, End, dataset_generic::data_set_end);

    // Annotations.
    t.skip(&[Tag::Annotations]);
    t.register(Tag::Annotation, Start, noop);
    t.register(Tag::Annotation, End, annotation::annotation_end);
    t.register_many(&[Tag::AnnotationTitle, Tag::AnnotationType, Tag::AnnotationURL], Start, noop);
    t.register_many(&[Tag::AnnotationTitle, Tag::AnnotationType, Tag::AnnotationURL], End, leaves::text_leaf);
    t.register(Tag::AnnotationText, Start, noop);
    t.register(Tag::AnnotationText, End, leaves::localization_leaf);

    // Common name/description/text leaves, and the bare Ref/URN that every
    // reference-bearing element reads straight off its own `ElementFrame`.
    t.register_many(&[Tag::Name, Tag::Description, Tag::CommonText], Start, noop);
    t.register_many(&[Tag::Name, Tag::Description, Tag::CommonText], End, leaves::localization_leaf);
    t.skip(&[Tag::Ref, Tag::Urn]);

    // Generic data encoding.
    t.register(Tag::Series, Start, dataset_generic::series_start);
    t.register(Tag::Series, End, dataset_generic::series_end);
    t.register(Tag::SeriesKey, Start, noop);
    t.register(Tag::SeriesKey, End, dataset_generic::series_key_end);
    t.register(Tag::GenericGroup, Start, dataset_generic::group_start);
    t.register(Tag::GenericGroup, End, dataset_generic::group_end);
    t.register(Tag::GenericGroupKey, Start, noop);
    t.register(Tag::GenericGroupKey, End, dataset_generic::group_key_end);
    t.register(Tag::Obs, Start, dataset_generic::obs_start);
    t.register(Tag::Obs, End, dataset_generic::obs_end);
    t.register(Tag::ObsKey, Start, noop);
    t.register(Tag::ObsKey, End, dataset_generic::obs_key_end);
    t.register(Tag::GenericAttributes, Start, noop);
    t.register(Tag::GenericAttributes, End, dataset_generic::attributes_end);
    t.skip(&[Tag::ObsDimension, Tag::ObsValue, Tag::Value]);

    // Structure-specific data encoding: the same `mes:DataSet` wrapper
    // registered above carries these children too.
    t.register(Tag::SsSeries, Start, dataset_structure_specific::ss_series_start);
    t.register(Tag::SsSeries, End, dataset_structure_specific::ss_series_end);
    t.register(Tag::SsGroup, Start, dataset_structure_specific::ss_group_start);
    t.register(Tag::SsGroup, End, dataset_structure_specific::ss_group_end);
    t.register(Tag::SsObs, Start, dataset_structure_specific::ss_obs_start);
    t.register(Tag::SsObs, End, dataset_structure_specific::ss_obs_end);

    // Item schemes.
    t.skip(&[
        Tag::Codelists,
        Tag::AgencySchemes,
        Tag::DataProviderSchemes,
        Tag::OrganisationSchemes,
        Tag::CategorySchemes,
        Tag::Concepts,
    ]);
    t.register_many(&[Tag::Codelist, Tag::AgencyScheme, Tag::DataProviderScheme, Tag::OrganisationScheme, Tag::CategoryScheme], Start, noop);
    t.register_many(
        &[Tag::Codelist, Tag::AgencyScheme, Tag::DataProviderScheme, Tag::OrganisationScheme, Tag::CategoryScheme],
        End,
        itemscheme::itemscheme_end,
    );
    t.register_many(&[Tag::Code, Tag::Agency, Tag::DataProvider, Tag::Category], Start, item::item_start);
    t.register_many(&[Tag::Code, Tag::Agency, Tag::DataProvider, Tag::Category], End, item::item_end);
    t.register(Tag::ConceptScheme, Start, noop);
    t.register(Tag::ConceptScheme, End, itemscheme::concept_scheme_end);
    t.register(Tag::Concept, Start, concept::concept_start);
    t.register(Tag::Concept, End, concept::concept_end);
    t.register(Tag::Parent, Start, noop);
    t.register(Tag::Parent, End, leaves::reference_leaf);

    // Representations.
    t.register_many(&[Tag::CoreRepresentation, Tag::LocalRepresentation], Start, noop);
    t.register_many(&[Tag::CoreRepresentation, Tag::LocalRepresentation], End, representation::representation_end);
    t.register(Tag::Enumeration, Start, noop);
    t.register(Tag::Enumeration, End, representation::enumeration_end);
    t.register_many(&[Tag::EnumerationFormat, Tag::TextFormat], Start, noop);
    t.register_many(&[Tag::EnumerationFormat, Tag::TextFormat], End, representation::facet_end);

    // Data structure definitions.
    t.skip(&[Tag::DataStructures, Tag::DataStructureComponents]);
    t.register(Tag::DataStructure, Start, dsd::dsd_start);
    t.register(Tag::DataStructure, End, dsd::dsd_end);
    t.register(Tag::DimensionList, Start, noop);
    t.register(Tag::DimensionList, End, component_list::dimension_list_end);
    t.register_many(&[Tag::Dimension, Tag::TimeDimension, Tag::MeasureDimension, Tag::Attribute, Tag::PrimaryMeasure], Start, noop);
    t.register_many(
        &[Tag::Dimension, Tag::TimeDimension, Tag::MeasureDimension, Tag::Attribute, Tag::PrimaryMeasure],
        End,
        component::component_end,
    );
    t.register(Tag::AttributeList, Start, noop);
    t.register(Tag::AttributeList, End, component_list::attribute_list_end);
    t.register(Tag::MeasureList, Start, noop);
    t.register(Tag::MeasureList, End, component_list::measure_list_end);
    t.register(Tag::Group, Start, noop);
    t.register(Tag::Group, End, component_list::group_end);
    t.register_many(&[Tag::ConceptIdentity, Tag::DimensionReference, Tag::AttachmentGroup], Start, noop);
    t.register_many(&[Tag::ConceptIdentity, Tag::DimensionReference, Tag::AttachmentGroup], End, leaves::reference_leaf);
    t.register(Tag::AttributeRelationship, Start, noop);
    t.register(Tag::AttributeRelationship, End, component::attribute_relationship_end);
    t.skip(&[Tag::NoRelationship]);

    // Dataflows, categorisations, provision agreements.
    t.skip(&[Tag::Dataflows, Tag::Categorisations, Tag::ProvisionAgreements]);
    t.register(Tag::Dataflow, Start, noop);
    t.register(Tag::Dataflow, End, dataflow::dataflow_end);
    t.register(Tag::Categorisation, Start, noop);
    t.register(Tag::Categorisation, End, dataflow::categorisation_end);
    t.register_many(&[Tag::CategorisationSource, Tag::Target], Start, noop);
    t.register_many(&[Tag::CategorisationSource, Tag::Target], End, leaves::reference_leaf);
    t.register(Tag::ProvisionAgreement, Start, noop);
    t.register(Tag::ProvisionAgreement, End, dataflow::provision_agreement_end);

    // Content constraints.
    t.skip(&[Tag::Constraints, Tag::ConstraintAttachment]);
    t.register(Tag::ContentConstraint, Start, noop);
    t.register(Tag::ContentConstraint, End, constraint::content_constraint_end);
    t.register(Tag::CubeRegion, Start, noop);
    t.register(Tag::CubeRegion, End, constraint::cube_region_end);
    t.register_many(&[Tag::KeyValue, Tag::CommonAttribute], Start, noop);
    t.register_many(&[Tag::KeyValue, Tag::CommonAttribute], End, constraint::key_value_end);
    t.register(Tag::CommonValue, Start, noop);
    t.register(Tag::CommonValue, End, constraint::common_value_end);
    t.register(Tag::DataKeySet, Start, noop);
    t.register(Tag::DataKeySet, End, constraint::data_key_set_end);
    t.register(Tag::DataKey, Start, noop);
    t.register(Tag::DataKey, End, constraint::data_key_end);

    // Footer.
    t.register(Tag::FooterMessage, Start, noop);
    t.register(Tag::FooterMessage, End, footer::footer_message_end);
    t.register(Tag::FooterElement, Start, noop);
    t.register(Tag::FooterElement, End, footer::footer_end);

    t
}
