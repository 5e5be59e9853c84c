//! The document root and `mes:Header`: assembling the final
//! [`sdmx_model::Message`].
//!
//! `mes:Structure` is genuinely overloaded on the wire (see
//! [`sdmx_urn::Tag::Structure`]'s own doc comment): as the document root it
//! names a structure message, nested in `mes:Header` it names the dataset
//! structure a structure-specific message's observations are indexed
//! against. The two are told apart by whether the element has a parent at
//! all.

use sdmx_model::{
    Artefact, DataStructureDefinition, Header, InternationalString, Item, Message, MessageKind, ObservationDimension,
    Structures,
};
use sdmx_urn::Tag;

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::dataset_support;
use crate::stack::{BucketKey, Value};

pub fn header_party_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let nameable = crate::handlers::support::nameable(&mut driver.stack, frame);
    let party = Item { nameable, parent_id: None };
    driver.stack.push_named(frame.tag.local(), Value::Item(Box::new(party)));
    Ok(())
}

fn pop_text(driver: &mut Driver, name: &str) -> Option<String> {
    match driver.stack.pop_single(name) {
        Some(Value::Text(text)) => Some(text),
        _ => None,
    }
}

pub fn header_end(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    let id = pop_text(driver, Tag::HeaderID.local());
    let test = pop_text(driver, Tag::HeaderTest.local()).as_deref() == Some("true");
    let prepared = pop_text(driver, Tag::Prepared.local());

    let sender = match driver.stack.pop_single(Tag::Sender.local()) {
        Some(Value::Item(item)) => Some(*item),
        _ => None,
    };
    let receiver = match driver.stack.pop_single(Tag::Receiver.local()) {
        Some(Value::Item(item)) => Some(*item),
        _ => None,
    };

    let mut source = InternationalString::new();
    for value in driver.stack.pop_all(Tag::HeaderSource.local()) {
        if let Value::Localization(locale, label) = value {
            source.add_localization(locale, label);
        }
    }

    let structure = match driver.stack.pop_single("HeaderStructure") {
        Some(Value::ObservationDimension(dimension)) => Some(*dimension),
        _ => None,
    };

    let header = Header { id, test, prepared, sender, receiver, source, structure };
    driver.stack.push(Value::Header(Box::new(header)));
    Ok(())
}

/// `mes:Structure` nested in `mes:Header`: resolves `mes:DimensionAtObservation`
/// into the [`ObservationDimension`] a structure-specific message's
/// observations are keyed by, and its own nested `com:Structure`/
/// `com:StructureUsage` (a DSD or dataflow reference, respectively) into the
/// data set's keying DSD.
///
/// If no caller-supplied DSD is already on the stack, a `com:Structure`
/// reference is resolved (pulling in the real DSD if it was collected
/// earlier in a `Structure` message, or a stub otherwise) and a
/// `com:StructureUsage` reference falls back to a DSD synthesized from the
/// dataflow's own identifier — this reader never resolves a dataflow to the
/// DSD it actually describes, so the dataflow's id stands in for one.
fn header_structure_end(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    let structure_ref = match driver.stack.pop_single(Tag::StructureRef.local()) {
        Some(Value::Reference(r)) => Some(*r),
        _ => None,
    };
    let usage_ref = match driver.stack.pop_single(Tag::StructureUsage.local()) {
        Some(Value::Reference(r)) => Some(*r),
        _ => None,
    };

    if dataset_support::dsd_mut(driver).is_none() {
        if let Some(reference) = structure_ref.as_ref() {
            driver.ignore(reference.id.clone());
            driver.resolve_ref(reference);
            driver.ss_missing_dsd = true;
        } else if let Some(reference) = usage_ref.as_ref() {
            let id = reference.child_id.clone();
            driver.ignore(id.clone());
            driver
                .stack
                .push(Value::Artefact(Box::new(Artefact::DataStructureDefinition(DataStructureDefinition::new(id)))));
            driver.ss_missing_dsd = true;
        }
    }

    let Some(dimension_at_observation) = pop_text(driver, Tag::DimensionAtObservation.local()) else {
        return Ok(());
    };
    let observation_dimension = if dimension_at_observation == "AllDimensions" {
        ObservationDimension::AllDimensions
    } else {
        if let Some(dsd) = dataset_support::dsd_mut(driver) {
            dsd.ensure_dimension(&dimension_at_observation);
        }
        ObservationDimension::Dimension(dimension_at_observation)
    };
    driver.observation_dimension = Some(observation_dimension.clone());
    driver
        .stack
        .push_named("HeaderStructure", Value::ObservationDimension(Box::new(observation_dimension)));
    Ok(())
}

/// The document root: `mes:GenericData`, `mes:GenericTimeSeriesData`,
/// `mes:StructureSpecificData`, `mes:StructureSpecificTimeSeriesData`,
/// `mes:Structure`, or `mes:Error`. The time-series variants carry the same
/// payload shape as their non-time-series counterpart, so both collapse
/// into the same [`MessageKind`] variant.
fn message_root_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let header = match driver.stack.pop_single(BucketKey::Header) {
        Some(Value::Header(header)) => *header,
        _ => Header::default(),
    };
    let footer = match driver.stack.pop_single(BucketKey::Footer) {
        Some(Value::Footer(footer)) => Some(*footer),
        _ => None,
    };

    let kind = match frame.tag {
        Tag::GenericData | Tag::GenericTimeSeriesData => MessageKind::GenericData(take_datasets(driver)),
        Tag::StructureSpecificData | Tag::StructureSpecificTimeSeriesData => {
            MessageKind::StructureSpecificData(take_datasets(driver))
        }
        Tag::Structure => MessageKind::Structure(take_structures(driver)),
        _ => MessageKind::Error,
    };

    let message = Message { header, footer, kind };
    driver.stack.push(Value::Message(Box::new(message)));
    Ok(())
}

fn take_datasets(driver: &mut Driver) -> Vec<sdmx_model::DataSet> {
    driver
        .stack
        .pop_all(BucketKey::DataSet)
        .into_iter()
        .filter_map(|v| match v {
            Value::DataSet(d) => Some(*d),
            _ => None,
        })
        .collect()
}

fn take_structures(driver: &mut Driver) -> Structures {
    let mut structures = Structures::default();
    for value in driver.stack.pop_all(BucketKey::Artefact) {
        if let Value::Artefact(artefact) = value {
            structures.push(*artefact);
        }
    }
    structures
}

pub fn structure_tag_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    if driver.parent().is_some() {
        header_structure_end(driver, frame)
    } else {
        message_root_end(driver, frame)
    }
}

pub fn message_root_only_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    message_root_end(driver, frame)
}
