//! `str:Dimension`, `str:TimeDimension`, `str:MeasureDimension`,
//! `str:PrimaryMeasure`, `str:Attribute`: the components of a data
//! structure's key, attributes, and measure.
//!
//! Every one of these tags is also reused, bare, inside
//! `str:AttributeRelationship` to name the dimensions an attribute attaches
//! to — there it wraps a `<Ref>`/`<URN>` (or, for a dataset/observation-level
//! `PrimaryMeasure` marker, carries no `id` at all) rather than declaring a
//! real component, so the reference check and the id-less guard both run
//! before any real component is built.

use sdmx_model::{AttributeRelationship, Component, ComponentCore};
use sdmx_urn::{Class, Tag};

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::support;
use crate::reference::from_first_child;
use crate::stack::{BucketKey, Value};

fn component_class_hint(tag: Tag) -> Option<Class> {
    match tag {
        Tag::Dimension => Some(Class::Dimension),
        Tag::TimeDimension => Some(Class::TimeDimension),
        Tag::MeasureDimension => Some(Class::MeasureDimension),
        Tag::PrimaryMeasure => Some(Class::PrimaryMeasure),
        Tag::Attribute => Some(Class::DataAttribute),
        _ => None,
    }
}

pub fn component_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    if let Some(reference) = from_first_child(frame, component_class_hint(frame.tag))? {
        driver.stack.push(Value::Reference(Box::new(reference)));
        return Ok(());
    }

    // A bare `<str:PrimaryMeasure/>` or `<str:Dimension/>` inside an
    // AttributeRelationship marks an attachment level rather than declaring
    // a component; nothing to build.
    if frame.attr("id").is_none() {
        return Ok(());
    }

    let identity = support::identifiable(&mut driver.stack, frame);
    let concept_identity = match driver.stack.pop_single(Tag::ConceptIdentity.local()) {
        Some(Value::Reference(reference)) => Some(reference.child_id.clone()),
        _ => None,
    };
    let local_representation = match driver.stack.pop_single(BucketKey::Representation) {
        Some(Value::Representation(representation)) => Some(*representation),
        _ => None,
    };
    let core = ComponentCore {
        identity,
        concept_identity,
        local_representation,
    };
    let order = frame.attr("position").and_then(|v| v.parse().ok());

    let component = match frame.tag {
        Tag::Dimension => Component::Dimension { core, order },
        Tag::TimeDimension => Component::TimeDimension { core, order },
        Tag::MeasureDimension => Component::MeasureDimension { core, order },
        Tag::PrimaryMeasure => Component::PrimaryMeasure { core },
        Tag::Attribute => {
            let relationship = match driver.stack.pop_single(BucketKey::AttributeRelationship) {
                Some(Value::AttributeRelationship(relationship)) => *relationship,
                _ => AttributeRelationship::None,
            };
            let assignment_status = frame.attr("assignmentStatus").map(str::to_string);
            Component::DataAttribute {
                core,
                relationship,
                assignment_status,
            }
        }
        _ => return Ok(()),
    };

    driver.stack.push(Value::Component(Box::new(component)));
    Ok(())
}

/// `str:AttributeRelationship`: which dimensions, group, or attachment
/// level an attribute's value is keyed by.
pub fn attribute_relationship_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    if matches!(frame.first_child_tag(), Some(Tag::NoRelationship)) {
        driver
            .stack
            .push(Value::AttributeRelationship(Box::new(AttributeRelationship::None)));
        return Ok(());
    }
    if matches!(frame.first_child_tag(), Some(Tag::PrimaryMeasure)) {
        driver
            .stack
            .push(Value::AttributeRelationship(Box::new(AttributeRelationship::Observation)));
        return Ok(());
    }

    if let Some(Value::Reference(group_ref)) = driver.stack.pop_single(Tag::AttachmentGroup.local()) {
        driver.stack.push(Value::AttributeRelationship(Box::new(AttributeRelationship::Group(
            group_ref.child_id.clone(),
        ))));
        return Ok(());
    }

    let dimension_ids: Vec<String> = driver
        .stack
        .pop_all(BucketKey::Reference)
        .into_iter()
        .filter_map(|v| match v {
            Value::Reference(r) if is_dimension_like(r.child_class) => Some(r.child_id),
            _ => None,
        })
        .collect();

    let relationship = if dimension_ids.is_empty() {
        AttributeRelationship::None
    } else {
        AttributeRelationship::Dimensions(dimension_ids)
    };
    driver.stack.push(Value::AttributeRelationship(Box::new(relationship)));
    Ok(())
}

fn is_dimension_like(class: Class) -> bool {
    matches!(class, Class::Dimension | Class::TimeDimension | Class::MeasureDimension)
}
