//! `str:ContentConstraint` and its key-space descriptors: `str:CubeRegion`
//! (per-component permitted values), `str:DataKeySet` (an explicit key
//! enumeration), and the `str:ConstraintAttachment` wrapper naming what the
//! constraint applies to.
//!
//! `com:KeyValue`/`com:Attribute` are reused, bare, by `str:Key` to list a
//! single fully-specified key's component values — there the element holds
//! its value directly as text, with no cascade support and no nested
//! `com:Value` children, unlike its `CubeRegion` shape. The two are told
//! apart by immediate parent tag.

use sdmx_model::{
    ComponentValue, ConstraintRole, ConstraintRoleType, ContentConstraint, CubeRegion, DataKey, DataKeySet, MemberSelection,
    MemberValue,
};
use sdmx_urn::{Class, Tag};

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::support;
use crate::reference::from_first_child;
use crate::stack::{BucketKey, Value};

fn include_attr(frame: &ElementFrame, name: &str) -> bool {
    frame.attr(name).map(|v| v != "false").unwrap_or(true)
}

pub fn content_constraint_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    if let Some(reference) = from_first_child(frame, Some(Class::ContentConstraint))? {
        driver.stack.push(Value::Reference(Box::new(reference)));
        return Ok(());
    }

    let maintainable = support::maintainable(&mut driver.stack, frame);
    let role = frame.attr("type").and_then(ConstraintRoleType::normalize).map(|role_type| ConstraintRole { role_type });

    let cube_regions = driver
        .stack
        .pop_all(BucketKey::CubeRegion)
        .into_iter()
        .filter_map(|v| match v {
            Value::CubeRegion(c) => Some(*c),
            _ => None,
        })
        .collect();
    let data_key_sets = driver
        .stack
        .pop_all(BucketKey::DataKeySet)
        .into_iter()
        .filter_map(|v| match v {
            Value::DataKeySet(d) => Some(*d),
            _ => None,
        })
        .collect();
    // `str:ConstraintAttachment` is a skipped wrapper: its Dataflow/
    // ProvisionAgreement/DataProvider children resolve themselves via their
    // own end handlers and land, unnamed, in the shared Reference bucket.
    let constraint_attachment = driver
        .stack
        .pop_all(BucketKey::Reference)
        .into_iter()
        .filter_map(|v| match v {
            Value::Reference(r) => Some(r.id),
            _ => None,
        })
        .collect();

    let constraint = ContentConstraint {
        maintainable,
        role,
        cube_regions,
        data_key_sets,
        constraint_attachment,
    };
    driver
        .stack
        .push(Value::Artefact(Box::new(sdmx_model::Artefact::ContentConstraint(constraint))));
    Ok(())
}

pub fn cube_region_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let include = include_attr(frame, "include");
    let member_selections = driver
        .stack
        .pop_all(BucketKey::MemberSelection)
        .into_iter()
        .filter_map(|v| match v {
            Value::MemberSelection(m) => Some(*m),
            _ => None,
        })
        .collect();
    driver.stack.push(Value::CubeRegion(Box::new(CubeRegion { include, member_selections })));
    Ok(())
}

/// `com:KeyValue`/`com:Attribute`: within a `CubeRegion`, names the permitted
/// values for one component; within a `str:Key`, one flat component value.
pub fn key_value_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let component_id = frame.attr("id").unwrap_or_default().to_string();

    if matches!(driver.parent().map(|p| p.tag), Some(Tag::DataKey)) {
        driver.stack.push_named("KeyValue", Value::KeyValue(component_id, frame.text.clone()));
        return Ok(());
    }

    let values = driver
        .stack
        .pop_all(BucketKey::MemberValue)
        .into_iter()
        .filter_map(|v| match v {
            Value::MemberValue(mv) => Some(*mv),
            _ => None,
        })
        .collect();
    let selection = MemberSelection { component_id, include: true, values };
    driver.stack.push(Value::MemberSelection(Box::new(selection)));
    Ok(())
}

/// `com:Value`: one permitted value within a `CubeRegion`'s `KeyValue`/
/// `Attribute`, with optional cascading to narrower values.
pub fn common_value_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let cascade_values = frame.attr("cascadeValues") == Some("true");
    driver.stack.push(Value::MemberValue(Box::new(MemberValue {
        value: frame.text.clone(),
        cascade_values,
    })));
    Ok(())
}

pub fn data_key_set_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let include = include_attr(frame, "isIncluded");
    let keys = driver
        .stack
        .pop_all(BucketKey::DataKey)
        .into_iter()
        .filter_map(|v| match v {
            Value::DataKey(k) => Some(*k),
            _ => None,
        })
        .collect();
    driver.stack.push(Value::DataKeySet(Box::new(DataKeySet { include, keys })));
    Ok(())
}

/// `str:Key`: one fully-specified key within a `DataKeySet`.
pub fn data_key_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let include = include_attr(frame, "isIncluded");
    let key_values = driver
        .stack
        .pop_all("KeyValue")
        .into_iter()
        .filter_map(|v| match v {
            Value::KeyValue(id, value) => Some(ComponentValue { component_id: id, value }),
            _ => None,
        })
        .collect();
    driver.stack.push(Value::DataKey(Box::new(DataKey { include, key_values })));
    Ok(())
}
