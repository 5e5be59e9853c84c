//! `str:DimensionList`, `str:AttributeList`, `str:MeasureList`,
//! `str:Group`: the ordered component lists that make up a DSD's key,
//! attributes, and measure, plus named dimension groupings.
//!
//! Each list attaches itself to the enclosing `str:DataStructure` the
//! moment it closes, eagerly, rather than waiting to be collected by a
//! parent handler — the same eager-assembly pattern `DataStructure` itself
//! uses, so a later sibling list (or a `Group`'s own `DimensionReference`)
//! can already see dimensions declared earlier in the document.

use sdmx_model::{Component, ComponentList, GroupDimensionDescriptor};
use sdmx_urn::{Class, Tag};

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::dsd::dsd_mut;
use crate::reference::from_first_child;
use crate::stack::{BucketKey, Value};

fn take_components(driver: &mut Driver) -> Vec<Component> {
    driver
        .stack
        .pop_all(BucketKey::Component)
        .into_iter()
        .filter_map(|v| match v {
            Value::Component(c) => Some(*c),
            _ => None,
        })
        .collect()
}

fn enclosing_dsd_id(driver: &Driver) -> Option<String> {
    driver.ancestor(Tag::DataStructure).and_then(|f| f.attr("id")).map(str::to_string)
}

pub fn dimension_list_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let components = take_components(driver);
    let Some(dsd_id) = enclosing_dsd_id(driver) else {
        return Ok(());
    };
    if let Some(dsd) = dsd_mut(&mut driver.stack, &dsd_id) {
        dsd.dimensions = ComponentList {
            id: frame.attr("id").unwrap_or("DimensionDescriptor").to_string(),
            components,
        };
        dsd.dimensions.assign_order()?;
    }
    Ok(())
}

pub fn attribute_list_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let components = take_components(driver);
    let Some(dsd_id) = enclosing_dsd_id(driver) else {
        return Ok(());
    };
    if let Some(dsd) = dsd_mut(&mut driver.stack, &dsd_id) {
        dsd.attributes = ComponentList {
            id: frame.attr("id").unwrap_or("AttributeDescriptor").to_string(),
            components,
        };
    }
    Ok(())
}

pub fn measure_list_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let components = take_components(driver);
    let Some(dsd_id) = enclosing_dsd_id(driver) else {
        return Ok(());
    };
    if let Some(dsd) = dsd_mut(&mut driver.stack, &dsd_id) {
        dsd.measures = ComponentList {
            id: frame.attr("id").unwrap_or("MeasureDescriptor").to_string(),
            components,
        };
    }
    Ok(())
}

/// `str:Group`: a named subset of dimensions that group attributes attach
/// to. May also appear as a bare reference
/// (`<Ref class="GroupDimensionDescriptor">`) wherever a group is named
/// rather than declared, e.g. inside a `ConstraintAttachment`.
pub fn group_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    if let Some(reference) = from_first_child(frame, Some(Class::GroupDimensionDescriptor))? {
        driver.stack.push(Value::Reference(Box::new(reference)));
        return Ok(());
    }

    let dimension_ids: Vec<String> = driver
        .stack
        .pop_all("DimensionReference")
        .into_iter()
        .filter_map(|v| match v {
            Value::Reference(r) => Some(r.child_id),
            _ => None,
        })
        .collect();

    let group = GroupDimensionDescriptor {
        id: frame.attr("id").unwrap_or_default().to_string(),
        dimension_ids,
    };

    let Some(dsd_id) = enclosing_dsd_id(driver) else {
        return Ok(());
    };
    if let Some(dsd) = dsd_mut(&mut driver.stack, &dsd_id) {
        dsd.groups.push(group);
    }
    Ok(())
}
