//! Shared plumbing between the generic and structure-specific data set
//! handlers: finding (or growing) the data structure definition a data set
//! is keyed against, and reading `gen:Value`-shaped children.

use sdmx_model::{Artefact, DataStructureDefinition};
use sdmx_urn::Tag;

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::stack::{BucketKey, Value};

/// Every `<gen:Value id="..." value="..."/>` (or `<gen:ObsDimension>`/
/// `<gen:ObsValue>`, same shape) child of `frame`, in document order.
pub fn value_children(frame: &ElementFrame) -> Vec<(String, String)> {
    frame
        .children
        .iter()
        .filter(|c| c.tag == Tag::Value)
        .filter_map(|c| {
            let id = c.attrs.iter().find(|(k, _)| k == "id").map(|(_, v)| v.clone())?;
            let value = c.attrs.iter().find(|(k, _)| k == "value").map(|(_, v)| v.clone()).unwrap_or_default();
            Some((id, value))
        })
        .collect()
}

/// The sole `DataStructureDefinition` currently on the working stack (the
/// caller-supplied one, or one assembled from an accompanying `Structure`
/// section), without popping it.
pub(crate) fn dsd_mut(driver: &mut Driver) -> Option<&mut DataStructureDefinition> {
    let found = driver.stack.find_mut(BucketKey::Artefact, |v| {
        matches!(v, Value::Artefact(a) if matches!(a.as_ref(), Artefact::DataStructureDefinition(_)))
    })?;
    match found {
        Value::Artefact(a) => match a.as_mut() {
            Artefact::DataStructureDefinition(d) => Some(d),
            _ => None,
        },
        _ => None,
    }
}

/// The data structure definition a data set is keyed against, growing one
/// on the fly (and flagging `ss_missing_dsd`) when none was supplied.
pub fn dsd_mut_or_create<'a>(driver: &'a mut Driver, structure_ref: Option<&str>) -> &'a mut DataStructureDefinition {
    if dsd_mut(driver).is_none() {
        let id = structure_ref.unwrap_or("DSD").to_string();
        driver.ss_missing_dsd = true;
        driver.ignore(id.clone());
        driver
            .stack
            .push(Value::Artefact(Box::new(Artefact::DataStructureDefinition(DataStructureDefinition::new(id)))));
    }
    dsd_mut(driver).expect("a DataStructureDefinition was just ensured to exist")
}

/// Order `pairs` by the DSD's dimension positions, growing the DSD with a
/// forced-creation dimension for any id it doesn't already declare — the
/// reader always resolves keys leniently rather than rejecting an
/// otherwise well-formed data set over an undeclared dimension.
pub fn ordered_key(driver: &mut Driver, structure_ref: Option<&str>, pairs: &[(String, String)]) -> Result<Vec<(String, String)>> {
    let dsd = dsd_mut_or_create(driver, structure_ref);
    for (id, _) in pairs {
        dsd.ensure_dimension(id);
    }
    Ok(dsd.make_key(pairs)?)
}
