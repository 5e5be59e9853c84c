//! `str:Concept`: concept scheme members. Shares `Name`/`Description`
//! stashing with [`crate::handlers::item`] but never appears as a bare
//! reference element on the wire, so it skips that check.

use sdmx_model::Concept;
use sdmx_urn::Tag;

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::support;
use crate::stack::{BucketKey, Value};

const LOCALIZATION_BUCKETS: &[&str] = &["Name", "Description"];

pub fn concept_start(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    driver.stack.stash(LOCALIZATION_BUCKETS);
    Ok(())
}

pub fn concept_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let nameable = support::nameable(&mut driver.stack, frame);

    let core_representation = match driver.stack.pop_single(BucketKey::Representation) {
        Some(Value::Representation(representation)) => Some(*representation),
        _ => None,
    };

    let mut concept = Concept {
        nameable,
        parent_id: None,
        core_representation,
    };

    if let Some(Value::Reference(parent_ref)) = driver.stack.pop_single(Tag::Parent.local()) {
        concept.parent_id = Some(parent_ref.child_id.clone());
    }

    driver.stack.unstash(LOCALIZATION_BUCKETS.len());
    driver.stack.push(Value::Concept(Box::new(concept)));
    Ok(())
}
