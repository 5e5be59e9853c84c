//! `str:Dataflow`, `str:Categorisation`, `str:ProvisionAgreement`: thin
//! maintainable artefacts whose whole substance is a handful of references
//! to other artefacts.

use sdmx_model::{Artefact, Categorisation, DataflowDefinition, ProvisionAgreement};
use sdmx_urn::{Class, Tag};

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::support;
use crate::reference::from_first_child;
use crate::stack::{BucketKey, Value};

fn take_reference_id(driver: &mut Driver, name: &'static str) -> Option<String> {
    match driver.stack.pop_single(name) {
        Some(Value::Reference(reference)) => Some(reference.child_id.clone()),
        _ => None,
    }
}

/// `str:Dataflow`: names the `str:Structure` (a `StructureRef`/`com:Structure`
/// leaf) a dataflow's data conforms to.
pub fn dataflow_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    if let Some(reference) = from_first_child(frame, Some(Class::DataflowDefinition))? {
        driver.stack.push(Value::Reference(Box::new(reference)));
        return Ok(());
    }

    let maintainable = support::maintainable(&mut driver.stack, frame);
    let structure = take_reference_id(driver, Tag::StructureRef.local());
    let dataflow = DataflowDefinition { maintainable, structure };
    driver.stack.push(Value::Artefact(Box::new(Artefact::DataflowDefinition(dataflow))));
    Ok(())
}

/// `str:Categorisation`: links `str:Source` to `str:Target`, a category.
pub fn categorisation_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    if let Some(reference) = from_first_child(frame, Some(Class::Categorisation))? {
        driver.stack.push(Value::Reference(Box::new(reference)));
        return Ok(());
    }

    let maintainable = support::maintainable(&mut driver.stack, frame);
    let source = take_reference_id(driver, Tag::CategorisationSource.local());
    let target = take_reference_id(driver, Tag::Target.local());
    let categorisation = Categorisation { maintainable, source, target };
    driver.stack.push(Value::Artefact(Box::new(Artefact::Categorisation(categorisation))));
    Ok(())
}

/// `str:ProvisionAgreement`: an agreement to supply data under a
/// `str:StructureUsage` (a dataflow or DSD), by a `str:DataProvider`. The
/// provider reference reuses `str:DataProvider`'s own end handler
/// ([`crate::handlers::item::item_end`]), which pushes its reference-branch
/// result to the shared `Reference` bucket rather than a named one, so it's
/// picked out of that pool by class instead of by name.
pub fn provision_agreement_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    if let Some(reference) = from_first_child(frame, Some(Class::ProvisionAgreement))? {
        driver.stack.push(Value::Reference(Box::new(reference)));
        return Ok(());
    }

    let maintainable = support::maintainable(&mut driver.stack, frame);
    let structure_usage = take_reference_id(driver, Tag::StructureUsage.local());

    let mut data_provider = None;
    let mut remainder = Vec::new();
    for value in driver.stack.pop_all(BucketKey::Reference) {
        match value {
            Value::Reference(r) if data_provider.is_none() && r.child_class == Class::DataProvider => {
                data_provider = Some(r.child_id.clone());
            }
            other => remainder.push(other),
        }
    }
    for value in remainder {
        driver.stack.push(value);
    }

    let provision_agreement = ProvisionAgreement {
        maintainable,
        structure_usage,
        data_provider,
    };
    driver
        .stack
        .push(Value::Artefact(Box::new(Artefact::ProvisionAgreement(provision_agreement))));
    Ok(())
}
