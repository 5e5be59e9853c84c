//! `str:DataStructure`: created eagerly at `start` so forward references
//! from its own `ConceptIdentity`/`Enumeration` children (and from sibling
//! elements that reference the DSD before its closing tag) resolve against
//! a real object instead of failing.

use sdmx_model::{Artefact, DataStructureDefinition};

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::support;
use crate::stack::{BucketKey, Value, WorkingStack};

/// Find the in-progress `DataStructureDefinition` with the given id,
/// mutably, without popping it off the stack — it stays there collecting
/// dimensions/attributes/measures from its nested component lists until its
/// own `end` event fires.
pub(crate) fn dsd_mut<'a>(stack: &'a mut WorkingStack, id: &str) -> Option<&'a mut DataStructureDefinition> {
    let value = stack.find_mut(BucketKey::Artefact, |v| v.id() == Some(id) && matches!(v, Value::Artefact(a) if matches!(**a, Artefact::DataStructureDefinition(_))))?;
    match value {
        Value::Artefact(artefact) => match artefact.as_mut() {
            Artefact::DataStructureDefinition(dsd) => Some(dsd),
            _ => None,
        },
        _ => None,
    }
}

pub fn dsd_start(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let id = frame.attr("id").unwrap_or_default();
    if driver.stack.get_by_id(BucketKey::Artefact, id).is_some() {
        // Already present (an external-reference stub created by an
        // earlier forward reference, or the caller-supplied DSD): leave it
        // in place rather than building a second, disconnected candidate.
        return Ok(());
    }

    // At `start` no children have been parsed yet, so `maintainable` only
    // picks up this element's own attributes; its Name/Description arrive
    // later, at `end`.
    let maintainable = support::maintainable(&mut driver.stack, frame);
    let dsd = DataStructureDefinition {
        maintainable,
        ..Default::default()
    };
    driver
        .stack
        .push(Value::Artefact(Box::new(Artefact::DataStructureDefinition(dsd))));
    Ok(())
}

pub fn dsd_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let id = frame.attr("id").unwrap_or_default().to_string();
    let names = support::localizations(&mut driver.stack, "Name");
    let descriptions = support::localizations(&mut driver.stack, "Description");
    let annotations = support::annotations(&mut driver.stack);

    if let Some(dsd) = dsd_mut(&mut driver.stack, &id) {
        dsd.name.extend(names.iter().map(|(l, t)| (l.to_string(), t.to_string())));
        dsd.description
            .extend(descriptions.iter().map(|(l, t)| (l.to_string(), t.to_string())));
        dsd.annotations.extend(annotations);
    }
    Ok(())
}
