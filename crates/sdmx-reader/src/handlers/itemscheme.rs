//! `str:Codelist`, `str:AgencyScheme`, `str:CategoryScheme`,
//! `str:DataProviderScheme`, `str:OrganisationScheme`, `str:ConceptScheme`:
//! the maintainable item schemes. Flattens and de-duplicates by id, since an
//! item nested inside its parent's XML element and the same item later
//! named by a sibling's `<str:Parent>` reference are the same logical item.

use sdmx_model::{Artefact, ConceptScheme, ItemScheme};
use sdmx_urn::Tag;

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::support;
use crate::stack::{BucketKey, Value};

pub fn itemscheme_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let maintainable = support::maintainable(&mut driver.stack, frame);
    let is_partial = frame.attr("isPartial") == Some("true");

    let mut scheme = ItemScheme { maintainable, is_partial, items: Vec::new() };
    for value in driver.stack.pop_all(BucketKey::Item) {
        if let Value::Item(item) = value {
            scheme.add_item(*item);
        }
    }

    let artefact = match frame.tag {
        Tag::Codelist => Artefact::Codelist(scheme),
        Tag::AgencyScheme => Artefact::AgencyScheme(scheme),
        Tag::CategoryScheme => Artefact::CategoryScheme(scheme),
        Tag::DataProviderScheme => Artefact::DataProviderScheme(scheme),
        Tag::OrganisationScheme => Artefact::OrganisationScheme(scheme),
        _ => return Ok(()),
    };
    driver.stack.push(Value::Artefact(Box::new(artefact)));
    Ok(())
}

/// `str:ConceptScheme`: kept separate from [`itemscheme_end`] since concepts
/// carry a representation that plain items don't, and so live in their own
/// working-stack bucket.
pub fn concept_scheme_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let maintainable = support::maintainable(&mut driver.stack, frame);

    let mut scheme = ConceptScheme { maintainable, items: Vec::new() };
    for value in driver.stack.pop_all(BucketKey::Concept) {
        if let Value::Concept(concept) = value {
            scheme.add_item(*concept);
        }
    }

    driver.stack.push(Value::Artefact(Box::new(Artefact::ConceptScheme(scheme))));
    Ok(())
}
