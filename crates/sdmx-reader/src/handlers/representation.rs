//! `str:CoreRepresentation`/`str:LocalRepresentation` and the
//! `str:EnumerationFormat`/`str:TextFormat` facets that constrain them.

use sdmx_model::{Facet, FacetType, FacetValueType, Representation};
use sdmx_urn::{to_snake_case, Class, Tag};

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::reference::from_first_child;
use crate::stack::{BucketKey, Value};

/// `str:Enumeration`: always resolves to a `Codelist` id (occasionally some
/// other item scheme in the full information model, but this reader only
/// tracks the common case).
pub fn enumeration_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    if let Some(reference) = from_first_child(frame, Some(Class::Codelist))? {
        driver
            .stack
            .push_named(frame.tag.local(), Value::Reference(Box::new(reference)));
    }
    Ok(())
}

pub fn representation_end(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    let enumeration = match driver.stack.pop_single(Tag::Enumeration.local()) {
        Some(Value::Reference(reference)) => Some(reference.id.clone()),
        _ => None,
    };

    let mut facets = Vec::new();
    let mut text_type = None;
    for value in driver.stack.pop_all(BucketKey::Facet) {
        if let Value::Facet(facet) = value {
            if text_type.is_none() {
                text_type = facet.facet_value_type;
            }
            facets.push(*facet);
        }
    }

    let representation = Representation {
        enumeration,
        facets,
        text_type,
    };
    driver.stack.push(Value::Representation(Box::new(representation)));
    Ok(())
}

/// `str:EnumerationFormat`/`str:TextFormat`: pushes one [`Facet`] per
/// attribute other than `textType`, which instead sets every pushed facet's
/// `facet_value_type`.
pub fn facet_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let text_type = frame
        .attr("textType")
        .and_then(FacetValueType::from_text_type)
        .or(Some(FacetValueType::String));

    for (name, value) in &frame.attrs {
        if name == "textType" {
            continue;
        }
        let Some(facet_type) = facet_type_from_attr(name) else {
            continue;
        };
        driver.stack.push(Value::Facet(Box::new(Facet {
            facet_type,
            facet_value: value.clone(),
            facet_value_type: text_type,
        })));
    }
    Ok(())
}

fn facet_type_from_attr(name: &str) -> Option<FacetType> {
    match to_snake_case(name).as_str() {
        "min_length" => Some(FacetType::MinLength),
        "max_length" => Some(FacetType::MaxLength),
        "min_value" => Some(FacetType::MinValue),
        "max_value" => Some(FacetType::MaxValue),
        "start_value" => Some(FacetType::StartValue),
        "end_value" => Some(FacetType::EndValue),
        "interval" => Some(FacetType::Interval),
        "time_interval" => Some(FacetType::TimeInterval),
        "decimals" => Some(FacetType::Decimals),
        "pattern" => Some(FacetType::Pattern),
        "start_time" => Some(FacetType::StartTime),
        "end_time" => Some(FacetType::EndTime),
        "is_sequence" => Some(FacetType::IsSequence),
        _ => None,
    }
}
