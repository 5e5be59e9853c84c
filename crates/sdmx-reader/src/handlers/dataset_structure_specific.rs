//! `data:Series`, `data:Group`, `data:Obs`: the structure-specific data
//! encoding, where every dimension, attribute, and the observed value
//! itself are plain XML attributes on the element rather than nested
//! `gen:Value` children. Partitioning an element's attributes into key
//! parts, the measure, and attribute values requires consulting the data
//! structure definition the message declares (or, lacking one, growing one
//! on the fly — see [`crate::driver::Driver::ss_missing_dsd`]).

use sdmx_model::{AttributeValue, DataStructureDefinition, GroupKey, Key, Observation, SeriesKey};

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::dataset_generic::{data_set_end, data_set_start};
use crate::handlers::dataset_support::dsd_mut_or_create;
use crate::stack::Value;

pub use data_set_end as ss_data_set_end;
pub use data_set_start as ss_data_set_start;

/// Split `attrs` into declared dimension values and everything else
/// (attributes plus, if found, the measure). Ids absent from the DSD are
/// folded in as new dimensions when `default_to_dimension` is set (true
/// for `Series`/`Group` attribute sets, which are key-only by
/// construction), otherwise as new plain attributes (the `Obs` case,
/// where an unrecognized id is far more likely a reported attribute than
/// a key component).
fn partition(
    dsd: &mut DataStructureDefinition,
    attrs: &[(String, String)],
    default_to_dimension: bool,
) -> (Vec<(String, String)>, Vec<(String, String)>) {
    let mut key = Vec::new();
    let mut rest = Vec::new();
    for (id, value) in attrs {
        if id == "xsi:type" {
            continue;
        }
        if dsd.dimensions.find(id).is_some() {
            key.push((id.clone(), value.clone()));
        } else if dsd.attributes.find(id).is_some() || dsd.measures.find(id).is_some() {
            rest.push((id.clone(), value.clone()));
        } else if default_to_dimension {
            dsd.ensure_dimension(id);
            key.push((id.clone(), value.clone()));
        } else {
            dsd.ensure_attribute(id);
            rest.push((id.clone(), value.clone()));
        }
    }
    (key, rest)
}

/// Pull the primary measure's value out of `rest`, growing the DSD with a
/// conventional `OBS_VALUE` measure if none is declared and the message is
/// running in lenient (`ss_missing_dsd`) mode.
fn extract_measure(dsd: &mut DataStructureDefinition, rest: &mut Vec<(String, String)>, lenient: bool) -> Option<String> {
    let measure_id = dsd
        .measures
        .components
        .first()
        .map(|c| c.id().to_string())
        .or_else(|| lenient.then(|| "OBS_VALUE".to_string()))?;

    let position = rest.iter().position(|(id, _)| id == &measure_id)?;
    let (_, value) = rest.remove(position);
    dsd.ensure_measure(&measure_id);
    Some(value)
}

fn to_attribute_values(pairs: Vec<(String, String)>) -> Vec<AttributeValue> {
    pairs.into_iter().map(|(component_id, value)| AttributeValue { component_id, value }).collect()
}

pub fn ss_series_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let dsd = dsd_mut_or_create(driver, None);
    let (key_pairs, rest) = partition(dsd, &frame.attrs, true);
    let attributes = to_attribute_values(rest);
    let key = Key::new(dsd.make_key(&key_pairs)?);

    let observations = driver
        .stack
        .pop_all("Observations")
        .into_iter()
        .filter_map(|v| match v {
            Value::Observation(o) => Some(*o),
            _ => None,
        })
        .collect();

    let series = SeriesKey { key, attributes, observations };
    driver.stack.push_named("Series", Value::SeriesKey(Box::new(series)));
    Ok(())
}

pub fn ss_group_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let group_id = frame
        .attr("xsi:type")
        .and_then(|raw| raw.split_once(':').map(|(_, local)| local.to_string()).or_else(|| Some(raw.to_string())));

    let dsd = dsd_mut_or_create(driver, None);
    let (key_pairs, rest) = partition(dsd, &frame.attrs, true);
    let attributes = to_attribute_values(rest);
    let key = Key::new(dsd.make_key(&key_pairs)?);

    let group = GroupKey { group_id, key, attributes };
    driver.stack.push_named("Groups", Value::GroupKey(Box::new(group)));
    Ok(())
}

/// `data:Obs`: inside a `Series` this carries only the remaining
/// dimensions (typically the one named by `dimensionAtObservation`) plus
/// the measure and attributes; as a direct child of the data set (the
/// `AllDimensions` case) it carries the full dimension set as well.
pub fn ss_obs_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let lenient = driver.ss_missing_dsd;
    let dsd = dsd_mut_or_create(driver, None);
    let (key_pairs, mut rest) = partition(dsd, &frame.attrs, false);
    let value = extract_measure(dsd, &mut rest, lenient);
    let attributes = to_attribute_values(rest);
    let key = Key::new(dsd.make_key(&key_pairs)?);

    let observation = Observation { key, value, attributes };
    driver.stack.push_named("Observations", Value::Observation(Box::new(observation)));
    Ok(())
}

/// `data:Obs` has no child elements of its own in this encoding; no
/// `_start` handler is needed since it carries nothing the enclosing
/// `Series`/`Group`'s own `Attributes` bucket would collide with (there is
/// none — attribute values live on the element itself, not in a nested
/// bucket).
pub fn ss_series_start(_driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    Ok(())
}

pub fn ss_group_start(_driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    Ok(())
}

pub fn ss_obs_start(_driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    Ok(())
}
