//! `mes:DataSet` carrying `gen:Series`/`gen:Group`/`gen:Obs` children: the
//! generic data encoding, where every key and value is spelled out as
//! `gen:Value` elements rather than left implicit in XML attributes.
//!
//! `gen:Attributes` can occur at dataset, series, and observation scope,
//! all under the same working-stack bucket name; each scope's `_start`
//! handler stashes that bucket before its children run so a nested scope's
//! attributes never leak into the enclosing one.

use sdmx_model::{AttributeValue, DataSet, GroupKey, Key, Observation, ObservationDimension, SeriesKey};
use sdmx_urn::Tag;

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;
use crate::handlers::dataset_support::{ordered_key, value_children};
use crate::stack::Value;

const ATTRIBUTES: &str = "Attributes";

fn drain_attributes(driver: &mut Driver) -> Vec<AttributeValue> {
    driver
        .stack
        .pop_all(ATTRIBUTES)
        .into_iter()
        .filter_map(|v| match v {
            Value::KeyValue(id, value) => Some(AttributeValue { component_id: id, value }),
            _ => None,
        })
        .collect()
}

pub fn attributes_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    for (id, value) in value_children(frame) {
        driver.stack.push_named(ATTRIBUTES, Value::KeyValue(id, value));
    }
    Ok(())
}

pub fn data_set_start(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    driver.stack.stash(&[ATTRIBUTES]);
    Ok(())
}

pub fn data_set_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let described_by = frame.attr("structureRef").map(str::to_string);
    let attributes = drain_attributes(driver);
    driver.stack.unstash(1);

    let observations = driver
        .stack
        .pop_all("Observations")
        .into_iter()
        .filter_map(|v| match v {
            Value::Observation(o) => Some(*o),
            _ => None,
        })
        .collect();
    let series = driver
        .stack
        .pop_all("Series")
        .into_iter()
        .filter_map(|v| match v {
            Value::SeriesKey(s) => Some(*s),
            _ => None,
        })
        .collect();
    let groups = driver
        .stack
        .pop_all("Groups")
        .into_iter()
        .filter_map(|v| match v {
            Value::GroupKey(g) => Some(*g),
            _ => None,
        })
        .collect();

    let data_set = DataSet { described_by, attributes, series, observations, groups };
    driver.stack.push(Value::DataSet(Box::new(data_set)));
    Ok(())
}

pub fn series_key_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let pairs = value_children(frame);
    let key = ordered_key(driver, None, &pairs)?;
    driver.stack.push_named("SeriesKeyOrder", Value::Key(key));
    Ok(())
}

pub fn group_key_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let pairs = value_children(frame);
    let key = ordered_key(driver, None, &pairs)?;
    driver.stack.push_named("GroupKeyOrder", Value::Key(key));
    Ok(())
}

pub fn obs_key_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let pairs = value_children(frame);
    let key = ordered_key(driver, None, &pairs)?;
    driver.stack.push_named("ObsKeyOrder", Value::Key(key));
    Ok(())
}

pub fn series_start(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    driver.stack.stash(&[ATTRIBUTES]);
    Ok(())
}

pub fn series_end(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    let key = match driver.stack.pop_single("SeriesKeyOrder") {
        Some(Value::Key(pairs)) => Key::new(pairs),
        _ => Key::default(),
    };
    let observations = driver
        .stack
        .pop_all("Observations")
        .into_iter()
        .filter_map(|v| match v {
            Value::Observation(o) => Some(*o),
            _ => None,
        })
        .collect();
    let attributes = drain_attributes(driver);
    driver.stack.unstash(1);

    let series = SeriesKey { key, attributes, observations };
    driver.stack.push_named("Series", Value::SeriesKey(Box::new(series)));
    Ok(())
}

pub fn obs_start(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    driver.stack.stash(&[ATTRIBUTES]);
    Ok(())
}

/// `gen:Obs`: exactly one of `gen:ObsDimension` (a single `value` naming
/// the header's resolved `dimensionAtObservation`, the common case inside a
/// `Series`) or `gen:ObsKey` (a full key, for observations not grouped into
/// a series) names the observation's position; `gen:ObsValue` carries the
/// reported value itself.
pub fn obs_end(driver: &mut Driver, frame: &ElementFrame) -> Result<()> {
    let observation_dimension_id = match &driver.observation_dimension {
        Some(ObservationDimension::Dimension(id)) => Some(id.clone()),
        _ => None,
    };
    let obs_dimension = frame.children.iter().find(|c| c.tag == Tag::ObsDimension).and_then(|c| {
        let id = c
            .attrs
            .iter()
            .find(|(k, _)| k == "id")
            .map(|(_, v)| v.clone())
            .or_else(|| observation_dimension_id.clone())?;
        let value = c.attrs.iter().find(|(k, _)| k == "value").map(|(_, v)| v.clone()).unwrap_or_default();
        Some((id, value))
    });

    let pairs = if let Some(pair) = obs_dimension {
        vec![pair]
    } else {
        match driver.stack.pop_single("ObsKeyOrder") {
            Some(Value::Key(pairs)) => pairs,
            _ => Vec::new(),
        }
    };
    let key = Key::new(ordered_key(driver, None, &pairs)?);

    let value = frame
        .children
        .iter()
        .find(|c| c.tag == Tag::ObsValue)
        .and_then(|c| c.attrs.iter().find(|(k, _)| k == "value").map(|(_, v)| v.clone()));

    let attributes = drain_attributes(driver);
    driver.stack.unstash(1);

    let observation = Observation { key, value, attributes };
    driver.stack.push_named("Observations", Value::Observation(Box::new(observation)));
    Ok(())
}

pub fn group_start(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    driver.stack.stash(&[ATTRIBUTES]);
    Ok(())
}

/// `gen:Group`: the generic encoding names no group id directly; the
/// consumer matches a `GroupKey`'s component ids against the DSD's
/// `group_dimensions` to tell which `str:Group` it belongs to.
pub fn group_end(driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
    let key = match driver.stack.pop_single("GroupKeyOrder") {
        Some(Value::Key(pairs)) => Key::new(pairs),
        _ => Key::default(),
    };
    let attributes = drain_attributes(driver);
    driver.stack.unstash(1);

    let group = GroupKey { group_id: None, key, attributes };
    driver.stack.push_named("Groups", Value::GroupKey(Box::new(group)));
    Ok(())
}
