//! Data sets: the observations, series, and groups a message actually
//! carries, as opposed to the structures that describe their shape.

use serde::{Deserialize, Serialize};

/// An ordered, dimension-id-keyed set of values: a full observation key, a
/// series key, or a group key, depending on which dimensions it covers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Key {
    pub values: Vec<(String, String)>,
}

impl Key {
    pub fn new(values: Vec<(String, String)>) -> Self {
        Self { values }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(k, _)| k == id)
            .map(|(_, v)| v.as_str())
    }
}

/// A reported attribute value, attached by component id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttributeValue {
    pub component_id: String,
    pub value: String,
}

/// An observation's key dropped down to the single dimension the message
/// declares `dimensionAtObservation` against, plus the full key it was
/// reported with (for `AllDimensions` structure-specific data, both are
/// identical).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Observation {
    pub key: Key,
    pub value: Option<String>,
    pub attributes: Vec<AttributeValue>,
}

/// A series: a partial key shared by its observations, plus the
/// observations themselves and any attributes attached to the series as a
/// whole.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeriesKey {
    pub key: Key,
    pub attributes: Vec<AttributeValue>,
    pub observations: Vec<Observation>,
}

/// A group: a named subset-of-dimensions key with its own attributes,
/// cross-referenced against matching series/observations by the consumer
/// rather than nested inline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupKey {
    pub group_id: Option<String>,
    pub key: Key,
    pub attributes: Vec<AttributeValue>,
}

/// A full data set: the dataset-level attributes plus every series,
/// loose observation, and group it carries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataSet {
    /// Id of the dataflow or structure usage this data set conforms to.
    pub described_by: Option<String>,
    pub attributes: Vec<AttributeValue>,
    pub series: Vec<SeriesKey>,
    /// Observations not grouped into a series (flat, `AllDimensions` data).
    pub observations: Vec<Observation>,
    pub groups: Vec<GroupKey>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_get_finds_value_by_component_id() {
        let key = Key::new(vec![
            ("FREQ".to_string(), "A".to_string()),
            ("REF_AREA".to_string(), "UK".to_string()),
        ]);
        assert_eq!(key.get("REF_AREA"), Some("UK"));
        assert_eq!(key.get("MISSING"), None);
    }
}
