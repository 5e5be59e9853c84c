//! Component and concept representations: an enumeration reference and/or a
//! set of facets constraining the represented value.

use serde::{Deserialize, Serialize};

/// The data type a facet-constrained value must conform to, mirrored from
/// SDMX-ML's `TextType` attribute (kept under its SDMX-IM name,
/// `FacetValueType`, per the class hint table used when resolving
/// references).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetValueType {
    String,
    Alpha,
    AlphaNumeric,
    Numeric,
    BigInteger,
    Integer,
    Long,
    Short,
    Decimal,
    Float,
    Double,
    Boolean,
    Uri,
    Count,
    InclusiveValueRange,
    ExclusiveValueRange,
    Incremental,
    ObservationalTimePeriod,
    StandardTimePeriod,
    BasicTimePeriod,
    GregorianTimePeriod,
    GregorianYear,
    GregorianYearMonth,
    GregorianMonth,
    GregorianDay,
    ReportingTimePeriod,
    DateTime,
    Duration,
}

impl FacetValueType {
    /// Parse an SDMX-ML `textType` attribute value (`UpperCamelCase`, e.g.
    /// `String`, `ObservationalTimePeriod`) into its `FacetValueType`.
    ///
    /// `textType` on the wire is already upper camel case matching these
    /// variant names directly; the lowercase-first mapping some readers
    /// apply is a naming convention for the Python attribute, not a value
    /// transform, so no case conversion happens here.
    pub fn from_text_type(value: &str) -> Option<Self> {
        use FacetValueType::*;
        Some(match value {
            "String" => String,
            "Alpha" => Alpha,
            "AlphaNumeric" => AlphaNumeric,
            "Numeric" => Numeric,
            "BigInteger" => BigInteger,
            "Integer" => Integer,
            "Long" => Long,
            "Short" => Short,
            "Decimal" => Decimal,
            "Float" => Float,
            "Double" => Double,
            "Boolean" => Boolean,
            "URI" => Uri,
            "Count" => Count,
            "InclusiveValueRange" => InclusiveValueRange,
            "ExclusiveValueRange" => ExclusiveValueRange,
            "Incremental" => Incremental,
            "ObservationalTimePeriod" => ObservationalTimePeriod,
            "StandardTimePeriod" => StandardTimePeriod,
            "BasicTimePeriod" => BasicTimePeriod,
            "GregorianTimePeriod" => GregorianTimePeriod,
            "GregorianYear" => GregorianYear,
            "GregorianYearMonth" => GregorianYearMonth,
            "GregorianMonth" => GregorianMonth,
            "GregorianDay" => GregorianDay,
            "ReportingTimePeriod" => ReportingTimePeriod,
            "DateTime" => DateTime,
            "Duration" => Duration,
            _ => return None,
        })
    }
}

/// Which facet kind a `<str:Facet>` element's attributes describe
/// (`isSequence`, `minLength`, `pattern`, and so on all collapse to the one
/// `Facet` struct below; `FacetType` exists to name that without inventing
/// one struct per kind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacetType {
    MinLength,
    MaxLength,
    MinValue,
    MaxValue,
    StartValue,
    EndValue,
    Interval,
    TimeInterval,
    Decimals,
    Pattern,
    StartTime,
    EndTime,
    IsSequence,
}

/// One constraint on a represented value, e.g. `minLength=1`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facet {
    pub facet_type: FacetType,
    pub facet_value: String,
    pub facet_value_type: Option<FacetValueType>,
}

/// A representation: a reference to an enumeration (a `Codelist` id) and/or
/// a set of facets plus the facet value type they constrain.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Representation {
    /// Id of the enumerating `Codelist`, if the representation is
    /// enumerated rather than (or in addition to) facet-constrained.
    pub enumeration: Option<String>,
    pub facets: Vec<Facet>,
    pub text_type: Option<FacetValueType>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_standard_text_types() {
        assert_eq!(
            FacetValueType::from_text_type("ObservationalTimePeriod"),
            Some(FacetValueType::ObservationalTimePeriod)
        );
        assert_eq!(FacetValueType::from_text_type("Bogus"), None);
    }
}
