//! SDMX URN parsing and formatting:
//! `urn:sdmx:org.sdmx.infomodel.{package}.{class}={agency}:{id}({version})[.{item_id}]`.
//!
//! The original reader builds this with a single `re.compile`d pattern. No
//! regex crate is in the dependency stack here and the grammar is simple
//! enough to walk by hand, so this is a small hand-written scanner instead
//! of pulling in a new dependency for one fixed-shape string.

use serde::{Deserialize, Serialize};

use crate::class::Class;
use crate::error::{Result, UrnError};

const PREFIX: &str = "urn:sdmx:org.sdmx.infomodel.";

/// A decoded SDMX URN.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Urn {
    pub package: String,
    pub class: Class,
    pub agency: Option<String>,
    pub id: String,
    pub version: Option<String>,
    pub item_id: Option<String>,
}

impl Urn {
    /// Parse a URN string. Returns [`UrnError::Malformed`] if the string
    /// doesn't match the grammar above or its class isn't one this reader
    /// recognizes.
    pub fn parse(s: &str) -> Result<Urn> {
        let rest = s
            .strip_prefix(PREFIX)
            .ok_or_else(|| UrnError::Malformed(s.to_string()))?;

        let (package, rest) = rest
            .split_once('.')
            .ok_or_else(|| UrnError::Malformed(s.to_string()))?;
        let (class_str, rest) = rest
            .split_once('=')
            .ok_or_else(|| UrnError::Malformed(s.to_string()))?;
        let class =
            Class::normalize_ref_class(class_str).ok_or_else(|| UrnError::Malformed(s.to_string()))?;

        let (agency, rest) = match rest.split_once(':') {
            Some((agency, rest)) => (Some(agency.to_string()), rest),
            None => (None, rest),
        };

        // rest is now `{id}({version})[.{item_id}]` or `{id}[.{item_id}]`.
        let (id_and_version, item_id) = match rest.split_once('.') {
            Some((head, tail)) => (head, Some(tail.to_string())),
            None => (rest, None),
        };

        let (id, version) = match id_and_version.split_once('(') {
            Some((id, version_and_paren)) => {
                let version = version_and_paren
                    .strip_suffix(')')
                    .ok_or_else(|| UrnError::Malformed(s.to_string()))?;
                (id.to_string(), Some(version.to_string()))
            }
            None => (id_and_version.to_string(), None),
        };

        if id.is_empty() {
            return Err(UrnError::Malformed(s.to_string()));
        }

        Ok(Urn {
            package: package.to_string(),
            class,
            agency,
            id,
            version,
            item_id,
        })
    }

    /// Format a URN string for a Maintainable identified by `(class, agency,
    /// id, version)`.
    pub fn format(class: Class, agency: &str, id: &str, version: Option<&str>) -> String {
        let mut out = format!("{PREFIX}{}.{class:?}={agency}:{id}", class.package());
        if let Some(version) = version {
            out.push('(');
            out.push_str(version);
            out.push(')');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_maintainable_urn_with_version() {
        let urn = Urn::parse("urn:sdmx:org.sdmx.infomodel.codelist.Codelist=ESTAT:CL_FREQ(1.0)").unwrap();
        assert_eq!(urn.package, "codelist");
        assert_eq!(urn.class, Class::Codelist);
        assert_eq!(urn.agency.as_deref(), Some("ESTAT"));
        assert_eq!(urn.id, "CL_FREQ");
        assert_eq!(urn.version.as_deref(), Some("1.0"));
        assert_eq!(urn.item_id, None);
    }

    #[test]
    fn parses_item_urn() {
        let urn = Urn::parse("urn:sdmx:org.sdmx.infomodel.codelist.Code=ESTAT:CL_FREQ(1.0).A").unwrap();
        assert_eq!(urn.item_id.as_deref(), Some("A"));
    }

    #[test]
    fn rejects_non_urn_string() {
        assert!(Urn::parse("not a urn").is_err());
    }

    #[test]
    fn round_trips_format_then_parse() {
        let formatted = Urn::format(Class::Codelist, "ESTAT", "CL_FREQ", Some("1.0"));
        let parsed = Urn::parse(&formatted).unwrap();
        assert_eq!(parsed.agency.as_deref(), Some("ESTAT"));
        assert_eq!(parsed.id, "CL_FREQ");
        assert_eq!(parsed.version.as_deref(), Some("1.0"));
    }
}
