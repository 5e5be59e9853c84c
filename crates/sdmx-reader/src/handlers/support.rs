//! The layered artifact builders: `annotable` → `identifiable` → `nameable`
//! → `versionable` → `maintainable`, each one draining the working stack of
//! whatever its level contributes and delegating to the level below.

use sdmx_model::{Agency, Annotation, Identity, InternationalString, MaintainableHeader, NameableHeader};

use crate::frame::ElementFrame;
use crate::stack::{BucketKey, Value, WorkingStack};

/// Pop every pending `Annotation` and attach it to an otherwise-built
/// identity.
pub fn annotations(stack: &mut WorkingStack) -> Vec<Annotation> {
    stack
        .pop_all(BucketKey::Annotation)
        .into_iter()
        .filter_map(|v| match v {
            Value::Annotation(a) => Some(*a),
            _ => None,
        })
        .collect()
}

/// Build an `Identity` from the element's `id` attribute plus any pending
/// annotations.
pub fn identifiable(stack: &mut WorkingStack, frame: &ElementFrame) -> Identity {
    Identity {
        id: frame.attr("id").unwrap_or_default().to_string(),
        annotations: annotations(stack),
    }
}

/// Drain a localization bucket (`Name`, `Description`, ...) into an
/// `InternationalString`.
pub fn localizations(stack: &mut WorkingStack, bucket: &str) -> InternationalString {
    let mut s = InternationalString::new();
    for value in stack.pop_all(bucket) {
        if let Value::Localization(locale, text) = value {
            s.add_localization(locale, text);
        }
    }
    s
}

/// Build a `NameableHeader` from the element plus pending `Name`/
/// `Description` localizations.
pub fn nameable(stack: &mut WorkingStack, frame: &ElementFrame) -> NameableHeader {
    NameableHeader {
        identity: identifiable(stack, frame),
        name: localizations(stack, "Name"),
        description: localizations(stack, "Description"),
    }
}

/// Build a `MaintainableHeader` from the element's `version`,
/// `isExternalReference`, `isFinal`, `uri`, `urn`, and `agencyID`
/// attributes.
///
/// `agencyID` → `maintainer` isn't shown in the original reader's XML
/// handler at all (it flows through the domain model's own constructor);
/// reading it here directly is this reader's equivalent of that wiring.
pub fn maintainable(stack: &mut WorkingStack, frame: &ElementFrame) -> MaintainableHeader {
    let nameable = nameable(stack, frame);
    MaintainableHeader {
        nameable,
        version: frame.attr("version").map(str::to_string),
        maintainer: frame.attr("agencyID").map(Agency::new),
        is_external_reference: frame.attr("isExternalReference") == Some("true"),
        is_final: frame.attr("isFinal") == Some("true"),
        uri: frame.attr("uri").map(str::to_string),
        urn: frame.attr("urn").map(str::to_string),
    }
}
