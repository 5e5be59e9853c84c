//! The reference resolver: turns an XML `<Ref>` or `<URN>` into a
//! [`Reference`] descriptor, and resolves a `Reference` against the
//! working stack into a concrete object or an external-reference stub.

use sdmx_model::{Agency, Artefact, MaintainableHeader};
use sdmx_urn::{Class, Tag, Urn};

use crate::error::{ReaderError, Result};
use crate::frame::ElementFrame;
use crate::stack::{BucketKey, Value, WorkingStack};

/// The attributes carried by a `<Ref>` element.
#[derive(Debug, Clone, Default)]
pub struct RefAttrs {
    pub id: Option<String>,
    pub class: Option<String>,
    pub agency_id: Option<String>,
    pub maintainable_parent_id: Option<String>,
    pub maintainable_parent_version: Option<String>,
    pub version: Option<String>,
}

/// A transient, not-yet-resolved reference to a Maintainable or one of its
/// child items.
#[derive(Debug, Clone)]
pub struct Reference {
    /// Class of the object actually looked up on the working stack: the
    /// Maintainable's own class if `maintainable` is true, otherwise the
    /// Maintainable parent's class.
    pub class: Class,
    pub id: String,
    pub version: Option<String>,
    pub agency_id: Option<String>,
    /// Class and id of the referenced target itself, which may be a child
    /// item of `class`/`id` rather than `class`/`id` directly.
    pub child_class: Class,
    pub child_id: String,
    pub maintainable: bool,
}

impl Reference {
    /// Build a `Reference` from a `<Ref>` element's attributes. `parent_tag`
    /// is the tag of the element enclosing the `<Ref>`, used as a fallback
    /// class hint when `class` is absent; `class_hint` is a caller-supplied
    /// last resort.
    pub fn from_ref_attrs(attrs: &RefAttrs, parent_tag: Tag, class_hint: Option<Class>) -> Result<Reference> {
        let child_id = attrs.id.clone().ok_or_else(|| ReaderError::MalformedReference {
            tag: parent_tag,
            detail: "<Ref> is missing required attribute 'id'".to_string(),
        })?;

        let child_class = attrs
            .class
            .as_deref()
            .and_then(Class::normalize_ref_class)
            .or_else(|| Class::normalize_ref_class(parent_tag.local()))
            .or(class_hint)
            .ok_or_else(|| ReaderError::MalformedReference {
                tag: parent_tag,
                detail: "<Ref> has no 'class' attribute, no class could be inferred from its parent, \
                         and the caller supplied no class hint"
                    .to_string(),
            })?;

        Ok(Self::from_parts(
            child_class,
            child_id,
            attrs.version.clone(),
            attrs.agency_id.clone(),
            attrs.maintainable_parent_id.clone(),
        ))
    }

    /// Build a `Reference` from a decoded `<URN>` body.
    pub fn from_urn(text: &str) -> Result<Reference> {
        let urn = Urn::parse(text)?;
        let mut reference = Self::from_parts(urn.class, urn.id, urn.version, urn.agency, None);
        if let Some(item_id) = urn.item_id {
            reference.child_id = item_id;
        }
        Ok(reference)
    }

    fn from_parts(
        child_class: Class,
        child_id: String,
        version: Option<String>,
        agency_id: Option<String>,
        maintainable_parent_id: Option<String>,
    ) -> Reference {
        if child_class.is_maintainable() {
            Reference {
                class: child_class,
                id: child_id.clone(),
                version,
                agency_id,
                child_class,
                child_id,
                maintainable: true,
            }
        } else {
            // Non-Maintainable target: the parent Maintainable's own id is
            // either given directly (`maintainableParentID`) or, lacking
            // that, assumed equal to the child's id (the common case for a
            // `<Ref class="Code">` naming a code with no separate parent
            // attribute, where the id uniquely names the owning codelist
            // out of band).
            let parent_id = maintainable_parent_id.unwrap_or_else(|| child_id.clone());
            Reference {
                class: parent_class(child_class),
                id: parent_id,
                version,
                agency_id,
                child_class,
                child_id,
                maintainable: false,
            }
        }
    }
}

/// The Maintainable class that owns items of `child_class`.
fn parent_class(child_class: Class) -> Class {
    match child_class {
        Class::Agency | Class::DataProvider => Class::AgencyScheme,
        Class::Category => Class::CategoryScheme,
        Class::Code => Class::Codelist,
        Class::Concept => Class::ConceptScheme,
        Class::Dimension
        | Class::TimeDimension
        | Class::MeasureDimension
        | Class::PrimaryMeasure
        | Class::DimensionDescriptor
        | Class::AttributeDescriptor
        | Class::MeasureDescriptor
        | Class::GroupDimensionDescriptor
        | Class::DataAttribute => Class::DataStructureDefinition,
        other => other,
    }
}

/// Build a `Reference` from a reference-bearing element's first child if
/// that child is `<Ref .../>` or `<URN>...</URN>`. Returns `Ok(None)` if the
/// element has no children at all, or its first child is neither (nothing
/// to reference, not an error by itself — the caller decides whether that's
/// expected), mirroring the `NotReference` escape hatch the original reader
/// uses when probing an element speculatively. Several tags are reused bare
/// this way alongside a real, fully-declared element of the same name (a
/// `<str:Dimension>` wrapping a `<Ref>` inside `AttributeRelationship`
/// versus a real dimension declaration whose first child is its own
/// `ConceptIdentity`), so a non-Ref/URN first child must fall through to
/// the real-declaration path rather than fail the parse.
pub fn from_first_child(frame: &ElementFrame, class_hint: Option<Class>) -> Result<Option<Reference>> {
    let Some(child) = frame.children.first() else {
        return Ok(None);
    };

    if child.tag == Tag::Ref {
        let attrs = RefAttrs {
            id: child.attrs.iter().find(|(k, _)| k == "id").map(|(_, v)| v.clone()),
            class: child.attrs.iter().find(|(k, _)| k == "class").map(|(_, v)| v.clone()),
            agency_id: child.attrs.iter().find(|(k, _)| k == "agencyID").map(|(_, v)| v.clone()),
            maintainable_parent_id: child
                .attrs
                .iter()
                .find(|(k, _)| k == "maintainableParentID")
                .map(|(_, v)| v.clone()),
            maintainable_parent_version: child
                .attrs
                .iter()
                .find(|(k, _)| k == "maintainableParentVersion")
                .map(|(_, v)| v.clone()),
            version: child.attrs.iter().find(|(k, _)| k == "version").map(|(_, v)| v.clone()),
        };
        Reference::from_ref_attrs(&attrs, frame.tag, class_hint).map(Some)
    } else if child.tag == Tag::Urn {
        Reference::from_urn(&child.text).map(Some)
    } else {
        Ok(None)
    }
}

/// The fixed class hint some reference-bearing leaves always carry,
/// independent of whatever `class` attribute (or lack of one) their `<Ref>`
/// child has: `<str:AttachmentGroup>` always names a
/// `GroupDimensionDescriptor`, `<str:DimensionReference>` always names a
/// `Dimension`, `<com:Structure>` always names a `DataStructureDefinition`,
/// `<com:StructureUsage>` always names a `DataflowDefinition`. `<str:Parent>`
/// is handled separately by its caller, since its hint is the enclosing
/// item's own tag rather than a fixed one.
pub fn class_hint_for(tag: Tag) -> Option<Class> {
    match tag {
        Tag::AttachmentGroup => Some(Class::GroupDimensionDescriptor),
        Tag::DimensionReference => Some(Class::Dimension),
        Tag::StructureRef | Tag::Structure => Some(Class::DataStructureDefinition),
        Tag::StructureUsage => Some(Class::DataflowDefinition),
        _ => None,
    }
}

/// Map an SDMX class to the working-stack bucket Maintainables and items
/// of that class are stored under.
fn bucket_for(class: Class) -> BucketKey {
    match class {
        Class::Agency | Class::DataProvider | Class::Category | Class::Code => BucketKey::Item,
        Class::Concept => BucketKey::Concept,
        Class::Dimension
        | Class::TimeDimension
        | Class::MeasureDimension
        | Class::PrimaryMeasure
        | Class::DataAttribute => BucketKey::Component,
        Class::GroupDimensionDescriptor => BucketKey::GroupDimensionDescriptor,
        _ => BucketKey::Artefact,
    }
}

/// Resolve `reference` against the working stack, per the three-step
/// policy: direct lookup, then look-up-via-parent for non-Maintainable
/// targets, then stub creation for Maintainable targets.
///
/// Returns `None` only when a non-Maintainable target's parent exists but
/// is itself an unresolved external-reference stub (logged by the caller,
/// not fatal).
pub fn resolve(stack: &mut WorkingStack, reference: &Reference) -> Option<Value> {
    let bucket = bucket_for(reference.child_class);

    if let Some(value) = stack.get_by_id(bucket, &reference.child_id) {
        return Some(value.clone());
    }

    if !reference.maintainable {
        let parent_bucket = bucket_for(reference.class);
        let parent = stack.get_by_id(parent_bucket, &reference.id)?;
        if let Value::Artefact(artefact) = parent {
            if artefact.maintainable().is_external_reference {
                tracing::warn!(
                    class = ?reference.child_class,
                    id = %reference.child_id,
                    "cannot resolve reference: parent is an external-reference stub"
                );
                return None;
            }
        }
        // The parent is known but doesn't (yet) carry the requested child;
        // nothing further to try without re-walking its children, which the
        // calling handler does by id against its own in-memory copy.
        return None;
    }

    let stub = stub_artefact(reference);
    let value = Value::Artefact(Box::new(stub));
    stack.push(value.clone());
    Some(value)
}

fn stub_artefact(reference: &Reference) -> Artefact {
    let maintainer = reference.agency_id.clone().map(Agency::new);
    let mut header = MaintainableHeader::stub(reference.id.clone(), maintainer);
    header.version = reference.version.clone();

    match reference.class {
        Class::Codelist => Artefact::Codelist(sdmx_model::Codelist {
            maintainable: header,
            is_partial: false,
            items: Vec::new(),
        }),
        Class::AgencyScheme => Artefact::AgencyScheme(sdmx_model::AgencyScheme {
            maintainable: header,
            is_partial: false,
            items: Vec::new(),
        }),
        Class::CategoryScheme => Artefact::CategoryScheme(sdmx_model::CategoryScheme {
            maintainable: header,
            is_partial: false,
            items: Vec::new(),
        }),
        Class::DataProviderScheme => Artefact::DataProviderScheme(sdmx_model::DataProviderScheme {
            maintainable: header,
            is_partial: false,
            items: Vec::new(),
        }),
        Class::OrganisationScheme => Artefact::OrganisationScheme(sdmx_model::OrganisationScheme {
            maintainable: header,
            is_partial: false,
            items: Vec::new(),
        }),
        Class::ConceptScheme => Artefact::ConceptScheme(sdmx_model::ConceptScheme {
            maintainable: header,
            items: Vec::new(),
        }),
        Class::DataflowDefinition => Artefact::DataflowDefinition(sdmx_model::DataflowDefinition {
            maintainable: header,
            structure: None,
        }),
        Class::Categorisation => Artefact::Categorisation(sdmx_model::Categorisation {
            maintainable: header,
            source: None,
            target: None,
        }),
        Class::ContentConstraint => Artefact::ContentConstraint(sdmx_model::ContentConstraint {
            maintainable: header,
            role: None,
            cube_regions: Vec::new(),
            data_key_sets: Vec::new(),
            constraint_attachment: Vec::new(),
        }),
        Class::ProvisionAgreement => Artefact::ProvisionAgreement(sdmx_model::ProvisionAgreement {
            maintainable: header,
            structure_usage: None,
            data_provider: None,
        }),
        _ => Artefact::DataStructureDefinition(sdmx_model::DataStructureDefinition {
            maintainable: header,
            ..Default::default()
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ref_with_explicit_class_ignores_parent_tag() {
        let attrs = RefAttrs {
            id: Some("CL_FREQ".into()),
            class: Some("Codelist".into()),
            agency_id: Some("ESTAT".into()),
            ..Default::default()
        };
        let reference = Reference::from_ref_attrs(&attrs, Tag::Enumeration, None).unwrap();
        assert_eq!(reference.class, Class::Codelist);
        assert!(reference.maintainable);
    }

    #[test]
    fn ref_without_class_falls_back_to_parent_tag() {
        // A bare <Ref id="..."/> nested directly in <str:Dataflow>, with no
        // class attribute of its own: the parent element's own tag name
        // ("Dataflow") is itself a recognized class name.
        let attrs = RefAttrs {
            id: Some("DF_TEST".into()),
            ..Default::default()
        };
        let reference = Reference::from_ref_attrs(&attrs, Tag::Dataflow, None).unwrap();
        assert_eq!(reference.class, Class::DataflowDefinition);
    }

    #[test]
    fn ref_without_class_or_parent_hint_falls_back_to_caller_hint() {
        let attrs = RefAttrs {
            id: Some("CL_FREQ".into()),
            ..Default::default()
        };
        let reference =
            Reference::from_ref_attrs(&attrs, Tag::Enumeration, Some(Class::Codelist)).unwrap();
        assert_eq!(reference.class, Class::Codelist);
    }

    #[test]
    fn urn_for_item_sets_child_id_from_item_id() {
        let reference = Reference::from_urn("urn:sdmx:org.sdmx.infomodel.codelist.Code=ESTAT:CL_FREQ(1.0).A").unwrap();
        assert_eq!(reference.child_id, "A");
        assert_eq!(reference.id, "CL_FREQ");
        assert!(!reference.maintainable);
    }

    #[test]
    fn missing_id_is_malformed() {
        let attrs = RefAttrs::default();
        let err = Reference::from_ref_attrs(&attrs, Tag::Enumeration, None);
        assert!(matches!(err, Err(ReaderError::MalformedReference { .. })));
    }

    #[test]
    fn resolve_maintainable_miss_creates_stub() {
        let mut stack = WorkingStack::new();
        let reference = Reference {
            class: Class::Codelist,
            id: "CL_FREQ".into(),
            version: None,
            agency_id: Some("ESTAT".into()),
            child_class: Class::Codelist,
            child_id: "CL_FREQ".into(),
            maintainable: true,
        };
        let resolved = resolve(&mut stack, &reference).unwrap();
        match resolved {
            Value::Artefact(a) => assert!(a.maintainable().is_external_reference),
            _ => panic!("expected an Artefact"),
        }
        assert_eq!(stack.count(BucketKey::Artefact), 1);
    }
}
