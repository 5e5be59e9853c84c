//! The working stack: a keyed multimap of partially-built objects.
//!
//! The source reader keys this structure by either a Python class object or
//! an XML localname string, and `pop_all`/`get` walk an `isinstance` filter
//! when the key is a class. Here every value pushed under a "class" key is
//! already a closed Rust enum (`Value`), so a class-keyed bucket is exact
//! match only — there is no subclass relationship left to walk. `BucketKey`
//! enumerates the class-shaped buckets; `Value::bucket` says which bucket a
//! value defaults into when pushed without an explicit key.

use std::collections::HashMap;

use sdmx_model::{
    Annotation, Artefact, AttributeRelationship, Component, Concept, CubeRegion, DataKey, DataKeySet, DataSet, Facet,
    Footer, GroupDimensionDescriptor, GroupKey, Header, InternationalString, Item, MemberSelection, MemberValue,
    Message, Observation, ObservationDimension, Representation, SeriesKey,
};

use crate::reference::Reference;

/// The class-shaped bucket a value defaults into when pushed with
/// [`WorkingStack::push`]. Distinct from `sdmx_urn::Class`: that enum names
/// SDMX-IM classes for URN/Ref purposes, while this one names the stack's
/// own grouping, which is coarser (every dimension/attribute/measure
/// component shares one `Component` bucket, matching how the DSD's
/// `_cl` handler in the original reader gathers them together regardless
/// of concrete subtype).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKey {
    Message,
    DataSet,
    Artefact,
    Component,
    Concept,
    Item,
    Annotation,
    GroupDimensionDescriptor,
    Representation,
    Reference,
    Facet,
    AttributeRelationship,
    CubeRegion,
    MemberSelection,
    MemberValue,
    DataKey,
    DataKeySet,
    Footer,
    FooterText,
    Header,
}

/// Any object the engine can hold on the working stack while a document is
/// mid-parse.
#[derive(Debug, Clone)]
pub enum Value {
    Message(Box<Message>),
    DataSet(Box<DataSet>),
    Artefact(Box<Artefact>),
    Component(Box<Component>),
    Concept(Box<Concept>),
    Item(Box<Item>),
    Annotation(Box<Annotation>),
    GroupDimensionDescriptor(Box<GroupDimensionDescriptor>),
    Representation(Box<Representation>),
    Reference(Box<Reference>),
    /// One facet of a representation, collected under the
    /// [`BucketKey::Facet`] bucket until the enclosing
    /// `CoreRepresentation`/`LocalRepresentation` drains them.
    Facet(Box<Facet>),
    /// A `str:AttributeRelationship`'s resolved attachment, collected under
    /// [`BucketKey::AttributeRelationship`] until the enclosing `Attribute`
    /// drains it.
    AttributeRelationship(Box<AttributeRelationship>),
    /// A region of a `ContentConstraint`'s key space, collected under
    /// [`BucketKey::CubeRegion`] until the enclosing `ContentConstraint`
    /// drains them.
    CubeRegion(Box<CubeRegion>),
    /// One component's permitted values within a `CubeRegion`, collected
    /// under [`BucketKey::MemberSelection`].
    MemberSelection(Box<MemberSelection>),
    /// One `com:Value` within a `MemberSelection`, collected under
    /// [`BucketKey::MemberValue`].
    MemberValue(Box<MemberValue>),
    /// A single fully-specified key within a `DataKeySet`, collected under
    /// [`BucketKey::DataKey`].
    DataKey(Box<DataKey>),
    /// An explicit key enumeration, collected under
    /// [`BucketKey::DataKeySet`] until the enclosing `ContentConstraint`
    /// drains them.
    DataKeySet(Box<DataKeySet>),
    /// A fully assembled message footer, collected under [`BucketKey::Footer`]
    /// until the document finishes.
    Footer(Box<Footer>),
    /// One `footer:Message`'s text, collected under
    /// [`BucketKey::FooterText`] until the enclosing `footer:Footer` drains
    /// them.
    FooterText(Box<InternationalString>),
    /// A fully assembled message header, collected under
    /// [`BucketKey::Header`] until the message root drains it.
    Header(Box<Header>),
    /// A `mes:Structure` nested in `mes:Header`, resolved to the dimension
    /// (or the whole key) a structure-specific message's observations are
    /// indexed against, stored under the name `"HeaderStructure"`.
    ObservationDimension(Box<ObservationDimension>),
    /// A leaf's raw text (e.g. `mes:ID`, `com:Value`), stored under the
    /// element's localname.
    Text(String),
    /// A `(locale, label)` pair collected from a localized leaf (e.g.
    /// `com:Name`), stored under the parent concept's bucket name
    /// (`"Name"`, `"Description"`).
    Localization(String, String),
    /// A `(component_id, value)` pair collected while building a Key.
    KeyValue(String, String),
    /// A fully ordered `(component_id, value)` key, assembled by
    /// `DataStructureDefinition::make_key` from a `gen:SeriesKey`/
    /// `GroupKey`/`ObsKey`'s `gen:Value` children, stored under the
    /// element's localname for its parent to drain.
    Key(Vec<(String, String)>),
    /// One fully assembled observation, collected under the name
    /// `"Observations"` until the enclosing series (or data set, for loose
    /// observations) drains them.
    Observation(Box<Observation>),
    /// One fully assembled series, collected under the name `"Series"`
    /// until the enclosing data set drains them.
    SeriesKey(Box<SeriesKey>),
    /// One fully assembled group, collected under the name `"Groups"`
    /// until the enclosing data set drains them.
    GroupKey(Box<GroupKey>),
}

impl Value {
    /// The identifiable id this value carries, if any — used by
    /// [`WorkingStack::get_by_id`] to find a specific object within a
    /// bucket without popping it.
    pub fn id(&self) -> Option<&str> {
        match self {
            Value::Artefact(a) => Some(a.id()),
            Value::Component(c) => Some(c.id()),
            Value::Concept(c) => Some(&c.id),
            Value::Item(i) => Some(&i.id),
            Value::Message(_)
            | Value::DataSet(_)
            | Value::Annotation(_)
            | Value::GroupDimensionDescriptor(_)
            | Value::Representation(_)
            | Value::Reference(_)
            | Value::Facet(_)
            | Value::AttributeRelationship(_)
            | Value::CubeRegion(_)
            | Value::MemberSelection(_)
            | Value::MemberValue(_)
            | Value::DataKey(_)
            | Value::DataKeySet(_)
            | Value::Footer(_)
            | Value::FooterText(_)
            | Value::Header(_)
            | Value::ObservationDimension(_)
            | Value::Text(_)
            | Value::Localization(..)
            | Value::KeyValue(..)
            | Value::Key(_)
            | Value::Observation(_)
            | Value::SeriesKey(_)
            | Value::GroupKey(_) => None,
        }
    }

    /// The bucket this value is pushed into by default. `None` means the
    /// value only ever makes sense under an explicit string key (leaves,
    /// localizations, key-value pairs).
    pub fn bucket(&self) -> Option<BucketKey> {
        match self {
            Value::Message(_) => Some(BucketKey::Message),
            Value::DataSet(_) => Some(BucketKey::DataSet),
            Value::Artefact(_) => Some(BucketKey::Artefact),
            Value::Component(_) => Some(BucketKey::Component),
            Value::Concept(_) => Some(BucketKey::Concept),
            Value::Item(_) => Some(BucketKey::Item),
            Value::Annotation(_) => Some(BucketKey::Annotation),
            Value::GroupDimensionDescriptor(_) => Some(BucketKey::GroupDimensionDescriptor),
            Value::Representation(_) => Some(BucketKey::Representation),
            Value::Reference(_) => Some(BucketKey::Reference),
            Value::Facet(_) => Some(BucketKey::Facet),
            Value::AttributeRelationship(_) => Some(BucketKey::AttributeRelationship),
            Value::CubeRegion(_) => Some(BucketKey::CubeRegion),
            Value::MemberSelection(_) => Some(BucketKey::MemberSelection),
            Value::MemberValue(_) => Some(BucketKey::MemberValue),
            Value::DataKey(_) => Some(BucketKey::DataKey),
            Value::DataKeySet(_) => Some(BucketKey::DataKeySet),
            Value::Footer(_) => Some(BucketKey::Footer),
            Value::FooterText(_) => Some(BucketKey::FooterText),
            Value::Header(_) => Some(BucketKey::Header),
            Value::ObservationDimension(_) => None,
            Value::Text(_)
            | Value::Localization(..)
            | Value::KeyValue(..)
            | Value::Key(_)
            | Value::Observation(_)
            | Value::SeriesKey(_)
            | Value::GroupKey(_) => None,
        }
    }
}

/// Either side of the working stack's keyspace.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Bucket(BucketKey),
    Name(String),
}

impl From<BucketKey> for Key {
    fn from(b: BucketKey) -> Self {
        Key::Bucket(b)
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Name(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Name(s)
    }
}

/// A keyed multimap of in-progress objects, plus the set of object
/// identities excluded from the end-of-stream "uncollected" count.
#[derive(Debug, Default)]
pub struct WorkingStack {
    entries: HashMap<Key, Vec<Value>>,
    /// Saved bucket contents from `stash`, restored in LIFO order by
    /// `unstash`.
    saved: Vec<(Key, Vec<Value>)>,
}

impl WorkingStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push `value` under its default bucket. Panics (a programmer error,
    /// not a data error) if the value has no default bucket — use
    /// [`WorkingStack::push_named`] for those.
    pub fn push(&mut self, value: Value) {
        let bucket = value
            .bucket()
            .expect("value has no default bucket; use push_named");
        self.entries.entry(Key::Bucket(bucket)).or_default().push(value);
    }

    /// Push `value` under an explicit string key (the element's localname).
    pub fn push_named(&mut self, name: impl Into<Key>, value: Value) {
        self.entries.entry(name.into()).or_default().push(value);
    }

    /// Remove and return the last value pushed for `key`, or `None`.
    pub fn pop_single(&mut self, key: impl Into<Key>) -> Option<Value> {
        let key = key.into();
        let result = self.entries.get_mut(&key).and_then(Vec::pop);
        if matches!(self.entries.get(&key), Some(v) if v.is_empty()) {
            self.entries.remove(&key);
        }
        result
    }

    /// Remove and return every value pushed for `key`, in arrival order.
    pub fn pop_all(&mut self, key: impl Into<Key>) -> Vec<Value> {
        self.entries.remove(&key.into()).unwrap_or_default()
    }

    /// Number of values currently held for `key`.
    pub fn count(&self, key: impl Into<Key>) -> usize {
        self.entries.get(&key.into()).map_or(0, Vec::len)
    }

    /// Borrow every value held for `key`, without popping.
    pub fn get_all(&self, key: impl Into<Key>) -> &[Value] {
        self.entries.get(&key.into()).map_or(&[], Vec::as_slice)
    }

    /// The single value held for `key`, if exactly one exists.
    pub fn get_single(&self, key: impl Into<Key>) -> Option<&Value> {
        match self.get_all(key) {
            [value] => Some(value),
            _ => None,
        }
    }

    /// Find the value in `key`'s bucket whose [`Value::id`] matches `id`,
    /// without popping it.
    pub fn get_by_id(&self, key: impl Into<Key>, id: &str) -> Option<&Value> {
        self.get_all(key).iter().find(|v| v.id() == Some(id))
    }

    /// Find, without popping, the first value in `key`'s bucket matching
    /// `predicate`, for in-place mutation of an object (a
    /// `DataStructureDefinition`) that stays on the stack while its nested
    /// elements are still being parsed.
    pub fn find_mut(&mut self, key: impl Into<Key>, mut predicate: impl FnMut(&Value) -> bool) -> Option<&mut Value> {
        self.entries.get_mut(&key.into())?.iter_mut().find(|v| predicate(v))
    }

    /// Save and clear the named buckets, so a nested element can use the
    /// same bucket names without colliding with the enclosing element's
    /// pending entries. Paired with [`WorkingStack::unstash`].
    pub fn stash(&mut self, keys: &[&str]) {
        for key in keys {
            let key = Key::Name((*key).to_string());
            let saved = self.entries.remove(&key).unwrap_or_default();
            self.saved.push((key, saved));
        }
    }

    /// Restore the most recently stashed buckets, in reverse (LIFO) order
    /// relative to the matching `stash` call.
    pub fn unstash(&mut self, count: usize) {
        for _ in 0..count {
            if let Some((key, saved)) = self.saved.pop() {
                if saved.is_empty() {
                    self.entries.remove(&key);
                } else {
                    self.entries.insert(key, saved);
                }
            }
        }
    }

    /// Total number of entries across every bucket, for the end-of-stream
    /// drain check.
    pub fn total_len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// A human-readable dump of every bucket's contents, for
    /// [`crate::error::ReaderError::Parse`].
    pub fn dump(&self) -> String {
        let mut lines = Vec::new();
        for (key, values) in &self.entries {
            lines.push(format!("{key:?}: {} entr{}", values.len(), if values.len() == 1 { "y" } else { "ies" }));
        }
        lines.sort();
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdmx_model::Item as ModelItem;

    #[test]
    fn push_then_pop_single_round_trips() {
        let mut stack = WorkingStack::new();
        stack.push(Value::Item(Box::new(ModelItem::new("M"))));
        let popped = stack.pop_single(BucketKey::Item);
        assert!(matches!(popped, Some(Value::Item(_))));
        assert_eq!(stack.count(BucketKey::Item), 0);
    }

    #[test]
    fn stash_and_unstash_isolates_named_bucket() {
        let mut stack = WorkingStack::new();
        stack.push_named("Name", Value::Localization("en".into(), "Outer".into()));
        stack.stash(&["Name"]);
        assert_eq!(stack.count("Name"), 0);
        stack.push_named("Name", Value::Localization("en".into(), "Inner".into()));
        let inner = stack.pop_all("Name");
        assert_eq!(inner.len(), 1);
        stack.unstash(1);
        let outer = stack.pop_all("Name");
        assert_eq!(outer.len(), 1);
    }

    #[test]
    fn pop_all_on_missing_key_is_empty() {
        let mut stack = WorkingStack::new();
        assert!(stack.pop_all("Missing").is_empty());
    }
}
