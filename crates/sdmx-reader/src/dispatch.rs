//! The `(tag, event) → handler` dispatch table.
//!
//! Generalizes the domain-code-keyed processor registry this reader's
//! dependency tree already uses elsewhere: the same shape (an explicit
//! `register` step run once at construction, a `HashMap` lookup, a
//! documented "no handler" failure mode) applies directly once the key is
//! widened from a bare domain-code string to a `(Tag, Event)` pair. Built
//! once per [`crate::driver::Driver`] rather than at process start, since
//! there's no import-time magic to replicate.

use std::collections::{HashMap, HashSet};

use sdmx_urn::Tag;

use crate::driver::Driver;
use crate::error::Result;
use crate::frame::ElementFrame;

/// Which half of an element's lifecycle a handler runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Start,
    End,
}

/// A registered handler: consumes the driver's working stack and the
/// current element's frame, and pushes whatever it produces directly
/// (handlers return `()`, not a value, because what they push and under
/// which key varies per element — see individual handler doc comments).
pub type HandlerFn = fn(&mut Driver, &ElementFrame) -> Result<()>;

/// What [`HandlerTable::lookup`] finds for a given `(tag, event)` pair.
pub enum Dispatch {
    Handler(HandlerFn),
    /// An explicit no-op: the element's content is consumed entirely by its
    /// parent (e.g. `com:Annotations`, `com:Ref`, `gen:Value`).
    Skip,
    Unknown,
}

/// The registry itself.
#[derive(Default)]
pub struct HandlerTable {
    handlers: HashMap<(Tag, EventKind), HandlerFn>,
    skip: HashSet<(Tag, EventKind)>,
}

impl HandlerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one `(tag, event)` pair.
    pub fn register(&mut self, tag: Tag, event: EventKind, handler: HandlerFn) {
        self.handlers.insert((tag, event), handler);
    }

    /// Register the same start and/or end handler for several tags at once.
    pub fn register_many(&mut self, tags: &[Tag], event: EventKind, handler: HandlerFn) {
        for &tag in tags {
            self.register(tag, event, handler);
        }
    }

    /// Mark `(tag, start)` and `(tag, end)` as explicit no-ops.
    pub fn skip(&mut self, tags: &[Tag]) {
        for &tag in tags {
            self.skip.insert((tag, EventKind::Start));
            self.skip.insert((tag, EventKind::End));
        }
    }

    pub fn lookup(&self, tag: Tag, event: EventKind) -> Dispatch {
        if let Some(handler) = self.handlers.get(&(tag, event)) {
            Dispatch::Handler(*handler)
        } else if self.skip.contains(&(tag, event)) {
            Dispatch::Skip
        } else {
            Dispatch::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::ElementFrame;

    fn noop(_driver: &mut Driver, _frame: &ElementFrame) -> Result<()> {
        Ok(())
    }

    #[test]
    fn unregistered_pair_is_unknown() {
        let table = HandlerTable::new();
        assert!(matches!(table.lookup(Tag::Codelist, EventKind::Start), Dispatch::Unknown));
    }

    #[test]
    fn skip_marks_both_events() {
        let mut table = HandlerTable::new();
        table.skip(&[Tag::Ref]);
        assert!(matches!(table.lookup(Tag::Ref, EventKind::Start), Dispatch::Skip));
        assert!(matches!(table.lookup(Tag::Ref, EventKind::End), Dispatch::Skip));
    }

    #[test]
    fn register_many_applies_to_all_tags() {
        let mut table = HandlerTable::new();
        table.register_many(&[Tag::Dimension, Tag::TimeDimension], EventKind::End, noop);
        assert!(matches!(table.lookup(Tag::Dimension, EventKind::End), Dispatch::Handler(_)));
        assert!(matches!(table.lookup(Tag::TimeDimension, EventKind::End), Dispatch::Handler(_)));
    }
}
