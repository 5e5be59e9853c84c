//! Pulls `start`/`end` events off the XML stream, dispatches each to its
//! handler, and assembles the final [`sdmx_model::Message`].

use std::collections::HashSet;
use std::io::BufRead;

use quick_xml::events::Event as XmlEvent;
use quick_xml::Reader;

use sdmx_model::{DataStructureDefinition, Message, ObservationDimension};
use sdmx_urn::{Namespace, Tag};

use crate::dispatch::{Dispatch, EventKind, HandlerTable};
use crate::error::{unknown_namespace, Event, RawQName, ReaderError, Result};
use crate::frame::{ChildFrame, ElementFrame};
use crate::handlers;
use crate::options::ReaderOptions;
use crate::reference::{resolve, Reference};
use crate::stack::{BucketKey, Value, WorkingStack};

/// Mutable engine state threaded through every handler invocation.
pub struct Driver {
    pub stack: WorkingStack,
    pub options: ReaderOptions,
    /// Ids excluded from the end-of-stream drain check: the caller-supplied
    /// DSD and any DSD this reader had to synthesize.
    pub ignore: HashSet<String>,
    /// Set once a structure-specific message is found to lack a
    /// caller-supplied DSD; permits lenient, DSD-extending key construction.
    pub ss_missing_dsd: bool,
    /// The header's resolved `dimensionAtObservation`, set by
    /// `header_structure_end` once `mes:Header`'s `mes:Structure` has been
    /// read. Consulted by the generic encoding's `gen:ObsDimension`, which
    /// carries only a `value` attribute on the wire — the dimension `id` it
    /// pairs that value with comes from here, not from the element itself.
    pub observation_dimension: Option<ObservationDimension>,
    /// Every element still open, outermost first. A handler's own element
    /// is not yet pushed here on `start` and already popped on `end`, so
    /// `ancestors().last()` is always the immediate parent.
    ancestors: Vec<ElementFrame>,
}

impl Driver {
    fn new(options: ReaderOptions, supplied_dsd: Option<DataStructureDefinition>) -> Self {
        let mut stack = WorkingStack::new();
        let mut ignore = HashSet::new();
        if let Some(dsd) = supplied_dsd {
            ignore.insert(dsd.id.clone());
            stack.push(Value::Artefact(Box::new(sdmx_model::Artefact::DataStructureDefinition(dsd))));
        }
        Self {
            stack,
            options,
            ignore,
            ss_missing_dsd: false,
            observation_dimension: None,
            ancestors: Vec::new(),
        }
    }

    /// Resolve `reference`, returning `None` (logged, not fatal) on a
    /// forward-reference miss, per the recovery policy in the error design.
    pub fn resolve_ref(&mut self, reference: &Reference) -> Option<Value> {
        resolve(&mut self.stack, reference)
    }

    /// The element enclosing the one currently being handled, if any.
    pub fn parent(&self) -> Option<&ElementFrame> {
        self.ancestors.last()
    }

    /// The nearest open ancestor with the given tag, searching outward from
    /// the immediate parent. Used to find the enclosing `str:DataStructure`
    /// from inside its `DataStructureComponents` subtree, which carries no
    /// identifying attribute of its own.
    pub fn ancestor(&self, tag: Tag) -> Option<&ElementFrame> {
        self.ancestors.iter().rev().find(|f| f.tag == tag)
    }

    /// Mark `id` as excluded from the end-of-stream drain check (a
    /// synthesized DSD, for instance).
    pub fn ignore(&mut self, id: impl Into<String>) {
        self.ignore.insert(id.into());
    }
}

struct QNameParts<'a> {
    prefix: &'a str,
    local: &'a str,
}

fn split_qname(name: &str) -> QNameParts<'_> {
    match name.split_once(':') {
        Some((prefix, local)) => QNameParts { prefix, local },
        None => QNameParts { prefix: "", local: name },
    }
}

fn attrs_of(e: &quick_xml::events::BytesStart<'_>) -> Result<Vec<(String, String)>> {
    let mut out = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        out.push((key, value));
    }
    Ok(out)
}

fn resolve_tag_with_event(name: &str, event: Event) -> Result<Tag> {
    let parts = split_qname(name);
    let ns = Namespace::from_prefix(parts.prefix).ok_or_else(|| unknown_namespace(parts.prefix))?;
    Tag::from_qname(ns, parts.local).ok_or_else(|| {
        ReaderError::UnknownElement(
            RawQName {
                prefix: parts.prefix.to_string(),
                local: parts.local.to_string(),
            },
            event,
        )
    })
}

/// Read one complete SDMX-ML 2.1 message from `source`.
///
/// `dsd`, if given, is consulted when the message turns out to be
/// structure-specific; it is excluded from the end-of-stream "exactly one
/// object remains" drain check.
pub fn read_message<R: BufRead>(
    source: R,
    dsd: Option<DataStructureDefinition>,
    options: ReaderOptions,
) -> Result<Message> {
    let mut reader = Reader::from_reader(source);
    reader.config_mut().trim_text(true);

    let mut driver = Driver::new(options, dsd);
    let mut buf = Vec::new();
    let table = handlers::build_table();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(XmlEvent::Eof) => break,
            Ok(XmlEvent::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let tag = resolve_tag_with_event(&name, Event::Start)?;
                let attrs = attrs_of(&e)?;
                let frame = ElementFrame::new(tag, attrs);
                dispatch(&table, &mut driver, tag, EventKind::Start, &frame)?;
                driver.ancestors.push(frame);
            }
            Ok(XmlEvent::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let tag = resolve_tag_with_event(&name, Event::Start)?;
                let attrs = attrs_of(&e)?;
                let frame = ElementFrame::new(tag, attrs);
                dispatch(&table, &mut driver, tag, EventKind::Start, &frame)?;
                dispatch(&table, &mut driver, tag, EventKind::End, &frame)?;
                record_as_child(&mut driver, &frame);
            }
            Ok(XmlEvent::Text(t)) => {
                if let Some(frame) = driver.ancestors.last_mut() {
                    frame.text.push_str(&t.unescape()?);
                }
            }
            Ok(XmlEvent::End(_)) => {
                let frame = driver.ancestors.pop().expect("end event with no matching open frame");
                dispatch(&table, &mut driver, frame.tag, EventKind::End, &frame)?;
                record_as_child(&mut driver, &frame);
            }
            Ok(_) => {}
            Err(e) => return Err(ReaderError::Xml(e)),
        }
        buf.clear();
    }

    finish(driver)
}

fn record_as_child(driver: &mut Driver, child: &ElementFrame) {
    if let Some(parent) = driver.ancestors.last_mut() {
        parent.children.push(ChildFrame {
            tag: child.tag,
            attrs: child.attrs.clone(),
            text: child.text.clone(),
        });
    }
}

fn dispatch(
    table: &HandlerTable,
    driver: &mut Driver,
    tag: Tag,
    event: EventKind,
    frame: &ElementFrame,
) -> Result<()> {
    match table.lookup(tag, event) {
        Dispatch::Handler(handler) => handler(driver, frame).map_err(|e| {
            let dump = driver.stack.dump();
            e.into_parse_error(dump)
        }),
        Dispatch::Skip => Ok(()),
        Dispatch::Unknown => {
            let (ns, local) = tag.qname();
            Err(ReaderError::UnknownElement(
                RawQName {
                    prefix: ns.prefix().to_string(),
                    local: local.to_string(),
                },
                match event {
                    EventKind::Start => Event::Start,
                    EventKind::End => Event::End,
                },
            ))
        }
    }
}

fn finish(driver: Driver) -> Result<Message> {
    let Driver { mut stack, ignore, .. } = driver;

    let message_values = stack.pop_all(BucketKey::Message);
    if message_values.len() != 1 {
        return Err(ReaderError::Uncollected {
            count: message_values.len(),
        });
    }

    let remaining = stack.total_len();
    let ignored_remaining = stack
        .get_all(BucketKey::Artefact)
        .iter()
        .filter(|v| v.id().is_some_and(|id| ignore.contains(id)))
        .count();
    if remaining != ignored_remaining {
        return Err(ReaderError::Uncollected {
            count: remaining - ignored_remaining + 1,
        });
    }

    match message_values.into_iter().next() {
        Some(Value::Message(message)) => Ok(*message),
        _ => unreachable!("bucket key guarantees a Value::Message"),
    }
}
