//! Error taxonomy for the reader.

use sdmx_urn::{Namespace, Tag};
use thiserror::Error;

/// A raw, fully-qualified tag the engine could not even resolve to a
/// `Tag`, retained for error messages and dumps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawQName {
    pub prefix: String,
    pub local: String,
}

impl std::fmt::Display for RawQName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.prefix, self.local)
    }
}

/// Which event a handler (or the lack of one) pertains to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Start,
    End,
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Event::Start => "start",
            Event::End => "end",
        })
    }
}

/// Everything that can go wrong while reading a message. Every variant
/// that carries an underlying cause is re-thrown through
/// [`ReaderError::Parse`], which also dumps the working stack for
/// diagnosis, mirroring the single wrapped parse-error kind the behavioral
/// spec requires.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReaderError {
    #[error("no handler registered for ({0}, {1})")]
    UnknownElement(RawQName, Event),

    #[error("element <{tag:?}> is missing a well-formed Ref or URN child: {detail}")]
    MalformedReference { tag: Tag, detail: String },

    #[error("component '{component_id}' is not declared in the data structure definition")]
    StructureMismatch { component_id: String },

    #[error("expected exactly one non-ignored object on the working stack at end of stream, found {count}")]
    Uncollected { count: usize },

    #[error("unsupported namespace prefix '{0}'")]
    UnknownNamespace(String),

    #[error(transparent)]
    Model(#[from] sdmx_model::ModelError),

    #[error(transparent)]
    Urn(#[from] sdmx_urn::UrnError),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Encoding(#[from] std::str::Utf8Error),

    #[error("{message}\n{stack_dump}")]
    Parse {
        message: String,
        stack_dump: String,
        #[source]
        source: Box<ReaderError>,
    },
}

impl ReaderError {
    /// Wrap `self` as a [`ReaderError::Parse`], attaching a dump of the
    /// working stack's current contents for diagnosis.
    pub fn into_parse_error(self, stack_dump: impl Into<String>) -> ReaderError {
        ReaderError::Parse {
            message: self.to_string(),
            stack_dump: stack_dump.into(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, ReaderError>;

pub(crate) fn unknown_namespace(prefix: &str) -> ReaderError {
    ReaderError::UnknownNamespace(prefix.to_string())
}

pub(crate) fn namespace_or_err(prefix: &str) -> Result<Namespace> {
    Namespace::from_prefix(prefix).ok_or_else(|| unknown_namespace(prefix))
}
