//! The top-level `Message` returned by the reader, and its constituent
//! header, footer, and structures section.

use serde::{Deserialize, Serialize};

use crate::dataset::DataSet;
use crate::item::Agency;
use crate::structures::Structures;

/// A message header's identification of a sender or receiver organisation.
pub type HeaderParty = Agency;

/// The `<mes:Header>` common to every message kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Header {
    pub id: Option<String>,
    pub test: bool,
    pub prepared: Option<String>,
    pub sender: Option<HeaderParty>,
    pub receiver: Option<HeaderParty>,
    pub source: crate::international_string::InternationalString,
    /// Id of the structure (DSD or dataflow) a `StructureSpecific` message's
    /// header declares, and the dimension its observations are indexed by.
    pub structure: Option<ObservationDimension>,
}

/// How a message's observations are keyed: against one named dimension, or
/// against the full set (`AllDimensions`, the `maxsize` sentinel case in
/// the original reader).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObservationDimension {
    Dimension(String),
    AllDimensions,
}

/// Severity of a `<foo:Fault>` reported in a message's footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
    Information,
}

/// The optional `<footer:Footer>` an error or partial-success message
/// carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    pub severity: Severity,
    pub code: Option<i32>,
    pub text: Vec<crate::international_string::InternationalString>,
}

/// The kind of payload a message carries, and the payload itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MessageKind {
    GenericData(Vec<DataSet>),
    StructureSpecificData(Vec<DataSet>),
    Structure(Structures),
    Error,
}

/// A fully parsed SDMX-ML 2.1 message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub header: Header,
    pub footer: Option<Footer>,
    pub kind: MessageKind,
}

impl Message {
    pub fn new(header: Header, kind: MessageKind) -> Self {
        Self {
            header,
            footer: None,
            kind,
        }
    }
}
