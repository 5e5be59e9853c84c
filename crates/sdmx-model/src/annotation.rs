//! `Annotable` artifacts and the `Annotation` type itself.

use serde::{Deserialize, Serialize};

use crate::international_string::InternationalString;

/// A single annotation attached to any Annotable artifact.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotation {
    pub id: Option<String>,
    pub title: Option<String>,
    pub annotation_type: Option<String>,
    pub url: Option<String>,
    pub text: InternationalString,
}
