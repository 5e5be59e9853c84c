//! XML qualified-name tables, the SDMX class-token enum, the URN codec, and
//! naming-convention helpers shared by `sdmx-reader`.

pub mod case;
pub mod class;
pub mod error;
pub mod qname;
pub mod urn;

pub use case::{lowercase_first, to_snake_case};
pub use class::Class;
pub use error::{Result, UrnError};
pub use qname::{Namespace, Tag};
pub use urn::Urn;
