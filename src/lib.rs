//! Client-side models for a managed Cloud DNS API.
//!
//! The API returns record sets as JSON mappings; [`RecordSet::from_api_repr`]
//! turns one of those mappings into a typed value tied to the [`ManagedZone`]
//! that owns it. Nothing here talks to the network or validates DNS
//! semantics, that is the consuming client's job.

mod error;
mod record_set;
mod zone;

pub use error::{Error, Result};
pub use record_set::RecordSet;
pub use zone::ManagedZone;
