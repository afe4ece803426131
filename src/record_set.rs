use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

use crate::error::{Error, Result};
use crate::zone::ManagedZone;

/// A DNS resource record set owned by a [`ManagedZone`]
///
/// Fields are stored exactly as supplied. Nothing here checks that the name
/// is a valid FQDN, that the type is a known RR mnemonic, or that the TTL is
/// non-negative; the API is the source of truth for all of that.
#[derive(Clone, Debug)]
pub struct RecordSet {
    pub name: String,
    pub record_type: String,
    pub ttl: i64,
    pub rrdatas: Vec<String>,
    pub routing_policy: Map<String, Value>,
    pub zone: Arc<ManagedZone>,
}

impl RecordSet {
    pub fn new(
        name: String,
        record_type: String,
        ttl: i64,
        rrdatas: Vec<String>,
        routing_policy: Map<String, Value>,
        zone: Arc<ManagedZone>,
    ) -> Self {
        Self {
            name,
            record_type,
            ttl,
            rrdatas,
            routing_policy,
            zone,
        }
    }

    /// Construct a record set from its API representation
    ///
    /// `name`, `type`, and `ttl` must be present; `rrdatas` and
    /// `routingPolicy` default to empty when absent. Any other keys (such as
    /// the `kind` discriminator) are ignored.
    pub fn from_api_repr(resource: &Map<String, Value>, zone: Arc<ManagedZone>) -> Result<Self> {
        let name = required_string(resource, "name")?;
        let record_type = required_string(resource, "type")?;
        let ttl = coerce_ttl(required(resource, "ttl")?)?;

        let rrdatas = match resource.get("rrdatas") {
            Some(value) => string_lines(value)?,
            None => Vec::new(),
        };
        let routing_policy = match resource.get("routingPolicy") {
            Some(value) => value
                .as_object()
                .cloned()
                .ok_or(Error::InvalidValue {
                    field: "routingPolicy",
                    expected: "an object",
                })?,
            None => Map::new(),
        };

        debug!(%name, %record_type, "parsed record set from API representation");

        Ok(Self::new(
            name,
            record_type,
            ttl,
            rrdatas,
            routing_policy,
            zone,
        ))
    }
}

/// Look up a mandatory key in the representation
fn required<'r>(resource: &'r Map<String, Value>, field: &'static str) -> Result<&'r Value> {
    resource.get(field).ok_or(Error::MissingField(field))
}

fn required_string(resource: &Map<String, Value>, field: &'static str) -> Result<String> {
    required(resource, field)?
        .as_str()
        .map(String::from)
        .ok_or(Error::InvalidValue {
            field,
            expected: "a string",
        })
}

/// Convert a TTL supplied as either a number or a numeric string
fn coerce_ttl(value: &Value) -> Result<i64> {
    let invalid = Error::InvalidValue {
        field: "ttl",
        expected: "an integer or numeric string",
    };

    match value {
        Value::Number(n) => n.as_i64().ok_or(invalid),
        Value::String(s) => s.parse().map_err(|_| invalid),
        _ => Err(invalid),
    }
}

fn string_lines(value: &Value) -> Result<Vec<String>> {
    let invalid = || Error::InvalidValue {
        field: "rrdatas",
        expected: "an array of strings",
    };

    value
        .as_array()
        .ok_or_else(invalid)?
        .iter()
        .map(|line| line.as_str().map(String::from).ok_or_else(invalid))
        .collect()
}
