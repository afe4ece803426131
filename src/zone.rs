/// A handle to the managed zone that owns one or more record sets.
///
/// Zone lifecycle is handled elsewhere; record sets only keep a shared,
/// read-only reference back to their zone.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ManagedZone {
    pub name: String,
    pub dns_name: String,
}

impl ManagedZone {
    /// Create a new zone handle
    pub fn new<S, D>(name: S, dns_name: D) -> Self
    where
        S: Into<String>,
        D: Into<String>,
    {
        Self {
            name: name.into(),
            dns_name: dns_name.into(),
        }
    }
}
