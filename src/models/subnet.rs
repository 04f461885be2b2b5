//! Subnet specification model.

use super::{Ipv4, TagSet};
use serde::{Deserialize, Serialize};

/// Whether a subnet routes through the internet gateway or the NAT gateway.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Routed through the internet gateway; hosts load-balancer endpoints.
    Public,
    /// Egress through the NAT gateway only; no inbound exposure.
    Private,
}

impl std::fmt::Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

/// A concrete subnet placement: one CIDR block bound to one availability
/// zone. Immutable once produced by the binder; the resolver fills in the
/// discovery tags.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetSpec {
    /// CIDR block of the subnet.
    pub cidr: Ipv4,
    /// Availability zone the subnet is placed in.
    pub zone: String,
    /// Public or private routing role.
    pub visibility: Visibility,
    /// Kubernetes discovery tags attached to the subnet.
    pub tags: TagSet,
}

impl SubnetSpec {
    /// Create a subnet spec with no tags yet.
    pub fn new(cidr: Ipv4, zone: &str, visibility: Visibility) -> SubnetSpec {
        SubnetSpec {
            cidr,
            zone: zone.to_string(),
            visibility,
            tags: TagSet::new(),
        }
    }
}

impl std::fmt::Display for SubnetSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.cidr, self.zone, self.visibility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let s = SubnetSpec::new(
            Ipv4::new("10.0.4.0/24").unwrap(),
            "ap-southeast-2a",
            Visibility::Public,
        );
        assert_eq!(s.to_string(), "10.0.4.0/24 ap-southeast-2a (public)");
    }

    #[test]
    fn test_visibility_serde() {
        assert_eq!(
            serde_json::to_string(&Visibility::Public).unwrap(),
            "\"public\""
        );
        assert_eq!(
            serde_json::to_string(&Visibility::Private).unwrap(),
            "\"private\""
        );
    }
}
