//! Resolved topology and cluster identity models.

use super::{Ipv4, SubnetSpec, Visibility};
use crate::error::{Result, TopologyError};
use lazy_static::lazy_static;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tag key/value mapping attached to a cloud resource.
///
/// BTreeMap so iteration (and serialization) order is stable: repeated
/// resolutions with identical inputs must serialize byte-identically.
pub type TagSet = BTreeMap<String, String>;

/// Length of the disambiguation suffix.
pub const SUFFIX_LENGTH: usize = 8;

const SUFFIX_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

lazy_static! {
    static ref SUFFIX_RE: Regex = Regex::new(r"^[a-z0-9]{8}$").expect("Invalid Regex?");
}

/// Cluster name plus its disambiguation suffix.
///
/// The suffix avoids name collisions across repeated provisioning runs.
/// It is generated once (or pinned in config) and stays stable for the
/// lifetime of a given topology; the resolver never regenerates it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ClusterIdentity {
    /// Base cluster name, e.g. "zsb-eks".
    pub base_name: String,
    /// 8 lowercase alphanumeric characters.
    pub suffix: String,
}

impl ClusterIdentity {
    /// Create an identity from a base name and a pinned suffix.
    pub fn new(base_name: &str, suffix: &str) -> Result<ClusterIdentity> {
        if base_name.trim().is_empty() {
            return Err(TopologyError::Identity {
                message: "cluster base name is empty".to_string(),
            });
        }
        if !SUFFIX_RE.is_match(suffix) {
            return Err(TopologyError::Identity {
                message: format!(
                    "suffix '{suffix}' must be exactly {SUFFIX_LENGTH} lowercase alphanumeric characters"
                ),
            });
        }
        Ok(ClusterIdentity {
            base_name: base_name.to_string(),
            suffix: suffix.to_string(),
        })
    }

    /// Create an identity with a freshly generated suffix.
    ///
    /// Call once per cluster and pin the result; regenerating on every
    /// run would produce a different set of tag keys each time.
    pub fn generate(base_name: &str) -> Result<ClusterIdentity> {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LENGTH)
            .map(|_| SUFFIX_CHARSET[rng.gen_range(0..SUFFIX_CHARSET.len())] as char)
            .collect();
        ClusterIdentity::new(base_name, &suffix)
    }

    /// Full cluster name: `"{base_name}-{suffix}"`.
    pub fn qualified_name(&self) -> String {
        format!("{}-{}", self.base_name, self.suffix)
    }
}

impl fmt::Display for ClusterIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified_name())
    }
}

/// The aggregate result of one resolution pass.
///
/// A value, not a live resource: it has no mutable state after
/// construction and is handed to the provisioning backend as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkTopology {
    /// Region the topology was resolved for.
    pub region: String,
    /// CIDR block of the VPC.
    pub vpc_cidr: Ipv4,
    /// Subnet placements, public-then-private per zone, in zone order.
    pub subnets: Vec<SubnetSpec>,
    /// Kubernetes discovery tags on the VPC itself.
    pub vpc_tags: TagSet,
    /// Disambiguation suffix the topology was resolved with.
    pub suffix: String,
}

impl NetworkTopology {
    /// Number of public subnets.
    pub fn public_count(&self) -> usize {
        self.subnets
            .iter()
            .filter(|s| s.visibility == Visibility::Public)
            .count()
    }

    /// Number of private subnets.
    pub fn private_count(&self) -> usize {
        self.subnets
            .iter()
            .filter(|s| s.visibility == Visibility::Private)
            .count()
    }

    /// Distinct zones, in first-appearance order.
    pub fn zones(&self) -> Vec<&str> {
        let mut zones: Vec<&str> = Vec::new();
        for subnet in &self.subnets {
            if !zones.contains(&subnet.zone.as_str()) {
                zones.push(&subnet.zone);
            }
        }
        zones
    }
}

impl fmt::Display for NetworkTopology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{region} {vpc} ({subnets} subnets over {zones} zones)",
            region = self.region,
            vpc = self.vpc_cidr,
            subnets = self.subnets.len(),
            zones = self.zones().len()
        )
    }
}
