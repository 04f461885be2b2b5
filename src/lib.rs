//! Deterministic VPC topology resolution for a Kubernetes cluster.
//!
//! Given a region, a VPC CIDR block and public/private subnet pools,
//! computes a non-overlapping subnet allocation across availability
//! zones and the Kubernetes discovery tags for every resource. The
//! result is a plain value handed to the cloud provisioning backend;
//! this crate never talks to a cloud API itself.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;
pub mod zones;

pub use config::TopologyConfig;
pub use error::{Result, TopologyError};
pub use models::{ClusterIdentity, NetworkTopology};

use zones::{FixedZones, ZoneCache};

/// Resolve a topology using the zone source the config selects: the
/// pinned zone list when present, otherwise the zone cache file.
pub fn resolve_from_config(
    config: &TopologyConfig,
    identity: &ClusterIdentity,
) -> Result<NetworkTopology> {
    match &config.availability_zones {
        Some(zone_list) => {
            let fixed = FixedZones::with_region(&config.region, zone_list);
            processing::resolve(config, identity, &fixed)
        }
        None => {
            let cache = ZoneCache::new(config.zone_cache_file.as_deref());
            processing::resolve(config, identity, &cache)
        }
    }
}
