//! Domain models for VPC topology resolution.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Ipv4`] - IPv4 network block with CIDR notation support
//! - [`SubnetSpec`] and [`Visibility`] - concrete subnet placements
//! - [`NetworkTopology`], [`TagSet`], [`ClusterIdentity`] - the resolved result

mod ipv4;
mod subnet;
mod topology;

// Re-export public types
pub use ipv4::{
    broadcast_addr, cut_addr, get_cidr_mask, num_aws_hosts, Ipv4, MAX_LENGTH,
};
pub use subnet::{SubnetSpec, Visibility};
pub use topology::{ClusterIdentity, NetworkTopology, TagSet, SUFFIX_LENGTH};
