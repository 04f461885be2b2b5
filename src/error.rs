//! Error types for topology resolution.
//!
//! Every variant is terminal for a single resolution attempt: each one
//! stems from invalid or insufficient input, so retrying with unchanged
//! inputs cannot succeed. Components surface these unchanged to their
//! caller.

use crate::models::Ipv4;
use thiserror::Error;

/// Main error type for topology resolution.
#[derive(Debug, Error)]
pub enum TopologyError {
    /// Two subnet pool entries overlap.
    #[error("subnet CIDR {a} overlaps {b}")]
    CidrOverlap {
        /// First conflicting CIDR (pool order).
        a: Ipv4,
        /// Second conflicting CIDR.
        b: Ipv4,
    },

    /// A subnet pool entry is not contained in the VPC block.
    #[error("subnet CIDR {cidr} is outside VPC CIDR {vpc}")]
    CidrOutOfRange {
        /// The offending pool entry.
        cidr: Ipv4,
        /// The VPC block it must fit inside.
        vpc: Ipv4,
    },

    /// No availability zones to allocate against.
    #[error("no availability zones available for allocation")]
    InsufficientZones,

    /// Public and private subnet counts diverged after binding.
    #[error("asymmetric topology: {public_count} public vs {private_count} private subnets")]
    AsymmetricTopology {
        /// Number of public subnets in the assembled topology.
        public_count: usize,
        /// Number of private subnets.
        private_count: usize,
    },

    /// The zone-discovery collaborator does not know the region.
    #[error("region unavailable: {region}")]
    RegionUnavailable {
        /// The region that could not be resolved to zones.
        region: String,
    },

    /// A CIDR string could not be parsed.
    #[error("invalid CIDR '{input}': {reason}")]
    InvalidCidr {
        /// The raw input string.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Cluster identity inputs are malformed.
    #[error("invalid cluster identity: {message}")]
    Identity {
        /// Description of what was wrong.
        message: String,
    },

    /// Configuration file missing, unreadable or invalid.
    #[error("config error in {path}: {message}")]
    Config {
        /// Path of the config file.
        path: String,
        /// Description of what failed (carries the JSON path on parse errors).
        message: String,
    },

    /// Zone cache file missing, unreadable or invalid.
    #[error("zone cache error in {file}: {message}")]
    Cache {
        /// Path of the cache file.
        file: String,
        /// Description of what failed.
        message: String,
    },
}

/// Result alias used throughout this crate.
pub type Result<T> = std::result::Result<T, TopologyError>;
