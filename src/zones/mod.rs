//! Availability-zone discovery.
//!
//! The collaborator seam between the resolver and whatever actually
//! knows the region's zones:
//! - [`FixedZones`] - in-memory region table (config- or test-provided)
//! - [`ZoneCache`] - dated JSON cache file produced out of band
//!
//! Issuing live cloud API calls is out of scope for this crate; the
//! cache file stands in for the query path.

mod cache;
mod fixed;

// Re-export public types
pub use cache::ZoneCache;
pub use fixed::FixedZones;

use crate::error::Result;

/// Zone-discovery collaborator.
///
/// Returns the region's availability zones as an ordered sequence; the
/// order is canonical for a given resolution and drives subnet binding.
pub trait ZoneDiscovery {
    /// List the availability zones of `region`, in canonical order.
    fn list_availability_zones(&self, region: &str) -> Result<Vec<String>>;
}
