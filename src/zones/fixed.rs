//! Fixed in-memory zone table.

use super::ZoneDiscovery;
use crate::error::{Result, TopologyError};
use std::collections::HashMap;

/// Zone discovery backed by a fixed region table.
///
/// Used when the config pins the zone list, and by tests.
#[derive(Debug, Default, Clone)]
pub struct FixedZones {
    zones: HashMap<String, Vec<String>>,
}

impl FixedZones {
    /// Create an empty table.
    pub fn new() -> FixedZones {
        FixedZones {
            zones: HashMap::new(),
        }
    }

    /// Create a table holding a single region.
    pub fn with_region(region: &str, zones: &[String]) -> FixedZones {
        let mut fixed = FixedZones::new();
        fixed.add_region(region, zones);
        fixed
    }

    /// Add (or replace) a region's zone list.
    pub fn add_region(&mut self, region: &str, zones: &[String]) {
        self.zones.insert(region.to_string(), zones.to_vec());
    }
}

impl ZoneDiscovery for FixedZones {
    fn list_availability_zones(&self, region: &str) -> Result<Vec<String>> {
        match self.zones.get(region) {
            Some(zones) if !zones.is_empty() => {
                log::debug!("Fixed zone table: {} zone(s) for {region}", zones.len());
                Ok(zones.clone())
            }
            _ => Err(TopologyError::RegionUnavailable {
                region: region.to_string(),
            }),
        }
    }
}
