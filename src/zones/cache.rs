//! Cache-file backed zone discovery.
//!
//! Reads a JSON file mapping region names to ordered zone lists. The
//! file is produced out of band (e.g. by a scheduled export from the
//! cloud account); this crate never queries the cloud itself.

use super::ZoneDiscovery;
use crate::error::{Result, TopologyError};
use std::collections::HashMap;
use std::path::Path;

/// Zone discovery backed by a JSON cache file.
///
/// With no explicit path, looks for a dated file named
/// `zone_cache_YYYY-MM-DD.json` in the working directory so stale
/// exports are not picked up silently.
#[derive(Debug, Default, Clone)]
pub struct ZoneCache {
    cache_file: Option<String>,
}

impl ZoneCache {
    /// Create a cache reader.
    ///
    /// # Arguments
    /// * `cache_file` - Optional path to a specific cache file. If None,
    ///   uses default dated naming.
    pub fn new(cache_file: Option<&str>) -> ZoneCache {
        ZoneCache {
            cache_file: cache_file.map(|f| f.to_string()),
        }
    }

    fn resolve_file(&self) -> Result<String> {
        match &self.cache_file {
            Some(file) => {
                if !Path::new(file).exists() {
                    return Err(TopologyError::Cache {
                        file: file.clone(),
                        message: "cache file does not exist".to_string(),
                    });
                }
                log::info!("Using provided zone cache file: {file}");
                Ok(file.clone())
            }
            None => Ok(format!(
                "zone_cache_{}.json",
                chrono::Utc::now().format("%Y-%m-%d")
            )),
        }
    }
}

impl ZoneDiscovery for ZoneCache {
    fn list_availability_zones(&self, region: &str) -> Result<Vec<String>> {
        let cache_file = self.resolve_file()?;

        let json = std::fs::read_to_string(&cache_file).map_err(|e| TopologyError::Cache {
            file: cache_file.clone(),
            message: format!("Error reading cache file: {e}"),
        })?;
        log::info!("Reading from zone cache file: {cache_file}");

        let zones_by_region: HashMap<String, Vec<String>> = serde_json::from_str(&json)
            .map_err(|e| TopologyError::Cache {
                file: cache_file.clone(),
                message: format!("Error parsing cache JSON: {e}"),
            })?;

        match zones_by_region.get(region) {
            Some(zones) if !zones.is_empty() => {
                log::info!("Found {} zone(s) for {region} in cache", zones.len());
                Ok(zones.clone())
            }
            _ => Err(TopologyError::RegionUnavailable {
                region: region.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_zone_cache() {
        let cache = ZoneCache::new(Some("src/tests/test_data/zone_cache_01.json"));
        let zones = cache.list_availability_zones("ap-southeast-2").unwrap();
        assert_eq!(
            zones,
            vec![
                "ap-southeast-2a".to_string(),
                "ap-southeast-2b".to_string(),
                "ap-southeast-2c".to_string()
            ],
            "Wrong zones from test sample."
        );
    }

    #[test]
    fn test_region_not_in_cache() {
        let cache = ZoneCache::new(Some("src/tests/test_data/zone_cache_01.json"));
        let err = cache.list_availability_zones("eu-central-1").unwrap_err();
        assert!(matches!(err, TopologyError::RegionUnavailable { .. }));
    }

    #[test]
    fn test_empty_region_entry_is_unavailable() {
        let cache = ZoneCache::new(Some("src/tests/test_data/zone_cache_01.json"));
        let err = cache.list_availability_zones("us-west-1").unwrap_err();
        assert!(matches!(err, TopologyError::RegionUnavailable { .. }));
    }

    #[test]
    fn test_missing_explicit_file() {
        let cache = ZoneCache::new(Some("src/tests/test_data/no_such_cache.json"));
        let err = cache.list_availability_zones("ap-southeast-2").unwrap_err();
        assert!(matches!(err, TopologyError::Cache { .. }));
    }
}
