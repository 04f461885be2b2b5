//! Topology configuration loading and boundary validation.
//!
//! The config file is the declarative input surface: region, VPC CIDR,
//! subnet pools and cluster naming. Everything is validated here at the
//! boundary; allocation invariants (overlap, containment) stay with the
//! allocator.

use crate::error::{Result, TopologyError};
use crate::models::{ClusterIdentity, Ipv4};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // e.g. ap-southeast-2, us-east-1, eu-central-1
    static ref REGION_RE: Regex = Regex::new(r"^[a-z]{2}(-[a-z]+)+-\d$").expect("Invalid Regex?");
}

/// Declarative inputs for one topology resolution.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TopologyConfig {
    /// Cloud region code, e.g. "ap-southeast-2".
    pub region: String,
    /// CIDR block of the VPC.
    pub vpc_cidr: Ipv4,
    /// Candidate public subnet CIDRs, in order.
    pub public_subnet_cidrs: Vec<Ipv4>,
    /// Candidate private subnet CIDRs, in order.
    pub private_subnet_cidrs: Vec<Ipv4>,
    /// Base cluster name, e.g. "zsb-eks".
    pub cluster_base_name: String,
    /// Pinned disambiguation suffix. When absent the caller generates
    /// one (and should pin it afterwards).
    #[serde(default)]
    pub suffix: Option<String>,
    /// Pinned zone list; selects the fixed zone source over the cache file.
    #[serde(default)]
    pub availability_zones: Option<Vec<String>>,
    /// Explicit zone cache file path.
    #[serde(default)]
    pub zone_cache_file: Option<String>,
}

impl TopologyConfig {
    /// Load and validate a config file.
    ///
    /// Parse errors carry the JSON path of the offending field.
    pub fn from_file(path: &str) -> Result<TopologyConfig> {
        let json = std::fs::read_to_string(path).map_err(|e| TopologyError::Config {
            path: path.to_string(),
            message: format!("Error reading config file: {e}"),
        })?;

        let mut deserializer = serde_json::Deserializer::from_str(&json);
        let config: TopologyConfig = serde_path_to_error::deserialize(&mut deserializer)
            .map_err(|e| TopologyError::Config {
                path: path.to_string(),
                message: format!("path={} error={}", e.path(), e),
            })?;

        config.validate(path)?;
        log::info!(
            "Loaded config from {path}: region={region} vpc={vpc}",
            region = config.region,
            vpc = config.vpc_cidr
        );
        Ok(config)
    }

    /// Boundary validation of the raw config values.
    pub fn validate(&self, path: &str) -> Result<()> {
        if !REGION_RE.is_match(&self.region) {
            return Err(TopologyError::Config {
                path: path.to_string(),
                message: format!("region '{}' is not a valid region code", self.region),
            });
        }
        if self.cluster_base_name.trim().is_empty() {
            return Err(TopologyError::Config {
                path: path.to_string(),
                message: "cluster_base_name is empty".to_string(),
            });
        }
        if self.public_subnet_cidrs.is_empty() || self.private_subnet_cidrs.is_empty() {
            return Err(TopologyError::Config {
                path: path.to_string(),
                message: "public_subnet_cidrs and private_subnet_cidrs must be non-empty"
                    .to_string(),
            });
        }
        if let Some(suffix) = &self.suffix {
            // Reuse the identity validation so the formats cannot drift.
            ClusterIdentity::new(&self.cluster_base_name, suffix)?;
        }
        Ok(())
    }

    /// Build the cluster identity: pinned suffix when present, otherwise
    /// a freshly generated one (the caller should log and pin it).
    pub fn cluster_identity(&self) -> Result<ClusterIdentity> {
        match &self.suffix {
            Some(suffix) => ClusterIdentity::new(&self.cluster_base_name, suffix),
            None => {
                let identity = ClusterIdentity::generate(&self.cluster_base_name)?;
                log::warn!(
                    "No suffix pinned in config, generated '{}' - pin it to keep the topology stable",
                    identity.suffix
                );
                Ok(identity)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> TopologyConfig {
        TopologyConfig {
            region: "ap-southeast-2".to_string(),
            vpc_cidr: Ipv4::new("10.0.0.0/16").unwrap(),
            public_subnet_cidrs: vec![Ipv4::new("10.0.4.0/24").unwrap()],
            private_subnet_cidrs: vec![Ipv4::new("10.0.1.0/24").unwrap()],
            cluster_base_name: "zsb-eks".to_string(),
            suffix: Some("ab12cd34".to_string()),
            availability_zones: None,
            zone_cache_file: None,
        }
    }

    #[test]
    fn test_from_file() {
        let config = TopologyConfig::from_file("src/tests/test_data/topology_config_01.json")
            .expect("Error reading topology config");
        assert_eq!(config.region, "ap-southeast-2");
        assert_eq!(config.vpc_cidr, Ipv4::new("10.0.0.0/16").unwrap());
        assert_eq!(config.public_subnet_cidrs.len(), 3);
        assert_eq!(config.private_subnet_cidrs.len(), 3);
        assert_eq!(config.cluster_base_name, "zsb-eks");
        assert_eq!(config.suffix.as_deref(), Some("ab12cd34"));
        assert_eq!(
            config.availability_zones.as_ref().map(|z| z.len()),
            Some(3)
        );
    }

    #[test]
    fn test_from_file_missing() {
        let err = TopologyConfig::from_file("src/tests/test_data/no_such_config.json").unwrap_err();
        assert!(matches!(err, TopologyError::Config { .. }));
    }

    #[test]
    fn test_from_file_bad_cidr_reports_path() {
        let err = TopologyConfig::from_file("src/tests/test_data/topology_config_bad_cidr.json")
            .unwrap_err();
        match err {
            TopologyError::Config { message, .. } => {
                assert!(
                    message.contains("vpc_cidr"),
                    "Expected JSON path in message, got: {message}"
                );
            }
            other => panic!("Expected Config error, got {other}"),
        }
    }

    #[test]
    fn test_validate_rejects_bad_region() {
        let mut config = valid_config();
        config.region = "Sydney".to_string();
        assert!(config.validate("test").is_err());

        config.region = "ap-southeast-".to_string();
        assert!(config.validate("test").is_err());

        config.region = "ap-southeast-2".to_string();
        assert!(config.validate("test").is_ok());

        config.region = "us-east-1".to_string();
        assert!(config.validate("test").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_pools() {
        let mut config = valid_config();
        config.public_subnet_cidrs.clear();
        assert!(config.validate("test").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_suffix() {
        let mut config = valid_config();
        config.suffix = Some("NOPE".to_string());
        assert!(config.validate("test").is_err());
    }

    #[test]
    fn test_cluster_identity_pinned() {
        let config = valid_config();
        let identity = config.cluster_identity().unwrap();
        assert_eq!(identity.qualified_name(), "zsb-eks-ab12cd34");
        // pinned suffix is stable across calls
        let again = config.cluster_identity().unwrap();
        assert_eq!(identity, again);
    }

    #[test]
    fn test_cluster_identity_generated_when_unpinned() {
        let mut config = valid_config();
        config.suffix = None;
        let identity = config.cluster_identity().unwrap();
        assert_eq!(identity.base_name, "zsb-eks");
        assert_eq!(identity.suffix.len(), 8);
    }
}
