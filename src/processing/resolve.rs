//! Topology resolution orchestration.
//!
//! Single forward pass: discover zones, allocate CIDR pairs, bind them
//! to zones, compose discovery tags, assemble the immutable result.
//! Component errors propagate unchanged; there are no retries - this is
//! a pure computation, so failures are deterministic.

use super::{allocate, bind, compose, ResourceRole};
use crate::config::TopologyConfig;
use crate::error::{Result, TopologyError};
use crate::models::{ClusterIdentity, NetworkTopology, Visibility};
use crate::zones::ZoneDiscovery;

/// Resolve a full network topology from declarative inputs.
///
/// # Arguments
/// * `config` - Region, VPC CIDR, subnet pools, cluster naming
/// * `identity` - Cluster identity with the caller-owned suffix
/// * `zones` - Zone-discovery collaborator
///
/// # Returns
/// * `Ok(NetworkTopology)` - A fully valid topology value
/// * `Err` - One concrete error; partial topologies are never returned
pub fn resolve(
    config: &TopologyConfig,
    identity: &ClusterIdentity,
    zones: &dyn ZoneDiscovery,
) -> Result<NetworkTopology> {
    log::info!(
        "#Start resolve() region={region} cluster={identity}",
        region = config.region
    );

    let zone_names = zones.list_availability_zones(&config.region)?;
    log::info!(
        "Discovered {} zone(s) in {}: {:?}",
        zone_names.len(),
        config.region,
        zone_names
    );

    let pairs = allocate(
        config.vpc_cidr,
        zone_names.len(),
        &config.public_subnet_cidrs,
        &config.private_subnet_cidrs,
    )?;

    let mut subnets = bind(&pairs, &zone_names);

    for subnet in &mut subnets {
        let role = match subnet.visibility {
            Visibility::Public => ResourceRole::PublicSubnet,
            Visibility::Private => ResourceRole::PrivateSubnet,
        };
        subnet.tags = compose(identity, role);
    }

    let topology = NetworkTopology {
        region: config.region.clone(),
        vpc_cidr: config.vpc_cidr,
        subnets,
        vpc_tags: compose(identity, ResourceRole::Vpc),
        suffix: identity.suffix.clone(),
    };

    check_symmetry(&topology)?;

    log::info!("Resolved topology: {topology}");
    Ok(topology)
}

/// Every zone that gets a private subnet also gets a public one, so the
/// public and private counts must match (and the total is even).
fn check_symmetry(topology: &NetworkTopology) -> Result<()> {
    let public_count = topology.public_count();
    let private_count = topology.private_count();
    if public_count != private_count {
        return Err(TopologyError::AsymmetricTopology {
            public_count,
            private_count,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Ipv4, SubnetSpec, TagSet};
    use crate::zones::FixedZones;
    use itertools::Itertools;

    fn test_config() -> TopologyConfig {
        TopologyConfig {
            region: "ap-southeast-2".to_string(),
            vpc_cidr: Ipv4::new("10.0.0.0/16").unwrap(),
            public_subnet_cidrs: vec![
                Ipv4::new("10.0.4.0/24").unwrap(),
                Ipv4::new("10.0.5.0/24").unwrap(),
                Ipv4::new("10.0.6.0/24").unwrap(),
            ],
            private_subnet_cidrs: vec![
                Ipv4::new("10.0.1.0/24").unwrap(),
                Ipv4::new("10.0.2.0/24").unwrap(),
                Ipv4::new("10.0.3.0/24").unwrap(),
            ],
            cluster_base_name: "zsb-eks".to_string(),
            suffix: Some("ab12cd34".to_string()),
            availability_zones: None,
            zone_cache_file: None,
        }
    }

    fn test_zones() -> FixedZones {
        FixedZones::with_region(
            "ap-southeast-2",
            &[
                "ap-southeast-2a".to_string(),
                "ap-southeast-2b".to_string(),
                "ap-southeast-2c".to_string(),
            ],
        )
    }

    fn test_identity() -> ClusterIdentity {
        ClusterIdentity::new("zsb-eks", "ab12cd34").unwrap()
    }

    #[test]
    fn test_resolve_full_topology() {
        let topology = resolve(&test_config(), &test_identity(), &test_zones()).unwrap();

        assert_eq!(topology.region, "ap-southeast-2");
        assert_eq!(topology.suffix, "ab12cd34");
        assert_eq!(topology.subnets.len(), 6);
        assert_eq!(topology.public_count(), 3);
        assert_eq!(topology.private_count(), 3);

        // positional binding: zone a gets (10.0.4.0/24, 10.0.1.0/24) etc.
        let expect = [
            ("ap-southeast-2a", "10.0.4.0/24", "10.0.1.0/24"),
            ("ap-southeast-2b", "10.0.5.0/24", "10.0.2.0/24"),
            ("ap-southeast-2c", "10.0.6.0/24", "10.0.3.0/24"),
        ];
        for (i, (zone, public, private)) in expect.iter().enumerate() {
            let pub_subnet = &topology.subnets[2 * i];
            let priv_subnet = &topology.subnets[2 * i + 1];
            assert_eq!(pub_subnet.zone, *zone);
            assert_eq!(pub_subnet.cidr, Ipv4::new(public).unwrap());
            assert_eq!(pub_subnet.visibility, Visibility::Public);
            assert_eq!(priv_subnet.zone, *zone);
            assert_eq!(priv_subnet.cidr, Ipv4::new(private).unwrap());
            assert_eq!(priv_subnet.visibility, Visibility::Private);
        }

        // each zone appears exactly once per visibility
        let public_zones: Vec<&str> = topology
            .subnets
            .iter()
            .filter(|s| s.visibility == Visibility::Public)
            .map(|s| s.zone.as_str())
            .collect();
        assert_eq!(
            public_zones,
            vec!["ap-southeast-2a", "ap-southeast-2b", "ap-southeast-2c"]
        );
    }

    #[test]
    fn test_resolve_tags() {
        let topology = resolve(&test_config(), &test_identity(), &test_zones()).unwrap();

        let cluster_key = "kubernetes.io/cluster/zsb-eks-ab12cd34";
        assert_eq!(topology.vpc_tags.len(), 1);
        assert_eq!(topology.vpc_tags.get(cluster_key).map(|s| s.as_str()), Some("shared"));

        for subnet in &topology.subnets {
            assert_eq!(
                subnet.tags.get(cluster_key).map(|s| s.as_str()),
                Some("shared")
            );
            match subnet.visibility {
                Visibility::Public => {
                    assert_eq!(
                        subnet.tags.get("kubernetes.io/role/elb").map(|s| s.as_str()),
                        Some("1")
                    );
                    assert!(!subnet.tags.contains_key("kubernetes.io/role/internal-elb"));
                }
                Visibility::Private => {
                    assert_eq!(
                        subnet
                            .tags
                            .get("kubernetes.io/role/internal-elb")
                            .map(|s| s.as_str()),
                        Some("1")
                    );
                    assert!(!subnet.tags.contains_key("kubernetes.io/role/elb"));
                }
            }
        }
    }

    #[test]
    fn test_resolve_subnets_disjoint_within_vpc() {
        let topology = resolve(&test_config(), &test_identity(), &test_zones()).unwrap();
        for (a, b) in topology.subnets.iter().tuple_combinations() {
            assert!(!a.cidr.overlaps(&b.cidr), "{a} overlaps {b}");
        }
        for subnet in &topology.subnets {
            assert!(topology.vpc_cidr.contains_subnet(&subnet.cidr));
        }
    }

    #[test]
    fn test_resolve_deterministic() {
        let first = resolve(&test_config(), &test_identity(), &test_zones()).unwrap();
        let second = resolve(&test_config(), &test_identity(), &test_zones()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap(),
            "Repeated resolution must serialize byte-identically"
        );
    }

    #[test]
    fn test_resolve_unknown_region() {
        let mut config = test_config();
        config.region = "eu-north-1".to_string();
        let err = resolve(&config, &test_identity(), &test_zones()).unwrap_err();
        assert!(matches!(err, TopologyError::RegionUnavailable { .. }));
    }

    #[test]
    fn test_resolve_no_zones() {
        // A collaborator that knows the region but reports no zones.
        struct NoZones;
        impl ZoneDiscovery for NoZones {
            fn list_availability_zones(&self, _region: &str) -> crate::error::Result<Vec<String>> {
                Ok(vec![])
            }
        }

        let err = resolve(&test_config(), &test_identity(), &NoZones).unwrap_err();
        assert!(matches!(err, TopologyError::InsufficientZones));
    }

    #[test]
    fn test_resolve_overlap_propagates() {
        let mut config = test_config();
        config.private_subnet_cidrs[2] = config.private_subnet_cidrs[0];
        let err = resolve(&config, &test_identity(), &test_zones()).unwrap_err();
        assert!(matches!(err, TopologyError::CidrOverlap { .. }));
    }

    #[test]
    fn test_check_symmetry() {
        let mut topology = NetworkTopology {
            region: "ap-southeast-2".to_string(),
            vpc_cidr: Ipv4::new("10.0.0.0/16").unwrap(),
            subnets: vec![
                SubnetSpec::new(
                    Ipv4::new("10.0.4.0/24").unwrap(),
                    "ap-southeast-2a",
                    Visibility::Public,
                ),
                SubnetSpec::new(
                    Ipv4::new("10.0.1.0/24").unwrap(),
                    "ap-southeast-2a",
                    Visibility::Private,
                ),
            ],
            vpc_tags: TagSet::new(),
            suffix: "ab12cd34".to_string(),
        };
        assert!(check_symmetry(&topology).is_ok());

        topology.subnets.pop();
        let err = check_symmetry(&topology).unwrap_err();
        assert!(matches!(
            err,
            TopologyError::AsymmetricTopology {
                public_count: 1,
                private_count: 0
            }
        ));
    }
}
