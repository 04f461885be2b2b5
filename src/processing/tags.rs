//! Kubernetes discovery tag composition.
//!
//! The cloud-controller-manager matches on these exact tag keys and
//! values to find cluster-owned resources and load-balancer subnets, so
//! the literals below are bit-exact and must not be reformatted.

use crate::models::{ClusterIdentity, TagSet};

/// Prefix of the cluster ownership tag key.
pub const CLUSTER_TAG_PREFIX: &str = "kubernetes.io/cluster/";
/// Value marking a resource as shared with the cluster.
pub const CLUSTER_TAG_SHARED: &str = "shared";
/// Tag key marking a subnet as hosting internet-facing load balancers.
pub const ELB_ROLE_TAG: &str = "kubernetes.io/role/elb";
/// Tag key marking a subnet as hosting internal load balancers.
pub const INTERNAL_ELB_ROLE_TAG: &str = "kubernetes.io/role/internal-elb";

/// Which resource a tag set is composed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceRole {
    /// The VPC itself.
    Vpc,
    /// An internet-facing subnet.
    PublicSubnet,
    /// A NAT-routed subnet.
    PrivateSubnet,
}

/// Compose the full tag set for one resource.
///
/// Pure and deterministic: identical inputs produce byte-identical tag
/// sets, so repeated resolution passes against an unchanged cluster
/// identity re-serialize identically.
pub fn compose(identity: &ClusterIdentity, role: ResourceRole) -> TagSet {
    let mut tags = TagSet::new();
    tags.insert(
        format!("{CLUSTER_TAG_PREFIX}{}", identity.qualified_name()),
        CLUSTER_TAG_SHARED.to_string(),
    );

    match role {
        ResourceRole::Vpc => {}
        ResourceRole::PublicSubnet => {
            tags.insert(ELB_ROLE_TAG.to_string(), "1".to_string());
        }
        ResourceRole::PrivateSubnet => {
            tags.insert(INTERNAL_ELB_ROLE_TAG.to_string(), "1".to_string());
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> ClusterIdentity {
        ClusterIdentity::new("zsb-eks", "ab12cd34").unwrap()
    }

    #[test]
    fn test_vpc_tags_exact() {
        let tags = compose(&identity(), ResourceRole::Vpc);
        assert_eq!(tags.len(), 1);
        assert_eq!(
            tags.get("kubernetes.io/cluster/zsb-eks-ab12cd34"),
            Some(&"shared".to_string())
        );
    }

    #[test]
    fn test_public_subnet_tags_exact() {
        let tags = compose(&identity(), ResourceRole::PublicSubnet);
        assert_eq!(tags.len(), 2);
        assert_eq!(
            tags.get("kubernetes.io/cluster/zsb-eks-ab12cd34"),
            Some(&"shared".to_string())
        );
        assert_eq!(tags.get("kubernetes.io/role/elb"), Some(&"1".to_string()));
    }

    #[test]
    fn test_private_subnet_tags_exact() {
        let tags = compose(&identity(), ResourceRole::PrivateSubnet);
        assert_eq!(tags.len(), 2);
        assert_eq!(
            tags.get("kubernetes.io/cluster/zsb-eks-ab12cd34"),
            Some(&"shared".to_string())
        );
        assert_eq!(
            tags.get("kubernetes.io/role/internal-elb"),
            Some(&"1".to_string())
        );
    }

    #[test]
    fn test_compose_deterministic() {
        let a = compose(&identity(), ResourceRole::PublicSubnet);
        let b = compose(&identity(), ResourceRole::PublicSubnet);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
