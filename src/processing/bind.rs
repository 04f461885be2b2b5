//! Zone binding.
//!
//! Binds allocated CIDR pairs to availability zones in canonical order.

use crate::models::{Ipv4, SubnetSpec, Visibility};

/// Bind CIDR pair i to zone i, in input order.
///
/// The zone order from the discovery collaborator is treated as canonical
/// and stable for a given resolution. Output is truncated to
/// `min(pairs.len(), zones.len())`, mirroring the allocator's
/// "use what's available" policy; per bound zone the public subnet is
/// emitted before the private one.
///
/// Empty input produces zero subnets - a VPC with no subnets is a valid,
/// if useless, result. Zone availability is validated upstream.
pub fn bind(pairs: &[(Ipv4, Ipv4)], zones: &[String]) -> Vec<SubnetSpec> {
    let take = pairs.len().min(zones.len());

    if pairs.len() > take {
        log::warn!(
            "Only {} zone(s) available for {} allocated pair(s), discarding the rest",
            zones.len(),
            pairs.len()
        );
    }
    if zones.len() > take {
        log::warn!(
            "Only {} pair(s) allocated for {} zone(s), extra zones stay empty",
            pairs.len(),
            zones.len()
        );
    }

    let mut subnets = Vec::with_capacity(take * 2);
    for ((public_cidr, private_cidr), zone) in pairs.iter().zip(zones.iter()).take(take) {
        subnets.push(SubnetSpec::new(*public_cidr, zone, Visibility::Public));
        subnets.push(SubnetSpec::new(*private_cidr, zone, Visibility::Private));
    }

    log::info!(
        "Bound {} subnet(s) across {} zone(s)",
        subnets.len(),
        take
    );

    subnets
}
