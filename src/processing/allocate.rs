//! Subnet CIDR allocation.
//!
//! Partitions the VPC block into disjoint public/private subnet pairs,
//! one pair per availability zone, up to the number of zones available.

use crate::error::{Result, TopologyError};
use crate::models::Ipv4;
use itertools::Itertools;

/// Pair up public and private pool entries, one pair per zone.
///
/// The i-th public entry is paired with the i-th private entry for
/// `i in 0..min(zone_count, public_pool.len(), private_pool.len())`.
/// Pool entries beyond the available zone count are discarded with a
/// warning: the policy is "use what's needed, provision no more than
/// AZs support".
///
/// # Arguments
/// * `vpc_cidr` - The VPC block every pool entry must fit inside
/// * `zone_count` - Number of availability zones discovered
/// * `public_pool` - Candidate public subnet CIDRs, in order
/// * `private_pool` - Candidate private subnet CIDRs, in order
///
/// # Returns
/// * `Ok(pairs)` - (public, private) CIDR pairs, pairwise disjoint and
///   each contained in `vpc_cidr`
pub fn allocate(
    vpc_cidr: Ipv4,
    zone_count: usize,
    public_pool: &[Ipv4],
    private_pool: &[Ipv4],
) -> Result<Vec<(Ipv4, Ipv4)>> {
    if zone_count == 0 {
        return Err(TopologyError::InsufficientZones);
    }

    // Validate the full pools before truncation: overlapping or escaped
    // entries are a config defect no matter how many zones were found.
    let combined: Vec<Ipv4> = public_pool
        .iter()
        .chain(private_pool.iter())
        .copied()
        .collect();

    for cidr in &combined {
        if !vpc_cidr.contains_subnet(cidr) {
            return Err(TopologyError::CidrOutOfRange {
                cidr: *cidr,
                vpc: vpc_cidr,
            });
        }
    }

    for (a, b) in combined.iter().tuple_combinations() {
        if a.overlaps(b) {
            return Err(TopologyError::CidrOverlap { a: *a, b: *b });
        }
    }

    let take = zone_count.min(public_pool.len()).min(private_pool.len());

    if public_pool.len() > take {
        log::warn!(
            "Discarding {} public subnet CIDR(s) beyond the {} usable slot(s): {:?}",
            public_pool.len() - take,
            take,
            &public_pool[take..]
        );
    }
    if private_pool.len() > take {
        log::warn!(
            "Discarding {} private subnet CIDR(s) beyond the {} usable slot(s): {:?}",
            private_pool.len() - take,
            take,
            &private_pool[take..]
        );
    }

    let pairs: Vec<(Ipv4, Ipv4)> = public_pool
        .iter()
        .zip(private_pool.iter())
        .take(take)
        .map(|(pub_cidr, priv_cidr)| (*pub_cidr, *priv_cidr))
        .collect();

    log::info!(
        "Allocated {} subnet pair(s) in {} for {} zone(s)",
        pairs.len(),
        vpc_cidr,
        zone_count
    );

    Ok(pairs)
}
