//! CSV output formatting for resolved topologies.

use crate::error::Result;
use crate::models::{num_aws_hosts, NetworkTopology};
use colored::Colorize;

use super::terminal::{format_field, format_tags};

/// Print a resolved topology as CSV to stdout.
///
/// # Arguments
/// * `topology` - The topology to print
pub fn topology_print(topology: &NetworkTopology) -> Result<()> {
    log::info!("#Start topology_print()");
    log::info!(
        "# Got subnet count = {} over {} zone(s)",
        topology.subnets.len(),
        topology.zones().len()
    );

    println!(
        "# {region} vpc={vpc} suffix={suffix} tags={tags}",
        region = topology.region.on_blue(),
        vpc = topology.vpc_cidr,
        suffix = topology.suffix,
        tags = format_tags(&topology.vpc_tags)
    );

    // Print CSV header
    println!(
        r#" "cnt",               "zone", "visibility",     "subnet_cidr",     "broadcast",   "hosts",  "tags""#
    );

    for (i, subnet) in topology.subnets.iter().enumerate() {
        println!(
            r#"{j},{zone},{visibility},{subnet_cidr},{broadcast},{hosts},{tags}"#,
            j = format_field(i + 1, 6),
            zone = format_field(&subnet.zone, 20),
            visibility = format_field(subnet.visibility, 12),
            subnet_cidr = format_field(subnet.cidr, 17),
            broadcast = format_field(subnet.cidr.broadcast()?.addr, 15),
            hosts = format_field(num_aws_hosts(subnet.cidr.mask)?, 9),
            tags = format_field(format_tags(&subnet.tags), 8),
        );
    }

    println!(
        "#{}# {} public + {} private subnet(s)",
        "NOTE".on_blue(),
        topology.public_count(),
        topology.private_count()
    );

    Ok(())
}

/// Serialize a topology for hand-off to the provisioning backend.
pub fn topology_to_json(topology: &NetworkTopology) -> serde_json::Result<String> {
    serde_json::to_string_pretty(topology)
}
