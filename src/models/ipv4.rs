//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] for representing network blocks in CIDR notation,
//! along with the containment and overlap predicates the allocator is
//! built on.

use crate::error::{Result, TopologyError};
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use eks_vpc_topology::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> Result<u32> {
    if len > MAX_LENGTH {
        Err(prefix_error(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Get the network address for a given IP and prefix length.
pub fn cut_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    if len > MAX_LENGTH {
        Err(prefix_error(len))
    } else {
        let right_len = MAX_LENGTH - len;
        let bits = u32::from(addr) as u64;
        let new_bits = (bits >> right_len) << right_len;

        Ok(Ipv4Addr::from(new_bits as u32))
    }
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr> {
    if len > MAX_LENGTH {
        Err(prefix_error(len))
    } else {
        let mask = get_cidr_mask(len)?;
        let addr_bits = u32::from(addr);
        let network_bits = addr_bits & mask;
        let broadcast_bits = network_bits | (!mask);
        Ok(Ipv4Addr::from(broadcast_bits))
    }
}

/// Calculate the number of usable host addresses in an AWS subnet.
///
/// AWS reserves 5 IP addresses per subnet (network, VPC router, DNS,
/// one reserved for future use, and broadcast). Valid AWS subnet prefix
/// lengths run from /16 to /28.
pub fn num_aws_hosts(len: u8) -> Result<u64> {
    if !(16..=28).contains(&len) {
        Err(TopologyError::InvalidCidr {
            input: format!("/{len}"),
            reason: "AWS subnet prefix length must be between /16 and /28".to_string(),
        })
    } else {
        let num_aws_hosts = (1u64 << (MAX_LENGTH - len)) - 5;
        Ok(num_aws_hosts)
    }
}

fn prefix_error(len: u8) -> TopologyError {
    TopologyError::InvalidCidr {
        input: format!("/{len}"),
        reason: "prefix length exceeds 32".to_string(),
    }
}

/// IPv4 network block in CIDR notation.
///
/// `mask <= 32` always holds: both [`Ipv4::new`] and the serde
/// deserializer reject longer prefixes.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let parts: Vec<&str> = s.split('/').collect();
        if parts.len() != 2 {
            return Err(de::Error::custom(format!("invalid CIDR format: {}", s)));
        }

        let addr = Ipv4Addr::from_str(parts[0])
            .map_err(|_| de::Error::custom(format!("invalid IP address: {}", parts[0])))?;
        let mask = u8::from_str(parts[1])
            .map_err(|_| de::Error::custom(format!("invalid subnet mask: {}", parts[1])))?;
        if mask > MAX_LENGTH {
            return Err(de::Error::custom(format!("subnet mask too long: /{mask}")));
        }

        Ok(Ipv4 { addr, mask })
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(TopologyError::InvalidCidr {
                input: addr_cidr.to_string(),
                reason: "expected address/prefix".to_string(),
            });
        }
        let addr: Ipv4Addr = parts[0].parse().map_err(|_| TopologyError::InvalidCidr {
            input: addr_cidr.to_string(),
            reason: format!("invalid address {}", parts[0]),
        })?;
        let mask: u8 = parts[1].parse().map_err(|_| TopologyError::InvalidCidr {
            input: addr_cidr.to_string(),
            reason: format!("invalid prefix length {}", parts[1]),
        })?;
        if mask > MAX_LENGTH {
            return Err(TopologyError::InvalidCidr {
                input: addr_cidr.to_string(),
                reason: "prefix length exceeds 32".to_string(),
            });
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the broadcast address for this block.
    pub fn broadcast(&self) -> Result<Ipv4> {
        let broadcast = broadcast_addr(self.addr, self.mask)?;
        Ok(Ipv4 {
            addr: broadcast,
            mask: self.mask,
        })
    }

    /// Get the highest (broadcast) address in the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {}", e))
    }

    /// Get the lowest (network) address in the block.
    pub fn lo(&self) -> Ipv4Addr {
        cut_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating minimum address for {}: {}", self, e))
    }

    /// Check if an IP address is contained within this block.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }

    /// Check if another block lies entirely within this block.
    pub fn contains_subnet(&self, other: &Ipv4) -> bool {
        self.lo() <= other.lo() && other.hi() <= self.hi()
    }

    /// Check if two blocks share any address.
    pub fn overlaps(&self, other: &Ipv4) -> bool {
        self.lo() <= other.hi() && other.lo() <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
