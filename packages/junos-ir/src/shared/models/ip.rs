//! IPv4 prefixes and wildcards

use super::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Network mask bits for a prefix length (0..=32)
pub(crate) fn mask_bits(length: u8) -> u32 {
    if length == 0 {
        0
    } else {
        u32::MAX << (32 - u32::from(length.min(32)))
    }
}

/// IPv4 prefix with host bits cleared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Prefix {
    network: Ipv4Addr,
    length: u8,
}

impl Prefix {
    pub const MAX_LENGTH: u8 = 32;

    /// Build a prefix, clearing host bits of `address`
    pub fn new(address: Ipv4Addr, length: u8) -> ModelResult<Self> {
        if length > Self::MAX_LENGTH {
            return Err(ModelError::PrefixLength(length));
        }
        Ok(Self {
            network: Ipv4Addr::from(u32::from(address) & mask_bits(length)),
            length,
        })
    }

    /// Parse `a.b.c.d/len`
    pub fn parse(text: &str) -> ModelResult<Self> {
        let (address, length) = text
            .trim()
            .split_once('/')
            .ok_or_else(|| ModelError::InvalidPrefix(text.to_string()))?;
        let address: Ipv4Addr = address
            .parse()
            .map_err(|_| ModelError::InvalidPrefix(text.to_string()))?;
        let length: u8 = length
            .parse()
            .map_err(|_| ModelError::InvalidPrefix(text.to_string()))?;
        Self::new(address, length)
    }

    /// Host route for a single address
    pub fn host(address: Ipv4Addr) -> Self {
        Self {
            network: address,
            length: Self::MAX_LENGTH,
        }
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network
    }

    pub fn length(&self) -> u8 {
        self.length
    }

    pub fn first_address(&self) -> Ipv4Addr {
        self.network
    }

    pub fn last_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.network) | !mask_bits(self.length))
    }

    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.length))
    }

    pub fn contains_address(&self, address: Ipv4Addr) -> bool {
        u32::from(address) & mask_bits(self.length) == u32::from(self.network)
    }

    /// True if `other` is equal to or more specific than this prefix
    pub fn contains_prefix(&self, other: &Prefix) -> bool {
        other.length >= self.length && self.contains_address(other.network)
    }

    /// Shorten to `length` bits; `None` if `length` is longer than this prefix
    pub fn truncate(&self, length: u8) -> Option<Prefix> {
        if length > self.length {
            return None;
        }
        Prefix::new(self.network, length).ok()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.network, self.length)
    }
}

impl FromStr for Prefix {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Prefix {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Prefix> for String {
    fn from(prefix: Prefix) -> Self {
        prefix.to_string()
    }
}

/// Address plus wildcard (don't-care) mask
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IpWildcard {
    pub address: Ipv4Addr,
    pub wildcard: Ipv4Addr,
}

impl IpWildcard {
    /// Build a wildcard, clearing the don't-care bits of `address`
    pub fn new(address: Ipv4Addr, wildcard: Ipv4Addr) -> Self {
        let wildcard_bits = u32::from(wildcard);
        Self {
            address: Ipv4Addr::from(u32::from(address) & !wildcard_bits),
            wildcard,
        }
    }

    /// Address with a network mask (`address-mask` forms)
    pub fn from_address_mask(address: Ipv4Addr, mask: Ipv4Addr) -> Self {
        Self::new(address, Ipv4Addr::from(!u32::from(mask)))
    }

    pub fn host(address: Ipv4Addr) -> Self {
        Self::new(address, Ipv4Addr::UNSPECIFIED)
    }

    pub fn any() -> Self {
        Self::new(Ipv4Addr::UNSPECIFIED, Ipv4Addr::BROADCAST)
    }

    pub fn matches(&self, address: Ipv4Addr) -> bool {
        let care = !u32::from(self.wildcard);
        u32::from(address) & care == u32::from(self.address) & care
    }

    /// The equivalent prefix, when the wildcard bits are contiguous
    pub fn as_prefix(&self) -> Option<Prefix> {
        let care = !u32::from(self.wildcard);
        let length = care.leading_ones() as u8;
        if mask_bits(length) == care {
            Prefix::new(self.address, length).ok()
        } else {
            None
        }
    }
}

impl From<Prefix> for IpWildcard {
    fn from(prefix: Prefix) -> Self {
        Self::new(
            prefix.network(),
            Ipv4Addr::from(!mask_bits(prefix.length())),
        )
    }
}

impl fmt::Display for IpWildcard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_prefix() {
            Some(prefix) => write!(f, "{}", prefix),
            None => write!(f, "{}:{}", self.address, self.wildcard),
        }
    }
}
