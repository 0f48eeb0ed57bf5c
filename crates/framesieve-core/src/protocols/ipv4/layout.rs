use zerocopy::byteorder::network_endian::U16;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

pub const IPV4_VERSION: u8 = 4;
pub const IPV4_MIN_HEADER_LEN: usize = 20;
pub const IPV4_MIN_IHL: u8 = 5;

pub const PROTOCOL_ICMP: u8 = 1;
pub const PROTOCOL_TCP: u8 = 6;
pub const PROTOCOL_UDP: u8 = 17;

pub const FLAG_DONT_FRAGMENT: u16 = 0x4000;
pub const FLAG_MORE_FRAGMENTS: u16 = 0x2000;
pub const FRAGMENT_OFFSET_MASK: u16 = 0x1FFF;

/// Fixed part of the IPv4 header; options follow in the frame body.
#[derive(FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
pub struct Ipv4Header {
    pub(crate) version_ihl: u8,
    pub(crate) dscp_ecn: u8,
    pub(crate) total_length: U16,
    pub(crate) identification: U16,
    pub(crate) flags_fragment: U16,
    pub(crate) ttl: u8,
    pub(crate) protocol: u8,
    pub(crate) checksum: U16,
    pub(crate) source: [u8; 4],
    pub(crate) destination: [u8; 4],
}
