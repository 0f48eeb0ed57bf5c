use zerocopy::byteorder::network_endian::U16;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

pub const IPV6_VERSION: u8 = 6;
pub const IPV6_HEADER_LEN: usize = 40;
pub const IPV6_ADDRESS_LEN: usize = 16;

pub const NEXT_HEADER_UDP: u8 = 17;
pub const NEXT_HEADER_ICMPV6: u8 = 58;

#[derive(FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
pub struct Ipv6Header {
    /// Version (4 bits), traffic class (8 bits) and flow label (20 bits).
    pub(crate) version_class_flow: [u8; 4],
    pub(crate) payload_length: U16,
    pub(crate) next_header: u8,
    pub(crate) hop_limit: u8,
    pub(crate) source: [u8; IPV6_ADDRESS_LEN],
    pub(crate) destination: [u8; IPV6_ADDRESS_LEN],
}
