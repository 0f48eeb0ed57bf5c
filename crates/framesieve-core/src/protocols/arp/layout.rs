use zerocopy::byteorder::network_endian::U16;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

pub const ARP_PACKET_LEN: usize = 28;

pub const HARDWARE_ETHERNET: u16 = 1;
pub const PROTOCOL_IPV4: u16 = 0x0800;
pub const HARDWARE_ADDRESS_LEN: u8 = 6;
pub const PROTOCOL_ADDRESS_LEN: u8 = 4;

pub const OPERATION_REQUEST: u16 = 1;
pub const OPERATION_REPLY: u16 = 2;

/// ARP packet carrying Ethernet hardware and IPv4 protocol addresses.
#[derive(FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
pub struct ArpHeader {
    pub(crate) hardware_type: U16,
    pub(crate) protocol_type: U16,
    pub(crate) hardware_address_len: u8,
    pub(crate) protocol_address_len: u8,
    pub(crate) operation: U16,
    pub(crate) sender_hardware_address: [u8; 6],
    pub(crate) sender_protocol_address: [u8; 4],
    pub(crate) target_hardware_address: [u8; 6],
    pub(crate) target_protocol_address: [u8; 4],
}
