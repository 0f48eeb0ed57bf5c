use std::net::Ipv4Addr;

use super::layout::{FLAG_DONT_FRAGMENT, FLAG_MORE_FRAGMENTS, FRAGMENT_OFFSET_MASK, Ipv4Header};

impl Ipv4Header {
    pub fn version(&self) -> u8 {
        self.version_ihl >> 4
    }

    /// Header length in 32-bit words.
    pub fn ihl(&self) -> u8 {
        self.version_ihl & 0x0F
    }

    /// Header length in bytes, options included.
    pub fn header_length(&self) -> usize {
        usize::from(self.ihl()) * 4
    }

    pub fn dscp(&self) -> u8 {
        self.dscp_ecn >> 2
    }

    pub fn ecn(&self) -> u8 {
        self.dscp_ecn & 0x03
    }

    pub fn total_length(&self) -> u16 {
        self.total_length.get()
    }

    pub fn identification(&self) -> u16 {
        self.identification.get()
    }

    pub fn dont_fragment(&self) -> bool {
        self.flags_fragment.get() & FLAG_DONT_FRAGMENT != 0
    }

    pub fn more_fragments(&self) -> bool {
        self.flags_fragment.get() & FLAG_MORE_FRAGMENTS != 0
    }

    /// Fragment offset in 8-byte units.
    pub fn fragment_offset(&self) -> u16 {
        self.flags_fragment.get() & FRAGMENT_OFFSET_MASK
    }

    /// True for any fragment of a fragmented datagram, the first included.
    pub fn is_fragment(&self) -> bool {
        self.more_fragments() || self.fragment_offset() != 0
    }

    pub fn ttl(&self) -> u8 {
        self.ttl
    }

    pub fn protocol(&self) -> u8 {
        self.protocol
    }

    pub fn checksum(&self) -> u16 {
        self.checksum.get()
    }

    pub fn source(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.source)
    }

    pub fn destination(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.destination)
    }

    pub fn set_ttl(&mut self, ttl: u8) {
        self.ttl = ttl;
    }

    pub fn set_source(&mut self, address: Ipv4Addr) {
        self.source = address.octets();
    }

    pub fn set_destination(&mut self, address: Ipv4Addr) {
        self.destination = address.octets();
    }

    pub fn set_checksum(&mut self, checksum: u16) {
        self.checksum.set(checksum);
    }
}
