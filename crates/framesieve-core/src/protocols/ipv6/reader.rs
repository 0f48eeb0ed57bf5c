use std::net::Ipv6Addr;

use super::layout::Ipv6Header;

impl Ipv6Header {
    fn word(&self) -> u32 {
        u32::from_be_bytes(self.version_class_flow)
    }

    pub fn version(&self) -> u8 {
        (self.word() >> 28) as u8
    }

    pub fn traffic_class(&self) -> u8 {
        (self.word() >> 20) as u8
    }

    pub fn flow_label(&self) -> u32 {
        self.word() & 0x000F_FFFF
    }

    /// Length of everything after the fixed header, extension headers
    /// included.
    pub fn payload_length(&self) -> u16 {
        self.payload_length.get()
    }

    pub fn next_header(&self) -> u8 {
        self.next_header
    }

    pub fn hop_limit(&self) -> u8 {
        self.hop_limit
    }

    pub fn source(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.source)
    }

    pub fn destination(&self) -> Ipv6Addr {
        Ipv6Addr::from(self.destination)
    }

    pub fn set_hop_limit(&mut self, hop_limit: u8) {
        self.hop_limit = hop_limit;
    }

    pub fn set_source(&mut self, address: Ipv6Addr) {
        self.source = address.octets();
    }

    pub fn set_destination(&mut self, address: Ipv6Addr) {
        self.destination = address.octets();
    }
}
