use super::layout::UdpHeader;

impl UdpHeader {
    pub fn source_port(&self) -> u16 {
        self.source_port.get()
    }

    pub fn destination_port(&self) -> u16 {
        self.destination_port.get()
    }

    /// Datagram length in bytes, header included.
    pub fn length(&self) -> u16 {
        self.length.get()
    }

    /// Zero when the sender did not compute a checksum (IPv4 only).
    pub fn checksum(&self) -> u16 {
        self.checksum.get()
    }

    pub fn set_source_port(&mut self, port: u16) {
        self.source_port.set(port);
    }

    pub fn set_destination_port(&mut self, port: u16) {
        self.destination_port.set(port);
    }
}
