use super::layout::{EthernetHeader, MAC_LEN};

impl EthernetHeader {
    pub fn destination(&self) -> [u8; MAC_LEN] {
        self.destination
    }

    pub fn source(&self) -> [u8; MAC_LEN] {
        self.source
    }

    pub fn ethertype(&self) -> u16 {
        self.ethertype.get()
    }

    pub fn set_destination(&mut self, mac: [u8; MAC_LEN]) {
        self.destination = mac;
    }

    pub fn set_source(&mut self, mac: [u8; MAC_LEN]) {
        self.source = mac;
    }

    pub fn set_ethertype(&mut self, ethertype: u16) {
        self.ethertype.set(ethertype);
    }
}
