use super::layout::{IcmpHeader, TYPE_ECHO_REPLY, TYPE_ECHO_REQUEST};

impl IcmpHeader {
    pub fn icmp_type(&self) -> u8 {
        self.icmp_type
    }

    pub fn code(&self) -> u8 {
        self.code
    }

    pub fn checksum(&self) -> u16 {
        self.checksum.get()
    }

    pub fn is_echo_request(&self) -> bool {
        self.icmp_type == TYPE_ECHO_REQUEST
    }

    pub fn is_echo_reply(&self) -> bool {
        self.icmp_type == TYPE_ECHO_REPLY
    }
}
