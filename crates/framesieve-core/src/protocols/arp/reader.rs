use std::net::Ipv4Addr;

use super::layout::{ArpHeader, OPERATION_REPLY, OPERATION_REQUEST};

impl ArpHeader {
    pub fn hardware_type(&self) -> u16 {
        self.hardware_type.get()
    }

    pub fn protocol_type(&self) -> u16 {
        self.protocol_type.get()
    }

    pub fn hardware_address_len(&self) -> u8 {
        self.hardware_address_len
    }

    pub fn protocol_address_len(&self) -> u8 {
        self.protocol_address_len
    }

    pub fn operation(&self) -> u16 {
        self.operation.get()
    }

    pub fn is_request(&self) -> bool {
        self.operation() == OPERATION_REQUEST
    }

    pub fn is_reply(&self) -> bool {
        self.operation() == OPERATION_REPLY
    }

    pub fn sender_hardware_address(&self) -> [u8; 6] {
        self.sender_hardware_address
    }

    pub fn sender_protocol_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.sender_protocol_address)
    }

    pub fn target_hardware_address(&self) -> [u8; 6] {
        self.target_hardware_address
    }

    pub fn target_protocol_address(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.target_protocol_address)
    }

    pub fn set_operation(&mut self, operation: u16) {
        self.operation.set(operation);
    }
}
