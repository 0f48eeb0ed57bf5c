use super::layout::{
    ArpHeader, HARDWARE_ADDRESS_LEN, HARDWARE_ETHERNET, PROTOCOL_ADDRESS_LEN, PROTOCOL_IPV4,
};
use crate::frame::{CheckFrame, Frame, FrameRef, ParentMatch};
use crate::protocols::ethernet::EthernetHeader;
use crate::protocols::ethernet::layout::ETHERTYPE_ARP;

impl Frame for ArpHeader {
    const NAME: &'static str = "arp";
}

impl CheckFrame for ArpHeader {
    fn check_frame(frame: &FrameRef<'_, Self>) -> bool {
        frame.hardware_type() == HARDWARE_ETHERNET
            && frame.protocol_type() == PROTOCOL_IPV4
            && frame.hardware_address_len() == HARDWARE_ADDRESS_LEN
            && frame.protocol_address_len() == PROTOCOL_ADDRESS_LEN
    }
}

impl ParentMatch<EthernetHeader> for ArpHeader {
    fn parent_match(parent: &FrameRef<'_, EthernetHeader>) -> bool {
        parent.ethertype() == ETHERTYPE_ARP
    }
}
