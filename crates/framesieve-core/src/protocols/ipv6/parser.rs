use std::ops::Range;

use super::layout::{IPV6_VERSION, Ipv6Header};
use crate::frame::{CheckFrame, Frame, FrameRef, ParentMatch};
use crate::protocols::ethernet::EthernetHeader;
use crate::protocols::ethernet::layout::ETHERTYPE_IPV6;

impl Frame for Ipv6Header {
    const NAME: &'static str = "ipv6";

    fn payload_bounds(&self, _frame_len: usize) -> Range<usize> {
        Self::HEADER_LEN..Self::HEADER_LEN + usize::from(self.payload_length())
    }
}

impl CheckFrame for Ipv6Header {
    fn check_frame(frame: &FrameRef<'_, Self>) -> bool {
        frame.version() == IPV6_VERSION
            && Self::HEADER_LEN + usize::from(frame.payload_length()) <= frame.frame_len()
    }
}

impl ParentMatch<EthernetHeader> for Ipv6Header {
    fn parent_match(parent: &FrameRef<'_, EthernetHeader>) -> bool {
        parent.ethertype() == ETHERTYPE_IPV6
    }
}
