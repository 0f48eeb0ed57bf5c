use std::ops::Range;

use super::layout::UdpHeader;
use crate::frame::{CheckFrame, Frame, FrameRef, ParentMatch};
use crate::protocols::ipv4::Ipv4Header;
use crate::protocols::ipv4::layout::PROTOCOL_UDP;
use crate::protocols::ipv6::Ipv6Header;
use crate::protocols::ipv6::layout::NEXT_HEADER_UDP;

impl Frame for UdpHeader {
    const NAME: &'static str = "udp";

    fn payload_bounds(&self, _frame_len: usize) -> Range<usize> {
        Self::HEADER_LEN..usize::from(self.length())
    }
}

impl CheckFrame for UdpHeader {
    fn check_frame(frame: &FrameRef<'_, Self>) -> bool {
        let length = usize::from(frame.length());
        Self::HEADER_LEN <= length && length <= frame.frame_len()
    }
}

impl ParentMatch<Ipv4Header> for UdpHeader {
    fn parent_match(parent: &FrameRef<'_, Ipv4Header>) -> bool {
        parent.protocol() == PROTOCOL_UDP && !parent.is_fragment()
    }
}

impl ParentMatch<Ipv6Header> for UdpHeader {
    fn parent_match(parent: &FrameRef<'_, Ipv6Header>) -> bool {
        parent.next_header() == NEXT_HEADER_UDP
    }
}
