use super::layout::IcmpHeader;
use crate::frame::{CheckFrame, Frame, FrameRef, ParentMatch};
use crate::protocols::common::checksum::InternetChecksum;
use crate::protocols::ipv4::Ipv4Header;
use crate::protocols::ipv4::layout::PROTOCOL_ICMP;

impl Frame for IcmpHeader {
    const NAME: &'static str = "icmp";
}

impl CheckFrame for IcmpHeader {
    fn check_frame(frame: &FrameRef<'_, Self>) -> bool {
        let mut sum = InternetChecksum::new();
        sum.add(frame.header_bytes()).add(frame.body());
        sum.finish() == 0
    }
}

impl ParentMatch<Ipv4Header> for IcmpHeader {
    fn parent_match(parent: &FrameRef<'_, Ipv4Header>) -> bool {
        parent.protocol() == PROTOCOL_ICMP && !parent.is_fragment()
    }
}
