use super::layout::EthernetHeader;
use crate::frame::{CheckFrame, Frame, FrameRef};

impl Frame for EthernetHeader {
    const NAME: &'static str = "ethernet";
}

impl CheckFrame for EthernetHeader {
    fn check_frame(_frame: &FrameRef<'_, Self>) -> bool {
        true
    }
}
