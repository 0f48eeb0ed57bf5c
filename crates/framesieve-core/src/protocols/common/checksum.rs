/// Incremental RFC 1071 internet checksum.
///
/// Bytes may be fed in several slices; an odd trailing byte is carried
/// into the next call so the result matches a single contiguous pass.
///
/// # Examples
/// ```
/// use framesieve_core::protocols::InternetChecksum;
///
/// let mut sum = InternetChecksum::new();
/// sum.add(&[0x45, 0x00, 0x00]).add(&[0x1c]);
/// assert_eq!(sum.finish(), framesieve_core::protocols::internet_checksum(&[0x45, 0x00, 0x00, 0x1c]));
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct InternetChecksum {
    sum: u64,
    pending: Option<u8>,
}

impl InternetChecksum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, bytes: &[u8]) -> &mut Self {
        let mut bytes = bytes;
        if let Some(high) = self.pending.take() {
            match bytes.split_first() {
                Some((&low, rest)) => {
                    self.add_word(high, low);
                    bytes = rest;
                }
                None => {
                    self.pending = Some(high);
                    return self;
                }
            }
        }

        let mut words = bytes.chunks_exact(2);
        for word in &mut words {
            self.add_word(word[0], word[1]);
        }
        if let [last] = words.remainder() {
            self.pending = Some(*last);
        }
        self
    }

    /// One's complement of the folded sum.
    ///
    /// Over data that already contains a correct checksum field this is 0.
    pub fn finish(&self) -> u16 {
        let mut sum = self.sum;
        if let Some(high) = self.pending {
            sum += u64::from(u16::from_be_bytes([high, 0]));
        }
        while sum > 0xFFFF {
            sum = (sum & 0xFFFF) + (sum >> 16);
        }
        !(sum as u16)
    }

    fn add_word(&mut self, high: u8, low: u8) {
        self.sum += u64::from(u16::from_be_bytes([high, low]));
    }
}

/// Checksum of one contiguous byte range.
pub fn internet_checksum(bytes: &[u8]) -> u16 {
    InternetChecksum::new().add(bytes).finish()
}

#[cfg(test)]
mod tests {
    use super::{InternetChecksum, internet_checksum};

    // RFC 1071 section 3 example.
    const SAMPLE: [u8; 8] = [0x00, 0x01, 0xf2, 0x03, 0xf4, 0xf5, 0xf6, 0xf7];

    #[test]
    fn checksum_matches_rfc_example() {
        assert_eq!(internet_checksum(&SAMPLE), !0xddf2);
    }

    #[test]
    fn checksum_split_at_odd_offset() {
        let mut sum = InternetChecksum::new();
        sum.add(&SAMPLE[..3]).add(&[]).add(&SAMPLE[3..]);
        assert_eq!(sum.finish(), internet_checksum(&SAMPLE));
    }

    #[test]
    fn checksum_pads_odd_length() {
        assert_eq!(internet_checksum(&[0x12]), !0x1200);
    }

    #[test]
    fn checksum_over_valid_data_is_zero() {
        let mut data = SAMPLE.to_vec();
        let value = internet_checksum(&data);
        data.extend_from_slice(&value.to_be_bytes());
        assert_eq!(internet_checksum(&data), 0);
    }
}
