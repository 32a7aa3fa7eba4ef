/// CRC-32 of the UTF-8 bytes of `s` in its JAMCRC form: the IEEE 802.3
/// checksum with every bit of the result inverted.
pub fn crc32(s: &str) -> u32 {
    !crc32fast::hash(s.as_bytes())
}
