/// Unpack one byte into eight flags, least significant bit first.
pub fn unpack_byte(byte: u8) -> [bool; 8] {
    let mut flags = [false; 8];
    for (bit, flag) in flags.iter_mut().enumerate() {
        *flag = (byte >> bit) & 1 != 0;
    }
    flags
}

/// Unpack a byte buffer into flags, eight per byte, least significant bit
/// first within each byte.
pub fn unpack_bits(bytes: &[u8]) -> Vec<bool> {
    let mut flags = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        flags.extend_from_slice(&unpack_byte(byte));
    }
    flags
}

/// Pack flags into bytes, eight per byte, least significant bit first within
/// each byte. A trailing partial byte is zero-padded.
pub fn pack_bits(bits: &[bool]) -> Vec<u8> {
    let mut bytes = vec![0u8; bits.len().div_ceil(8)];
    for (index, &bit) in bits.iter().enumerate() {
        if bit {
            bytes[index / 8] |= 1 << (index % 8);
        }
    }
    bytes
}
