use regdecode_core::{ByteOrder, PayloadDecoder};

const ORDERS: [ByteOrder; 2] = [ByteOrder::Big, ByteOrder::Little];

fn encode_u16(value: u16, order: ByteOrder) -> Vec<u8> {
    match order {
        ByteOrder::Big => value.to_be_bytes().to_vec(),
        ByteOrder::Little => value.to_le_bytes().to_vec(),
    }
}

fn encode_u32(value: u32, order: ByteOrder) -> Vec<u8> {
    match order {
        ByteOrder::Big => value.to_be_bytes().to_vec(),
        ByteOrder::Little => value.to_le_bytes().to_vec(),
    }
}

fn encode_u64(value: u64, order: ByteOrder) -> Vec<u8> {
    match order {
        ByteOrder::Big => value.to_be_bytes().to_vec(),
        ByteOrder::Little => value.to_le_bytes().to_vec(),
    }
}

fn encode_i16(value: i16, order: ByteOrder) -> Vec<u8> {
    match order {
        ByteOrder::Big => value.to_be_bytes().to_vec(),
        ByteOrder::Little => value.to_le_bytes().to_vec(),
    }
}

fn encode_i32(value: i32, order: ByteOrder) -> Vec<u8> {
    match order {
        ByteOrder::Big => value.to_be_bytes().to_vec(),
        ByteOrder::Little => value.to_le_bytes().to_vec(),
    }
}

fn encode_i64(value: i64, order: ByteOrder) -> Vec<u8> {
    match order {
        ByteOrder::Big => value.to_be_bytes().to_vec(),
        ByteOrder::Little => value.to_le_bytes().to_vec(),
    }
}

fn encode_f32(value: f32, order: ByteOrder) -> Vec<u8> {
    match order {
        ByteOrder::Big => value.to_be_bytes().to_vec(),
        ByteOrder::Little => value.to_le_bytes().to_vec(),
    }
}

fn encode_f64(value: f64, order: ByteOrder) -> Vec<u8> {
    match order {
        ByteOrder::Big => value.to_be_bytes().to_vec(),
        ByteOrder::Little => value.to_le_bytes().to_vec(),
    }
}

#[test]
fn unsigned_round_trip_across_ranges_and_orders() {
    for order in ORDERS {
        for value in [0u8, 1, 0x7f, 0x80, u8::MAX] {
            let mut decoder = PayloadDecoder::new(vec![value], order);
            assert_eq!(decoder.decode_8bit_uint().unwrap(), value);
        }
        for value in [0u16, 1, 0x0102, 0x8000, u16::MAX] {
            let mut decoder = PayloadDecoder::new(encode_u16(value, order), order);
            assert_eq!(decoder.decode_16bit_uint().unwrap(), value);
        }
        for value in [0u32, 1, 0xdead_beef, u32::MAX] {
            let mut decoder = PayloadDecoder::new(encode_u32(value, order), order);
            assert_eq!(decoder.decode_32bit_uint().unwrap(), value);
        }
        for value in [0u64, 1, 0x0123_4567_89ab_cdef, u64::MAX] {
            let mut decoder = PayloadDecoder::new(encode_u64(value, order), order);
            assert_eq!(decoder.decode_64bit_uint().unwrap(), value);
        }
    }
}

#[test]
fn signed_round_trip_across_ranges_and_orders() {
    for order in ORDERS {
        for value in [i8::MIN, -1, 0, 1, i8::MAX] {
            let mut decoder = PayloadDecoder::new(value.to_be_bytes().to_vec(), order);
            assert_eq!(decoder.decode_8bit_int().unwrap(), value);
        }
        for value in [i16::MIN, -1, 0, 1, i16::MAX] {
            let mut decoder = PayloadDecoder::new(encode_i16(value, order), order);
            assert_eq!(decoder.decode_16bit_int().unwrap(), value);
        }
        for value in [i32::MIN, -1, 0, 1, i32::MAX] {
            let mut decoder = PayloadDecoder::new(encode_i32(value, order), order);
            assert_eq!(decoder.decode_32bit_int().unwrap(), value);
        }
        for value in [i64::MIN, -1, 0, 1, i64::MAX] {
            let mut decoder = PayloadDecoder::new(encode_i64(value, order), order);
            assert_eq!(decoder.decode_64bit_int().unwrap(), value);
        }
    }
}

#[test]
fn float_round_trip_including_ieee_specials() {
    for order in ORDERS {
        for value in [0.0f32, 1.5, -2.25, f32::MIN, f32::MAX, f32::INFINITY, f32::NEG_INFINITY] {
            let mut decoder = PayloadDecoder::new(encode_f32(value, order), order);
            assert_eq!(decoder.decode_32bit_float().unwrap(), value);
        }
        for value in [0.0f64, 1.5, -2.25, f64::MIN, f64::MAX, f64::INFINITY, f64::NEG_INFINITY] {
            let mut decoder = PayloadDecoder::new(encode_f64(value, order), order);
            assert_eq!(decoder.decode_64bit_float().unwrap(), value);
        }

        let mut decoder = PayloadDecoder::new(encode_f32(f32::NAN, order), order);
        assert!(decoder.decode_32bit_float().unwrap().is_nan());
        let mut decoder = PayloadDecoder::new(encode_f64(f64::NAN, order), order);
        assert!(decoder.decode_64bit_float().unwrap().is_nan());

        let mut decoder = PayloadDecoder::new(encode_f32(-0.0, order), order);
        let zero = decoder.decode_32bit_float().unwrap();
        assert_eq!(zero.to_bits(), (-0.0f32).to_bits());
        let mut decoder = PayloadDecoder::new(encode_f64(-0.0, order), order);
        let zero = decoder.decode_64bit_float().unwrap();
        assert_eq!(zero.to_bits(), (-0.0f64).to_bits());
    }
}

#[test]
fn alias_equivalence_on_shared_buffers() {
    for order in ORDERS {
        let payload = encode_u32(0xfeed_face, order);
        let mut decoder = PayloadDecoder::new(payload, order);
        let uint = decoder.decode_32bit_uint().unwrap();
        decoder.reset();
        assert_eq!(decoder.decode_32bit_ulong().unwrap(), uint);

        let payload = encode_i32(i32::MIN + 1, order);
        let mut decoder = PayloadDecoder::new(payload, order);
        let int = decoder.decode_32bit_int().unwrap();
        decoder.reset();
        assert_eq!(decoder.decode_32bit_long().unwrap(), int);
    }
}

#[test]
fn sequential_reads_cover_the_buffer_without_gap_or_overlap() {
    let mut payload = Vec::new();
    payload.push(0x11u8);
    payload.extend_from_slice(&0x2222u16.to_be_bytes());
    payload.extend_from_slice(&0x3333_3333u32.to_be_bytes());
    payload.extend_from_slice(&0x4444_4444_4444_4444u64.to_be_bytes());
    payload.extend_from_slice(b"tail");

    let mut decoder = PayloadDecoder::new(payload, ByteOrder::Big);
    assert_eq!(decoder.decode_8bit_uint().unwrap(), 0x11);
    assert_eq!(decoder.decode_16bit_uint().unwrap(), 0x2222);
    assert_eq!(decoder.decode_32bit_uint().unwrap(), 0x3333_3333);
    assert_eq!(decoder.decode_64bit_uint().unwrap(), 0x4444_4444_4444_4444);
    assert_eq!(decoder.decode_string(4).unwrap(), b"tail");
    assert_eq!(decoder.remaining(), 0);
}

#[test]
fn replay_after_reset_matches_the_first_pass() {
    let mut decoder = PayloadDecoder::from_registers(&[0x0102, 0x0304, 0x0506], ByteOrder::Little);
    let first: Vec<u16> = (0..3).map(|_| decoder.decode_16bit_uint().unwrap()).collect();
    decoder.reset();
    let second: Vec<u16> = (0..3).map(|_| decoder.decode_16bit_uint().unwrap()).collect();
    assert_eq!(first, second);
    assert_eq!(first, vec![0x0102, 0x0304, 0x0506]);
}

#[test]
fn coils_round_trip_through_bits() {
    let coils = [
        true, false, true, false, false, false, false, false, true, true, false, false, false,
        false, false, false,
    ];
    let mut decoder = PayloadDecoder::from_coils(&coils, ByteOrder::Big);
    let first = decoder.decode_bits().unwrap();
    let second = decoder.decode_bits().unwrap();
    assert_eq!(&first[..], &coils[..8]);
    assert_eq!(&second[..], &coils[8..]);
}
