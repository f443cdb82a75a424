use crate::endian::{from_wire, host_order, probe, to_wire, HostOrder};

#[test]
fn probe_accepts_only_little_or_big() {
    assert_eq!(probe(0x01), Some(HostOrder::Little));
    assert_eq!(probe(0x02), Some(HostOrder::Big));
    assert_eq!(probe(0x99), None);
    assert_eq!(probe(0x98), None);
}

#[test]
fn host_order_matches_target() {
    let expected = if cfg!(target_endian = "little") {
        HostOrder::Little
    } else {
        HostOrder::Big
    };
    assert_eq!(host_order(), expected);
}

#[test]
fn from_wire_reads_big_endian() {
    let bytes = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];

    assert_eq!(
        from_wire(i16::from_ne_bytes([bytes[0], bytes[1]])),
        i16::from_be_bytes([bytes[0], bytes[1]])
    );
    assert_eq!(
        from_wire(u16::from_ne_bytes([0xff, 0x00])),
        0xff00
    );
    assert_eq!(
        from_wire(i32::from_ne_bytes([0xff, 0xff, 0xff, 0xfe])),
        -2
    );
    assert_eq!(from_wire(i64::from_ne_bytes(bytes)), i64::from_be_bytes(bytes));
    assert_eq!(from_wire(u64::from_ne_bytes(bytes)), u64::from_be_bytes(bytes));
}

#[test]
fn bytes_are_never_swapped() {
    assert_eq!(from_wire(-5i8), -5);
    assert_eq!(to_wire(127i8), 127);
}

#[test]
fn wire_conversion_is_an_involution() {
    for x in [0i32, 1, -1, 0x0102_0304, i32::MIN, i32::MAX] {
        assert_eq!(from_wire(to_wire(x)), x);
    }
    for x in [0i64, 1, -1, 0x0102_0304_0506_0708, i64::MIN] {
        assert_eq!(to_wire(from_wire(x)), x);
    }
    assert_eq!(from_wire(to_wire(0xbeefu16)), 0xbeef);
    assert_eq!(from_wire(to_wire(0xdead_beefu32)), 0xdead_beef);
}

#[test]
fn floats_swap_like_integers() {
    let bytes = 1.5f32.to_be_bytes();
    assert_eq!(from_wire(f32::from_ne_bytes(bytes)), 1.5);
    assert_eq!(
        from_wire(f32::from_ne_bytes(bytes)).to_bits(),
        from_wire(u32::from_ne_bytes(bytes))
    );

    let bytes = (-0.1f64).to_be_bytes();
    assert_eq!(from_wire(f64::from_ne_bytes(bytes)), -0.1);
    assert_eq!(
        from_wire(f64::from_ne_bytes(bytes)).to_bits(),
        from_wire(u64::from_ne_bytes(bytes))
    );
}

#[test]
fn nan_payload_survives() {
    let bits = 0x7fc0_0001u32;
    let bytes = bits.to_be_bytes();
    assert_eq!(from_wire(f32::from_ne_bytes(bytes)).to_bits(), bits);
}
