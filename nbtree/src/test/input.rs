use std::io::{self, Read};

use crate::{error::ErrorKind, input::Reader, test::builder::Builder, Tag};

#[test]
fn scalars_in_order() {
    let payload = Builder::new()
        .byte_payload(-1)
        .short_payload(-300)
        .int_payload(70_000)
        .long_payload(-5_000_000_000)
        .float_payload(0.25)
        .double_payload(-8.5)
        .build();

    let mut r = Reader::new(payload.as_slice());
    assert_eq!(r.consume_i8().unwrap(), -1);
    assert_eq!(r.consume_i16().unwrap(), -300);
    assert_eq!(r.consume_i32().unwrap(), 70_000);
    assert_eq!(r.consume_i64().unwrap(), -5_000_000_000);
    assert_eq!(r.consume_f32().unwrap(), 0.25);
    assert_eq!(r.consume_f64().unwrap(), -8.5);
    assert!(r.get_ref().is_empty());
}

#[test]
fn strlen_is_unsigned() {
    let mut r = Reader::new(&[0xff, 0xfe][..]);
    assert_eq!(r.consume_strlen().unwrap(), 0xfffe);
}

#[test]
fn tag_bytes() {
    let mut r = Reader::new(&[10, 13][..]);
    assert_eq!(r.consume_tag().unwrap(), Tag::Compound);
    assert_eq!(r.consume_tag().unwrap_err().kind(), ErrorKind::InvalidTag);

    let mut r = Reader::new(&[200][..]);
    assert_eq!(r.consume_tag_byte().unwrap(), 200);
}

#[test]
fn short_scalar_read() {
    let mut r = Reader::new(&[0, 0, 1][..]);
    let e = r.consume_i32().unwrap_err();
    assert_eq!(e.kind(), ErrorKind::UnexpectedEof);
    assert_eq!(e.message(), "Partial read on NBT int: 3 < 4");
}

#[test]
fn string_has_terminator() {
    let payload = Builder::new().string_payload("abc").build();
    let mut r = Reader::new(payload.as_slice());
    let s = r.consume_string().unwrap();

    assert_eq!(s.len(), 3);
    assert_eq!(s.as_bytes(), b"abc");
    assert_eq!(s.as_bytes_with_nul(), b"abc\0");
}

#[test]
fn empty_string() {
    let mut r = Reader::new(&[0, 0][..]);
    let s = r.consume_string().unwrap();
    assert!(s.is_empty());
    assert_eq!(s.as_bytes_with_nul(), b"\0");
}

#[test]
fn array_of_each_width() {
    let payload = Builder::new()
        .byte_array_payload(&[1, -1])
        .int_array_payload(&[7, -7])
        .long_array_payload(&[i64::MAX, i64::MIN])
        .build();

    let mut r = Reader::new(payload.as_slice());
    assert_eq!(r.consume_array::<i8>(2, "byte array").unwrap(), [1, -1]);
    assert_eq!(r.consume_array::<i32>(2, "int array").unwrap(), [7, -7]);
    assert_eq!(
        r.consume_array::<i64>(2, "long array").unwrap(),
        [i64::MAX, i64::MIN]
    );
}

#[test]
fn raw_bytes() {
    let mut r = Reader::new(&[1, 2, 3][..]);
    let mut buf = [0u8; 2];
    r.consume_bytes(&mut buf, "block").unwrap();
    assert_eq!(buf, [1, 2]);

    let e = r.consume_bytes(&mut buf, "block").unwrap_err();
    assert_eq!(e.message(), "Partial read on NBT block: 1 < 2");
}

/// Hands out one byte per read call, and is interrupted every other call.
struct Trickle<'a> {
    data: &'a [u8],
    interrupt: bool,
}

impl Read for Trickle<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.interrupt = !self.interrupt;
        if self.interrupt {
            return Err(io::Error::new(io::ErrorKind::Interrupted, "again"));
        }
        if self.data.is_empty() || buf.is_empty() {
            return Ok(0);
        }
        buf[0] = self.data[0];
        self.data = &self.data[1..];
        Ok(1)
    }
}

#[test]
fn partial_reads_are_stitched_together() {
    let payload = Builder::new().long_payload(0x0102_0304_0506_0708).build();
    let mut r = Reader::new(Trickle {
        data: &payload,
        interrupt: false,
    });
    assert_eq!(r.consume_i64().unwrap(), 0x0102_0304_0506_0708);
}

struct Broken;

impl Read for Broken {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::Other, "disk on fire"))
    }
}

#[test]
fn source_errors_are_io() {
    let mut r = Reader::new(Broken);
    let e = r.consume_i16().unwrap_err();
    assert_eq!(e.kind(), ErrorKind::Io);
    assert!(e.message().contains("disk on fire"));
}

#[test]
fn huge_count_with_no_payload_is_eof() {
    let mut r = Reader::new(&[][..]);
    let e = r.consume_array::<i32>(0x3fff_ffff, "int array").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::UnexpectedEof);
    assert_eq!(e.message(), "Partial read on NBT int array: 0 < 4294967292");
}

#[test]
fn huge_count_with_some_payload_reports_progress() {
    let payload = Builder::new().int_array_payload(&[5; 3000]).build();
    let mut r = Reader::new(payload.as_slice());
    let e = r.consume_array::<i32>(1_000_000, "int array").unwrap_err();
    assert_eq!(e.message(), "Partial read on NBT int array: 12000 < 4000000");
}

#[test]
fn overflowing_count_is_an_error() {
    let mut r = Reader::new(&[][..]);
    let e = r.consume_array::<i64>(usize::MAX / 4, "long array").unwrap_err();
    assert_eq!(e.kind(), ErrorKind::TooLarge);
}

#[test]
fn empty_array_reads_nothing() {
    let mut r = Reader::new(&[1, 2][..]);
    assert!(r.consume_array::<i16>(0, "short array").unwrap().is_empty());
    assert_eq!(r.consume_i16().unwrap(), 0x0102);
}
