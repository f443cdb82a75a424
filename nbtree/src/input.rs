//! Reading NBT primitives from any [`Read`].
//!
//! Every read asks for an exact number of bytes. Getting fewer is an error
//! that says what was being read and how much of it arrived. The reader is
//! not rewound after a failure; the input should be abandoned.

use std::io::{self, Read};

use crate::{
    endian::{from_wire, WireInt},
    error::{Error, Result},
    NbtString, Tag,
};

// Arrays are read through a buffer of this size rather than all at once. It
// must be a multiple of the widest element.
const SCRATCH_SIZE: usize = 8 * 1024;

/// Primitive reader over some input. Does not do decompression.
pub struct Reader<R: Read> {
    reader: R,
}

impl<R: Read> Reader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Gets a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Gets a mutable reference to the underlying reader.
    pub fn get_mut(&mut self) -> &mut R {
        &mut self.reader
    }

    /// Consumes this reader, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Read a tag type byte without checking that it is a tag.
    pub fn consume_tag_byte(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf, "type")?;
        Ok(buf[0])
    }

    /// Read a tag type byte, rejecting bytes that are not tags.
    pub fn consume_tag(&mut self) -> Result<Tag> {
        let tag = self.consume_tag_byte()?;
        Tag::try_from(tag).map_err(|_| Error::invalid_tag(tag))
    }

    /// Read the unsigned length that prefixes strings.
    pub fn consume_strlen(&mut self) -> Result<u16> {
        self.consume_scalar("string length")
    }

    pub fn consume_i8(&mut self) -> Result<i8> {
        self.consume_scalar("byte")
    }

    pub fn consume_i16(&mut self) -> Result<i16> {
        self.consume_scalar("short")
    }

    pub fn consume_i32(&mut self) -> Result<i32> {
        self.consume_scalar("int")
    }

    pub fn consume_i64(&mut self) -> Result<i64> {
        self.consume_scalar("long")
    }

    pub fn consume_f32(&mut self) -> Result<f32> {
        self.consume_scalar("float")
    }

    pub fn consume_f64(&mut self) -> Result<f64> {
        self.consume_scalar("double")
    }

    /// Read a length prefixed string. The result carries a NUL terminator
    /// after the string's bytes.
    pub fn consume_string(&mut self) -> Result<NbtString> {
        let len = self.consume_strlen()? as usize;

        let mut buf = Vec::new();
        buf.try_reserve_exact(len + 1)
            .map_err(|_| Error::out_of_memory("string", len + 1))?;
        buf.resize(len, 0);
        self.fill(&mut buf, "string")?;
        buf.push(0);

        Ok(NbtString::from_terminated(buf))
    }

    /// Read `count` numbers of width `T::WIDTH` into a fresh buffer.
    ///
    /// The buffer grows one scratch chunk at a time, and only after that
    /// chunk has been read, so memory use follows the input actually present
    /// rather than the count it claims. Growth is fallible and reported as
    /// [`OutOfMemory`][`crate::error::ErrorKind::OutOfMemory`] rather than
    /// aborting.
    pub fn consume_array<T: WireInt>(&mut self, count: usize, what: &str) -> Result<Vec<T>> {
        let total = count
            .checked_mul(T::WIDTH)
            .ok_or_else(|| Error::overflowing_count(what, count))?;

        let mut data: Vec<T> = Vec::new();
        let mut scratch = [0u8; SCRATCH_SIZE];
        let per_chunk = SCRATCH_SIZE / T::WIDTH;

        while data.len() < count {
            let n = (count - data.len()).min(per_chunk);
            let bytes = &mut scratch[..n * T::WIDTH];
            let got = self.read_up_to(bytes, what)?;
            if got < bytes.len() {
                return Err(Error::partial_read(what, data.len() * T::WIDTH + got, total));
            }

            data.try_reserve(n)
                .map_err(|_| Error::out_of_memory(what, total))?;
            let start = data.len();
            data.resize(start + n, T::default());

            let chunk = &mut data[start..];
            T::from_native_into(bytes, chunk);
            for v in chunk.iter_mut() {
                *v = from_wire(*v);
            }
        }

        Ok(data)
    }

    /// Read exactly `buf.len()` bytes.
    pub fn consume_bytes(&mut self, buf: &mut [u8], what: &str) -> Result<()> {
        self.fill(buf, what)
    }

    fn consume_scalar<T: WireInt>(&mut self, what: &str) -> Result<T> {
        let mut buf = [0u8; 8];
        let bytes = &mut buf[..T::WIDTH];
        self.fill(bytes, what)?;
        Ok(from_wire(T::from_native(bytes)))
    }

    fn fill(&mut self, buf: &mut [u8], what: &str) -> Result<()> {
        let got = self.read_up_to(buf, what)?;
        if got < buf.len() {
            return Err(Error::partial_read(what, got, buf.len()));
        }
        Ok(())
    }

    /// Read until `buf` is full or the input ends, returning how many bytes
    /// were read.
    fn read_up_to(&mut self, buf: &mut [u8], what: &str) -> Result<usize> {
        let mut got = 0;
        while got < buf.len() {
            match self.reader.read(&mut buf[got..]) {
                Ok(0) => break,
                Ok(n) => got += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::read_failed(what, e)),
            }
        }
        Ok(got)
    }
}
