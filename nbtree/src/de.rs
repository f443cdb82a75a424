//! Decoding NBT into a [`Document`].
//!
//! The decoder is a straightforward recursive descent over the NBT grammar.
//! It reads from any [`Read`]; if your data is compressed, wrap it in a
//! decompressor first or use [`compression`][`crate::compression`].
//!
//! ```
//! use nbtree::{from_bytes, Value};
//!
//! // A compound named "" holding a single int named "x".
//! let data = [10, 0, 0, 3, 0, 1, b'x', 0, 0, 0, 7, 0];
//! let doc = from_bytes(&data).unwrap();
//!
//! assert_eq!(doc.name, "");
//! assert_eq!(doc.root.get("x"), Some(&Value::Int(7)));
//! ```
//!
//! # Limits
//!
//! NBT lengths come straight from the input, so a few bytes can claim
//! gigabytes of array data or thousands of nested lists. [`DeOpts`] bounds
//! both. The defaults accept anything the game itself would write.
//!
//! ```
//! use nbtree::{from_bytes_with_opts, DeOpts};
//!
//! let opts = DeOpts::new().max_depth(16).max_array_bytes(1024 * 1024);
//! # let data = [10, 0, 0, 0];
//! let doc = from_bytes_with_opts(&data, opts).unwrap();
//! # assert!(doc.root.is_empty());
//! ```
//!
//! # Errors
//!
//! The first problem found stops the decode. Everything decoded so far is
//! released as the error is returned, and the input is left wherever reading
//! stopped.

use std::convert::TryFrom;
use std::io::Read;

use log::debug;

use crate::{
    endian::WireInt,
    error::{Error, Result},
    input::Reader,
    ByteArray, Compound, Document, Entry, IntArray, List, LongArray, Tag, Value,
};

/// Options for customizing decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeOpts {
    /// Maximum number of lists and compounds that may be open at once,
    /// counting the root compound.
    pub max_depth: usize,

    /// Maximum size in bytes of a single byte, int or long array.
    pub max_array_bytes: usize,
}

impl DeOpts {
    pub fn new() -> Self {
        Default::default()
    }

    /// Set the maximum nesting depth. The game uses 512.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Set the maximum size in bytes of any one array.
    pub fn max_array_bytes(mut self, value: usize) -> Self {
        self.max_array_bytes = value;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self {
            max_depth: 512,
            max_array_bytes: u32::MAX as usize,
        }
    }
}

/// Decode a document from a reader with the default options. The reader is
/// read no further than the end of the root compound.
pub fn from_reader<R: Read>(reader: R) -> Result<Document> {
    from_reader_with_opts(reader, DeOpts::default())
}

/// Decode a document from a reader with the given options.
pub fn from_reader_with_opts<R: Read>(reader: R, opts: DeOpts) -> Result<Document> {
    let mut decoder = Decoder::with_opts(reader, opts);
    let result = decoder.read_document();

    match &result {
        Ok(doc) => debug!(
            "decoded NBT document {:?} with {} root entries",
            doc.name,
            doc.root.len()
        ),
        Err(e) => debug!("NBT decode failed: {}", e),
    }

    result
}

/// Decode a document from uncompressed bytes with the default options.
pub fn from_bytes(data: &[u8]) -> Result<Document> {
    from_reader(data)
}

/// Decode a document from uncompressed bytes with the given options.
pub fn from_bytes_with_opts(data: &[u8], opts: DeOpts) -> Result<Document> {
    from_reader_with_opts(data, opts)
}

/// Recursive descent decoder for NBT.
///
/// Most users want [`from_reader`] or [`from_bytes`]. The decoder is useful
/// when the input holds a bare value rather than a document, see
/// [`read_value`][`Decoder::read_value`].
pub struct Decoder<R: Read> {
    input: Reader<R>,
    opts: DeOpts,
    depth: usize,
}

impl<R: Read> Decoder<R> {
    pub fn new(reader: R) -> Self {
        Self::with_opts(reader, DeOpts::default())
    }

    pub fn with_opts(reader: R, opts: DeOpts) -> Self {
        Self {
            input: Reader::new(reader),
            opts,
            depth: 0,
        }
    }

    /// Consumes this decoder, returning the underlying reader.
    pub fn into_inner(self) -> R {
        self.input.into_inner()
    }

    /// Read a whole document: a compound tag, its name, then its payload.
    pub fn read_document(&mut self) -> Result<Document> {
        self.depth = 0;

        let tag = self.input.consume_tag_byte()?;
        if tag != u8::from(Tag::Compound) {
            return Err(Error::invalid_root(tag));
        }

        let name = self.input.consume_string()?;
        let root = self.read_compound()?;

        Ok(Document { name, root })
    }

    /// Read the payload of a value of the given tag. Nesting is counted from
    /// this value, whatever an earlier read left behind.
    pub fn read_value(&mut self, tag: Tag) -> Result<Value> {
        self.depth = 0;
        self.value(tag)
    }

    fn value(&mut self, tag: Tag) -> Result<Value> {
        Ok(match tag {
            Tag::End => return Err(Error::end_value()),
            Tag::Byte => Value::Byte(self.input.consume_i8()?),
            Tag::Short => Value::Short(self.input.consume_i16()?),
            Tag::Int => Value::Int(self.input.consume_i32()?),
            Tag::Long => Value::Long(self.input.consume_i64()?),
            Tag::Float => Value::Float(self.input.consume_f32()?),
            Tag::Double => Value::Double(self.input.consume_f64()?),
            Tag::ByteArray => Value::ByteArray(ByteArray::new(self.read_array("byte array")?)),
            Tag::String => Value::String(self.input.consume_string()?),
            Tag::List => Value::List(self.read_list()?),
            Tag::Compound => Value::Compound(self.read_compound()?),
            Tag::IntArray => Value::IntArray(IntArray::new(self.read_array("int array")?)),
            Tag::LongArray => Value::LongArray(LongArray::new(self.read_array("long array")?)),
        })
    }

    fn read_array<T: WireInt>(&mut self, what: &str) -> Result<Vec<T>> {
        let len = self.input.consume_i32()?;
        let count = usize::try_from(len).map_err(|_| Error::negative_length(what, len))?;

        let limit = self.opts.max_array_bytes;
        match count.checked_mul(T::WIDTH) {
            Some(size) if size <= limit => {}
            _ => return Err(Error::too_large(what, len, limit)),
        }

        self.input.consume_array(count, what)
    }

    fn read_list(&mut self) -> Result<List> {
        self.enter()?;

        let element_type = self.input.consume_tag_byte()?;
        let len = self.input.consume_i32()?;
        let count = usize::try_from(len).map_err(|_| Error::negative_length("list", len))?;

        // Only the elements' payloads are on the wire, so an empty list can
        // claim any type at all.
        let mut list = List::empty_of(element_type);
        if count > 0 {
            let tag = match Tag::try_from(element_type) {
                Ok(Tag::End) => return Err(Error::end_typed_list(len)),
                Ok(tag) => tag,
                Err(_) => return Err(Error::invalid_tag(element_type)),
            };

            for _ in 0..count {
                let value = self.value(tag)?;
                list.values
                    .try_reserve(1)
                    .map_err(|_| Error::out_of_memory("list entry", std::mem::size_of::<Value>()))?;
                list.values.push(value);
            }
        }

        self.leave();
        Ok(list)
    }

    fn read_compound(&mut self) -> Result<Compound> {
        self.enter()?;

        let mut compound = Compound::new();
        loop {
            let tag = self.input.consume_tag()?;
            if tag == Tag::End {
                break;
            }

            let name = self.input.consume_string()?;
            let value = self.value(tag)?;
            compound
                .entries
                .try_reserve(1)
                .map_err(|_| Error::out_of_memory("compound entry", std::mem::size_of::<Entry>()))?;
            compound.entries.push(Entry { name, value });
        }

        self.leave();
        Ok(compound)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::depth_limit(self.opts.max_depth));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}
