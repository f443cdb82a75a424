//! nbtree decodes NBT data from *Minecraft: Java Edition* into an owned tree
//! of named, typed values. This format is used by the game to store things
//! such as `level.dat`, player data and structure files.
//!
//! * For the decoder itself and its options, see [`de`].
//! * For the tree types see [`Document`], [`Compound`], [`List`] and
//!   [`Value`].
//! * For gzip and zlib wrapped input see [`compression`].
//! * For explicit disposal of trees see [`release`].
//!
//! The tree keeps everything the binary format carries: compound entries stay
//! in the order they were read (duplicate names included), list element types
//! are kept even for empty lists, and strings keep their original bytes.
//!
//! # Quick example
//!
//! ```no_run
//! use nbtree::compression::from_compressed_reader;
//! use nbtree::Value;
//! use std::io::BufReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = std::fs::File::open("level.dat")?;
//! let doc = from_compressed_reader(BufReader::new(file))?;
//!
//! if let Some(Value::Compound(data)) = doc.root.get("Data") {
//!     if let Some(Value::Int(version)) = data.get("DataVersion") {
//!         println!("data version: {}", version);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Decoding either produces a whole [`Document`] or an [`error::Error`]. Any
//! partially decoded structure is released before the error reaches the
//! caller.

use std::convert::TryFrom;
use std::fmt;

pub mod compression;
pub mod de;
pub mod endian;
pub mod error;
pub mod input;
pub mod release;

mod arrays;
mod value;

pub use arrays::*;
pub use de::{from_bytes, from_bytes_with_opts, from_reader, from_reader_with_opts, DeOpts};
pub use value::*;

#[cfg(test)]
mod test;

/// The type byte that precedes every NBT payload.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[repr(u8)]
pub enum Tag {
    /// Terminates a compound. Never carries a value.
    End = 0,
    Byte = 1,
    Short = 2,
    Int = 3,
    Long = 4,
    Float = 5,
    Double = 6,
    /// Signed 32 bit count, then that many bytes.
    ByteArray = 7,
    /// Unsigned 16 bit byte count, then modified UTF-8.
    String = 8,
    /// Element type byte and signed 32 bit count, then bare payloads.
    List = 9,
    /// Named entries up to an [`End`][`Tag::End`] byte.
    Compound = 10,
    /// Signed 32 bit count, then that many big-endian `i32`s.
    IntArray = 11,
    /// Signed 32 bit count, then that many big-endian `i64`s.
    LongArray = 12,
}

// Written out by hand rather than derived, the tags will very rarely change.
impl TryFrom<u8> for Tag {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, ()> {
        use Tag::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag as u8
    }
}

impl Tag {
    /// The name used for this tag in the NBT documentation, eg `TAG_INT`.
    pub fn name(self) -> &'static str {
        match self {
            Tag::End => "TAG_END",
            Tag::Byte => "TAG_BYTE",
            Tag::Short => "TAG_SHORT",
            Tag::Int => "TAG_INT",
            Tag::Long => "TAG_LONG",
            Tag::Float => "TAG_FLOAT",
            Tag::Double => "TAG_DOUBLE",
            Tag::ByteArray => "TAG_BYTE_ARRAY",
            Tag::String => "TAG_STRING",
            Tag::List => "TAG_LIST",
            Tag::Compound => "TAG_COMPOUND",
            Tag::IntArray => "TAG_INT_ARRAY",
            Tag::LongArray => "TAG_LONG_ARRAY",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
