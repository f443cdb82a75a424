//! Decoding compressed NBT.
//!
//! NBT files are usually gzip compressed (`level.dat`, player data) or zlib
//! compressed (chunks inside region files), but some tools write them raw.
//! [`from_compressed_reader`] looks at the first bytes of the input to tell
//! which, and decodes accordingly.
//!
//! ```no_run
//! use nbtree::compression::from_compressed_reader;
//! use std::io::BufReader;
//!
//! let file = std::fs::File::open("level.dat").unwrap();
//! let doc = from_compressed_reader(BufReader::new(file)).unwrap();
//! println!("{} entries", doc.root.len());
//! ```

use std::io::BufRead;

use flate2::bufread::{MultiGzDecoder, ZlibDecoder};
use log::debug;

use crate::{
    de::{from_reader_with_opts, DeOpts},
    error::{Error, Result},
    Document,
};

const GZ_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// How a stream of NBT is wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    Gzip,
    Zlib,
    None,
}

/// Work out the compression from the first bytes of a stream. At least two
/// bytes are needed to detect compression; anything shorter is assumed to be
/// uncompressed.
pub fn detect(head: &[u8]) -> Compression {
    match *head {
        [a, b, ..] if [a, b] == GZ_MAGIC => Compression::Gzip,
        [cmf, flg, ..] if is_zlib_header(cmf, flg) => Compression::Zlib,
        _ => Compression::None,
    }
}

// RFC 1950: deflate method, a window of at most 32K, and a header checksum.
fn is_zlib_header(cmf: u8, flg: u8) -> bool {
    cmf & 0x0f == 8 && cmf >> 4 <= 7 && (u16::from(cmf) << 8 | u16::from(flg)) % 31 == 0
}

/// Decode a document that may be gzip or zlib compressed, with the default
/// options.
pub fn from_compressed_reader<R: BufRead>(reader: R) -> Result<Document> {
    from_compressed_reader_with_opts(reader, DeOpts::default())
}

/// Decode a document that may be gzip or zlib compressed.
pub fn from_compressed_reader_with_opts<R: BufRead>(mut reader: R, opts: DeOpts) -> Result<Document> {
    let compression = detect(reader.fill_buf().map_err(Error::stream)?);
    debug!("NBT input compression: {:?}", compression);

    match compression {
        Compression::Gzip => from_reader_with_opts(MultiGzDecoder::new(reader), opts),
        Compression::Zlib => from_reader_with_opts(ZlibDecoder::new(reader), opts),
        Compression::None => from_reader_with_opts(reader, opts),
    }
}
