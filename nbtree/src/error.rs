//! Contains the Error and Result type used by the decoder.
use std::fmt::Display;

use crate::Tag;

/// An error that stopped a decode. Every error is fatal to the decode that
/// produced it: nothing of the partially decoded tree survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input ran out part way through some NBT value.
    UnexpectedEof,

    /// The underlying reader failed for a reason other than running out of
    /// input. This includes corrupt compressed data.
    Io,

    /// The document did not start with a compound tag.
    InvalidRoot,

    /// A byte was found where a tag was expected that is not a valid tag for
    /// that position.
    InvalidTag,

    /// An array or list declared a negative length.
    NegativeLength,

    /// A list declared entries of type End.
    EndTypedList,

    /// An array declared a size that overflows or is beyond the configured
    /// allocation limit.
    TooLarge,

    /// Memory for a value could not be allocated.
    OutOfMemory,

    /// Lists and compounds were nested deeper than allowed.
    DepthLimit,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human readable description of what went wrong.
    pub fn message(&self) -> &str {
        &self.msg
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEof)
    }

    /// True if the input itself was malformed, as opposed to being cut short,
    /// unreadable, or too large to hold.
    pub fn is_format(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::InvalidRoot
                | ErrorKind::InvalidTag
                | ErrorKind::NegativeLength
                | ErrorKind::EndTypedList
                | ErrorKind::DepthLimit
        )
    }

    fn new(kind: ErrorKind, msg: String) -> Self {
        Self { msg, kind }
    }

    pub(crate) fn read_failed(what: &str, e: std::io::Error) -> Error {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self::new(
                ErrorKind::UnexpectedEof,
                format!("Failed to read NBT {}: unexpected end of input", what),
            ),
            _ => Self::new(
                ErrorKind::Io,
                format!("Failed to read NBT {}: {}", what, e),
            ),
        }
    }

    pub(crate) fn partial_read(what: &str, got: usize, wanted: usize) -> Error {
        Self::new(
            ErrorKind::UnexpectedEof,
            format!("Partial read on NBT {}: {} < {}", what, got, wanted),
        )
    }

    pub(crate) fn stream(e: std::io::Error) -> Error {
        Self::read_failed("stream", e)
    }

    pub(crate) fn invalid_root(tag: u8) -> Error {
        let hint = if tag == 0x1f {
            " (this looks like gzip data, decompress it first)"
        } else {
            ""
        };
        Self::new(
            ErrorKind::InvalidRoot,
            format!(
                "Root tag is not TAG_COMPOUND ({:#04x}): NBT stream must begin with a named compound{}",
                tag, hint
            ),
        )
    }

    pub(crate) fn invalid_tag(tag: u8) -> Error {
        Self::new(
            ErrorKind::InvalidTag,
            format!("invalid NBT tag value: {}", tag),
        )
    }

    pub(crate) fn end_value() -> Error {
        Self::new(
            ErrorKind::InvalidTag,
            "TAG_END does not carry a value".to_owned(),
        )
    }

    pub(crate) fn negative_length(what: &str, len: i32) -> Error {
        Self::new(
            ErrorKind::NegativeLength,
            format!("NBT {} has negative length: {}", what, len),
        )
    }

    pub(crate) fn end_typed_list(len: i32) -> Error {
        Self::new(
            ErrorKind::EndTypedList,
            format!(
                "NBT list has {} (> 0) value(s) of type {}",
                len,
                Tag::End
            ),
        )
    }

    pub(crate) fn too_large(what: &str, len: i32, limit: usize) -> Error {
        Self::new(
            ErrorKind::TooLarge,
            format!(
                "NBT {} of length {} does not fit in {} bytes",
                what, len, limit
            ),
        )
    }

    pub(crate) fn overflowing_count(what: &str, count: usize) -> Error {
        Self::new(
            ErrorKind::TooLarge,
            format!("NBT {} of {} elements overflows the address space", what, count),
        )
    }

    pub(crate) fn out_of_memory(what: &str, bytes: usize) -> Error {
        Self::new(
            ErrorKind::OutOfMemory,
            format!("Unable to allocate {} bytes for NBT {}", bytes, what),
        )
    }

    pub(crate) fn depth_limit(limit: usize) -> Error {
        Self::new(
            ErrorKind::DepthLimit,
            format!("NBT nested deeper than {} lists and compounds", limit),
        )
    }
}
