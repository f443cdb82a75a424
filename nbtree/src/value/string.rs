use std::borrow::Cow;
use std::fmt;

/// An NBT string, kept as the exact bytes found in the input.
///
/// Minecraft writes strings in Java's modified UTF-8 (CESU-8 with a two byte
/// encoding of NUL), which is not always valid UTF-8. The bytes are stored
/// untouched and decoded on demand with [`to_str`][`NbtString::to_str`].
///
/// The buffer always carries one trailing NUL byte after the string itself,
/// so it is `len() + 1` bytes long. The NUL is not part of the string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NbtString {
    buf: Box<[u8]>,
}

impl NbtString {
    /// Takes a buffer that already ends in the NUL terminator.
    pub(crate) fn from_terminated(buf: Vec<u8>) -> Self {
        debug_assert_eq!(buf.last(), Some(&0));
        debug_assert!(buf.len() - 1 <= u16::MAX as usize);
        Self {
            buf: buf.into_boxed_slice(),
        }
    }

    /// Create a string from its raw NBT bytes. Returns `None` if the bytes do
    /// not fit in the 16 bit length NBT allows.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() > u16::MAX as usize {
            return None;
        }
        let mut buf = Vec::with_capacity(bytes.len() + 1);
        buf.extend_from_slice(bytes);
        buf.push(0);
        Some(Self::from_terminated(buf))
    }

    /// Encode a Rust string the way Minecraft would. Returns `None` if the
    /// encoded form is longer than NBT allows.
    pub fn encode(s: &str) -> Option<Self> {
        Self::from_bytes(&cesu8::to_java_cesu8(s))
    }

    /// Length of the string in bytes, as declared on the wire.
    pub fn len(&self) -> u16 {
        (self.buf.len() - 1) as u16
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The bytes of the string, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.buf.len() - 1]
    }

    /// The bytes of the string including the trailing NUL.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }

    /// Decode the string. Returns `None` if the bytes are not valid modified
    /// UTF-8.
    pub fn to_str(&self) -> Option<Cow<'_, str>> {
        cesu8::from_java_cesu8(self.as_bytes()).ok()
    }

    /// Decode the string, replacing anything undecodable.
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        match self.to_str() {
            Some(s) => s,
            None => String::from_utf8_lossy(self.as_bytes()),
        }
    }
}

impl Default for NbtString {
    fn default() -> Self {
        Self::from_terminated(vec![0])
    }
}

impl fmt::Debug for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string_lossy())
    }
}

impl fmt::Display for NbtString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl PartialEq<str> for NbtString {
    fn eq(&self, other: &str) -> bool {
        self.to_str().map_or(false, |s| s == other)
    }
}

impl<'a> PartialEq<&'a str> for NbtString {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
