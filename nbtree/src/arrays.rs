use std::ops::Deref;

use serde::{Serialize, Serializer};

macro_rules! nbt_array {
    ($(#[$doc:meta])* $name:ident, $elem:ty) => {
        $(#[$doc])*
        ///
        /// An empty array holds no buffer at all; a buffer is only allocated
        /// for a non-zero length.
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            /// Take the elements out of the array.
            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = [$elem];

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.collect_seq(self.data.iter())
            }
        }
    };
}

nbt_array!(
    /// NBT ByteArray, the payload of a [`Tag::ByteArray`][`crate::Tag::ByteArray`].
    ByteArray,
    i8
);

nbt_array!(
    /// NBT IntArray, the payload of a [`Tag::IntArray`][`crate::Tag::IntArray`].
    IntArray,
    i32
);

nbt_array!(
    /// NBT LongArray, the payload of a [`Tag::LongArray`][`crate::Tag::LongArray`].
    LongArray,
    i64
);
