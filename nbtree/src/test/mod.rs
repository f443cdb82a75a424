use std::convert::TryFrom;

use crate::Tag;

mod endian;
mod input;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(Tag::$tag), $val);
            assert_eq!(Tag::try_from($val as u8), Ok(Tag::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(Tag::try_from(value).is_err())
    }
}

#[test]
fn tag_display_uses_documented_names() {
    assert_eq!(Tag::Compound.to_string(), "TAG_COMPOUND");
    assert_eq!(Tag::LongArray.to_string(), "TAG_LONG_ARRAY");
    assert_eq!(Tag::End.name(), "TAG_END");
}
