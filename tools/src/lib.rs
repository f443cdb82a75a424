//! Pretty printing of decoded NBT, as used by `nbt-dump`.
//!
//! Each value goes on its own line, indented two spaces per level of
//! nesting:
//!
//! ```text
//! : TAG_COMPOUND
//!   DataVersion: TAG_INT 2975
//!   Pos: TAG_LIST (TAG_DOUBLE, 2)
//!     TAG_DOUBLE 1.5
//!     TAG_DOUBLE -3
//!   Heightmap: TAG_LONG_ARRAY [37] 1, 2, 3, 4, 5, 6, 7, 8, ...
//! ```

use std::io::{self, Write};

use nbtree::{Compound, Document, List, Value};

/// How many elements of an array are shown before it is cut short.
const ARRAY_PREVIEW: usize = 8;

/// Write the whole document, starting with the root compound.
pub fn dump<W: Write>(out: &mut W, doc: &Document) -> io::Result<()> {
    writeln!(out, "{}: TAG_COMPOUND", doc.name)?;
    dump_compound(out, &doc.root, 1)
}

fn dump_compound<W: Write>(out: &mut W, compound: &Compound, depth: usize) -> io::Result<()> {
    for entry in compound {
        write!(out, "{:indent$}{}: ", "", entry.name, indent = depth * 2)?;
        dump_value(out, &entry.value, depth)?;
    }
    Ok(())
}

fn dump_list<W: Write>(out: &mut W, list: &List, depth: usize) -> io::Result<()> {
    for value in list {
        write!(out, "{:indent$}", "", indent = depth * 2)?;
        dump_value(out, value, depth)?;
    }
    Ok(())
}

/// Finish the current line with the value, then write any children below.
fn dump_value<W: Write>(out: &mut W, value: &Value, depth: usize) -> io::Result<()> {
    let tag = value.tag();
    match value {
        Value::Byte(v) => writeln!(out, "{} {}", tag, v),
        Value::Short(v) => writeln!(out, "{} {}", tag, v),
        Value::Int(v) => writeln!(out, "{} {}", tag, v),
        Value::Long(v) => writeln!(out, "{} {}", tag, v),
        Value::Float(v) => writeln!(out, "{} {}", tag, v),
        Value::Double(v) => writeln!(out, "{} {}", tag, v),
        Value::String(s) => writeln!(out, "{} {:?}", tag, s),
        Value::ByteArray(a) => dump_array(out, tag, &a[..]),
        Value::IntArray(a) => dump_array(out, tag, &a[..]),
        Value::LongArray(a) => dump_array(out, tag, &a[..]),
        Value::List(list) => {
            match list.element_tag() {
                Some(element) => writeln!(out, "{} ({}, {})", tag, element, list.len())?,
                None => writeln!(out, "{} ({:#04x}, {})", tag, list.element_type(), list.len())?,
            }
            dump_list(out, list, depth + 1)
        }
        Value::Compound(c) => {
            writeln!(out, "{}", tag)?;
            dump_compound(out, c, depth + 1)
        }
    }
}

fn dump_array<W: Write, T: std::fmt::Display>(
    out: &mut W,
    tag: nbtree::Tag,
    data: &[T],
) -> io::Result<()> {
    write!(out, "{} [{}]", tag, data.len())?;
    for (i, v) in data.iter().take(ARRAY_PREVIEW).enumerate() {
        let sep = if i == 0 { " " } else { ", " };
        write!(out, "{}{}", sep, v)?;
    }
    if data.len() > ARRAY_PREVIEW {
        write!(out, ", ...")?;
    }
    writeln!(out)
}
