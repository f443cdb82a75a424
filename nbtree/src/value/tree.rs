use std::convert::TryFrom;
use std::mem;

use super::{NbtString, Value};
use crate::{release, Tag};

/// An NBT list: any number of unnamed values that all share one tag.
///
/// The element type is kept as the raw byte from the input. An empty list
/// may declare any element byte at all, including `0` (End) or bytes that are
/// not tags, so [`element_tag`][`List::element_tag`] can be `None`.
///
/// Dropping a list releases its elements through [`release`], without
/// recursing on the call stack.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub(crate) element_type: u8,
    pub(crate) values: Vec<Value>,
}

impl List {
    /// An empty list of the given element tag.
    pub fn new(element_tag: Tag) -> Self {
        Self::empty_of(element_tag.into())
    }

    pub(crate) fn empty_of(element_type: u8) -> Self {
        Self {
            element_type,
            values: Vec::new(),
        }
    }

    /// The element type byte as found in the input.
    pub fn element_type(&self) -> u8 {
        self.element_type
    }

    /// The element tag, if the element type byte is a tag.
    pub fn element_tag(&self) -> Option<Tag> {
        Tag::try_from(self.element_type).ok()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Append a value. The value is handed back if its tag is not the
    /// element tag of this list.
    pub fn push(&mut self, value: Value) -> Result<(), Value> {
        if u8::from(value.tag()) != self.element_type {
            return Err(value);
        }
        self.values.push(value);
        Ok(())
    }

    /// Take the elements out of the list, leaving it empty.
    pub fn take_values(&mut self) -> Vec<Value> {
        mem::take(&mut self.values)
    }
}

impl Drop for List {
    fn drop(&mut self) {
        if !self.values.is_empty() {
            release::release_values(self.take_values());
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// A named value inside a [`Compound`].
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub name: NbtString,
    pub value: Value,
}

impl Entry {
    pub fn new(name: NbtString, value: impl Into<Value>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }

    pub fn tag(&self) -> Tag {
        self.value.tag()
    }
}

/// An NBT compound: named values in the order they were read.
///
/// Names are not required to be unique. Every entry is kept, so a compound
/// with a repeated name holds all of the values under that name, in input
/// order.
///
/// Dropping a compound releases its entries through [`release`], without
/// recursing on the call stack.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    pub(crate) entries: Vec<Entry>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries, counting each repeated name.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The value of the first entry with the given name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|e| e.name == name).map(|e| &e.value)
    }

    /// Values of every entry with the given name, in input order.
    pub fn get_all<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Value> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.name == name)
            .map(|e| &e.value)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Append an entry. Existing entries with the same name are kept.
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Take the entries out of the compound, leaving it empty.
    pub fn take_entries(&mut self) -> Vec<Entry> {
        mem::take(&mut self.entries)
    }
}

impl Drop for Compound {
    fn drop(&mut self) {
        if !self.entries.is_empty() {
            release::release_entries(self.take_entries());
        }
    }
}

impl<'a> IntoIterator for &'a Compound {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A whole decoded NBT document: the name of the root compound and the
/// compound itself.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct Document {
    pub name: NbtString,
    pub root: Compound,
}
