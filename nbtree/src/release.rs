//! Releasing decoded trees.
//!
//! There is one release routine per kind of node, and [`release_value`] picks
//! between them by variant. The `Drop` impls of [`List`] and [`Compound`] go
//! through the same routines, so a tree handed to the caller and a partial
//! tree abandoned part way through a failed decode are torn down by the same
//! code.
//!
//! Release does not recurse. Children of lists and compounds are moved onto
//! an explicit stack before their parent is freed, so a tree nested a million
//! lists deep is as safe to drop as a flat one.
//!
//! Calling these functions is never required; dropping a value does the same
//! thing. They exist to make the disposal point explicit.

use crate::{ByteArray, Compound, Document, Entry, IntArray, List, LongArray, NbtString, Value};

/// Release a value and everything it owns.
pub fn release_value(value: Value) {
    let mut pending = vec![value];
    drain(&mut pending);
}

/// Release a whole document: the root name and the root compound.
pub fn release_document(doc: Document) {
    let Document { name, root } = doc;
    release_string(name);
    release_compound(root);
}

pub fn release_byte_array(array: ByteArray) {
    drop(array);
}

pub fn release_string(string: NbtString) {
    drop(string);
}

pub fn release_int_array(array: IntArray) {
    drop(array);
}

pub fn release_long_array(array: LongArray) {
    drop(array);
}

/// Release every element of the list, then the list itself.
pub fn release_list(mut list: List) {
    let mut pending = list.take_values();
    drop(list);
    drain(&mut pending);
}

/// Release every entry's name and value, then the compound itself.
pub fn release_compound(mut compound: Compound) {
    let entries = compound.take_entries();
    drop(compound);
    release_entries(entries);
}

/// Release a single compound entry, name and value.
pub fn release_entry(entry: Entry) {
    let mut pending = Vec::new();
    detach_entry(entry, &mut pending);
    drain(&mut pending);
}

pub(crate) fn release_values(mut values: Vec<Value>) {
    drain(&mut values);
}

pub(crate) fn release_entries(entries: Vec<Entry>) {
    let mut pending = Vec::with_capacity(entries.len());
    for entry in entries {
        detach_entry(entry, &mut pending);
    }
    drain(&mut pending);
}

fn detach_entry(entry: Entry, pending: &mut Vec<Value>) {
    let Entry { name, value } = entry;
    release_string(name);
    pending.push(value);
}

// Children are detached onto `pending` before the parent is dropped, so the
// parent's Drop finds nothing left to do and never recurses.
fn drain(pending: &mut Vec<Value>) {
    while let Some(value) = pending.pop() {
        match value {
            Value::Byte(_)
            | Value::Short(_)
            | Value::Int(_)
            | Value::Long(_)
            | Value::Float(_)
            | Value::Double(_) => {}
            Value::ByteArray(a) => release_byte_array(a),
            Value::String(s) => release_string(s),
            Value::IntArray(a) => release_int_array(a),
            Value::LongArray(a) => release_long_array(a),
            Value::List(mut list) => {
                pending.append(&mut list.values);
                drop(list);
            }
            Value::Compound(mut compound) => {
                for entry in compound.entries.drain(..) {
                    detach_entry(entry, pending);
                }
                drop(compound);
            }
        }
    }
}
