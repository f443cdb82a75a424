#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtree::error::Result;
use nbtree::{from_bytes_with_opts, DeOpts, Document};

fuzz_target!(|data: &[u8]| {
    let opts = DeOpts::new().max_depth(64).max_array_bytes(1024 * 1024);
    let doc: Result<Document> = from_bytes_with_opts(data, opts);
    if let Ok(doc) = doc {
        let _copy = doc.clone();
    }
});
