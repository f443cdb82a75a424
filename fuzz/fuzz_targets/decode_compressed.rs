#![no_main]
use libfuzzer_sys::fuzz_target;

use nbtree::compression::from_compressed_reader_with_opts;
use nbtree::DeOpts;

fuzz_target!(|data: &[u8]| {
    let opts = DeOpts::new().max_depth(64).max_array_bytes(1024 * 1024);
    let _ = from_compressed_reader_with_opts(data, opts);
});
