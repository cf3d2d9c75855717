#![no_main]
use huffcode::{decode, encode, CodeTable, FrequencyTable, HuffmanTree};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (String, String)| {
    let (text, bits) = data;
    if text.is_empty() {
        return;
    }

    let tree = HuffmanTree::build(&FrequencyTable::count(&text)).unwrap();
    let codes = CodeTable::generate(tree.root());

    let encoded = encode(&text, &codes).unwrap();
    assert_eq!(decode(&encoded, tree.root()).unwrap(), text);

    // Arbitrary bitstrings must be rejected or decoded, never panic.
    let _ = decode(&bits, tree.root());
});
