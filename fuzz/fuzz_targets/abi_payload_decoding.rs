#![no_main]
use libfuzzer_sys::fuzz_target;
use upgrade_deployer::{compress_abi, decompress_abi};

fuzz_target!(|data: &[u8]| {
    // Arbitrary payload text must decode or fail, never panic
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(abi) = decompress_abi(text) {
        // Anything that decoded must survive another round trip
        let payload = compress_abi(&abi).unwrap();
        let again = decompress_abi(&payload).unwrap();
        assert_eq!(abi, again);
    }
});
