#![no_main]
use big_integer::BigInt;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(x) = s.parse::<BigInt>() {
            let printed = x.to_string();
            assert_eq!(printed.parse::<BigInt>().unwrap(), x);
        }
    }
});
