#![no_main]
use big_integer::BigInt;
use libfuzzer_sys::fuzz_target;

fn from_bytes(bytes: &[u8]) -> BigInt {
    let mut x = BigInt::zero();
    for &byte in bytes {
        x <<= 8;
        x |= i64::from(byte);
    }
    if bytes.first().map_or(false, |b| b & 1 == 1) {
        x = -x;
    }
    x
}

fuzz_target!(|data: &[u8]| {
    let mid = data.len() / 2;
    let a = from_bytes(&data[..mid]);
    let b = from_bytes(&data[mid..]);

    assert_eq!(&a + &b - &b, a);
    assert_eq!(!&a, -&a - 1);
    assert_eq!((&a & &b) + (&a | &b), &a + &b);
    match a.div_rem(&b) {
        Ok((q, r)) => {
            assert_eq!(&q * &b + &r, a);
            assert!(r.abs() < b.abs());
        }
        Err(err) => {
            assert!(err.is_divide_by_zero());
            assert!(b.is_zero());
        }
    }
});
