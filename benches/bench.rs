#![feature(test)]

extern crate test;

use big_integer::BigInt;
use test::Bencher;

fn input_digits(len: usize) -> String {
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    (0..len)
        .map(|i| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let digit = (state % 10) as u8;
            char::from(if i == 0 { b'1' + digit % 9 } else { b'0' + digit })
        })
        .collect()
}

fn input_bigint(len: usize) -> BigInt {
    input_digits(len).parse().unwrap()
}

#[bench]
fn bench_parse_10k_digits(b: &mut Bencher) {
    let s = input_digits(10_000);
    b.bytes = s.len() as u64;
    b.iter(|| s.parse::<BigInt>().unwrap());
}

#[bench]
fn bench_print_10k_digits(b: &mut Bencher) {
    let x = input_bigint(10_000);
    b.iter(|| x.to_string());
}

#[bench]
fn bench_add_10k_digits(b: &mut Bencher) {
    let x = input_bigint(10_000);
    let y = -input_bigint(9_000);
    b.iter(|| &x + &y);
}

#[bench]
fn bench_mul_1k_by_1k_digits(b: &mut Bencher) {
    let x = input_bigint(1_000);
    let y = input_bigint(1_000);
    b.iter(|| &x * &y);
}

#[bench]
fn bench_div_20k_by_10k_digits(b: &mut Bencher) {
    let x = input_bigint(20_000);
    let y = input_bigint(10_000);
    b.iter(|| x.div_rem(&y).unwrap());
}

#[bench]
fn bench_div_small_divisor(b: &mut Bencher) {
    let x = input_bigint(10_000);
    let y = BigInt::from(1_000_000_007);
    b.iter(|| &x / &y);
}

#[bench]
fn bench_bitwise_negative(b: &mut Bencher) {
    let x = -input_bigint(10_000);
    let y = input_bigint(5_000);
    b.iter(|| (&x & &y) ^ (&x | &y));
}

#[bench]
fn bench_shift(b: &mut Bencher) {
    let x = -input_bigint(10_000);
    b.iter(|| (&x << 1000) >> 1017);
}
