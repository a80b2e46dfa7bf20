use big_integer::BigInt;

fn big(s: &str) -> BigInt {
    s.parse().unwrap()
}

#[test]
fn divide_by_zero_is_an_error() {
    let x = big("123456789012345678901234567890");
    let zero = BigInt::zero();

    assert!(x.div_rem(&zero).unwrap_err().is_divide_by_zero());
    assert!(x.try_div(&zero).unwrap_err().is_divide_by_zero());
    assert!(x.try_rem(&zero).unwrap_err().is_divide_by_zero());
    assert!(zero.try_div(&zero).is_err());
}

#[test]
fn failed_assignment_leaves_value() {
    let mut x = BigInt::from(-77);
    assert!(x.try_div_assign(&BigInt::zero()).is_err());
    assert_eq!(x, -77);
    assert!(x.try_rem_assign(&BigInt::zero()).is_err());
    assert_eq!(x, -77);
}

#[test]
#[should_panic(expected = "attempt to divide by zero")]
fn operator_panics_on_zero() {
    let _ = big("5") / 0;
}

#[test]
fn same_magnitude_different_length() {
    // -2^32 is a single limb, 2^32 needs two.
    let a = BigInt::from(-(1i64 << 32));
    let b = BigInt::from(1i64 << 32);
    assert_eq!(&a / &b, -1);
    assert_eq!(&a % &b, 0);
    assert_eq!(&b / &a, -1);
    assert_eq!(&a / &a, 1);
}

#[test]
fn dividend_smaller_than_divisor() {
    let a = big("-1000000000000");
    let b = big("1000000000000000000000000");
    let (q, r) = a.div_rem(&b).unwrap();
    assert_eq!(q, 0);
    assert_eq!(r, a);
}

#[test]
fn minus_one_divisor() {
    let a = BigInt::from(i128::MIN);
    assert_eq!(&a / -1, BigInt::from(1u128 << 127));
    assert_eq!(&a % -1, 0);
}

#[test]
fn single_limb_divisor() {
    let a = big("-340282366920938463463374607431768211455");
    let (q, r) = a.div_rem(&BigInt::from(1_000_000_007)).unwrap();
    assert_eq!(q, big("-340282364538961911690641225597"));
    assert_eq!(r, big("-279632276"));
}

#[test]
fn multi_limb_divisor() {
    let a = big("-9876543456787654567");
    let b = big("5434567");
    assert_eq!(&a / &b, big("-1817356094199"));

    // (2^128 - 1) / (2^64 + 1) == 2^64 - 1
    let a = BigInt::from(u128::MAX);
    let b = BigInt::from(u64::MAX) + 2;
    assert_eq!(&a / &b, u64::MAX);
    assert_eq!(&a % &b, 0);
}
