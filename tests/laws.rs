use big_integer::BigInt;
use std::cmp::Ordering;

// Deterministic xorshift64* so failures reproduce.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.0 = x;
        x.wrapping_mul(0x2545_F491_4F6C_DD1D)
    }

    fn next_i64(&mut self) -> i64 {
        // Mix full-width values with small ones so limb boundaries and
        // single-limb fast paths both get exercised.
        let x = self.next() as i64;
        match self.next() % 4 {
            0 => x >> 33,
            1 => x >> 60,
            _ => x,
        }
    }

    fn next_big(&mut self, max_limbs: u64) -> BigInt {
        let limbs = 1 + self.next() % max_limbs;
        let mut x = BigInt::zero();
        for _ in 0..limbs {
            x <<= 32;
            x |= (self.next() >> 32) as i64;
        }
        if self.next() % 2 == 0 {
            x = -x;
        }
        x
    }
}

fn check(x: &BigInt, expected: i128) {
    assert_eq!(x.to_i128(), Some(expected), "{} != {}", x, expected);
    assert_eq!(x.to_string(), expected.to_string());
}

#[test]
fn arithmetic_matches_i128() {
    let mut rng = XorShift(0x9E37_79B9_7F4A_7C15);
    for _ in 0..5000 {
        let a = rng.next_i64();
        let b = rng.next_i64();
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (wa, wb) = (a as i128, b as i128);

        check(&(&x + &y), wa + wb);
        check(&(&x - &y), wa - wb);
        check(&(&x * &y), wa * wb);
        check(&-&x, -wa);
        if b != 0 {
            check(&(&x / &y), wa / wb);
            check(&(&x % &y), wa % wb);
        }
        assert_eq!(x.cmp(&y), wa.cmp(&wb));
    }
}

#[test]
fn bitwise_matches_i128() {
    let mut rng = XorShift(0xD1B5_4A32_D192_ED03);
    for _ in 0..5000 {
        let a = rng.next_i64();
        let b = rng.next_i64();
        let (x, y) = (BigInt::from(a), BigInt::from(b));
        let (wa, wb) = (a as i128, b as i128);

        check(&(&x & &y), wa & wb);
        check(&(&x | &y), wa | wb);
        check(&(&x ^ &y), wa ^ wb);
        check(&!&x, !wa);

        let k = (rng.next() % 64) as usize;
        check(&(&x << k), wa << k);
        check(&(&x >> k), wa >> k);
    }
}

#[test]
fn division_identity() {
    let mut rng = XorShift(0x2545_F491_4F6C_DD1D);
    for _ in 0..500 {
        let a = rng.next_big(12);
        let b = rng.next_big(6);
        if b.is_zero() {
            continue;
        }
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(&q * &b + &r, a);
        assert!(r.abs() < b.abs());
        assert!(r.is_zero() || r.is_negative() == a.is_negative());
        assert!(q.is_zero() || q.is_negative() == (a.is_negative() != b.is_negative()));
    }
}

#[test]
fn multiplication_inverts_division() {
    let mut rng = XorShift(0xBF58_476D_1CE4_E5B9);
    for _ in 0..500 {
        let a = rng.next_big(8);
        let b = rng.next_big(8);
        if b.is_zero() {
            continue;
        }
        let product = &a * &b;
        assert_eq!(&product / &b, a);
        assert_eq!(&product % &b, 0);
    }
}

#[test]
fn ring_laws() {
    let mut rng = XorShift(0x94D0_49BB_1331_11EB);
    for _ in 0..300 {
        let a = rng.next_big(5);
        let b = rng.next_big(5);
        let c = rng.next_big(5);

        assert_eq!(&a + &b, &b + &a);
        assert_eq!(&a * &b, &b * &a);
        assert_eq!((&a + &b) + &c, &a + (&b + &c));
        assert_eq!(&a * (&b + &c), &a * &b + &a * &c);
        assert_eq!(&a - &a, 0);
        assert_eq!(&a + -&a, 0);
        assert_eq!(-(-&a), a);
        assert_eq!(!&a, -&a - 1);
    }
}

#[test]
fn shift_laws() {
    let mut rng = XorShift(0x6A09_E667_F3BC_C908);
    for _ in 0..300 {
        let a = rng.next_big(5);
        let k = (rng.next() % 200) as usize;

        let mut pow = BigInt::one();
        pow <<= k;
        assert_eq!(&a << k, &a * &pow);
        assert_eq!(&a << k >> k, a);

        // Arithmetic right shift rounds toward negative infinity.
        let shifted = &a >> k;
        let (q, r) = a.div_rem(&pow).unwrap();
        if r.is_negative() {
            assert_eq!(shifted, q - 1);
        } else {
            assert_eq!(shifted, q);
        }
    }
}

#[test]
fn decimal_round_trip() {
    let mut rng = XorShift(0xBB67_AE85_84CA_A73B);
    for _ in 0..300 {
        let a = rng.next_big(20);
        let text = a.to_string();
        assert_eq!(text.parse::<BigInt>().unwrap(), a);
    }
}

#[test]
fn ordering_is_consistent() {
    let mut rng = XorShift(0x3C6E_F372_FE94_F82B);
    for _ in 0..500 {
        let a = rng.next_big(4);
        let b = rng.next_big(4);
        let diff = &a - &b;
        let expected = if diff.is_zero() {
            Ordering::Equal
        } else if diff.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        };
        assert_eq!(a.cmp(&b), expected);
    }
}
