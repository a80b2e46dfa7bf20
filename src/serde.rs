//! `Serialize` and `Deserialize` for `BigInt`, through the decimal form.

use crate::bigint::BigInt;
use crate::lib::fmt;
use serde_core::de::{self, Deserialize, Deserializer, Unexpected, Visitor};
use serde_core::ser::{Serialize, Serializer};

impl Serialize for BigInt {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<BigInt, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a string of decimal digits")
            }

            #[inline]
            fn visit_i64<E>(self, value: i64) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_u64<E>(self, value: u64) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_i128<E>(self, value: i128) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            #[inline]
            fn visit_u128<E>(self, value: u128) -> Result<BigInt, E> {
                Ok(BigInt::from(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<BigInt, E>
            where
                E: de::Error,
            {
                value.parse().map_err(|err| {
                    de::Error::custom(format_args!(
                        "invalid value: {}, {}",
                        Unexpected::Str(value),
                        err,
                    ))
                })
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}
