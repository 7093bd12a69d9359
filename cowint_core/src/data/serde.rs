use core::fmt;

use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};

use crate::BigInt;

/// A `serde_support` impl. A `BigInt` is serialized as its canonical decimal
/// string, which keeps the format independent of the digit size.
///
/// ```
/// // Example using the `ron` crate
/// use cowint::BigInt;
/// use ron::{from_str, to_string};
///
/// let x = BigInt::from(-1234567890123456789012345i128);
/// let s = to_string(&x).unwrap();
/// assert_eq!(s, "\"-1234567890123456789012345\"");
/// assert_eq!(from_str::<BigInt>(&s).unwrap(), x);
/// ```
impl Serialize for BigInt {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_dec_string())
    }
}

struct BigIntVisitor;

impl<'de> Visitor<'de> for BigIntVisitor {
    type Value = BigInt;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a decimal integer string")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        BigInt::from_dec_str(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for BigInt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(BigIntVisitor)
    }
}
