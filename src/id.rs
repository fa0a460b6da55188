use std::{fmt, str, time};

use data_encoding::BASE32;
use fstr::FStr;

use crate::{Error, EPOCH};

/// Length in bytes of the binary representation.
pub const BYTE_LEN: usize = 20;

/// Length in characters of the base-32 text representation.
pub const TEXT_LEN: usize = 32;

/// Represents a time-prefixed unique identifier.
///
/// The derived ordering compares `time` first, then `high`, then `low`, all unsigned, so
/// identifiers sort primarily by creation second.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Tuid {
    time: u32,
    high: u64,
    low: u64,
}

impl Tuid {
    /// Zero Tuid (AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA), a placeholder for the no-value state.
    pub const ZERO: Self = Self::from_parts(0, 0, 0);

    /// Max Tuid (77777777777777777777777777777777)
    pub const MAX: Self = Self::from_parts(u32::MAX, u64::MAX, u64::MAX);

    /// Creates a Tuid from its field values.
    pub const fn from_parts(time: u32, high: u64, low: u64) -> Self {
        Self { time, high, low }
    }

    /// Returns the seconds elapsed since [`EPOCH`] recorded at creation.
    pub const fn time(&self) -> u32 {
        self.time
    }

    /// Returns the upper 64 random bits.
    pub const fn high(&self) -> u64 {
        self.high
    }

    /// Returns the lower 64 random bits.
    pub const fn low(&self) -> u64 {
        self.low
    }

    /// Returns the instant, truncated to the second, at which this Tuid was created.
    pub fn created_at(&self) -> time::SystemTime {
        time::UNIX_EPOCH + EPOCH + time::Duration::from_secs(self.time.into())
    }

    /// Returns the 20-byte big-endian representation: the time in bytes 0 to 3, followed by
    /// `high` and `low`.
    pub const fn to_bytes(&self) -> [u8; BYTE_LEN] {
        let t = self.time.to_be_bytes();
        let h = self.high.to_be_bytes();
        let l = self.low.to_be_bytes();
        [
            t[0], t[1], t[2], t[3], h[0], h[1], h[2], h[3], h[4], h[5], h[6], h[7], l[0], l[1],
            l[2], l[3], l[4], l[5], l[6], l[7],
        ]
    }

    /// Creates a Tuid from its 20-byte representation.
    ///
    /// Every bit pattern of a correctly sized buffer is a valid Tuid.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if `bytes` is not exactly 20 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tuid::{Error, Tuid};
    ///
    /// assert_eq!(Tuid::from_bytes(&[0u8; 20]), Ok(Tuid::ZERO));
    /// assert_eq!(
    ///     Tuid::from_bytes(&[0u8; 19]),
    ///     Err(Error::MalformedInput { len: 19 })
    /// );
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        <[u8; BYTE_LEN]>::try_from(bytes)
            .map(Self::from)
            .map_err(|_| Error::MalformedInput { len: bytes.len() })
    }

    /// Returns the base-32 string representation stored in a stack-allocated structure that can
    /// be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// The time occupies the leading characters, so Tuids created in the same second share a
    /// common prefix.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tuid::Tuid;
    ///
    /// let x = "AAAAAAIAAAAACAAAAAAAAAAAAAAAAAAC".parse::<Tuid>()?;
    /// assert_eq!((x.time(), x.high(), x.low()), (1, 1 << 32, 2));
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "AAAAAAIAAAAACAAAAAAAAAAAAAAAAAAC");
    /// assert_eq!(format!("{}", y), "AAAAAAIAAAAACAAAAAAAAAAAAAAAAAAC");
    /// # Ok::<(), tuid::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<TEXT_LEN> {
        let mut buffer = [0u8; TEXT_LEN];
        debug_assert_eq!(BASE32.encode_len(BYTE_LEN), TEXT_LEN);
        BASE32.encode_mut(&self.to_bytes(), &mut buffer);
        debug_assert!(buffer.is_ascii());
        // SAFETY: ok because buffer consists of base-32 alphabet code points
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Returns `true` if `self` sorts strictly before `other`.
    pub fn before(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns `true` if `self` sorts strictly after `other`.
    pub fn after(&self, other: &Self) -> bool {
        self > other
    }
}

impl fmt::Display for Tuid {
    /// Returns the 32-character base-32 string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Tuid {
    type Err = Error;

    /// Creates an object from the padded base-32 string representation.
    ///
    /// Decoding is strict: lowercase letters, whitespace and line breaks (`\r`, `\n`) anywhere in
    /// the input are rejected as [`Error::InvalidEncoding`] rather than skipped.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::from_bytes(&BASE32.decode(src.as_bytes())?)
    }
}

impl From<Tuid> for [u8; BYTE_LEN] {
    fn from(src: Tuid) -> Self {
        src.to_bytes()
    }
}

impl From<[u8; BYTE_LEN]> for Tuid {
    fn from(src: [u8; BYTE_LEN]) -> Self {
        let [t0, t1, t2, t3, h0, h1, h2, h3, h4, h5, h6, h7, l0, l1, l2, l3, l4, l5, l6, l7] = src;
        Self {
            time: u32::from_be_bytes([t0, t1, t2, t3]),
            high: u64::from_be_bytes([h0, h1, h2, h3, h4, h5, h6, h7]),
            low: u64::from_be_bytes([l0, l1, l2, l3, l4, l5, l6, l7]),
        }
    }
}

impl TryFrom<&[u8]> for Tuid {
    type Error = Error;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(src)
    }
}

impl From<Tuid> for String {
    fn from(src: Tuid) -> Self {
        src.to_string()
    }
}

impl TryFrom<&str> for Tuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        src.parse()
    }
}

impl TryFrom<String> for Tuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        src.parse()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Tuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Tuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(&self.to_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Tuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Tuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a Tuid representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Self::Value::from_bytes(value).map_err(de::Error::custom)
        }
    }

}
