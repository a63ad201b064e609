#[cfg(not(feature = "std"))]
use core as std;

use fstr::FStr;
use std::{fmt, str};

/// Represents a Universally Unique IDentifier.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Creates a UUIDv4 object from eight 16-bit random values.
    ///
    /// The values are laid out in order as `r0 r1 - r2 - r3 - r4 - r5 r6 r7`, where the top
    /// nibble of `r3` is replaced by the version `4` and the top two bits of `r4` by the variant
    /// `10`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid345::Uuid;
    ///
    /// let x = Uuid::from_fields_v4([0xffff; 8]);
    /// assert_eq!(x.to_string(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    /// ```
    pub const fn from_fields_v4(r: [u16; 8]) -> Self {
        let r3 = (r[3] & 0x0fff) | 0x4000;
        let r4 = (r[4] & 0x3fff) | 0x8000;
        Self([
            (r[0] >> 8) as u8,
            r[0] as u8,
            (r[1] >> 8) as u8,
            r[1] as u8,
            (r[2] >> 8) as u8,
            r[2] as u8,
            (r3 >> 8) as u8,
            r3 as u8,
            (r4 >> 8) as u8,
            r4 as u8,
            (r[5] >> 8) as u8,
            r[5] as u8,
            (r[6] >> 8) as u8,
            r[6] as u8,
            (r[7] >> 8) as u8,
            r[7] as u8,
        ])
    }

    /// Creates a name-based UUID from the leading 128 bits of a hash digest.
    ///
    /// The `time_hi_and_version` field (bytes 6-7) is masked with `0x0fff` and tagged with
    /// `version`, and the `clock_seq` field (bytes 8-9) is masked with `0x3fff` and tagged with
    /// the variant `10`. Everything else is copied verbatim from the digest.
    ///
    /// # Panics
    ///
    /// Panics if `version` does not fit in four bits.
    pub const fn from_name_digest(digest: [u8; 16], version: u8) -> Self {
        assert!(version < 16, "`version` must be a 4-bit integer");

        let time_hi = u16::from_be_bytes([digest[6], digest[7]]);
        let time_hi = (time_hi & 0x0fff) | ((version as u16) << 12);
        let clock_seq = u16::from_be_bytes([digest[8], digest[9]]);
        let clock_seq = (clock_seq & 0x3fff) | 0x8000;

        let mut bytes = digest;
        bytes[6] = (time_hi >> 8) as u8;
        bytes[7] = time_hi as u8;
        bytes[8] = (clock_seq >> 8) as u8;
        bytes[9] = clock_seq as u8;
        Self(bytes)
    }

    /// Reports the variant field value of the UUID.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 4 {
            0b0000..=0b0111 => Variant::Var0,
            0b1000..=0b1011 => Variant::Var10,
            0b1100..=0b1101 => Variant::Var110,
            _ => Variant::VarReserved,
        }
    }

    /// Returns the version field value of the UUID or `None` if the UUID does not have the
    /// variant field value of `10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type.
    ///
    /// The digits are always lowercase regardless of how the UUID was created or parsed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid345::Uuid;
    ///
    /// let x = "{6BA7B810-9DAD-11D1-80B4-00C04FD430C8}".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), uuid345::ParseError>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [b'-'; 36];
        let mut cursor = 0;
        for (i, e) in self.0.iter().enumerate() {
            buffer[cursor] = DIGITS[(e >> 4) as usize];
            buffer[cursor + 1] = DIGITS[(e & 15) as usize];
            cursor += if i == 3 || i == 5 || i == 7 || i == 9 { 3 } else { 2 };
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hex digits and hyphens only
        unsafe { FStr::from_inner_unchecked(buffer) }
    }
}

/// UUID variant field values.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// The variant field value of `0`, reserved for NCS backward compatibility. The Nil UUID
    /// falls in this range.
    Var0,

    /// The variant field value of `10`, used by every UUID this crate generates.
    Var10,

    /// The variant field value of `110`, reserved for Microsoft backward compatibility.
    Var110,

    /// The reserved variant field value of `111`. The Max UUID falls in this range.
    VarReserved,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from a hexadecimal string representation.
    ///
    /// Accepted inputs consist of 32 hexadecimal digits in 8-4-4-4-12 groups, where each of the
    /// four group boundaries may or may not carry a hyphen, optionally preceded by `{` and
    /// optionally followed by `}`. Digits are case-insensitive. The two braces are checked
    /// independently of each other, so `{xxxxxxxx-...-xxxxxxxxxxxx` is also accepted.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        const ERR: ParseError = ParseError {};

        let mut src = src.as_bytes();
        if let [b'{', rest @ ..] = src {
            src = rest;
        }
        if let [rest @ .., b'}'] = src {
            src = rest;
        }

        let mut dst = [0u8; 16];
        let mut iter = src.iter().peekable();
        for (i, e) in dst.iter_mut().enumerate() {
            if (i == 4 || i == 6 || i == 8 || i == 10) && iter.peek() == Some(&&b'-') {
                iter.next();
            }
            let hi = iter.next().and_then(|c| hex_value(*c)).ok_or(ERR)?;
            let lo = iter.next().and_then(|c| hex_value(*c)).ok_or(ERR)?;
            *e = (hi << 4) | lo;
        }
        if iter.next().is_none() {
            Ok(Self(dst))
        } else {
            Err(ERR)
        }
    }
}

/// Decodes an ASCII hexadecimal digit.
const fn hex_value(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Tests if a string is a syntactically valid UUID representation.
///
/// This function accepts exactly what [`Uuid`]'s `FromStr` implementation accepts: 32
/// case-insensitive hexadecimal digits in 8-4-4-4-12 groups, a hyphen optional at each group
/// boundary, and an optional leading `{` and trailing `}`. The version and variant fields are not
/// inspected.
///
/// # Examples
///
/// ```rust
/// use uuid345::is_valid;
///
/// assert!(is_valid("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
/// assert!(is_valid("{6BA7B8109DAD11D180B400C04FD430C8}"));
/// assert!(!is_valid("not-a-uuid"));
/// assert!(!is_valid(""));
/// ```
pub fn is_valid(candidate: &str) -> bool {
    candidate.parse::<Uuid>().is_ok()
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

/// Error parsing an invalid string representation of UUID.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid string representation")
    }
}

#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
mod std_ext {
    use super::{ParseError, Uuid};

    impl From<Uuid> for String {
        fn from(src: Uuid) -> Self {
            src.to_string()
        }
    }

    impl TryFrom<String> for Uuid {
        type Error = ParseError;

        fn try_from(src: String) -> Result<Self, Self::Error> {
            src.parse()
        }
    }

    impl std::error::Error for ParseError {}
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
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
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            value.parse::<Self::Value>().map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            <[u8; 16]>::try_from(value)
                .map(Self::Value::from)
                .map_err(de::Error::custom)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{is_valid, Uuid, Variant};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [([u16; 8], &'static str)] {
        &[
            ([0; 8], "00000000-0000-4000-8000-000000000000"),
            ([0xffff; 8], "ffffffff-ffff-4fff-bfff-ffffffffffff"),
            (
                [0xffff, 0xffff, 0xffff, 0, 0, 0, 0, 0],
                "ffffffff-ffff-4000-8000-000000000000",
            ),
            (
                [0, 0, 0, 0x0fff, 0x3fff, 0, 0, 0],
                "00000000-0000-4fff-bfff-000000000000",
            ),
            (
                [0x2ca4, 0xb2ce, 0x6c13, 0xf0d4, 0x7ccf, 0x37d2, 0x2282, 0x0f6f],
                "2ca4b2ce-6c13-40d4-bccf-37d222820f6f",
            ),
        ]
    }

    /// Encodes and decodes prepared cases correctly
    #[test]
    fn encodes_and_decodes_prepared_cases_correctly() {
        for (fs, text) in prepare_cases() {
            let from_fields = Uuid::from_fields_v4(*fs);
            assert_eq!(Ok(from_fields), text.parse());
            assert_eq!(Ok(from_fields), text.to_uppercase().parse());
            assert_eq!(&from_fields.encode() as &str, *text);
            #[cfg(feature = "std")]
            assert_eq!(&from_fields.to_string(), text);
            #[cfg(feature = "std")]
            assert_eq!(&from_fields.encode().to_string(), text);
        }
    }

    /// Forces version and variant bits of name digests
    #[test]
    fn forces_version_and_variant_bits_of_name_digests() {
        let digest = [0xffu8; 16];
        assert_eq!(
            Uuid::from_name_digest(digest, 3).to_string(),
            "ffffffff-ffff-3fff-bfff-ffffffffffff"
        );
        assert_eq!(
            Uuid::from_name_digest(digest, 5).to_string(),
            "ffffffff-ffff-5fff-bfff-ffffffffffff"
        );
        assert_eq!(
            Uuid::from_name_digest([0u8; 16], 3).to_string(),
            "00000000-0000-3000-8000-000000000000"
        );
    }

    /// Accepts every hyphen and brace combination of lenient grammar
    #[test]
    fn accepts_every_hyphen_and_brace_combination_of_lenient_grammar() {
        let groups = ["6ba7b810", "9dad", "11d1", "80b4", "00c04fd430c8"];
        let expected = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>().unwrap();
        for mask in 0..16u32 {
            let mut text = String::from(groups[0]);
            for (i, g) in groups[1..].iter().enumerate() {
                if mask & (1 << i) != 0 {
                    text.push('-');
                }
                text.push_str(g);
            }
            for (open, close) in [("", ""), ("{", "}"), ("{", ""), ("", "}")] {
                let candidate = format!("{}{}{}", open, text, close);
                assert!(is_valid(&candidate), "{}", candidate);
                assert_eq!(candidate.parse(), Ok(expected));
                assert_eq!(candidate.to_uppercase().parse(), Ok(expected));
            }
        }
    }

    /// Returns error to invalid string representation
    #[test]
    fn returns_error_to_invalid_string_representation() {
        let cases = [
            "",
            "not-a-uuid",
            "{}",
            " 0180a8f0-5b82-45b4-9fef-ecad657c30bb",
            "0180a8f0-5b84-4438-ab50-f0626f78002b ",
            "0180a8f0-5b84-4438-ab50-f0626f78002b\n",
            "+0180a8f0-5b84-4438-ab50-f06405d35edb",
            "-0180a8f0-5b84-4438-ab50-f06508df4c2d",
            "0180a8f0-5b84-4438-ab50-f06508df4c2d-",
            "0180a8f0--5b84-4438-ab50-f06508df4c2d",
            "+180a8f0-5b84-4438-ab50-f066aa10a367",
            "0180a8f05b844438ab50f068decfbfd",
            "0180a8f05b844438ab50f068decfbfd7a",
            "0180a8f-05b84-4438-ab50-f06991838802",
            "0180a8f0-5b844-438-ab50-f06991838802",
            "{{0180a8f0-5b84-4438-ab50-f06ac2e5e082}",
            "{0180a8f0-5b84-4438-ab50-f06ac2e5e082}}",
            "}0180a8f0-5b84-4438-ab50-f06ac2e5e082{",
            "(0180a8f0-5b84-4438-ab50-f06ac2e5e082)",
            "0180a8f0-5b84-44 8-ab50-f06bed27bdc7",
            "0180a8g0-5b84-4438-ab50-f06c91175b8a",
            "0180a8f0-5b84-4438-ab50_f06d3ea24429",
            "0180a8f0-5b84-4438-ab50-f06d3ea2442é",
        ];

        for e in cases {
            assert!(e.parse::<Uuid>().is_err(), "{}", e);
            assert!(!is_valid(e), "{}", e);
        }
    }

    /// Returns Nil and Max UUIDs
    #[test]
    fn returns_nil_and_max_uuids() {
        assert_eq!(
            &Uuid::NIL.encode() as &str,
            "00000000-0000-0000-0000-000000000000"
        );

        assert_eq!(
            &Uuid::MAX.encode() as &str,
            "ffffffff-ffff-ffff-ffff-ffffffffffff"
        );
    }

    /// Reports variant and version fields
    #[test]
    fn reports_variant_and_version_fields() {
        assert_eq!(Uuid::NIL.variant(), Variant::Var0);
        assert_eq!(Uuid::NIL.version(), None);
        assert_eq!(Uuid::MAX.variant(), Variant::VarReserved);
        assert_eq!(Uuid::MAX.version(), None);

        let dns = "6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse::<Uuid>().unwrap();
        assert_eq!(dns.variant(), Variant::Var10);
        assert_eq!(dns.version(), Some(1));

        let microsoft = "6ba7b810-9dad-11d1-c0b4-00c04fd430c8".parse::<Uuid>().unwrap();
        assert_eq!(microsoft.variant(), Variant::Var110);
        assert_eq!(microsoft.version(), None);

        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v4(*fs);
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(4));
        }
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for (fs, _) in prepare_cases() {
            let e = Uuid::from_fields_v4(*fs);
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_bytes(*e.as_bytes()), e);
            assert_eq!(e.encode().parse(), Ok(e));
            assert_eq!(e.encode().to_uppercase().parse(), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string()), Ok(e));
            #[cfg(feature = "std")]
            assert_eq!(Uuid::try_from(e.to_string().to_uppercase()), Ok(e));
            #[cfg(feature = "uuid")]
            assert_eq!(Uuid::from(<uuid::Uuid>::from(e)), e);

            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_bytes(), &<[u8; 16]>::from(e));
            #[cfg(feature = "uuid")]
            assert_eq!(uuid::Uuid::from(e).as_u128(), u128::from(e));
        }
    }
}
