//! Name-based (version 3 and 5) and random (version 4) UUIDs with lenient validation
//!
//! ```rust
//! use uuid345::{is_valid, uuid3, uuid4, uuid5};
//!
//! let ns = "6ba7b810-9dad-11d1-80b4-00c04fd430c8"; // DNS namespace
//!
//! let v3 = uuid3(ns, "python.org")?;
//! assert_eq!(v3.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
//!
//! let v5 = uuid5(ns, "example.com")?;
//! assert_eq!(v5.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
//!
//! let v4 = uuid4();
//! println!("{}", v4); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! assert!(is_valid(&v4.to_string()));
//!
//! assert!(uuid5("garbage", "example.com").is_err());
//! # Ok::<(), uuid345::ParseError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122).
//!
//! # Field and bit layout
//!
//! Every identifier produced by this library has the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                           time_low                            |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |           time_mid            |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             node                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 4-bit `ver` field is set at `0011` (v3), `0100` (v4), or `0101` (v5).
//! - The 2-bit `var` field is set at `10`.
//! - For v3 and v5, the remaining 122 bits are taken from the leading 128 bits of the MD5 or SHA-1
//!   digest of the namespace's 16 bytes followed by the name. The result is deterministic: the same
//!   namespace and name always produce the same UUID.
//! - For v4, the remaining 122 bits are random. [`uuid4`] draws them from ChaCha12 reseeded from
//!   the operating system; [`V4Generator`] accepts any other source.
//!
//! # Validation
//!
//! [`is_valid`] and the [`FromStr`](core::str::FromStr) implementation of [`Uuid`] accept 32
//! case-insensitive hexadecimal digits in 8-4-4-4-12 groups where the hyphen at each group boundary
//! is optional, and an optional leading `{` and trailing `}`. Those forms are accepted wherever a
//! namespace is expected. Output is always the lowercase, fully hyphenated 36-character form.
//!
//! # Crate features
//!
//! Default features:
//!
//! - `global_gen`: enables the process-wide default generator behind [`uuid4`]. Implies `std`.
//!
//! Optional features:
//!
//! - `std`: integrates the library with, among others, the standard I/O and error types. Without
//!   it, the library is `no_std` compatible.
//! - `serde`: enables serialization and deserialization of [`Uuid`].
//! - `uuid`: enables conversion from/to the [`uuid::Uuid`](https://docs.rs/uuid) type.

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub use id::{is_valid, ParseError, Uuid, Variant};

pub mod name;
pub use name::{uuid3, uuid5, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};

pub mod generator;
pub use generator::V4Generator;

mod global_gen;
#[cfg(feature = "global_gen")]
pub use global_gen::uuid4;
