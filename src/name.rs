//! Name-based UUID generation (versions 3 and 5)

use crate::{ParseError, Uuid};
use md5::{Digest, Md5};
use sha1::Sha1;

/// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_DNS: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_URL: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x11, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for ISO OIDs (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_OID: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x12, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

/// Namespace for X.500 distinguished names (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_X500: Uuid = Uuid::from_bytes([
    0x6b, 0xa7, 0xb8, 0x14, 0x9d, 0xad, 0x11, 0xd1, 0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
]);

impl Uuid {
    /// Creates a UUIDv3 object from a namespace and a name using MD5.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid345::{Uuid, NAMESPACE_DNS};
    ///
    /// let uuid = Uuid::new_v3(&NAMESPACE_DNS, b"python.org");
    /// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
    /// ```
    pub fn new_v3(namespace: &Uuid, name: &[u8]) -> Self {
        let mut hasher = Md5::new();
        hasher.update(namespace.as_bytes());
        hasher.update(name);
        let digest: [u8; 16] = hasher.finalize().into();
        tracing::trace!(namespace = %namespace, name_len = name.len(), "derived md5 name digest");
        Self::from_name_digest(digest, 3)
    }

    /// Creates a UUIDv5 object from a namespace and a name using SHA-1.
    ///
    /// Only the leading 128 bits of the 160-bit digest are used.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uuid345::{Uuid, NAMESPACE_DNS};
    ///
    /// let uuid = Uuid::new_v5(&NAMESPACE_DNS, b"example.com");
    /// assert_eq!(uuid.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
    /// ```
    pub fn new_v5(namespace: &Uuid, name: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(namespace.as_bytes());
        hasher.update(name);
        let sha1 = hasher.finalize();
        let mut digest = [0u8; 16];
        digest.copy_from_slice(&sha1[..16]);
        tracing::trace!(namespace = %namespace, name_len = name.len(), "derived sha1 name digest");
        Self::from_name_digest(digest, 5)
    }
}

/// Generates a UUIDv3 string from a namespace string and a name.
///
/// The namespace may be in any form that [`is_valid`](crate::is_valid) accepts (braces, missing
/// hyphens, and uppercase digits make no difference to the result). The namespace is validated
/// before anything is hashed.
///
/// # Errors
///
/// Returns [`ParseError`] if `namespace` is not a valid UUID representation.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid345::uuid3("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "python.org")?;
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
///
/// assert!(uuid345::uuid3("garbage", "python.org").is_err());
/// # Ok::<(), uuid345::ParseError>(())
/// ```
pub fn uuid3(namespace: &str, name: impl AsRef<[u8]>) -> Result<Uuid, ParseError> {
    parse_namespace(namespace).map(|ns| Uuid::new_v3(&ns, name.as_ref()))
}

/// Generates a UUIDv5 string from a namespace string and a name.
///
/// Behaves like [`uuid3`] except that the name digest is computed with SHA-1.
///
/// # Errors
///
/// Returns [`ParseError`] if `namespace` is not a valid UUID representation.
///
/// # Examples
///
/// ```rust
/// let uuid = uuid345::uuid5("6ba7b810-9dad-11d1-80b4-00c04fd430c8", "example.com")?;
/// assert_eq!(uuid.to_string(), "cfbff0d1-9375-5685-968c-48ce8b15ae17");
/// # Ok::<(), uuid345::ParseError>(())
/// ```
pub fn uuid5(namespace: &str, name: impl AsRef<[u8]>) -> Result<Uuid, ParseError> {
    parse_namespace(namespace).map(|ns| Uuid::new_v5(&ns, name.as_ref()))
}

fn parse_namespace(namespace: &str) -> Result<Uuid, ParseError> {
    namespace.parse().map_err(|err| {
        tracing::debug!(namespace, "rejected invalid namespace");
        err
    })
}
