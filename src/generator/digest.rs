//! Digest reduction of the canonical encoding.
//!
//! The canonical byte stream is hashed with a cryptographic digest and the first eight bytes
//! of the digest are read in big-endian order as a signed two's-complement integer. SHA-1 is
//! the default primitive; MD5 is available for tools that fingerprint with it.
//!
//! # Examples
//!
//! ```rust
//! use svuid::generator::digest::DigestAlgorithm;
//!
//! let algorithm = DigestAlgorithm::from_name("SHA-1")?;
//! assert_eq!(algorithm, DigestAlgorithm::Sha1);
//! assert_eq!(algorithm.reduce(b""), -2721964255587120371);
//!
//! assert!(DigestAlgorithm::from_name("WHIRLPOOL").is_err());
//! # Ok::<(), svuid::Error>(())
//! ```

use std::str::FromStr;

use md5::{Digest, Md5};
use sha1::Sha1;
use strum::{Display, EnumString, IntoStaticStr};

use crate::{Error, Result};

/// Number of digest bytes folded into the identifier
const FINGERPRINT_LEN: usize = 8;

/// Hash primitive used to condense the canonical encoding
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr,
)]
#[strum(ascii_case_insensitive)]
pub enum DigestAlgorithm {
    /// SHA-1, 20-byte digest
    #[default]
    #[strum(to_string = "SHA-1", serialize = "SHA1", serialize = "SHA")]
    Sha1,
    /// MD5, 16-byte digest
    #[strum(to_string = "MD5", serialize = "MD-5")]
    Md5,
}

impl DigestAlgorithm {
    /// Looks up a digest primitive by its conventional name (`SHA-1`, `MD5`, ...).
    ///
    /// # Errors
    /// Returns [`Error::DigestUnavailable`] if no primitive with this name is available.
    pub fn from_name(name: &str) -> Result<Self> {
        DigestAlgorithm::from_str(name.trim())
            .map_err(|_| Error::DigestUnavailable(name.to_string()))
    }

    /// Length of the digest in bytes
    #[must_use]
    pub fn digest_len(self) -> usize {
        match self {
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Md5 => 16,
        }
    }

    /// Hashes `data` and returns the full digest
    #[must_use]
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        match self {
            DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
            DigestAlgorithm::Md5 => Md5::digest(data).to_vec(),
        }
    }

    /// Hashes `data` and folds the digest into a signed 64-bit identifier
    #[must_use]
    pub fn reduce(self, data: &[u8]) -> i64 {
        match self {
            DigestAlgorithm::Sha1 => fold::<Sha1>(data),
            DigestAlgorithm::Md5 => fold::<Md5>(data),
        }
    }
}

/// Reads the leading digest bytes as a big-endian `i64`
fn fold<D: Digest>(data: &[u8]) -> i64 {
    let hash = D::digest(data);

    let mut prefix = [0_u8; FINGERPRINT_LEN];
    prefix.copy_from_slice(&hash[..FINGERPRINT_LEN]);

    i64::from_be_bytes(prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(DigestAlgorithm::from_name("SHA-1").unwrap(), DigestAlgorithm::Sha1);
        assert_eq!(DigestAlgorithm::from_name("sha1").unwrap(), DigestAlgorithm::Sha1);
        assert_eq!(DigestAlgorithm::from_name(" SHA ").unwrap(), DigestAlgorithm::Sha1);
        assert_eq!(DigestAlgorithm::from_name("md5").unwrap(), DigestAlgorithm::Md5);
        assert_eq!(DigestAlgorithm::default(), DigestAlgorithm::Sha1);
    }

    #[test]
    fn test_unknown_name_is_unavailable() {
        match DigestAlgorithm::from_name("SHA-3") {
            Err(Error::DigestUnavailable(name)) => assert_eq!(name, "SHA-3"),
            other => panic!("Expected DigestUnavailable, got {other:?}"),
        }

        assert!(DigestAlgorithm::from_name("").is_err());
    }

    #[test]
    fn test_display_uses_canonical_name() {
        assert_eq!(DigestAlgorithm::Sha1.to_string(), "SHA-1");
        assert_eq!(DigestAlgorithm::Md5.to_string(), "MD5");

        let name: &'static str = DigestAlgorithm::Md5.into();
        assert_eq!(name, "MD5");
    }

    #[test]
    fn test_reduce_reads_big_endian_prefix() {
        // SHA-1("") = da39a3ee5e6b4b0d...
        assert_eq!(DigestAlgorithm::Sha1.reduce(b""), 0xda39_a3ee_5e6b_4b0d_u64 as i64);

        let data = b"com.example.Foo\n1\ncount I\n<init> 1 ()V\n";
        let digest = DigestAlgorithm::Sha1.digest(data);
        assert_eq!(digest.len(), DigestAlgorithm::Sha1.digest_len());

        let mut prefix = [0_u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        assert_eq!(DigestAlgorithm::Sha1.reduce(data), i64::from_be_bytes(prefix));
    }

    #[test]
    fn test_md5_reduce() {
        let data = b"com.example.Foo\n1\ncount I\n<init> 1 ()V\n";

        assert_eq!(DigestAlgorithm::Md5.digest(data).len(), 16);
        assert_eq!(DigestAlgorithm::Md5.reduce(data), 4630291895436480701);
        assert_ne!(
            DigestAlgorithm::Md5.reduce(data),
            DigestAlgorithm::Sha1.reduce(data)
        );
    }
}
