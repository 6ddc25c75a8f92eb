//! Content digest type.

use sha2::{Digest, Sha256};
use std::fmt;

/// 32-byte SHA-256 digest of a canonical receipt encoding.
///
/// Two receipts with identical canonical content always collide to the same
/// digest and are treated as the same logical receipt.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReceiptDigest(pub [u8; 32]);

impl ReceiptDigest {
    /// Hash raw bytes into a digest.
    pub fn sha256(data: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(data);
        Self(hasher.finalize().into())
    }

    /// Render as lowercase hex.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The underlying bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ReceiptDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for ReceiptDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceiptDigest({})", self.to_hex())
    }
}
