use secrecy::{ExposeSecret, Secret};
use sha2::{Digest, Sha256};

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "Signature";

/// Compute the request signature for a reference.
///
/// The signature is the lowercase hex SHA-256 digest of `public_key`
/// immediately followed by `reference`, with no separator. Empty inputs are
/// hashed like any other string.
pub fn sign(reference: &str, public_key: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(public_key.as_bytes());
    hasher.update(reference.as_bytes());
    hex::encode(hasher.finalize())
}

/// Signer trait for request authentication
///
/// Signed endpoints hand the request's `reference` to the signer and send the
/// result in the `Signature` header.
pub trait Signer: Send + Sync {
    fn signature(&self, reference: &str) -> String;
}

/// SHA-256 signer keyed by the business public key.
pub struct Sha256Signer {
    public_key: Secret<String>,
}

impl Sha256Signer {
    pub fn new(public_key: String) -> Self {
        Self {
            public_key: Secret::new(public_key),
        }
    }
}

impl std::fmt::Debug for Sha256Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sha256Signer")
            .field("public_key", &"[REDACTED]")
            .finish()
    }
}

impl Signer for Sha256Signer {
    fn signature(&self, reference: &str) -> String {
        sign(reference, self.public_key.expose_secret())
    }
}
