use std::ffi::{OsStr, OsString};
use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use sha2::{Digest, Sha256};

/// Caller-supplied token that pins the generator state.
///
/// Any argument is accepted, including ones that are not valid UTF-8. The
/// SHA-256 digest of its raw bytes becomes the 32-byte ChaCha20 seed, so the
/// same token always yields the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeySeed(OsString);

impl KeySeed {
    pub fn new(seed: impl Into<OsString>) -> Self {
        Self(seed.into())
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.0
    }

    /// Builds a fresh generator from this seed.
    pub fn rng(&self) -> ChaCha20Rng {
        let digest: [u8; 32] = Sha256::digest(self.0.as_encoded_bytes()).into();
        ChaCha20Rng::from_seed(digest)
    }
}

impl From<OsString> for KeySeed {
    fn from(seed: OsString) -> Self {
        Self(seed)
    }
}

impl From<String> for KeySeed {
    fn from(seed: String) -> Self {
        Self(seed.into())
    }
}

impl From<&str> for KeySeed {
    fn from(seed: &str) -> Self {
        Self(seed.into())
    }
}

// Lossy: invalid UTF-8 shows up as U+FFFD.
impl fmt::Display for KeySeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_string_lossy())
    }
}

/// Seeded generator when a seed is given, OS entropy otherwise.
pub fn rng_for(seed: Option<&KeySeed>) -> ChaCha20Rng {
    match seed {
        Some(seed) => seed.rng(),
        None => ChaCha20Rng::from_entropy(),
    }
}
