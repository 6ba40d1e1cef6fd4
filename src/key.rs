use std::fmt;

use rand::Rng;

use crate::seed::{rng_for, KeySeed};
use crate::KEY_LEN;

/// The 16 key bytes. Immutable once drawn.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyBytes([u8; KEY_LEN]);

impl KeyBytes {
    /// Draws each byte independently and uniformly from `rng`.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut bytes = [0u8; KEY_LEN];
        for byte in bytes.iter_mut() {
            *byte = rng.gen();
        }
        Self(bytes)
    }

    pub fn from_seed(seed: Option<&KeySeed>) -> Self {
        let mut rng = rng_for(seed);
        Self::generate(&mut rng)
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; KEY_LEN]> for KeyBytes {
    fn from(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }
}

// Keep key material out of `{:?}` output.
impl fmt::Debug for KeyBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyBytes([REDACTED])")
    }
}
