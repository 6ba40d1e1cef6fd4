//! Generates the 128-bit `SECRET_KEY` compiled into the trusted C modules.
//!
//! The key is drawn from a ChaCha20 generator, either seeded from a caller
//! string (reproducible) or from OS entropy, and written out as a C source
//! file declaring a constant byte array.

pub mod emit;
pub mod key;
pub mod seed;

pub use emit::{emit, emit_to, render};
pub use key::KeyBytes;
pub use seed::KeySeed;

/// Number of key bytes (128 bits).
pub const KEY_LEN: usize = 16;

/// Where the generated source lands, relative to the working directory.
pub const OUTPUT_PATH: &str = "src/trusted/secret.c";

/// Header declaring `extern const unsigned char SECRET_KEY[];`.
pub const HEADER_NAME: &str = "secret.h";

/// Identifier of the generated byte array.
pub const ARRAY_NAME: &str = "SECRET_KEY";
