//! Minimal module-LWE public-key encryption (simplified Kyber-style).
//!
//! Key generation, probabilistic encryption of a 32-byte block, and
//! threshold-decoding decryption over R_q = Z_q[x]/(x^n + 1) with q = 3329,
//! n = 256. Multiplication is naive convolution; ring elements are not
//! packed into a compact wire format.
//!
//! # ⚠️ WARNING: NOT PRODUCTION READY ⚠️
//!
//! This is a study implementation. NOT audited, NOT constant-time,
//! NOT safe against side-channel attacks, and decryption failures are
//! silent by design.

pub mod params;
pub mod error;
pub mod ring;
pub mod matrix;
pub mod sampling;
pub mod encoding;
pub mod keygen;
pub mod encrypt;
pub mod decrypt;
pub mod scheme;

pub use error::Error;
pub use scheme::MlwePke;
