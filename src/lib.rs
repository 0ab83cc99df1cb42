//! NewHope-style Ring-LWE public-key encryption.
//!
//! Key generation, encryption and decryption of a fixed 32-byte message
//! over the ring Z_q^N with N = 1024 and q = 12289, using a fast
//! number-theoretic transform, deterministic XOF-driven sampling, bit-exact
//! wire encodings and lossy 3-bit ciphertext compression.
//!
//! # ⚠️ WARNING: NOT PRODUCTION READY ⚠️
//!
//! This is a bare IND-CPA primitive. NOT audited, NOT constant-time,
//! NOT safe against side-channel attacks, and it provides no integrity
//! protection — callers needing authenticity must add a MAC or signature.

pub mod compress;
pub mod decrypt;
pub mod encoding;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod ntt;
pub mod params;
pub mod poly;
pub mod sampling;

// Re-export the operations and containers most callers need.
pub use decrypt::decrypt;
pub use encrypt::{encrypt, Ciphertext};
pub use error::{NewHopeError, Result};
pub use keygen::{keygen, PublicKey, SecretKey};
