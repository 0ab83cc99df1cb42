//! Scheme parameters and precomputed constants.

/// Ring dimension (power of 2).
pub const N: usize = 1024;

/// Coefficient modulus. Smallest prime with q ≡ 1 (mod 2N), so the ring
/// admits a fast number-theoretic transform.
pub const Q: u16 = 12289;

/// Centered binomial parameter for secret/error sampling.
pub const K: u32 = 8;

/// Primitive N-th root of unity mod Q used by the transform.
pub const ROOT: u16 = 10302;

/// Modular inverse of N mod Q, applied by the inverse transform.
pub const N_INV: u16 = 12277;

/// Bytes of a bit-packed polynomial: 14 bits per coefficient, 7N/4.
pub const POLY_BYTES: usize = 7 * N / 4; // 1792

/// Bytes of a compressed polynomial: 3 bits per coefficient, 3N/8.
pub const COMPRESSED_BYTES: usize = 3 * N / 8; // 384

/// Bytes of a seed (and of one encryption coin).
pub const SEED_BYTES: usize = 32;

/// Bytes of a plaintext message (256 bits).
pub const MSG_BYTES: usize = 32;

/// Public key wire size: packed b_hat followed by the 32-byte public seed.
pub const PUBLIC_KEY_BYTES: usize = POLY_BYTES + SEED_BYTES; // 1824

/// Secret key wire size: packed s_hat.
pub const SECRET_KEY_BYTES: usize = POLY_BYTES; // 1792

/// Ciphertext wire size: packed u_hat followed by the compressed h.
pub const CIPHERTEXT_BYTES: usize = POLY_BYTES + COMPRESSED_BYTES; // 2176

/// SHAKE-128 squeeze granularity used by the uniform sampler.
pub const GENA_BLOCK_BYTES: usize = 168;

/// SHAKE-256 output per 64-coefficient noise block.
pub const SAMPLE_BLOCK_BYTES: usize = 128;
