//! Deterministic seed expansion into ring elements.
//!
//! Both samplers are pure functions of their seed bytes, driven by
//! extendable-output hashing: `gen_a` squeezes SHAKE-128 and rejection-
//! samples uniform coefficients, `sample` squeezes SHAKE-256 and derives
//! centered-binomial noise from popcounts. Determinism is load-bearing for
//! `gen_a`: key generation and encryption each regenerate the same public
//! ring element from the transmitted 32-byte seed, which is never sent in
//! expanded form.

use crate::params::{GENA_BLOCK_BYTES, N, Q, SAMPLE_BLOCK_BYTES, SEED_BYTES};
use crate::poly::Poly;
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake128, Shake256,
};

/// Coefficients accepted per seed-expansion block.
const BLOCK_COEFFS: usize = 64;

/// Rejection bound for uniform sampling: values below 5·Q reduce mod Q
/// with negligible bias.
const GENA_BOUND: u32 = 5 * Q as u32;

/// Expand a public seed into a pseudo-uniform ring element.
///
/// For each of the N/64 blocks, SHAKE-128 is keyed with the seed followed
/// by the block index, then squeezed in 168-byte chunks. Little-endian
/// 16-bit values are rejected at 5·Q and otherwise accepted as `v mod Q`
/// until the block's 64 coefficients are filled.
pub fn gen_a(publicseed: &[u8; SEED_BYTES]) -> Poly {
    let mut a = Poly::zero();

    for block in 0..N / BLOCK_COEFFS {
        let mut hasher = Shake128::default();
        hasher.update(publicseed);
        hasher.update(&[block as u8]);
        let mut reader = hasher.finalize_xof();

        let mut buf = [0u8; GENA_BLOCK_BYTES];
        let mut ctr = 0;
        while ctr < BLOCK_COEFFS {
            reader.read(&mut buf);
            let mut j = 0;
            while j < GENA_BLOCK_BYTES && ctr < BLOCK_COEFFS {
                let val = u16::from_le_bytes([buf[j], buf[j + 1]]);
                if (val as u32) < GENA_BOUND {
                    a.coeffs[BLOCK_COEFFS * block + ctr] = val % Q;
                    ctr += 1;
                }
                j += 2;
            }
        }
    }

    a
}

/// Sample a centered-binomial ring element from a noise seed and nonce.
///
/// Coefficient = popcount(a) - popcount(b) mod Q over consecutive byte
/// pairs of a SHAKE-256 stream keyed with seed ‖ nonce ‖ block index.
/// The nonce domain-separates the secret from the error terms drawn from
/// the same seed.
pub fn sample(noiseseed: &[u8; SEED_BYTES], nonce: u8) -> Poly {
    let mut r = Poly::zero();

    for block in 0..N / BLOCK_COEFFS {
        let mut hasher = Shake256::default();
        hasher.update(noiseseed);
        hasher.update(&[nonce, block as u8]);
        let mut reader = hasher.finalize_xof();

        let mut buf = [0u8; SAMPLE_BLOCK_BYTES];
        reader.read(&mut buf);
        for j in 0..BLOCK_COEFFS {
            let a = buf[2 * j].count_ones() as u16;
            let b = buf[2 * j + 1].count_ones() as u16;
            r.coeffs[BLOCK_COEFFS * block + j] = (a + Q - b) % Q;
        }
    }

    r
}
