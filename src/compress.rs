//! Lossy ciphertext compression.
//!
//! One ciphertext component carries the message only in the high bits of
//! its coefficients, so each coefficient is quantized to 3 bits (8 buckets
//! over [0, Q)) and groups of 8 quantized values are packed into 3 bytes.
//! Decompression rescales each bucket back to Q-scale; the per-coefficient
//! reconstruction error is bounded by Q/16 and is part of the noise budget
//! the message decoder's threshold absorbs.

use crate::params::{COMPRESSED_BYTES, N, Q};
use crate::poly::Poly;

/// Quantize a ring element to 3 bits per coefficient.
pub fn compress(v: &Poly) -> [u8; COMPRESSED_BYTES] {
    let mut h = [0u8; COMPRESSED_BYTES];
    let mut k = 0;
    for block in 0..N / 8 {
        let i = 8 * block;
        let mut t = [0u32; 8];
        for j in 0..8 {
            let c = (v.coeffs[i + j] % Q) as u32;
            t[j] = ((c << 3) + Q as u32 / 2) / Q as u32 & 0x7;
        }
        h[k] = (t[0] | (t[1] << 3) | (t[2] << 6)) as u8;
        h[k + 1] = ((t[2] >> 2) | (t[3] << 1) | (t[4] << 4) | (t[5] << 7)) as u8;
        h[k + 2] = ((t[5] >> 1) | (t[6] << 2) | (t[7] << 5)) as u8;
        k += 3;
    }
    h
}

/// Rescale a compressed buffer back to an approximate ring element.
pub fn decompress(h: &[u8; COMPRESSED_BYTES]) -> Poly {
    let mut r = Poly::zero();
    let mut k = 0;
    for block in 0..N / 8 {
        let i = 8 * block;
        let h0 = h[k] as u32;
        let h1 = h[k + 1] as u32;
        let h2 = h[k + 2] as u32;
        let t = [
            h0 & 7,
            (h0 >> 3) & 7,
            (h0 >> 6) | ((h1 << 2) & 4),
            (h1 >> 1) & 7,
            (h1 >> 4) & 7,
            (h1 >> 7) | ((h2 << 1) & 6),
            (h2 >> 2) & 7,
            h2 >> 5,
        ];
        for j in 0..8 {
            r.coeffs[i + j] = ((t[j] * Q as u32 + 4) >> 3) as u16;
        }
        k += 3;
    }
    r
}
