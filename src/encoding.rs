//! Byte-level encoding of ring elements and messages.
//!
//! Polynomials pack 4 coefficients of 14 bits each into 7 bytes; the wire
//! layouts are bit-exact and fixed, so independently produced encodings
//! interoperate. Messages map each of their 256 bits redundantly into four
//! quarter-ranges of a ring element, and decoding takes a threshold vote
//! over the four noisy copies.

use crate::error::{NewHopeError, Result};
use crate::params::{MSG_BYTES, N, POLY_BYTES, Q};
use crate::poly::Poly;

/// Bit-pack a ring element, 14 bits per coefficient.
pub fn encode_poly(p: &Poly) -> [u8; POLY_BYTES] {
    let mut r = [0u8; POLY_BYTES];
    for i in 0..N / 4 {
        let t0 = (p.coeffs[4 * i] % Q) as u32;
        let t1 = (p.coeffs[4 * i + 1] % Q) as u32;
        let t2 = (p.coeffs[4 * i + 2] % Q) as u32;
        let t3 = (p.coeffs[4 * i + 3] % Q) as u32;
        r[7 * i] = t0 as u8;
        r[7 * i + 1] = ((t0 >> 8) | (t1 << 6)) as u8;
        r[7 * i + 2] = (t1 >> 2) as u8;
        r[7 * i + 3] = ((t1 >> 10) | (t2 << 4)) as u8;
        r[7 * i + 4] = (t2 >> 4) as u8;
        r[7 * i + 5] = ((t2 >> 12) | (t3 << 2)) as u8;
        r[7 * i + 6] = (t3 >> 6) as u8;
    }
    r
}

/// Unpack a bit-packed ring element.
///
/// Fails fast on a wrong-sized buffer. Each unpacked 14-bit value is
/// reduced into [0, Q), so the result satisfies the ring invariant even
/// for adversarial input bytes.
pub fn decode_poly(bytes: &[u8]) -> Result<Poly> {
    if bytes.len() != POLY_BYTES {
        return Err(NewHopeError::InputLength {
            context: "packed polynomial",
            expected: POLY_BYTES,
            actual: bytes.len(),
        });
    }

    let mut p = Poly::zero();
    for i in 0..N / 4 {
        let v: [u32; 7] = core::array::from_fn(|k| bytes[7 * i + k] as u32);
        let t0 = v[0] | ((v[1] & 0x3f) << 8);
        let t1 = (v[1] >> 6) | (v[2] << 2) | ((v[3] & 0x0f) << 10);
        let t2 = (v[3] >> 4) | (v[4] << 4) | ((v[5] & 0x03) << 12);
        let t3 = (v[5] >> 2) | (v[6] << 6);
        p.coeffs[4 * i] = (t0 % Q as u32) as u16;
        p.coeffs[4 * i + 1] = (t1 % Q as u32) as u16;
        p.coeffs[4 * i + 2] = (t2 % Q as u32) as u16;
        p.coeffs[4 * i + 3] = (t3 % Q as u32) as u16;
    }
    Ok(p)
}

/// Spread a 32-byte message into a ring element.
///
/// Bit i of the message writes Q/2 (or 0) into positions i, i+256, i+512
/// and i+768: four redundant copies per bit.
pub fn encode_msg(m: &[u8; MSG_BYTES]) -> Poly {
    let mut v = Poly::zero();
    for i in 0..MSG_BYTES {
        for j in 0..8 {
            if (m[i] >> j) & 1 == 1 {
                let pos = 8 * i + j;
                v.coeffs[pos] = Q / 2;
                v.coeffs[pos + 256] = Q / 2;
                v.coeffs[pos + 512] = Q / 2;
                v.coeffs[pos + 768] = Q / 2;
            }
        }
    }
    v
}

/// Recover a 32-byte message from a noisy ring element.
///
/// For each bit position the four copies' absolute deviations from Q/2 are
/// summed and compared against Q: a bit whose copies sit near Q/2
/// accumulates a small total and decodes as 1. The threshold absorbs both
/// the compression error and the lattice noise terms.
pub fn decode_msg(v: &Poly) -> [u8; MSG_BYTES] {
    let mut m = [0u8; MSG_BYTES];
    let half = (Q / 2) as i32;
    for i in 0..N / 4 {
        let mut t = 0i32;
        for off in [0, 256, 512, 768] {
            let c = (v.coeffs[i + off] % Q) as i32;
            t += (c - half).abs();
        }
        if t < Q as i32 {
            m[i >> 3] |= 1 << (i & 7);
        }
    }
    m
}
