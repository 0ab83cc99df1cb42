//! Decryption.
//!
//! `decrypt` is total: it never fails, and with a mismatched key or a
//! corrupted ciphertext it simply produces 32 bytes that differ from the
//! original message. The scheme carries no integrity check; authenticity
//! belongs to a layer above this primitive.

use crate::compress::decompress;
use crate::encoding::decode_msg;
use crate::encrypt::Ciphertext;
use crate::keygen::SecretKey;
use crate::params::MSG_BYTES;
use tracing::debug;
use zeroize::Zeroize;

/// Recover the message from a ciphertext and secret key.
///
/// Recomputes the noisy message carrier v' − INTT(û ∘ ŝ) and
/// threshold-decodes the four redundant copies of each bit. Deterministic;
/// succeeds with overwhelming but not unit probability — an occasional
/// mismatch under honest keys is inherent to the lattice construction,
/// not an error condition.
pub fn decrypt(ct: &Ciphertext, sk: &SecretKey) -> [u8; MSG_BYTES] {
    debug!("decompressing and removing the shared secret term");
    let v_prime = decompress(&ct.h);
    let mut m_prime = v_prime.sub(&ct.u_hat.pointwise_mul(&sk.s_hat).intt());
    let m = decode_msg(&m_prime);
    m_prime.zeroize();
    m
}
