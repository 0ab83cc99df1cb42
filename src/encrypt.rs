//! Encryption.

use crate::compress::compress;
use crate::encoding::{decode_poly, encode_msg, encode_poly};
use crate::error::{NewHopeError, Result};
use crate::keygen::PublicKey;
use crate::params::{CIPHERTEXT_BYTES, COMPRESSED_BYTES, MSG_BYTES, POLY_BYTES, SEED_BYTES};
use crate::poly::Poly;
use crate::sampling::{gen_a, sample};
use tracing::debug;
use zeroize::Zeroize;

/// Ciphertext: the transform-domain ring element u_hat plus the compressed
/// noisy message carrier h.
#[derive(Clone, Debug)]
pub struct Ciphertext {
    pub u_hat: Poly,
    pub h: [u8; COMPRESSED_BYTES],
}

impl Ciphertext {
    /// Serialized byte size.
    pub const BYTES: usize = CIPHERTEXT_BYTES;

    /// Serialize to the fixed 2176-byte wire layout: packed u_hat ‖ h.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::BYTES);
        buf.extend_from_slice(&encode_poly(&self.u_hat));
        buf.extend_from_slice(&self.h);
        buf
    }

    /// Deserialize from bytes. Fails on any size other than `BYTES`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != Self::BYTES {
            return Err(NewHopeError::InputLength {
                context: "ciphertext",
                expected: Self::BYTES,
                actual: data.len(),
            });
        }
        let u_hat = decode_poly(&data[..POLY_BYTES])?;
        let mut h = [0u8; COMPRESSED_BYTES];
        h.copy_from_slice(&data[POLY_BYTES..]);
        Ok(Ciphertext { u_hat, h })
    }
}

/// Encrypt a 32-byte message under a public key.
///
/// `coin` is fresh, caller-supplied randomness for this one call and must
/// never be reused across calls: the ephemeral secret and both error terms
/// are derived from it, and a repeated coin repeats them. All ephemeral
/// ring elements are wiped before returning; the ciphertext is a
/// deterministic function of (pk, msg, coin).
pub fn encrypt(pk: &PublicKey, msg: &[u8; MSG_BYTES], coin: &[u8; SEED_BYTES]) -> Ciphertext {
    debug!("regenerating a_hat from the public seed");
    let a_hat = gen_a(&pk.seed);

    let mut s_prime = sample(coin, 0);
    let mut e_prime = sample(coin, 1);
    let mut e_double = sample(coin, 2);

    let mut t_hat = s_prime.ntt();
    let u_hat = a_hat.pointwise_mul(&t_hat).add(&e_prime.ntt());

    debug!("embedding message and compressing");
    let v = encode_msg(msg);
    let mut v_prime = pk
        .b_hat
        .pointwise_mul(&t_hat)
        .intt()
        .add(&e_double)
        .add(&v);
    let h = compress(&v_prime);

    s_prime.zeroize();
    e_prime.zeroize();
    e_double.zeroize();
    t_hat.zeroize();
    v_prime.zeroize();

    Ciphertext { u_hat, h }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keygen::keygen;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn ct_serialization_roundtrip() {
        let mut rng = StdRng::seed_from_u64(42);
        let (_sk, pk) = keygen(&mut rng);
        let ct = encrypt(&pk, &[0xab; MSG_BYTES], &[7; SEED_BYTES]);
        let bytes = ct.to_bytes();
        assert_eq!(bytes.len(), Ciphertext::BYTES);
        let ct2 = Ciphertext::from_bytes(&bytes).unwrap();
        assert_eq!(ct.u_hat, ct2.u_hat);
        assert_eq!(ct.h, ct2.h);
    }

    #[test]
    fn ct_from_invalid_bytes() {
        assert!(Ciphertext::from_bytes(&[0u8; CIPHERTEXT_BYTES + 1]).is_err());
    }

    #[test]
    fn encrypt_is_coin_deterministic() {
        let mut rng = StdRng::seed_from_u64(42);
        let (_sk, pk) = keygen(&mut rng);
        let msg = [0x3c; MSG_BYTES];
        let c1 = encrypt(&pk, &msg, &[9; SEED_BYTES]);
        let c2 = encrypt(&pk, &msg, &[9; SEED_BYTES]);
        assert_eq!(c1.to_bytes(), c2.to_bytes());
    }

    #[test]
    fn encrypt_fresh_coins_differ() {
        let mut rng = StdRng::seed_from_u64(42);
        let (_sk, pk) = keygen(&mut rng);
        let msg = [0x3c; MSG_BYTES];
        let c1 = encrypt(&pk, &msg, &[1; SEED_BYTES]);
        let c2 = encrypt(&pk, &msg, &[2; SEED_BYTES]);
        assert_ne!(c1.to_bytes(), c2.to_bytes());
    }
}
