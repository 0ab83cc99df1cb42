//! Key generation.

use crate::encoding::{decode_poly, encode_poly};
use crate::error::{NewHopeError, Result};
use crate::params::{POLY_BYTES, PUBLIC_KEY_BYTES, SECRET_KEY_BYTES, SEED_BYTES};
use crate::poly::Poly;
use crate::sampling::{gen_a, sample};
use rand::{CryptoRng, RngCore};
use sha3::{
    digest::{ExtendableOutput, Update, XofReader},
    Shake256,
};
use tracing::debug;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

/// Secret key: the transform-domain secret ring element.
///
/// Zeroized on drop to prevent secret material from lingering in memory.
/// Does not implement `Debug` to prevent accidental logging of secrets.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub s_hat: Poly,
}

impl SecretKey {
    /// Serialized byte size.
    pub const BYTES: usize = SECRET_KEY_BYTES;

    /// Serialize to the fixed 1792-byte wire layout.
    ///
    /// The returned buffer is zeroized on drop.
    #[must_use]
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(encode_poly(&self.s_hat).to_vec())
    }

    /// Deserialize from bytes. Fails on any size other than `BYTES`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != Self::BYTES {
            return Err(NewHopeError::InputLength {
                context: "secret key",
                expected: Self::BYTES,
                actual: data.len(),
            });
        }
        Ok(SecretKey {
            s_hat: decode_poly(data)?,
        })
    }
}

/// Public key: the transform-domain ring element b_hat plus the 32-byte
/// seed that regenerates a_hat (the full element is never transmitted).
#[derive(Clone, Debug)]
pub struct PublicKey {
    pub b_hat: Poly,
    pub seed: [u8; SEED_BYTES],
}

impl PublicKey {
    /// Serialized byte size.
    pub const BYTES: usize = PUBLIC_KEY_BYTES;

    /// Serialize to the fixed 1824-byte wire layout: packed b_hat ‖ seed.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(Self::BYTES);
        buf.extend_from_slice(&encode_poly(&self.b_hat));
        buf.extend_from_slice(&self.seed);
        buf
    }

    /// Deserialize from bytes. Fails on any size other than `BYTES`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() != Self::BYTES {
            return Err(NewHopeError::InputLength {
                context: "public key",
                expected: Self::BYTES,
                actual: data.len(),
            });
        }
        let b_hat = decode_poly(&data[..POLY_BYTES])?;
        let mut seed = [0u8; SEED_BYTES];
        seed.copy_from_slice(&data[POLY_BYTES..]);
        Ok(PublicKey { b_hat, seed })
    }
}

/// Generate a keypair from one 32-byte draw of the injected entropy source.
///
/// The seed expands through SHAKE-256 into a public seed (kept in the
/// public key) and a noise seed (consumed here and wiped). b_hat is
/// computed entirely in transform domain: b̂ = â ∘ ŝ + ê.
pub fn keygen<R: RngCore + CryptoRng>(rng: &mut R) -> (SecretKey, PublicKey) {
    let mut seed = [0u8; SEED_BYTES];
    rng.fill_bytes(&mut seed);

    let mut z = [0u8; 2 * SEED_BYTES];
    let mut hasher = Shake256::default();
    hasher.update(&seed);
    hasher.finalize_xof().read(&mut z);

    let mut publicseed = [0u8; SEED_BYTES];
    let mut noiseseed = [0u8; SEED_BYTES];
    publicseed.copy_from_slice(&z[..SEED_BYTES]);
    noiseseed.copy_from_slice(&z[SEED_BYTES..]);

    debug!("expanding a_hat from the public seed");
    let a_hat = gen_a(&publicseed);

    debug!("sampling secret and error ring elements");
    let mut s = sample(&noiseseed, 0);
    let mut e = sample(&noiseseed, 1);

    let s_hat = s.ntt();
    let mut e_hat = e.ntt();
    let b_hat = a_hat.pointwise_mul(&s_hat).add(&e_hat);

    s.zeroize();
    e.zeroize();
    e_hat.zeroize();
    seed.zeroize();
    z.zeroize();
    noiseseed.zeroize();

    (
        SecretKey { s_hat },
        PublicKey {
            b_hat,
            seed: publicseed,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn test_keypair() -> (SecretKey, PublicKey) {
        let mut rng = StdRng::seed_from_u64(42);
        keygen(&mut rng)
    }

    #[test]
    fn pk_serialization_roundtrip() {
        let (_sk, pk) = test_keypair();
        let bytes = pk.to_bytes();
        assert_eq!(bytes.len(), PublicKey::BYTES);
        let pk2 = PublicKey::from_bytes(&bytes).unwrap();
        assert_eq!(pk.b_hat, pk2.b_hat);
        assert_eq!(pk.seed, pk2.seed);
    }

    #[test]
    fn sk_serialization_roundtrip() {
        let (sk, _pk) = test_keypair();
        let bytes = sk.to_bytes();
        assert_eq!(bytes.len(), SecretKey::BYTES);
        let sk2 = SecretKey::from_bytes(&bytes).unwrap();
        assert_eq!(sk.s_hat, sk2.s_hat);
    }

    #[test]
    fn pk_from_invalid_bytes() {
        assert!(PublicKey::from_bytes(&[0u8; 10]).is_err());
    }

    #[test]
    fn sk_from_invalid_bytes() {
        assert!(SecretKey::from_bytes(&[0u8; 10]).is_err());
    }

    #[test]
    fn keygen_is_seed_deterministic() {
        let (sk1, pk1) = test_keypair();
        let (sk2, pk2) = test_keypair();
        assert_eq!(sk1.s_hat, sk2.s_hat);
        assert_eq!(pk1.to_bytes(), pk2.to_bytes());
    }
}
