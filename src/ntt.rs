//! Number Theoretic Transform over Z_q.
//!
//! The scheme's transform is the plain cyclic NTT with respect to a
//! primitive N-th root of unity: multiplication of transformed elements is
//! pointwise, and `inverse(forward(x)) == x` for every coefficient vector.
//! Twiddle factors are precomputed into a process-wide immutable table at
//! compile time; the butterflies are radix-2 decimation-in-time with a
//! bit-reversal permutation, bit-identical to the O(N²) summation
//! definition of the transform.

use crate::error::{NewHopeError, Result};
use crate::params::{N, Q, ROOT};

/// Modular multiplication: (a * b) mod m, via u32.
#[inline(always)]
pub const fn mulmod(a: u16, b: u16, m: u16) -> u16 {
    ((a as u32 * b as u32) % m as u32) as u16
}

/// Modular addition: (a + b) mod m.
#[inline(always)]
pub const fn addmod(a: u16, b: u16, m: u16) -> u16 {
    let s = a as u32 + b as u32;
    (if s >= m as u32 { s - m as u32 } else { s }) as u16
}

/// Modular subtraction: (a - b) mod m. Inputs must be reduced.
#[inline(always)]
pub const fn submod(a: u16, b: u16, m: u16) -> u16 {
    if a >= b {
        a - b
    } else {
        ((a as u32 + m as u32) - b as u32) as u16
    }
}

/// Modular exponentiation: base^exp mod m.
pub const fn powmod(base: u16, mut exp: u32, m: u16) -> u16 {
    let mut result: u64 = 1;
    let mut b = base as u64 % m as u64;
    let modulus = m as u64;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result * b % modulus;
        }
        b = b * b % modulus;
        exp >>= 1;
    }
    result as u16
}

/// Multiplicative inverse of n modulo `modulus` via the extended Euclidean
/// algorithm. The inverse x satisfies 0 <= x < modulus and x·n ≡ 1; it
/// exists if and only if gcd(n, modulus) = 1.
pub const fn reciprocal(n: u32, modulus: u32) -> Result<u32> {
    let (mut x, mut y) = (modulus as i64, (n % modulus) as i64);
    let (mut a, mut b) = (0i64, 1i64);
    while y != 0 {
        let q = x / y;
        let t = a - q * b;
        a = b;
        b = t;
        let t = x % y;
        x = y;
        y = t;
    }
    if x == 1 {
        let r = a % modulus as i64;
        Ok((if r < 0 { r + modulus as i64 } else { r }) as u32)
    } else {
        Err(NewHopeError::NoReciprocal { value: n, modulus })
    }
}

/// Bit-reverse an index in log2(N) bits.
fn bit_reverse(mut x: usize, bits: usize) -> usize {
    let mut r = 0;
    for _ in 0..bits {
        r = (r << 1) | (x & 1);
        x >>= 1;
    }
    r
}

/// Precomputed transform tables for a root/modulus pair.
pub struct NttTables {
    pub modulus: u16,
    // root_pows[i] = root^i, root_inv_pows[i] = root^{-i}
    root_pows: [u16; N],
    root_inv_pows: [u16; N],
    n_inv: u16,
}

/// Process-wide tables for the scheme parameters, built at compile time.
pub static TABLES: NttTables = NttTables::new(ROOT, Q);

impl NttTables {
    pub const fn new(root: u16, modulus: u16) -> Self {
        let root_inv = match reciprocal(root as u32, modulus as u32) {
            Ok(v) => v as u16,
            Err(_) => panic!("root is not invertible modulo q"),
        };
        let n_inv = match reciprocal(N as u32, modulus as u32) {
            Ok(v) => v as u16,
            Err(_) => panic!("N is not invertible modulo q"),
        };

        let mut root_pows = [0u16; N];
        let mut root_inv_pows = [0u16; N];
        root_pows[0] = 1;
        root_inv_pows[0] = 1;
        let mut i = 1;
        while i < N {
            root_pows[i] = mulmod(root_pows[i - 1], root, modulus);
            root_inv_pows[i] = mulmod(root_inv_pows[i - 1], root_inv, modulus);
            i += 1;
        }

        NttTables {
            modulus,
            root_pows,
            root_inv_pows,
            n_inv,
        }
    }

    /// Forward cyclic NTT, coefficient domain to evaluation domain.
    pub fn forward(&self, a: &mut [u16; N]) {
        self.dit_transform(a, &self.root_pows);
    }

    /// Inverse cyclic NTT, evaluation domain back to coefficients.
    pub fn inverse(&self, a: &mut [u16; N]) {
        self.dit_transform(a, &self.root_inv_pows);
        for coeff in a.iter_mut() {
            *coeff = mulmod(*coeff, self.n_inv, self.modulus);
        }
    }

    /// Cooley-Tukey DIT radix-2 butterflies over the given power table.
    fn dit_transform(&self, a: &mut [u16; N], pows: &[u16; N]) {
        let m = self.modulus;
        let log_n = N.trailing_zeros() as usize;

        for i in 0..N {
            let j = bit_reverse(i, log_n);
            if i < j {
                a.swap(i, j);
            }
        }

        let mut len = 2;
        while len <= N {
            let half = len / 2;
            let step = N / len;
            for start in (0..N).step_by(len) {
                for j in 0..half {
                    // twiddle at position j is root^(j * step)
                    let w = pows[j * step];
                    let u = a[start + j];
                    let v = mulmod(a[start + j + half], w, m);
                    a[start + j] = addmod(u, v, m);
                    a[start + j + half] = submod(u, v, m);
                }
            }
            len *= 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Verify the tables are computable at compile time.
    const _: NttTables = NttTables::new(ROOT, Q);

    /// Direct O(N²) summation definition: out[i] = Σ_j in[j] · root^(i·j).
    fn naive_transform(invec: &[u16; N], root: u16) -> [u16; N] {
        let mut out = [0u16; N];
        for i in 0..N {
            let wi = powmod(root, i as u32, Q);
            let mut w = 1u16;
            let mut acc = 0u16;
            for &val in invec.iter() {
                acc = addmod(acc, mulmod(val, w, Q), Q);
                w = mulmod(w, wi, Q);
            }
            out[i] = acc;
        }
        out
    }

    fn random_vec(rng: &mut StdRng) -> [u16; N] {
        let mut a = [0u16; N];
        for c in a.iter_mut() {
            *c = rng.gen_range(0..Q);
        }
        a
    }

    #[test]
    fn test_roundtrip() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..4 {
            let original = random_vec(&mut rng);
            let mut a = original;
            TABLES.forward(&mut a);
            TABLES.inverse(&mut a);
            assert_eq!(a, original);
        }
    }

    #[test]
    fn test_matches_summation_definition() {
        let mut rng = StdRng::seed_from_u64(11);
        let original = random_vec(&mut rng);
        let expected = naive_transform(&original, ROOT);
        let mut a = original;
        TABLES.forward(&mut a);
        assert_eq!(a, expected);
    }

    #[test]
    fn test_cyclic_product() {
        // (1 + x)^2 = 1 + 2x + x^2
        let mut a = [0u16; N];
        a[0] = 1;
        a[1] = 1;
        let mut b = a;
        TABLES.forward(&mut a);
        TABLES.forward(&mut b);
        let mut c = [0u16; N];
        for i in 0..N {
            c[i] = mulmod(a[i], b[i], Q);
        }
        TABLES.inverse(&mut c);
        assert_eq!(c[0], 1);
        assert_eq!(c[1], 2);
        assert_eq!(c[2], 1);
        for i in 3..N {
            assert_eq!(c[i], 0, "nonzero at {}", i);
        }
    }

    #[test]
    fn test_cyclic_wraparound() {
        // x^{N-1} * x = x^N = 1 in the cyclic ring
        let mut a = [0u16; N];
        a[N - 1] = 1;
        let mut b = [0u16; N];
        b[1] = 1;
        TABLES.forward(&mut a);
        TABLES.forward(&mut b);
        let mut c = [0u16; N];
        for i in 0..N {
            c[i] = mulmod(a[i], b[i], Q);
        }
        TABLES.inverse(&mut c);
        assert_eq!(c[0], 1);
        for i in 1..N {
            assert_eq!(c[i], 0, "nonzero at {}", i);
        }
    }

    #[test]
    fn test_reciprocal() {
        let r = reciprocal(3, Q as u32).unwrap();
        assert_eq!(r * 3 % Q as u32, 1);
        // Fermat inverse agrees for the prime modulus
        assert_eq!(
            reciprocal(ROOT as u32, Q as u32).unwrap() as u16,
            powmod(ROOT, Q as u32 - 2, Q)
        );
    }

    #[test]
    fn test_reciprocal_undefined() {
        assert_eq!(
            reciprocal(6, 12),
            Err(NewHopeError::NoReciprocal {
                value: 6,
                modulus: 12
            })
        );
    }
}
