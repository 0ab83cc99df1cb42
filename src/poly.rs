//! Ring elements and their arithmetic.
//!
//! A ring element is a vector of N coefficients in [0, Q). Every operation
//! is pure and returns a fully reduced result. `pointwise_mul` is the
//! evaluation-domain product: both operands must already be in transform
//! domain when the product is meant to be a ring convolution.

use crate::ntt::{addmod, mulmod, submod, TABLES};
use crate::params::{N, Q};
use zeroize::Zeroize;

/// A ring element: N coefficients mod Q.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Poly {
    pub coeffs: [u16; N],
}

impl Poly {
    pub fn zero() -> Self {
        Poly { coeffs: [0u16; N] }
    }

    /// Elementwise addition mod Q.
    pub fn add(&self, other: &Poly) -> Poly {
        let mut c = [0u16; N];
        for i in 0..N {
            c[i] = addmod(self.coeffs[i], other.coeffs[i], Q);
        }
        Poly { coeffs: c }
    }

    /// Elementwise subtraction mod Q.
    pub fn sub(&self, other: &Poly) -> Poly {
        let mut c = [0u16; N];
        for i in 0..N {
            c[i] = submod(self.coeffs[i], other.coeffs[i], Q);
        }
        Poly { coeffs: c }
    }

    /// Elementwise product mod Q (transform-domain multiplication).
    pub fn pointwise_mul(&self, other: &Poly) -> Poly {
        let mut c = [0u16; N];
        for i in 0..N {
            c[i] = mulmod(self.coeffs[i], other.coeffs[i], Q);
        }
        Poly { coeffs: c }
    }

    /// Forward transform into evaluation domain.
    pub fn ntt(&self) -> Poly {
        let mut c = self.coeffs;
        TABLES.forward(&mut c);
        Poly { coeffs: c }
    }

    /// Inverse transform back to coefficient domain.
    pub fn intt(&self) -> Poly {
        let mut c = self.coeffs;
        TABLES.inverse(&mut c);
        Poly { coeffs: c }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub() {
        let mut a = Poly::zero();
        let mut b = Poly::zero();
        a.coeffs[0] = 100;
        a.coeffs[1] = Q - 1;
        b.coeffs[0] = 50;
        b.coeffs[1] = 2;

        let sum = a.add(&b);
        assert_eq!(sum.coeffs[0], 150);
        assert_eq!(sum.coeffs[1], 1); // wraps past Q

        let diff = a.sub(&b);
        assert_eq!(diff.coeffs[0], 50);
        assert_eq!(diff.coeffs[1], Q - 3);
        // 0 - 50 mod Q
        assert_eq!(b.sub(&a).coeffs[0], Q - 50);
    }

    #[test]
    fn test_pointwise_mul() {
        let mut a = Poly::zero();
        let mut b = Poly::zero();
        a.coeffs[0] = Q - 1;
        b.coeffs[0] = Q - 1;
        a.coeffs[5] = 1234;
        b.coeffs[5] = 0;
        let c = a.pointwise_mul(&b);
        // (-1)·(-1) = 1
        assert_eq!(c.coeffs[0], 1);
        assert_eq!(c.coeffs[5], 0);
    }

    #[test]
    fn test_mul_is_convolution_in_transform_domain() {
        // NTT(a) ∘ NTT(b) followed by INTT equals the cyclic convolution.
        let mut a = Poly::zero();
        let mut b = Poly::zero();
        a.coeffs[0] = 3;
        a.coeffs[2] = 5; // 3 + 5x^2
        b.coeffs[1] = 7; // 7x
        let c = a.ntt().pointwise_mul(&b.ntt()).intt();
        assert_eq!(c.coeffs[1], 21);
        assert_eq!(c.coeffs[3], 35);
        for i in (0..N).filter(|&i| i != 1 && i != 3) {
            assert_eq!(c.coeffs[i], 0);
        }
    }
}
