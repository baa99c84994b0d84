//! Ring elements of R_q = Z_q[x]/(x^n + 1) and their arithmetic.
//!
//! Coefficients are stored in ascending degree order, each held in the
//! canonical range [0, q-1]. Multiplication is naive convolution followed by
//! the negacyclic fold (x^n ≡ -1) and then the mod-q reduction, in that
//! order.

use crate::params::{RingParameters, N};
use zeroize::Zeroize;

/// Modular addition: (a + b) mod m.
#[inline(always)]
pub(crate) const fn addmod(a: u32, b: u32, m: u32) -> u32 {
    let s = a + b;
    if s >= m {
        s - m
    } else {
        s
    }
}

/// Modular subtraction: (a - b) mod m.
#[inline(always)]
pub(crate) const fn submod(a: u32, b: u32, m: u32) -> u32 {
    if a >= b {
        a - b
    } else {
        a + m - b
    }
}

/// A polynomial in R_q, stored as n = 256 coefficients in [0, q-1].
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct RingElement {
    pub coeffs: [u16; N],
}

impl RingElement {
    /// The zero polynomial.
    pub const fn zero() -> Self {
        RingElement { coeffs: [0u16; N] }
    }

    /// Create a ring element from small signed coefficients, reducing each
    /// into the canonical range (e.g. -1 becomes q-1).
    pub fn from_signed(coeffs: &[i16; N], params: &RingParameters) -> Self {
        let q = params.q as i32;
        let mut reduced = [0u16; N];
        for i in 0..N {
            reduced[i] = (coeffs[i] as i32).rem_euclid(q) as u16;
        }
        RingElement { coeffs: reduced }
    }

    /// Coefficient-wise modular addition.
    pub fn add(&self, other: &RingElement, params: &RingParameters) -> RingElement {
        let q = params.q;
        let mut coeffs = [0u16; N];
        for i in 0..N {
            coeffs[i] = addmod(self.coeffs[i] as u32, other.coeffs[i] as u32, q) as u16;
        }
        RingElement { coeffs }
    }

    /// Coefficient-wise modular subtraction.
    pub fn sub(&self, other: &RingElement, params: &RingParameters) -> RingElement {
        let q = params.q;
        let mut coeffs = [0u16; N];
        for i in 0..N {
            coeffs[i] = submod(self.coeffs[i] as u32, other.coeffs[i] as u32, q) as u16;
        }
        RingElement { coeffs }
    }

    /// Ring multiplication: full convolution to degree 2n-2, negacyclic fold
    /// of the high half back with sign flip, then mod-q reduction of every
    /// coefficient. O(n^2).
    pub fn mul(&self, other: &RingElement, params: &RingParameters) -> RingElement {
        let q = params.q as i64;

        // Full product, degree up to 2n-2. Accumulators stay far below i64
        // limits: n * (q-1)^2 < 2^32.
        let mut acc = [0i64; 2 * N - 1];
        for i in 0..N {
            let a = self.coeffs[i] as i64;
            if a == 0 {
                continue;
            }
            for j in 0..N {
                acc[i + j] += a * other.coeffs[j] as i64;
            }
        }

        // x^n ≡ -1: coefficient of degree d + n is subtracted from degree d.
        // The fold must happen before the mod-q step.
        let mut coeffs = [0u16; N];
        for d in 0..N {
            let mut c = acc[d];
            if d + N < 2 * N - 1 {
                c -= acc[d + N];
            }
            coeffs[d] = c.rem_euclid(q) as u16;
        }
        RingElement { coeffs }
    }
}
