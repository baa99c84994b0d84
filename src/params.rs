//! Scheme parameters and derived decoding thresholds.

/// Coefficient modulus. Prime (the Kyber prime).
pub const Q: u32 = 3329;

/// Ring degree (number of coefficients, power of 2).
pub const N: usize = 256;

/// Message block size in bytes: one bit per coefficient.
pub const MESSAGE_BYTES: usize = N / 8; // 32

/// Parameters of the quotient ring R_q = Z_q[x]/(x^n + 1).
///
/// Carried explicitly by every component that reduces coefficients, so no
/// arithmetic depends on process-wide state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingParameters {
    /// Coefficient modulus q.
    pub q: u32,
    /// Ring degree n.
    pub n: usize,
}

impl RingParameters {
    /// The fixed instantiation of this scheme: q = 3329, n = 256.
    pub const fn standard() -> Self {
        RingParameters { q: Q, n: N }
    }

    /// round(q/2) with round-half-up: the scale of an encoded message bit.
    /// For q = 3329 this is 1665.
    pub const fn bit_scale(&self) -> u32 {
        (self.q + 1) / 2
    }

    /// round(q/4) with round-half-up: lower decoding threshold (832 for q = 3329).
    pub const fn low_threshold(&self) -> u32 {
        (self.q + 2) / 4
    }

    /// round(3q/4) with round-half-up: upper decoding threshold (2497 for q = 3329).
    pub const fn high_threshold(&self) -> u32 {
        (3 * self.q + 2) / 4
    }
}
