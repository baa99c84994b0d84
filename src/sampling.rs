//! Uniform and small-coefficient sampling.
//!
//! Key and noise secrecy rest entirely on the unpredictability of these
//! draws, so every sampler requires a [`CryptoRng`]; a statistical generator
//! is not accepted by the type system.

use crate::matrix::RingMatrix;
use crate::params::{RingParameters, N};
use crate::ring::RingElement;
use rand::{CryptoRng, Rng};

/// Sample a ring element with n coefficients uniform in [0, q).
pub fn sample_uniform<R: Rng + CryptoRng>(rng: &mut R, params: &RingParameters) -> RingElement {
    let mut coeffs = [0u16; N];
    for c in coeffs.iter_mut() {
        *c = rng.gen_range(0..params.q) as u16;
    }
    RingElement { coeffs }
}

/// Sample a ring element with n coefficients uniform in {-1, 0, 1}, stored
/// reduced into [0, q-1]. A stand-in for a centered binomial distribution
/// with parameter 1.
pub fn sample_small<R: Rng + CryptoRng>(rng: &mut R, params: &RingParameters) -> RingElement {
    let mut coeffs = [0i16; N];
    for c in coeffs.iter_mut() {
        *c = rng.gen_range(-1..=1);
    }
    RingElement::from_signed(&coeffs, params)
}

/// Sample a rows×cols grid of uniform ring elements.
pub fn sample_uniform_matrix<R: Rng + CryptoRng>(
    rng: &mut R,
    params: &RingParameters,
    rows: usize,
    cols: usize,
) -> RingMatrix {
    RingMatrix::from_fn(rows, cols, |_, _| sample_uniform(rng, params))
}

/// Sample a rows×cols grid of small-coefficient ring elements.
pub fn sample_small_matrix<R: Rng + CryptoRng>(
    rng: &mut R,
    params: &RingParameters,
    rows: usize,
    cols: usize,
) -> RingMatrix {
    RingMatrix::from_fn(rows, cols, |_, _| sample_small(rng, params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Q;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_uniform_in_range() {
        let params = RingParameters::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let e = sample_uniform(&mut rng, &params);
        for &c in e.coeffs.iter() {
            assert!((c as u32) < Q);
        }
    }

    #[test]
    fn test_small_is_ternary() {
        let params = RingParameters::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let e = sample_small(&mut rng, &params);
        for &c in e.coeffs.iter() {
            assert!(
                c == 0 || c == 1 || c as u32 == Q - 1,
                "coefficient {} not in {{-1, 0, 1}} mod q",
                c
            );
        }
    }

    #[test]
    fn test_small_hits_all_three_values() {
        let params = RingParameters::standard();
        let mut rng = StdRng::seed_from_u64(7);
        let e = sample_small(&mut rng, &params);
        let zeros = e.coeffs.iter().filter(|&&c| c == 0).count();
        let ones = e.coeffs.iter().filter(|&&c| c == 1).count();
        let neg = e.coeffs.iter().filter(|&&c| c as u32 == Q - 1).count();
        assert_eq!(zeros + ones + neg, N);
        // 256 draws over three values: each value all but surely appears.
        assert!(zeros > 0 && ones > 0 && neg > 0);
    }

    #[test]
    fn test_matrix_shapes() {
        let params = RingParameters::standard();
        let mut rng = StdRng::seed_from_u64(1);
        let a = sample_uniform_matrix(&mut rng, &params, 3, 3);
        assert_eq!((a.rows(), a.cols()), (3, 3));
        let s = sample_small_matrix(&mut rng, &params, 3, 1);
        assert_eq!((s.rows(), s.cols()), (3, 1));
    }
}
