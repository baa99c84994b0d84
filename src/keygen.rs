//! Key generation.

use crate::error::Error;
use crate::matrix::RingMatrix;
use crate::params::RingParameters;
use crate::sampling::{sample_small_matrix, sample_uniform_matrix};
use rand::{CryptoRng, Rng};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret key: the k×1 vector s with small coefficients.
///
/// Zeroized on drop to prevent secret material from lingering in memory.
/// Does not implement `Debug` to prevent accidental logging of secrets.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    pub(crate) s: RingMatrix,
}

impl SecretKey {
    /// Module rank this key was generated for.
    pub fn rank(&self) -> usize {
        self.s.rows()
    }
}

/// Public key: the k×k uniform matrix A and the k×1 vector t = A·s + e.
#[derive(Clone, Debug)]
pub struct PublicKey {
    pub a: RingMatrix,
    pub t: RingMatrix,
}

impl PublicKey {
    /// Module rank this key was generated for.
    pub fn rank(&self) -> usize {
        self.a.rows()
    }
}

/// Generate a keypair for module rank k.
///
/// Samples, in order: small secret s (k×1), uniform matrix A (k×k), small
/// error e (k×1, dropped after use), then t = A·s + e. Each draw is
/// independent; no seed derivation.
pub fn keygen<R: Rng + CryptoRng>(
    rng: &mut R,
    params: &RingParameters,
    k: usize,
) -> Result<(SecretKey, PublicKey), Error> {
    if k < 1 {
        return Err(Error::InvalidRank(k));
    }

    let s = sample_small_matrix(rng, params, k, 1);
    let a = sample_uniform_matrix(rng, params, k, k);
    let e = sample_small_matrix(rng, params, k, 1);

    let t = a.mul(&s, params)?.add(&e, params)?;

    Ok((SecretKey { s }, PublicKey { a, t }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Q;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rejects_zero_rank() {
        let params = RingParameters::standard();
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(
            keygen(&mut rng, &params, 0).err(),
            Some(Error::InvalidRank(0))
        );
    }

    #[test]
    fn test_keypair_shapes() {
        let params = RingParameters::standard();
        let mut rng = StdRng::seed_from_u64(42);
        for k in 1..=4 {
            let (sk, pk) = keygen(&mut rng, &params, k).unwrap();
            assert_eq!((pk.a.rows(), pk.a.cols()), (k, k));
            assert_eq!((pk.t.rows(), pk.t.cols()), (k, 1));
            assert_eq!((sk.s.rows(), sk.s.cols()), (k, 1));
            assert_eq!(sk.rank(), k);
            assert_eq!(pk.rank(), k);
        }
    }

    #[test]
    fn test_secret_is_small() {
        let params = RingParameters::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let (sk, _pk) = keygen(&mut rng, &params, 3).unwrap();
        for i in 0..3 {
            for &c in sk.s.entry(i, 0).coeffs.iter() {
                assert!(c == 0 || c == 1 || c as u32 == Q - 1);
            }
        }
    }

    #[test]
    fn test_fresh_sampling_per_call() {
        let params = RingParameters::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let (_, pk1) = keygen(&mut rng, &params, 2).unwrap();
        let (_, pk2) = keygen(&mut rng, &params, 2).unwrap();
        assert_ne!(pk1.a, pk2.a, "public matrix must be resampled per keygen");
    }
}
